//! SHOW statement parsers.
//!
//! Parses statements like:
//! - SHOW TABLES USING strata.datasource.vora OPTIONS(hosts "h1")
//! - SHOW DATASOURCETABLES USING strata.datasource.vora
//! - SHOW PARTITION FUNCTIONS USING strata.datasource.vora
//!
//! All three forms query the provider rather than the engine catalog, so
//! they carry the provider name and its options.

use crate::ddl::parsing::{parse_options_clause, Cursor};
use crate::error::ParseError;
use crate::options::OptionMap;

/// SHOW TABLES statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowTablesStatement {
    pub provider: String,
    pub options: OptionMap,
}

impl ShowTablesStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let (provider, options) = parse_show(sql, &["TABLES"])?;
        Ok(Self { provider, options })
    }
}

/// SHOW DATASOURCETABLES statement: tables that exist in the data source,
/// registered or not.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowDatasourceTablesStatement {
    pub provider: String,
    pub options: OptionMap,
}

impl ShowDatasourceTablesStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let (provider, options) = parse_show(sql, &["DATASOURCETABLES"])?;
        Ok(Self { provider, options })
    }
}

/// SHOW PARTITION FUNCTIONS statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowPartitionFunctionsStatement {
    pub provider: String,
    pub options: OptionMap,
}

impl ShowPartitionFunctionsStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let (provider, options) = parse_show(sql, &["PARTITION", "FUNCTIONS"])?;
        Ok(Self { provider, options })
    }
}

fn parse_show(sql: &str, object: &[&str]) -> Result<(String, OptionMap), ParseError> {
    let mut cur = Cursor::new(sql);
    cur.expect_keyword("SHOW")?;
    for keyword in object {
        cur.expect_keyword(keyword)?;
    }
    cur.expect_keyword("USING")?;
    let provider = cur.provider_name()?;
    let options = if cur.accept_keyword("OPTIONS") {
        parse_options_clause(&mut cur)?
    } else {
        OptionMap::new()
    };
    cur.finish()?;
    Ok((provider, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_tables() {
        let stmt =
            ShowTablesStatement::parse("SHOW TABLES USING strata.datasource.vora OPTIONS(hosts \"h1\")")
                .unwrap();
        assert_eq!(stmt.provider, "strata.datasource.vora");
        assert_eq!(stmt.options.get("hosts"), Some("h1"));
    }

    #[test]
    fn show_datasource_tables() {
        let stmt =
            ShowDatasourceTablesStatement::parse("show datasourcetables using acme.vora.DefaultSource")
                .unwrap();
        assert_eq!(stmt.provider, "acme.vora.DefaultSource");
        assert!(stmt.options.is_empty());
    }

    #[test]
    fn show_partition_functions() {
        let stmt = ShowPartitionFunctionsStatement::parse(
            "SHOW PARTITION FUNCTIONS USING strata.datasource.vora",
        )
        .unwrap();
        assert_eq!(stmt.provider, "strata.datasource.vora");
    }

    #[test]
    fn provider_is_mandatory() {
        assert!(ShowTablesStatement::parse("SHOW TABLES").is_err());
    }
}
