//! DESCRIBE statement parsers.
//!
//! Parses statements like:
//! - DESCRIBE events
//! - DESCRIBE TABLE prod.events
//! - DESCRIBE TABLE t USING strata.datasource.vora OPTIONS(hosts "h1")
//! - DESCRIBE DATASOURCE vora USING strata.datasource.vora
//! - DEEP DESCRIBE prod.events

use crate::ddl::parsing::{parse_options_clause, Cursor};
use crate::error::ParseError;
use crate::models::TableRef;
use crate::options::OptionMap;

/// DESCRIBE [TABLE] statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeTableStatement {
    pub table: TableRef,
    /// Provider to consult instead of the catalog, if given.
    pub provider: Option<String>,
    pub options: OptionMap,
}

impl DescribeTableStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("DESCRIBE")?;
        cur.accept_keyword("TABLE");
        let table = cur.table_ref()?;
        let (provider, options) = parse_describe_tail(&mut cur)?;

        Ok(Self {
            table,
            provider,
            options,
        })
    }
}

/// DESCRIBE DATASOURCE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeDatasourceStatement {
    /// Data source name known to the provider.
    pub datasource: String,
    pub provider: Option<String>,
    pub options: OptionMap,
}

impl DescribeDatasourceStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("DESCRIBE")?;
        cur.expect_keyword("DATASOURCE")?;
        let datasource = cur.identifier()?;
        let (provider, options) = parse_describe_tail(&mut cur)?;

        Ok(Self {
            datasource,
            provider,
            options,
        })
    }
}

/// DEEP DESCRIBE statement: a provider-level description of everything
/// known about the target.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepDescribeStatement {
    pub table: TableRef,
}

impl DeepDescribeStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("DEEP")?;
        cur.expect_keyword("DESCRIBE")?;
        let table = cur.table_ref()?;
        cur.finish()?;

        Ok(Self { table })
    }
}

fn parse_describe_tail(
    cur: &mut Cursor<'_>,
) -> Result<(Option<String>, OptionMap), ParseError> {
    let (provider, options) = if cur.accept_keyword("USING") {
        let provider = cur.provider_name()?;
        let options = if cur.accept_keyword("OPTIONS") {
            parse_options_clause(cur)?
        } else {
            OptionMap::new()
        };
        (Some(provider), options)
    } else {
        (None, OptionMap::new())
    };
    cur.finish()?;
    Ok((provider, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_table_with_and_without_keyword() {
        let stmt = DescribeTableStatement::parse("DESCRIBE TABLE prod.events").unwrap();
        assert_eq!(stmt.table, TableRef::qualified("prod", "events"));
        assert!(stmt.provider.is_none());

        let stmt = DescribeTableStatement::parse("DESCRIBE events").unwrap();
        assert_eq!(stmt.table, TableRef::bare("events"));
    }

    #[test]
    fn describe_table_using_provider() {
        let stmt = DescribeTableStatement::parse(
            "DESCRIBE TABLE t USING strata.datasource.vora OPTIONS(hosts \"h1\")",
        )
        .unwrap();
        assert_eq!(stmt.provider.as_deref(), Some("strata.datasource.vora"));
        assert_eq!(stmt.options.get("hosts"), Some("h1"));
    }

    #[test]
    fn describe_datasource() {
        let stmt =
            DescribeDatasourceStatement::parse("DESCRIBE DATASOURCE vora USING acme.vora.DefaultSource")
                .unwrap();
        assert_eq!(stmt.datasource, "vora");
        assert_eq!(stmt.provider.as_deref(), Some("acme.vora.DefaultSource"));
    }

    #[test]
    fn deep_describe() {
        let stmt = DeepDescribeStatement::parse("DEEP DESCRIBE prod.events").unwrap();
        assert_eq!(stmt.table, TableRef::qualified("prod", "events"));
    }

    #[test]
    fn deep_describe_rejects_trailing_input() {
        assert!(DeepDescribeStatement::parse("DEEP DESCRIBE t extra").is_err());
    }
}
