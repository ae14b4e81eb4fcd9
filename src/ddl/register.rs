//! REGISTER TABLE statement parsers.
//!
//! Parses statements like:
//! - REGISTER TABLE t USING strata.datasource.vora OPTIONS(hosts "h1")
//! - REGISTER TABLE IF NOT EXISTS t USING strata.datasource.vora
//! - REGISTER ALL TABLES USING strata.datasource.vora IGNORING CONFLICTS
//!
//! Registration makes tables that already exist in a data source visible to
//! the engine without re-creating them.

use crate::ddl::parsing::{parse_options_clause, Cursor};
use crate::error::ParseError;
use crate::options::OptionMap;

/// REGISTER TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterTableStatement {
    /// Name of the table known to the data source.
    pub table: String,
    pub provider: String,
    pub options: OptionMap,
    pub if_not_exists: bool,
    pub ignore_conflicts: bool,
}

impl RegisterTableStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("REGISTER")?;
        cur.expect_keyword("TABLE")?;
        let if_not_exists = cur.accept_keywords(&["IF", "NOT", "EXISTS"]);
        let table = cur.identifier()?;
        let (provider, options, ignore_conflicts) = parse_register_tail(&mut cur)?;

        Ok(Self {
            table,
            provider,
            options,
            if_not_exists,
            ignore_conflicts,
        })
    }
}

/// REGISTER ALL TABLES statement.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterAllTablesStatement {
    pub provider: String,
    pub options: OptionMap,
    pub if_not_exists: bool,
    pub ignore_conflicts: bool,
}

impl RegisterAllTablesStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("REGISTER")?;
        cur.expect_keyword("ALL")?;
        cur.expect_keyword("TABLES")?;
        let if_not_exists = cur.accept_keywords(&["IF", "NOT", "EXISTS"]);
        let (provider, options, ignore_conflicts) = parse_register_tail(&mut cur)?;

        Ok(Self {
            provider,
            options,
            if_not_exists,
            ignore_conflicts,
        })
    }
}

/// `USING <provider> [OPTIONS(...)] [IGNORING CONFLICTS]`, shared by both
/// registration forms.
fn parse_register_tail(cur: &mut Cursor<'_>) -> Result<(String, OptionMap, bool), ParseError> {
    cur.expect_keyword("USING")?;
    let provider = cur.provider_name()?;
    let options = if cur.accept_keyword("OPTIONS") {
        parse_options_clause(cur)?
    } else {
        OptionMap::new()
    };
    let ignore_conflicts = cur.accept_keywords(&["IGNORING", "CONFLICTS"]);
    cur.finish()?;
    Ok((provider, options, ignore_conflicts))
}
