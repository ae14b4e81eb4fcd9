//! DROP TABLE / DROP VIEW statement parsers.
//!
//! Parses statements like:
//! - DROP TABLE events
//! - DROP TABLE IF EXISTS prod.events CASCADE
//! - DROP VIEW IF EXISTS reporting_view

use crate::ddl::parsing::Cursor;
use crate::error::ParseError;
use crate::models::TableRef;

/// DROP TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTableStatement {
    pub table: TableRef,
    /// If true, don't error when the table doesn't exist.
    pub if_exists: bool,
    /// Drop dependent objects as well.
    pub cascade: bool,
}

impl DropTableStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let (table, if_exists, cascade) = parse_drop(sql, "TABLE")?;
        Ok(Self {
            table,
            if_exists,
            cascade,
        })
    }
}

/// DROP VIEW statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DropViewStatement {
    pub view: TableRef,
    pub if_exists: bool,
    pub cascade: bool,
}

impl DropViewStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let (view, if_exists, cascade) = parse_drop(sql, "VIEW")?;
        Ok(Self {
            view,
            if_exists,
            cascade,
        })
    }
}

fn parse_drop(sql: &str, object: &str) -> Result<(TableRef, bool, bool), ParseError> {
    let mut cur = Cursor::new(sql);
    cur.expect_keyword("DROP")?;
    cur.expect_keyword(object)?;
    let if_exists = cur.accept_keywords(&["IF", "EXISTS"]);
    let target = cur.table_ref()?;
    let cascade = cur.accept_keyword("CASCADE");
    cur.finish()?;
    Ok((target, if_exists, cascade))
}
