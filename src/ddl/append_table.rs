//! APPEND TABLE statement parser.
//!
//! Parses statements like:
//! - APPEND TABLE events OPTIONS(files "/data/new.csv")
//! - APPEND TABLE prod.events OPTIONS(files "/data/new.csv")
//!
//! Appends new source files to an already registered table; the options
//! clause is mandatory because it carries what to append.

use crate::ddl::parsing::{parse_options_clause, Cursor};
use crate::error::ParseError;
use crate::models::TableRef;
use crate::options::OptionMap;

/// APPEND TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendTableStatement {
    pub table: TableRef,
    pub options: OptionMap,
}

impl AppendTableStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("APPEND")?;
        cur.expect_keyword("TABLE")?;
        let table = cur.table_ref()?;
        cur.expect_keyword("OPTIONS")?;
        let options = parse_options_clause(&mut cur)?;
        cur.finish()?;

        Ok(Self { table, options })
    }
}
