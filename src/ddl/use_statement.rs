//! USE statement parser.
//!
//! `USE <anything>` is accepted verbatim and treated as a no-op marker so
//! clients that issue session statements (e.g. `USE DATABASE dbname`) keep
//! working. The tail is not interpreted.

use crate::ddl::parsing::Cursor;
use crate::error::ParseError;

/// USE statement, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UseStatement {
    /// The complete statement text as received.
    pub statement: String,
}

impl UseStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("USE")?;
        // Everything after USE is deliberately left uninterpreted.
        cur.take_rest();

        Ok(Self {
            statement: sql.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_keeps_the_statement_verbatim() {
        let stmt = UseStatement::parse("USE DATABASE dude").unwrap();
        assert_eq!(stmt.statement, "USE DATABASE dude");
    }

    #[test]
    fn bare_use_is_accepted() {
        assert!(UseStatement::parse("USE").is_ok());
    }

    #[test]
    fn user_is_not_use() {
        assert!(UseStatement::parse("USER foo").is_err());
    }
}
