//! Dual-grammar SQL parser facade.
//!
//! Statements are first offered to the extension grammar. When it rejects
//! and fallback is allowed, the standard grammar gets the same input; if
//! both grammars reject, the failure that occurred further into the input
//! is surfaced, because the grammar that consumed more text localizes the
//! true syntax error more precisely for the user.

pub mod extensions;
pub mod standard;

use crate::error::{ParseError, SyntaxError};
use extensions::ExtensionStatement;
use standard::{BaseQueryParser, QueryPlan, StandardSqlParser};

/// A statement accepted by either grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlStatement {
    /// An extension DDL statement.
    Ddl(ExtensionStatement),
    /// A standard query, opaque to the extension layer.
    Query(QueryPlan),
}

/// Parser for the extended SQL dialect.
pub struct SqlParser {
    base: Box<dyn BaseQueryParser>,
}

impl SqlParser {
    /// Parser backed by the default sqlparser-rs base grammar.
    pub fn new() -> Self {
        Self::with_base(Box::new(StandardSqlParser::new()))
    }

    /// Parser with a custom base grammar, for engines that bring their own
    /// query parser.
    pub fn with_base(base: Box<dyn BaseQueryParser>) -> Self {
        Self { base }
    }

    /// Parse one statement.
    ///
    /// With `exception_on_error` set, an extension-grammar rejection is
    /// reported immediately instead of consulting the standard grammar.
    /// DDL-rule violations ([`ParseError::Statement`]) always propagate;
    /// they are never retried against the standard grammar.
    pub fn parse(&self, sql: &str, exception_on_error: bool) -> Result<SqlStatement, ParseError> {
        let extension_failure = match ExtensionStatement::parse(sql, self.base.as_ref()) {
            Ok(statement) => return Ok(SqlStatement::Ddl(statement)),
            Err(ParseError::Statement(message)) => {
                return Err(ParseError::Statement(message));
            }
            Err(ParseError::Syntax(failure)) => failure,
        };

        if exception_on_error {
            return Err(extension_failure.into());
        }

        log::debug!(
            "extension grammar rejected input at line {}, column {}; trying the standard grammar",
            extension_failure.line,
            extension_failure.column
        );
        match self.base.parse_query(sql) {
            Ok(plan) => Ok(SqlStatement::Query(plan)),
            Err(base_failure) => Err(pick_failure(extension_failure, base_failure).into()),
        }
    }
}

impl Default for SqlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Choose which grammar's failure to surface: the one further into the
/// input wins, and ties go to the extension grammar.
fn pick_failure(extension: SyntaxError, base: SyntaxError) -> SyntaxError {
    if base.is_further_than(&extension) {
        log::debug!(
            "surfacing standard-grammar failure at {:?} over extension failure at {:?}",
            base.position(),
            extension.position()
        );
        base
    } else {
        extension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BASE_GRAMMAR, EXTENSION_GRAMMAR};

    fn parser() -> SqlParser {
        SqlParser::new()
    }

    #[test]
    fn ddl_statements_use_the_extension_grammar() {
        let stmt = parser().parse("SHOW TABLES USING strata.datasource.vora", false).unwrap();
        assert!(matches!(stmt, SqlStatement::Ddl(_)));
    }

    #[test]
    fn queries_fall_back_to_the_standard_grammar() {
        let stmt = parser().parse("SELECT a FROM t WHERE a > 1", false).unwrap();
        assert!(matches!(stmt, SqlStatement::Query(_)));
    }

    #[test]
    fn exception_on_error_skips_the_fallback() {
        let err = parser().parse("SELECT a FROM t", true).unwrap_err();
        match err {
            ParseError::Syntax(err) => assert_eq!(err.grammar, EXTENSION_GRAMMAR),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn the_failure_further_into_the_input_wins() {
        // Not a DDL statement, so the extension grammar fails at 1:1; the
        // standard grammar consumes up to the malformed WHERE clause.
        let err = parser().parse("SELECT a FROM t WHERE", false).unwrap_err();
        match err {
            ParseError::Syntax(err) => {
                assert_eq!(err.grammar, BASE_GRAMMAR);
                assert!(err.column > 1);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn ties_resolve_to_the_extension_grammar() {
        let extension = SyntaxError::new(EXTENSION_GRAMMAR, 2, 5, "extension");
        let base = SyntaxError::new(BASE_GRAMMAR, 2, 5, "base");
        assert_eq!(pick_failure(extension.clone(), base).grammar, EXTENSION_GRAMMAR);

        // A base failure earlier on the same line also loses.
        let base_earlier = SyntaxError::new(BASE_GRAMMAR, 2, 3, "base");
        assert_eq!(
            pick_failure(extension, base_earlier).grammar,
            EXTENSION_GRAMMAR
        );
    }

    #[test]
    fn statement_errors_are_never_retried() {
        let err = parser()
            .parse("CREATE TEMPORARY TABLE IF NOT EXISTS t USING x", false)
            .unwrap_err();
        assert!(err.is_statement(), "got {:?}", err);
    }

    #[test]
    fn empty_input_fails_at_line_one_column_one() {
        let err = parser().parse("", false).unwrap_err();
        match err {
            ParseError::Syntax(err) => assert_eq!(err.position(), (1, 1)),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}
