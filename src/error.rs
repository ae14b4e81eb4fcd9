//! Error types for the Strata SQL extension parser.
//!
//! Two kinds of failure exist: [`SyntaxError`] when a grammar could not
//! derive a parse tree (carries an exact 1-based position), and
//! [`ParseError::Statement`] when a statement parsed structurally but
//! violates a DDL rule. Statement errors are never retried against the
//! standard grammar.

use thiserror::Error;

/// Grammar name reported for failures of the extension grammar.
pub const EXTENSION_GRAMMAR: &str = "Strata DDL parser";

/// Grammar name reported for failures of the standard SQL grammar.
pub const BASE_GRAMMAR: &str = "standard SQL parser";

/// A positioned failure from one of the two grammars.
///
/// Failures are comparable by `(line, column)`: whichever grammar consumed
/// more input before failing localizes the true syntax error more precisely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{grammar}: syntax error at line {line}, column {column}: {message}")]
pub struct SyntaxError {
    /// Which grammar produced the failure.
    pub grammar: &'static str,
    /// 1-based line of the failure.
    pub line: usize,
    /// 1-based column of the failure.
    pub column: usize,
    /// Human-readable description.
    pub message: String,
}

impl SyntaxError {
    pub fn new(
        grammar: &'static str,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            grammar,
            line,
            column,
            message: message.into(),
        }
    }

    /// Position as a `(line, column)` pair.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// True when `self` failed strictly further into the input than `other`.
    pub fn is_further_than(&self, other: &SyntaxError) -> bool {
        self.line > other.line || (self.line == other.line && self.column > other.column)
    }

    /// Remap a failure reported against an embedded fragment to the
    /// coordinates of the surrounding statement. `line`/`column` locate the
    /// fragment's first character inside the full statement text.
    pub fn rebased(self, line: usize, column: usize) -> SyntaxError {
        let (new_line, new_column) = if self.line == 1 {
            (line, column + self.column - 1)
        } else {
            (line + self.line - 1, self.column)
        };
        SyntaxError {
            line: new_line,
            column: new_column,
            ..self
        }
    }
}

/// Error type returned by the statement parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grammar could not derive a parse tree.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The statement parsed but violates a DDL rule.
    #[error("invalid DDL statement: {0}")]
    Statement(String),
}

impl ParseError {
    /// Shorthand for a DDL-rule violation.
    pub fn statement(message: impl Into<String>) -> Self {
        ParseError::Statement(message.into())
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }

    pub fn is_statement(&self) -> bool {
        matches!(self, ParseError::Statement(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn further_position_comparison() {
        let a = SyntaxError::new(EXTENSION_GRAMMAR, 1, 5, "a");
        let b = SyntaxError::new(BASE_GRAMMAR, 1, 9, "b");
        let c = SyntaxError::new(BASE_GRAMMAR, 2, 1, "c");

        assert!(b.is_further_than(&a));
        assert!(!a.is_further_than(&b));
        assert!(c.is_further_than(&b));
        // Equal positions are not "further".
        assert!(!a.is_further_than(&a.clone()));
    }

    #[test]
    fn rebased_first_line_shifts_column() {
        let err = SyntaxError::new(BASE_GRAMMAR, 1, 3, "boom");
        let rebased = err.rebased(2, 10);
        assert_eq!(rebased.position(), (2, 12));
    }

    #[test]
    fn rebased_later_line_keeps_column() {
        let err = SyntaxError::new(BASE_GRAMMAR, 3, 7, "boom");
        let rebased = err.rebased(2, 10);
        assert_eq!(rebased.position(), (4, 7));
    }
}
