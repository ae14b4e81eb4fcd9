//! Standard SQL grammar collaborator.
//!
//! The extension grammar only recognizes the Strata DDL statements; plain
//! queries (and the `AS <query>` tail of CREATE TABLE AS SELECT) are parsed
//! by a base grammar behind the [`BaseQueryParser`] trait so it can be
//! swapped or tested independently. The default implementation wraps
//! sqlparser-rs with the generic dialect.

use crate::error::{SyntaxError, BASE_GRAMMAR};
use once_cell::sync::Lazy;
use regex::Regex;
use sqlparser::ast::Statement;
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

/// A query parsed by the base grammar, kept opaque to the extension layer.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    /// Parsed statement.
    pub statement: Box<Statement>,
    /// The query text the plan was parsed from.
    pub sql: String,
}

/// Contract required of the base grammar: parse one query, or fail with a
/// position-bearing failure comparable to the extension grammar's.
pub trait BaseQueryParser: Send + Sync {
    fn parse_query(&self, sql: &str) -> Result<QueryPlan, SyntaxError>;
}

/// sqlparser-rs positions look like `... at Line: 3, Column: 17`.
static RE_ERROR_POSITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Line: (\d+), Column: (\d+)").unwrap());

/// Default base grammar backed by sqlparser-rs.
#[derive(Debug, Default)]
pub struct StandardSqlParser {
    dialect: GenericDialect,
}

impl StandardSqlParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BaseQueryParser for StandardSqlParser {
    fn parse_query(&self, sql: &str) -> Result<QueryPlan, SyntaxError> {
        let mut statements = Parser::parse_sql(&self.dialect, sql)
            .map_err(|err| failure_from_message(err.to_string()))?;

        match statements.len() {
            1 => Ok(QueryPlan {
                statement: Box::new(statements.remove(0)),
                sql: sql.to_string(),
            }),
            0 => Err(SyntaxError::new(BASE_GRAMMAR, 1, 1, "no statement found")),
            n => Err(SyntaxError::new(
                BASE_GRAMMAR,
                1,
                1,
                format!("expected a single statement, found {}", n),
            )),
        }
    }
}

/// Recover the failure position sqlparser embeds in its error messages;
/// errors without one are attributed to the start of the input.
fn failure_from_message(message: String) -> SyntaxError {
    let (line, column) = RE_ERROR_POSITION
        .captures(&message)
        .and_then(|caps| {
            let line = caps[1].parse().ok()?;
            let column = caps[2].parse().ok()?;
            Some((line, column))
        })
        .unwrap_or((1, 1));
    SyntaxError::new(BASE_GRAMMAR, line, column, message)
}
