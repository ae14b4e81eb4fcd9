//! StrataSQL - datasource DDL extensions for the Strata SQL engine
//!
//! This crate parses the administrative statements Strata layers on top of
//! standard SQL: creating and registering data-source tables, appending
//! source files, describing tables and data sources, and managing
//! partitioning functions. Successful parses produce immutable command
//! nodes for the execution layer; plain queries fall through to a standard
//! SQL grammar (sqlparser-rs by default) behind a swappable trait.
//!
//! When both grammars reject a statement, the failure that occurred further
//! into the input is surfaced, since the grammar that consumed more text
//! pinpoints the actual mistake.
//!
//! # Example
//!
//! ```
//! use strata_sql::{ExtensionStatement, SqlParser, SqlStatement};
//!
//! let parser = SqlParser::new();
//!
//! let stmt = parser
//!     .parse("SHOW TABLES USING strata.datasource.vora", false)
//!     .unwrap();
//! assert!(matches!(
//!     stmt,
//!     SqlStatement::Ddl(ExtensionStatement::ShowTables(_))
//! ));
//!
//! // Anything the extension grammar doesn't know falls back to plain SQL.
//! let stmt = parser.parse("SELECT 1", false).unwrap();
//! assert!(matches!(stmt, SqlStatement::Query(_)));
//! ```

pub mod compatibility;
pub mod ddl;
pub mod error;
pub mod keywords;
pub mod models;
pub mod options;
pub mod parser;

pub use error::{ParseError, SyntaxError, BASE_GRAMMAR, EXTENSION_GRAMMAR};
pub use models::{SaveMode, TableRef};
pub use options::{OptionMap, TABLE_DDL_OPTION};
pub use parser::extensions::ExtensionStatement;
pub use parser::standard::{BaseQueryParser, QueryPlan, StandardSqlParser};
pub use parser::{SqlParser, SqlStatement};
