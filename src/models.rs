//! Shared value types carried by parsed statements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A possibly database-qualified table identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    /// Optional database/namespace qualifier.
    pub database: Option<String>,
    /// Table name.
    pub table: String,
}

impl TableRef {
    /// Unqualified table reference.
    pub fn bare(table: impl Into<String>) -> Self {
        Self {
            database: None,
            table: table.into(),
        }
    }

    /// Qualified `database.table` reference.
    pub fn qualified(database: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            database: Some(database.into()),
            table: table.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.database {
            Some(database) => write!(f, "{}.{}", database, self.table),
            None => write!(f, "{}", self.table),
        }
    }
}

/// How a CREATE TABLE AS SELECT behaves when the target already exists.
///
/// Derived from the statement flags: `IF NOT EXISTS` maps to
/// [`SaveMode::IgnoreIfExists`], `TEMPORARY` to [`SaveMode::Overwrite`],
/// everything else to [`SaveMode::ErrorIfExists`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveMode {
    ErrorIfExists,
    IgnoreIfExists,
    Overwrite,
}
