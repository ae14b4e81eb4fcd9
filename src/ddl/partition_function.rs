//! CREATE / DROP PARTITION FUNCTION statement parsers.
//!
//! Parses statements like:
//! - CREATE PARTITION FUNCTION pf (integer) AS HASH PARTITIONS 4 USING strata.datasource.vora
//! - CREATE PARTITION FUNCTION pf (integer) AS RANGE SPLITTERS (5, 10, 15) USING strata.datasource.vora
//! - CREATE PARTITION FUNCTION pf (integer) AS RANGE SPLITTERS RIGHT CLOSED (5, 10) USING strata.datasource.vora
//! - CREATE PARTITION FUNCTION pf (integer) AS RANGE START 0 END 100 STRIDE 10 USING strata.datasource.vora
//! - DROP PARTITION FUNCTION IF EXISTS pf USING strata.datasource.vora
//!
//! Partitioning functions are named, typed mappings that route rows into
//! partitions. Argument lists carry types only; the columns are bound at
//! CREATE TABLE ... PARTITIONED BY time.

use crate::ddl::parsing::{parse_options_clause, Cursor};
use crate::error::ParseError;
use crate::options::OptionMap;
use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};

/// How a range-interval function advances from START to END.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalStep {
    /// Fixed stride between partition boundaries.
    Stride(i64),
    /// Number of equally sized parts.
    Parts(u32),
}

/// The partitioning scheme a CREATE PARTITION FUNCTION statement defines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PartitionKind {
    Hash {
        /// Partition count; the provider picks one when absent.
        partitions: Option<u32>,
    },
    RangeSplit {
        /// Ordered boundary values.
        splitters: Vec<i64>,
        /// Intervals are closed on the right instead of the left.
        right_closed: bool,
    },
    RangeInterval {
        start: i64,
        end: i64,
        step: IntervalStep,
    },
}

impl PartitionKind {
    /// Function kind name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            PartitionKind::Hash { .. } => "HASH",
            PartitionKind::RangeSplit { .. } | PartitionKind::RangeInterval { .. } => "RANGE",
        }
    }
}

/// CREATE PARTITION FUNCTION statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePartitionFunctionStatement {
    pub name: String,
    /// Argument types the function accepts.
    pub arguments: Vec<DataType>,
    pub kind: PartitionKind,
    pub provider: String,
    pub options: OptionMap,
}

impl CreatePartitionFunctionStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("CREATE")?;
        cur.expect_keyword("PARTITION")?;
        cur.expect_keyword("FUNCTION")?;
        let name = cur.identifier()?;

        cur.expect_symbol('(')?;
        let mut arguments = Vec::new();
        if !cur.accept_symbol(')') {
            loop {
                arguments.push(cur.data_type()?);
                if !cur.accept_symbol(',') {
                    break;
                }
            }
            cur.expect_symbol(')')?;
        }

        cur.expect_keyword("AS")?;
        let kind = parse_partition_kind(&mut cur)?;

        cur.expect_keyword("USING")?;
        let provider = cur.provider_name()?;
        let options = if cur.accept_keyword("OPTIONS") {
            parse_options_clause(&mut cur)?
        } else {
            OptionMap::new()
        };
        cur.finish()?;

        let statement = Self {
            name,
            arguments,
            kind,
            provider,
            options,
        };
        statement.validate()?;
        Ok(statement)
    }

    /// Domain checks that run after the statement parsed structurally.
    fn validate(&self) -> Result<(), ParseError> {
        if self.arguments.is_empty() {
            return Err(ParseError::Statement(format!(
                "the argument list of a {} partitioning function cannot be empty",
                self.kind.name()
            )));
        }
        if matches!(
            self.kind,
            PartitionKind::RangeSplit { .. } | PartitionKind::RangeInterval { .. }
        ) && self.arguments.len() > 1
        {
            return Err(ParseError::Statement(
                "range functions cannot have more than one argument".to_string(),
            ));
        }
        Ok(())
    }
}

/// `HASH [PARTITIONS n] | RANGE (SPLITTERS [RIGHT CLOSED] (v, ...) |
/// START v END v (STRIDE v | PARTS n))`
fn parse_partition_kind(cur: &mut Cursor<'_>) -> Result<PartitionKind, ParseError> {
    if cur.accept_keyword("HASH") {
        let partitions = if cur.accept_keyword("PARTITIONS") {
            Some(cur.unsigned_integer()?)
        } else {
            None
        };
        return Ok(PartitionKind::Hash { partitions });
    }

    cur.expect_keyword("RANGE")?;
    if cur.accept_keyword("SPLITTERS") {
        let right_closed = cur.accept_keywords(&["RIGHT", "CLOSED"]);
        cur.expect_symbol('(')?;
        let mut splitters = Vec::new();
        if !cur.accept_symbol(')') {
            loop {
                splitters.push(cur.integer()?);
                if !cur.accept_symbol(',') {
                    break;
                }
            }
            cur.expect_symbol(')')?;
        }
        Ok(PartitionKind::RangeSplit {
            splitters,
            right_closed,
        })
    } else {
        cur.expect_keyword("START")?;
        let start = cur.integer()?;
        cur.expect_keyword("END")?;
        let end = cur.integer()?;
        let step = if cur.accept_keyword("STRIDE") {
            IntervalStep::Stride(cur.integer()?)
        } else if cur.accept_keyword("PARTS") {
            IntervalStep::Parts(cur.unsigned_integer()?)
        } else {
            return Err(cur.error("expected STRIDE or PARTS").into());
        };
        Ok(PartitionKind::RangeInterval { start, end, step })
    }
}

/// DROP PARTITION FUNCTION statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DropPartitionFunctionStatement {
    pub name: String,
    pub provider: String,
    pub options: OptionMap,
    pub if_exists: bool,
}

impl DropPartitionFunctionStatement {
    pub fn parse(sql: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("DROP")?;
        cur.expect_keyword("PARTITION")?;
        cur.expect_keyword("FUNCTION")?;
        let if_exists = cur.accept_keywords(&["IF", "EXISTS"]);
        let name = cur.identifier()?;
        cur.expect_keyword("USING")?;
        let provider = cur.provider_name()?;
        let options = if cur.accept_keyword("OPTIONS") {
            parse_options_clause(&mut cur)?
        } else {
            OptionMap::new()
        };
        cur.finish()?;

        Ok(Self {
            name,
            provider,
            options,
            if_exists,
        })
    }
}
