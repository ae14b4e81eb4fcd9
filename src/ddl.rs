//! DDL statement definitions for the Strata SQL extensions.
//!
//! Each statement family lives in its own module with a typed statement
//! struct and a `parse` constructor; [`parsing`] holds the shared
//! position-tracking scanner they are all built on.

pub mod parsing;

pub mod append_table;
pub mod create_table;
pub mod describe;
pub mod drop_table;
pub mod partition_function;
pub mod register;
pub mod show_commands;
pub mod use_statement;

pub use append_table::AppendTableStatement;
pub use create_table::{
    CreateTableAsSelectStatement, CreateTableCommand, CreateTablePartitionedByStatement,
    CreateTableStatement,
};
pub use describe::{DeepDescribeStatement, DescribeDatasourceStatement, DescribeTableStatement};
pub use drop_table::{DropTableStatement, DropViewStatement};
pub use partition_function::{
    CreatePartitionFunctionStatement, DropPartitionFunctionStatement, IntervalStep, PartitionKind,
};
pub use register::{RegisterAllTablesStatement, RegisterTableStatement};
pub use show_commands::{
    ShowDatasourceTablesStatement, ShowPartitionFunctionsStatement, ShowTablesStatement,
};
pub use use_statement::UseStatement;
