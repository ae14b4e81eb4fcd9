//! Strata-specific SQL extensions.
//!
//! This module contains the prioritized dispatch for the statement forms
//! that extend the standard SQL grammar:
//!
//! - **CREATE TABLE** (plain, AS SELECT, PARTITIONED BY)
//! - **REGISTER TABLE / REGISTER ALL TABLES**: make data-source tables known
//! - **APPEND TABLE**: add source files to a registered table
//! - **DROP TABLE / DROP VIEW**
//! - **DESCRIBE / DEEP DESCRIBE / DESCRIBE DATASOURCE**
//! - **SHOW TABLES / DATASOURCETABLES / PARTITION FUNCTIONS**
//! - **CREATE / DROP PARTITION FUNCTION**
//! - **USE**: accepted verbatim as a no-op
//!
//! The first rule whose leading keyword sequence matches commits; there is
//! no cross-rule backtracking after that, so failures carry the committed
//! rule's position instead of a generic "no rule matched".

use crate::ddl::*;
use crate::error::ParseError;
use crate::keywords::StatementKeyword;
use crate::parser::standard::BaseQueryParser;
use crate::ddl::parsing::Cursor;
use std::str::FromStr;

/// A successfully parsed extension statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionStatement {
    CreateTable(CreateTableStatement),
    CreateTableAsSelect(CreateTableAsSelectStatement),
    CreateTablePartitionedBy(CreateTablePartitionedByStatement),
    AppendTable(AppendTableStatement),
    DropTable(DropTableStatement),
    DropView(DropViewStatement),
    ShowTables(ShowTablesStatement),
    ShowDatasourceTables(ShowDatasourceTablesStatement),
    ShowPartitionFunctions(ShowPartitionFunctionsStatement),
    DescribeTable(DescribeTableStatement),
    DescribeDatasource(DescribeDatasourceStatement),
    DeepDescribe(DeepDescribeStatement),
    RegisterTable(RegisterTableStatement),
    RegisterAllTables(RegisterAllTablesStatement),
    CreatePartitionFunction(CreatePartitionFunctionStatement),
    DropPartitionFunction(DropPartitionFunctionStatement),
    Use(UseStatement),
}

impl ExtensionStatement {
    /// Parse an extension statement. `base` parses the embedded query of a
    /// CREATE TABLE AS SELECT.
    pub fn parse(sql: &str, base: &dyn BaseQueryParser) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        if cur.at_end() {
            return Err(cur.error("expected a statement").into());
        }

        // Leading keywords pick the rule; the rule itself re-scans from the
        // start so every failure is positioned in the original text.
        let words: Vec<String> = sql
            .split_whitespace()
            .take(2)
            .map(|word| {
                word.chars()
                    .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                    .collect::<String>()
                    .to_ascii_uppercase()
            })
            .collect();
        let second = words.get(1).map(String::as_str);

        match StatementKeyword::from_str(&words[0]) {
            Ok(StatementKeyword::Create) => match second {
                Some("PARTITION") => CreatePartitionFunctionStatement::parse(sql)
                    .map(Self::CreatePartitionFunction),
                _ => CreateTableCommand::parse(sql, base).map(|command| match command {
                    CreateTableCommand::Table(stmt) => Self::CreateTable(stmt),
                    CreateTableCommand::AsSelect(stmt) => Self::CreateTableAsSelect(stmt),
                    CreateTableCommand::PartitionedBy(stmt) => {
                        Self::CreateTablePartitionedBy(stmt)
                    }
                }),
            },
            Ok(StatementKeyword::Register) => match second {
                Some("ALL") => {
                    RegisterAllTablesStatement::parse(sql).map(Self::RegisterAllTables)
                }
                _ => RegisterTableStatement::parse(sql).map(Self::RegisterTable),
            },
            Ok(StatementKeyword::Append) => {
                AppendTableStatement::parse(sql).map(Self::AppendTable)
            }
            Ok(StatementKeyword::Drop) => match second {
                Some("VIEW") => DropViewStatement::parse(sql).map(Self::DropView),
                Some("PARTITION") => {
                    DropPartitionFunctionStatement::parse(sql).map(Self::DropPartitionFunction)
                }
                _ => DropTableStatement::parse(sql).map(Self::DropTable),
            },
            Ok(StatementKeyword::Describe) => match second {
                Some("DATASOURCE") => {
                    DescribeDatasourceStatement::parse(sql).map(Self::DescribeDatasource)
                }
                _ => DescribeTableStatement::parse(sql).map(Self::DescribeTable),
            },
            Ok(StatementKeyword::Deep) => {
                DeepDescribeStatement::parse(sql).map(Self::DeepDescribe)
            }
            Ok(StatementKeyword::Show) => match second {
                Some("DATASOURCETABLES") => {
                    ShowDatasourceTablesStatement::parse(sql).map(Self::ShowDatasourceTables)
                }
                Some("PARTITION") => {
                    ShowPartitionFunctionsStatement::parse(sql).map(Self::ShowPartitionFunctions)
                }
                _ => ShowTablesStatement::parse(sql).map(Self::ShowTables),
            },
            Ok(StatementKeyword::Use) => UseStatement::parse(sql).map(Self::Use),
            Err(()) => Err(cur.error("expected a DDL statement").into()),
        }
    }
}
