//! CREATE TABLE statement family parser.
//!
//! Parses statements like:
//! - CREATE TABLE t (a integer, b string) USING strata.datasource.vora OPTIONS(hosts "h1")
//! - CREATE TEMPORARY TABLE t USING strata.datasource.csv OPTIONS(files "/data/t.csv")
//! - CREATE TABLE t PARTITIONED BY pf (a) USING strata.datasource.vora
//! - CREATE TABLE t USING strata.datasource.vora OPTIONS() AS SELECT * FROM src
//!
//! One rule covers all three command shapes; which node comes out depends
//! on the presence of the `AS <query>` trailer and the `PARTITIONED BY`
//! clause. The verbatim statement text is recorded in the option map under
//! the reserved `table_ddl` key unless the user supplied that key.

use crate::compatibility::normalize_provider_options;
use crate::ddl::parsing::{parse_options_clause, Cursor};
use crate::error::ParseError;
use crate::models::{SaveMode, TableRef};
use crate::options::{OptionMap, TABLE_DDL_OPTION};
use crate::parser::standard::{BaseQueryParser, QueryPlan};
use arrow::datatypes::{Field, Schema};
use std::sync::Arc;

/// Plain CREATE TABLE against a data source.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    pub table: TableRef,
    /// Physical schema; absent for schema-on-read sources.
    pub schema: Option<Arc<Schema>>,
    pub provider: String,
    pub options: OptionMap,
    pub temporary: bool,
    pub if_not_exists: bool,
}

/// CREATE TABLE ... AS `<query>`, with the query parsed by the base grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableAsSelectStatement {
    pub table: TableRef,
    pub provider: String,
    pub options: OptionMap,
    pub temporary: bool,
    /// Conflict behavior derived from the statement flags.
    pub mode: SaveMode,
    pub query: QueryPlan,
}

/// CREATE TABLE ... PARTITIONED BY `<function>` (`<columns>`).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTablePartitionedByStatement {
    pub table: TableRef,
    pub schema: Option<Arc<Schema>>,
    /// Partitioning function routing rows into partitions.
    pub partition_function: String,
    /// Columns fed to the partitioning function; tracked separately from
    /// the physical schema.
    pub partition_columns: Vec<String>,
    pub provider: String,
    pub options: OptionMap,
    pub temporary: bool,
    pub if_not_exists: bool,
}

/// The three node shapes a CREATE TABLE statement can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateTableCommand {
    Table(CreateTableStatement),
    AsSelect(CreateTableAsSelectStatement),
    PartitionedBy(CreateTablePartitionedByStatement),
}

impl CreateTableCommand {
    /// Parse a CREATE TABLE statement. The base grammar parses the
    /// `AS <query>` tail when one is present.
    pub fn parse(sql: &str, base: &dyn BaseQueryParser) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(sql);
        cur.expect_keyword("CREATE")?;
        let temporary = cur.accept_keyword("TEMPORARY");
        cur.expect_keyword("TABLE")?;
        let if_not_exists = cur.accept_keywords(&["IF", "NOT", "EXISTS"]);
        if temporary && if_not_exists {
            return Err(ParseError::statement(
                "TEMPORARY and IF NOT EXISTS cannot be used together",
            ));
        }

        let table = cur.table_ref()?;

        let schema = if cur.accept_symbol('(') {
            Some(Arc::new(Schema::new(parse_column_defs(&mut cur)?)))
        } else {
            None
        };

        let partitioned_by = if cur.accept_keywords(&["PARTITIONED", "BY"]) {
            let function = cur.identifier()?;
            cur.expect_symbol('(')?;
            let mut columns = vec![cur.identifier()?];
            while cur.accept_symbol(',') {
                columns.push(cur.identifier()?);
            }
            cur.expect_symbol(')')?;
            Some((function, columns))
        } else {
            None
        };

        cur.expect_keyword("USING")?;
        let provider = cur.provider_name()?;

        let mut options = if cur.accept_keyword("OPTIONS") {
            parse_options_clause(&mut cur)?
        } else {
            OptionMap::new()
        };

        let as_query = if cur.accept_keyword("AS") {
            Some(cur.take_rest())
        } else {
            cur.finish()?;
            None
        };

        // The raw statement travels with the options so the execution layer
        // can hand it to the data source; a user-supplied value wins.
        if !options.contains_key(TABLE_DDL_OPTION) {
            options.insert(TABLE_DDL_OPTION, sql);
        }
        let options = normalize_provider_options(&provider, options);

        match as_query {
            Some((line, column, tail)) => {
                if schema.is_some() {
                    return Err(ParseError::statement(
                        "a CREATE TABLE AS SELECT statement cannot define a column list",
                    ));
                }
                if partitioned_by.is_some() {
                    return Err(ParseError::statement(
                        "PARTITIONED BY cannot be combined with an AS query",
                    ));
                }
                let query = base
                    .parse_query(tail)
                    .map_err(|err| err.rebased(line, column))?;
                let mode = if if_not_exists {
                    SaveMode::IgnoreIfExists
                } else if temporary {
                    SaveMode::Overwrite
                } else {
                    SaveMode::ErrorIfExists
                };
                Ok(CreateTableCommand::AsSelect(CreateTableAsSelectStatement {
                    table,
                    provider,
                    options,
                    temporary,
                    mode,
                    query,
                }))
            }
            None => match partitioned_by {
                Some((partition_function, partition_columns)) => Ok(
                    CreateTableCommand::PartitionedBy(CreateTablePartitionedByStatement {
                        table,
                        schema,
                        partition_function,
                        partition_columns,
                        provider,
                        options,
                        temporary,
                        if_not_exists,
                    }),
                ),
                None => Ok(CreateTableCommand::Table(CreateTableStatement {
                    table,
                    schema,
                    provider,
                    options,
                    temporary,
                    if_not_exists,
                })),
            },
        }
    }
}

/// Parse `name type [NOT NULL | NULL]` column definitions up to the closing
/// parenthesis (the opening one is already consumed).
fn parse_column_defs(cur: &mut Cursor<'_>) -> Result<Vec<Field>, ParseError> {
    let mut fields = Vec::new();
    loop {
        let name = cur.identifier()?;
        let data_type = cur.data_type()?;
        let nullable = if cur.accept_keywords(&["NOT", "NULL"]) {
            false
        } else {
            cur.accept_keyword("NULL");
            true
        };
        fields.push(Field::new(&name, data_type, nullable));
        if !cur.accept_symbol(',') {
            break;
        }
    }
    cur.expect_symbol(')')?;
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::standard::StandardSqlParser;
    use arrow::datatypes::DataType;

    fn parse(sql: &str) -> Result<CreateTableCommand, ParseError> {
        CreateTableCommand::parse(sql, &StandardSqlParser::new())
    }

    #[test]
    fn create_table_with_schema() {
        let sql = "CREATE TABLE prod.events (id bigint NOT NULL, payload string) \
                   USING strata.datasource.vora OPTIONS(hosts \"h1,h2\")";
        let stmt = match parse(sql).unwrap() {
            CreateTableCommand::Table(stmt) => stmt,
            other => panic!("expected plain CREATE TABLE, got {:?}", other),
        };

        assert_eq!(stmt.table, TableRef::qualified("prod", "events"));
        assert_eq!(stmt.provider, "strata.datasource.vora");
        assert!(!stmt.temporary);
        assert!(!stmt.if_not_exists);

        let schema = stmt.schema.expect("schema");
        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.field(0).name(), "id");
        assert_eq!(schema.field(0).data_type(), &DataType::Int64);
        assert!(!schema.field(0).is_nullable());
        assert!(schema.field(1).is_nullable());
    }

    #[test]
    fn schema_is_optional() {
        let stmt = parse("CREATE TABLE t USING strata.datasource.csv").unwrap();
        match stmt {
            CreateTableCommand::Table(stmt) => assert!(stmt.schema.is_none()),
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn temporary_with_if_not_exists_is_a_statement_error() {
        let err = parse("CREATE TEMPORARY TABLE IF NOT EXISTS t USING x").unwrap_err();
        assert!(err.is_statement(), "got {:?}", err);
    }

    #[test]
    fn table_ddl_records_the_verbatim_statement() {
        let sql = "CREATE TABLE t USING strata.datasource.csv OPTIONS ()";
        let stmt = match parse(sql).unwrap() {
            CreateTableCommand::Table(stmt) => stmt,
            other => panic!("unexpected node {:?}", other),
        };
        assert_eq!(stmt.options.get("table_ddl"), Some(sql));
    }

    #[test]
    fn user_supplied_table_ddl_wins() {
        let sql = "CREATE TABLE t USING x OPTIONS(TABLE_DDL \"mine\")";
        let stmt = match parse(sql).unwrap() {
            CreateTableCommand::Table(stmt) => stmt,
            other => panic!("unexpected node {:?}", other),
        };
        assert_eq!(stmt.options.get("table_ddl"), Some("mine"));
    }

    #[test]
    fn as_select_parses_the_query_with_the_base_grammar() {
        let sql = "CREATE TABLE t USING strata.datasource.vora AS SELECT a, b FROM src";
        let stmt = match parse(sql).unwrap() {
            CreateTableCommand::AsSelect(stmt) => stmt,
            other => panic!("expected CTAS, got {:?}", other),
        };
        assert_eq!(stmt.mode, SaveMode::ErrorIfExists);
        assert_eq!(stmt.query.sql, "SELECT a, b FROM src");
    }

    #[test]
    fn save_mode_follows_the_statement_flags() {
        let ine = "CREATE TABLE IF NOT EXISTS t USING x AS SELECT 1";
        match parse(ine).unwrap() {
            CreateTableCommand::AsSelect(stmt) => assert_eq!(stmt.mode, SaveMode::IgnoreIfExists),
            other => panic!("unexpected node {:?}", other),
        }

        let temp = "CREATE TEMPORARY TABLE t USING x AS SELECT 1";
        match parse(temp).unwrap() {
            CreateTableCommand::AsSelect(stmt) => assert_eq!(stmt.mode, SaveMode::Overwrite),
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn as_select_with_column_defs_is_a_statement_error() {
        let err = parse("CREATE TABLE t (a integer) USING x AS SELECT 1").unwrap_err();
        assert!(err.is_statement(), "got {:?}", err);
    }

    #[test]
    fn as_select_failure_is_positioned_in_the_full_statement() {
        let err = parse("CREATE TABLE t USING x AS SELECT FROM").unwrap_err();
        match err {
            ParseError::Syntax(err) => {
                // The tail starts at column 27; the failure must land past it.
                assert_eq!(err.line, 1);
                assert!(err.column > 26, "column {}", err.column);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn partitioned_by_captures_function_and_columns() {
        let sql = "CREATE TABLE t (a integer, b integer) PARTITIONED BY pf (a, b) \
                   USING strata.datasource.vora";
        let stmt = match parse(sql).unwrap() {
            CreateTableCommand::PartitionedBy(stmt) => stmt,
            other => panic!("expected partitioned node, got {:?}", other),
        };
        assert_eq!(stmt.partition_function, "pf");
        assert_eq!(stmt.partition_columns, vec!["a", "b"]);
        assert_eq!(stmt.schema.unwrap().fields().len(), 2);
    }

    #[test]
    fn reserved_column_name_is_a_syntax_error() {
        let err = parse("CREATE TABLE t (table integer) USING x").unwrap_err();
        assert!(err.is_syntax(), "got {:?}", err);
    }

    #[test]
    fn deprecated_vora_paths_option_is_rewritten() {
        let sql = "CREATE TABLE t USING strata.datasource.vora OPTIONS(paths \"/data\")";
        let stmt = match parse(sql).unwrap() {
            CreateTableCommand::Table(stmt) => stmt,
            other => panic!("unexpected node {:?}", other),
        };
        assert_eq!(stmt.options.get("files"), Some("/data"));
        assert!(!stmt.options.contains_key("paths"));
    }

    #[test]
    fn trailing_input_is_a_syntax_error() {
        let err = parse("CREATE TABLE t USING x garbage").unwrap_err();
        assert!(err.is_syntax(), "got {:?}", err);
    }
}
