//! Centralized keyword enumerations for the extension grammar.
//!
//! Provides strongly-typed representations of the leading statement keywords
//! so the dispatcher can avoid duplicating string literals, plus the reserved
//! word set the lexer refuses to accept as identifiers.

use std::str::FromStr;

/// Leading keywords that commit the parser to an extension statement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKeyword {
    Create,
    Register,
    Append,
    Drop,
    Describe,
    Deep,
    Show,
    Use,
}

impl StatementKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKeyword::Create => "CREATE",
            StatementKeyword::Register => "REGISTER",
            StatementKeyword::Append => "APPEND",
            StatementKeyword::Drop => "DROP",
            StatementKeyword::Describe => "DESCRIBE",
            StatementKeyword::Deep => "DEEP",
            StatementKeyword::Show => "SHOW",
            StatementKeyword::Use => "USE",
        }
    }
}

impl FromStr for StatementKeyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CREATE" => Ok(StatementKeyword::Create),
            "REGISTER" => Ok(StatementKeyword::Register),
            "APPEND" => Ok(StatementKeyword::Append),
            "DROP" => Ok(StatementKeyword::Drop),
            "DESCRIBE" => Ok(StatementKeyword::Describe),
            "DEEP" => Ok(StatementKeyword::Deep),
            "SHOW" => Ok(StatementKeyword::Show),
            "USE" => Ok(StatementKeyword::Use),
            _ => Err(()),
        }
    }
}

/// Words the extension grammar claims for itself. Rejected as bare
/// identifiers in table names, column lists, and function names.
const RESERVED_WORDS: &[&str] = &[
    "ALL",
    "APPEND",
    "AS",
    "BY",
    "CASCADE",
    "CLOSED",
    "CONFLICTS",
    "CREATE",
    "DATASOURCE",
    "DATASOURCETABLES",
    "DEEP",
    "DESCRIBE",
    "DROP",
    "END",
    "EXISTS",
    "FUNCTION",
    "FUNCTIONS",
    "HASH",
    "IF",
    "IGNORING",
    "NOT",
    "NULL",
    "OPTIONS",
    "PARTITION",
    "PARTITIONED",
    "PARTITIONS",
    "PARTS",
    "RANGE",
    "REGISTER",
    "RIGHT",
    "SHOW",
    "SPLITTERS",
    "START",
    "STRIDE",
    "TABLE",
    "TABLES",
    "TEMPORARY",
    "USE",
    "USING",
    "VIEW",
];

/// True when `word` is reserved by the extension grammar (case-insensitive).
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|reserved| word.eq_ignore_ascii_case(reserved))
}
