//! Provider compatibility helpers.
//!
//! This module centralises two concerns that would otherwise leak into the
//! statement parsers:
//!
//! - rewriting deprecated option keys to their canonical form, keyed by the
//!   data-source provider a statement targets;
//! - mapping SQL type names from column definitions and partition-function
//!   signatures into Arrow data types.

use crate::options::OptionMap;
use arrow::datatypes::{DataType, TimeUnit};

/// A deprecated option key and its canonical replacement, scoped to a
/// provider family.
struct DeprecatedOption {
    /// Exact provider package that carries the rule.
    package: &'static str,
    /// Provider suffix that also carries the rule (lowercase).
    suffix: &'static str,
    deprecated: &'static str,
    canonical: &'static str,
}

impl DeprecatedOption {
    fn applies_to(&self, provider: &str) -> bool {
        provider.eq_ignore_ascii_case(self.package)
            || provider.to_ascii_lowercase().ends_with(self.suffix)
    }
}

const DEPRECATED_OPTIONS: &[DeprecatedOption] = &[
    DeprecatedOption {
        package: "strata.datasource.vora",
        suffix: "vora.defaultsource",
        deprecated: "paths",
        canonical: "files",
    },
    DeprecatedOption {
        package: "strata.datasource.hana",
        suffix: "hana.defaultsource",
        deprecated: "path",
        canonical: "tablepath",
    },
];

/// Rewrite deprecated option keys for `provider` to their canonical form.
///
/// When only the deprecated key is present its value moves to the canonical
/// key; when the user already supplied the canonical key, the deprecated key
/// is dropped and the user value wins. Applying the rewrite twice yields the
/// same map.
pub fn normalize_provider_options(provider: &str, mut options: OptionMap) -> OptionMap {
    for rule in DEPRECATED_OPTIONS {
        if !rule.applies_to(provider) {
            continue;
        }
        if let Some(value) = options.remove(rule.deprecated) {
            if !options.contains_key(rule.canonical) {
                options.insert(rule.canonical, value);
            }
        }
    }
    options
}

/// Map a SQL type name (with optional length/precision arguments) into an
/// Arrow data type, accounting for common aliases.
pub fn map_type_name_to_arrow(name: &str, args: &[u64]) -> Result<DataType, String> {
    let dtype = match name.to_ascii_lowercase().as_str() {
        // Signed integers ----------------------------------------------------
        "tinyint" => DataType::Int8,
        "smallint" => DataType::Int16,
        "int" | "integer" => DataType::Int32,
        "bigint" | "long" => DataType::Int64,

        // Floating point -----------------------------------------------------
        "float" | "real" => DataType::Float32,
        "double" => DataType::Float64,

        // Exact numerics -----------------------------------------------------
        "decimal" | "numeric" => match args {
            [] => DataType::Decimal128(38, 10),
            [precision] => DataType::Decimal128(*precision as u8, 0),
            [precision, scale] => DataType::Decimal128(*precision as u8, *scale as i8),
            _ => return Err(format!("too many arguments for type '{}'", name)),
        },

        // Boolean ------------------------------------------------------------
        "boolean" | "bool" => DataType::Boolean,

        // Character / string -------------------------------------------------
        "string" | "text" | "varchar" | "char" | "clob" => DataType::Utf8,

        // Binary -------------------------------------------------------------
        "binary" | "varbinary" | "blob" => DataType::Binary,

        // Temporal -----------------------------------------------------------
        "date" => DataType::Date32,
        "time" => DataType::Time64(TimeUnit::Microsecond),
        "timestamp" | "datetime" => DataType::Timestamp(TimeUnit::Microsecond, None),

        other => return Err(format!("unknown data type '{}'", other)),
    };

    Ok(dtype)
}
