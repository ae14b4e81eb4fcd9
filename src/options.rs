//! Case-insensitive option map carried by most extension statements.
//!
//! Keys are case-folded to lowercase on insertion and lookup, so two maps
//! built from option lists differing only in key case compare equal. Values
//! are kept verbatim.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved option key that receives the verbatim statement text of a
/// CREATE TABLE statement when the user did not supply it explicitly.
pub const TABLE_DDL_OPTION: &str = "table_ddl";

/// Immutable-after-parse, case-insensitive string-to-string map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionMap {
    entries: BTreeMap<String, String>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, folding the key to lowercase. Returns the previous
    /// value stored under the folded key, if any.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.entries
            .insert(key.as_ref().to_lowercase(), value.into())
    }

    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(&key.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(folded_key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = OptionMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<const N: usize> From<[(&str, &str); N]> for OptionMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_fold_on_insert_and_lookup() {
        let mut options = OptionMap::new();
        options.insert("Hosts", "alpha,beta");

        assert_eq!(options.get("hosts"), Some("alpha,beta"));
        assert_eq!(options.get("HOSTS"), Some("alpha,beta"));
        assert!(options.contains_key("hoStS"));
    }

    #[test]
    fn maps_differing_only_in_key_case_are_equal() {
        let a = OptionMap::from([("a", "1"), ("B", "2")]);
        let b = OptionMap::from([("A", "1"), ("b", "2")]);
        assert_eq!(a, b);
    }

    #[test]
    fn later_insert_wins_regardless_of_case() {
        let mut options = OptionMap::new();
        options.insert("path", "old");
        let previous = options.insert("PATH", "new");

        assert_eq!(previous.as_deref(), Some("old"));
        assert_eq!(options.len(), 1);
        assert_eq!(options.get("path"), Some("new"));
    }

    #[test]
    fn values_keep_their_case() {
        let options = OptionMap::from([("key", "MixedCase")]);
        assert_eq!(options.get("key"), Some("MixedCase"));
    }
}
