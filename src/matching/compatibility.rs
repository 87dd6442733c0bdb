use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::types::CategoryId;

/// One stored unordered-pair entry, as it appears in catalog JSON
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityEntry {
    pub a: CategoryId,
    pub b: CategoryId,
    pub factor: f64,
}

/// Symmetric category compatibility lookup
///
/// Keys are normalized so `(a, b)` and `(b, a)` share one entry. Equal
/// categories are always fully compatible; pairs without an entry are fully
/// incompatible (0.0), not unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CompatibilityEntry>", into = "Vec<CompatibilityEntry>")]
pub struct CompatibilityTable {
    entries: HashMap<(CategoryId, CategoryId), f64>,
}

/// Order a pair so the smaller id comes first
#[inline]
fn normalize(a: CategoryId, b: CategoryId) -> (CategoryId, CategoryId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl CompatibilityTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compatibility factor for a pair: 1.0 when equal, the stored entry, or 0.0
    #[must_use]
    pub fn lookup(&self, a: CategoryId, b: CategoryId) -> f64 {
        if a == b {
            return 1.0;
        }
        self.get(a, b).unwrap_or(0.0)
    }

    /// Raw stored entry for the pair, ignoring the equal-category rule
    #[must_use]
    pub fn get(&self, a: CategoryId, b: CategoryId) -> Option<f64> {
        self.entries.get(&normalize(a, b)).copied()
    }

    /// Insert or overwrite the entry for the unordered pair; the factor is not range-checked
    pub fn set(&mut self, a: CategoryId, b: CategoryId, factor: f64) {
        self.entries.insert(normalize(a, b), factor);
    }

    #[must_use]
    pub fn with_entry(mut self, a: impl Into<CategoryId>, b: impl Into<CategoryId>, factor: f64) -> Self {
        self.set(a.into(), b.into(), factor);
        self
    }

    /// All stored entries, sorted by pair for stable output
    #[must_use]
    pub fn entries(&self) -> Vec<CompatibilityEntry> {
        let mut entries: Vec<CompatibilityEntry> = self
            .entries
            .iter()
            .map(|(&(a, b), &factor)| CompatibilityEntry { a, b, factor })
            .collect();
        entries.sort_by_key(|e| (e.a, e.b));
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<CompatibilityEntry>> for CompatibilityTable {
    fn from(entries: Vec<CompatibilityEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.set(entry.a, entry.b, entry.factor);
        }
        table
    }
}

impl From<CompatibilityTable> for Vec<CompatibilityEntry> {
    fn from(table: CompatibilityTable) -> Self {
        table.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CompatibilityTable {
        CompatibilityTable::new()
            .with_entry(1, 2, 0.1)
            .with_entry(3, 1, 1.0)
    }

    #[test]
    fn test_equal_categories_always_compatible() {
        let table = sample_table();
        assert!((table.lookup(CategoryId(7), CategoryId(7)) - 1.0).abs() < f64::EPSILON);

        // Even an explicit entry for the same category does not change the result
        let mut table = CompatibilityTable::new();
        table.set(CategoryId(4), CategoryId(4), 0.2);
        assert!((table.lookup(CategoryId(4), CategoryId(4)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let table = sample_table();
        for (a, b) in [(1, 2), (1, 3), (2, 3), (5, 9)] {
            let (a, b) = (CategoryId(a), CategoryId(b));
            assert!((table.lookup(a, b) - table.lookup(b, a)).abs() < f64::EPSILON);
        }
        assert!((table.lookup(CategoryId(3), CategoryId(1)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_absent_pair_is_incompatible_not_unknown() {
        let table = sample_table();
        assert!(table.get(CategoryId(2), CategoryId(3)).is_none());
        assert!(table.lookup(CategoryId(2), CategoryId(3)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_overwrites_either_order() {
        let mut table = sample_table();
        table.set(CategoryId(2), CategoryId(1), 0.6);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(CategoryId(1), CategoryId(2)), Some(0.6));
    }

    #[test]
    fn test_factor_range_not_validated() {
        let table = CompatibilityTable::new().with_entry(1, 2, 3.5);
        assert!((table.lookup(CategoryId(2), CategoryId(1)) - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_as_entry_list() {
        let table = sample_table();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"[{"a":1,"b":2,"factor":0.1},{"a":1,"b":3,"factor":1.0}]"#
        );
        let back: CompatibilityTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
