//! Symbol catalog: which instruments get quoted, grouped by category.

use serde::{Deserialize, Serialize};

/// One instrument: human-readable label plus the provider ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub name: String,
    pub symbol: String,
}

/// An ordered group of instruments sharing one briefing section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Stable key used in the snapshot (e.g. "us_indices").
    pub key: String,
    /// Section title used in reports (e.g. "US Indices").
    pub title: String,
    pub entries: Vec<SymbolEntry>,
}

/// The full set of quote categories for a run. Immutable once built;
/// category and entry order is the processing and presentation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolCatalog {
    pub categories: Vec<CategorySpec>,
}

impl SymbolCatalog {
    pub fn new(categories: Vec<CategorySpec>) -> Self {
        Self { categories }
    }

    /// Total number of symbols across all categories.
    pub fn symbol_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// All symbols in catalog order.
    pub fn all_symbols(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(|e| e.symbol.clone()))
            .collect()
    }

    /// Reverse mapping: symbol -> (category key, display name), in catalog
    /// order. Kept as a Vec so iteration order stays deterministic.
    pub fn symbol_map(&self) -> Vec<(String, (String, String))> {
        self.categories
            .iter()
            .flat_map(|c| {
                c.entries
                    .iter()
                    .map(|e| (e.symbol.clone(), (c.key.clone(), e.name.clone())))
            })
            .collect()
    }

    pub fn category(&self, key: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.key == key)
    }
}

/// Shorthand for building catalog entries from literals.
pub fn entries(pairs: &[(&str, &str)]) -> Vec<SymbolEntry> {
    pairs
        .iter()
        .map(|(name, symbol)| SymbolEntry {
            name: (*name).to_string(),
            symbol: (*symbol).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SymbolCatalog {
        SymbolCatalog::new(vec![
            CategorySpec {
                key: "idx".into(),
                title: "Indices".into(),
                entries: entries(&[("Index A", "AAA"), ("Index B", "BBB")]),
            },
            CategorySpec {
                key: "fx".into(),
                title: "Currencies".into(),
                entries: entries(&[("USD/KRW", "KRW=X")]),
            },
        ])
    }

    #[test]
    fn test_symbol_count_and_order() {
        let catalog = sample();
        assert_eq!(catalog.symbol_count(), 3);
        assert_eq!(catalog.all_symbols(), vec!["AAA", "BBB", "KRW=X"]);
    }

    #[test]
    fn test_symbol_map_preserves_catalog_order() {
        let map = sample().symbol_map();
        assert_eq!(map[0].0, "AAA");
        assert_eq!(map[0].1, ("idx".to_string(), "Index A".to_string()));
        assert_eq!(map[2].1, ("fx".to_string(), "USD/KRW".to_string()));
    }
}
