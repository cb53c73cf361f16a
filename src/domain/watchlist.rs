use serde::{Deserialize, Serialize};

use crate::domain::market_data::Symbol;

/// One tracked symbol. Serialized as `{ "symbol": .., "addedAt": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub symbol: Symbol,
    #[serde(rename = "addedAt")]
    pub added_at: u64,
}

/// User-curated symbols, unique by symbol, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add unless already present. Returns whether the list changed.
    pub fn add(&mut self, symbol: Symbol, added_at: u64) -> bool {
        if self.contains(&symbol) {
            return false;
        }
        self.entries.push(WatchlistEntry { symbol, added_at });
        true
    }

    /// Returns whether the list changed.
    pub fn remove(&mut self, symbol: &Symbol) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.symbol != symbol);
        self.entries.len() != before
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.entries.iter().any(|entry| &entry.symbol == symbol)
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
