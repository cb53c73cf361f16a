use std::collections::HashMap;

use super::{MarketSnapshot, Symbol};

/// Last known snapshot per symbol.
///
/// Entries are overwritten wholesale and never evicted; the map lives as long
/// as the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketDataCache {
    entries: HashMap<Symbol, MarketSnapshot>,
}

impl MarketDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&MarketSnapshot> {
        self.entries.get(symbol)
    }

    /// Replace whatever was cached for `symbol`.
    pub fn insert(&mut self, symbol: Symbol, snapshot: MarketSnapshot) {
        self.entries.insert(symbol, snapshot);
    }

    pub fn price_or_default(&self, symbol: &Symbol) -> f64 {
        self.get(symbol).map(|s| s.price).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
