use leptos::*;

use crate::domain::logging::{LogComponent, get_time_provider};
use crate::domain::market_data::Symbol;
use crate::domain::watchlist::{Watchlist, WatchlistEntry};
use crate::infrastructure::storage::PersistentSlot;
use crate::{log_debug, log_warn};

/// Watchlist kept in a signal and mirrored to storage on every change.
#[derive(Clone, Copy)]
pub struct WatchlistService {
    list: RwSignal<Watchlist>,
    slot: StoredValue<PersistentSlot<Watchlist>>,
}

impl WatchlistService {
    /// Load the persisted list. Duplicates from older writes collapse to the
    /// first occurrence.
    pub fn load(slot: PersistentSlot<Watchlist>) -> Self {
        let stored = slot.load_or(Watchlist::new());
        let mut list = Watchlist::new();
        for entry in stored.entries() {
            list.add(entry.symbol.clone(), entry.added_at);
        }
        log_debug!(
            LogComponent::Application("Watchlist"),
            "loaded {} symbols from '{}'",
            list.len(),
            slot.key()
        );
        Self { list: create_rw_signal(list), slot: store_value(slot) }
    }

    /// Normalize and add. Blank input and duplicates change nothing.
    pub fn add(&self, input: &str) -> bool {
        let symbol = match Symbol::parse(input) {
            Ok(symbol) => symbol,
            Err(err) => {
                log_debug!(LogComponent::Application("Watchlist"), "rejected input: {}", err);
                return false;
            }
        };
        let added_at = get_time_provider().current_timestamp();
        let mut changed = false;
        self.list.update(|list| changed = list.add(symbol, added_at));
        if changed {
            self.persist();
        }
        changed
    }

    pub fn remove(&self, symbol: &Symbol) -> bool {
        let mut changed = false;
        self.list.update(|list| changed = list.remove(symbol));
        if changed {
            self.persist();
        }
        changed
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.list.with(|list| list.contains(symbol))
    }

    pub fn entries(&self) -> Vec<WatchlistEntry> {
        self.list.with(|list| list.entries().to_vec())
    }

    pub fn len(&self) -> usize {
        self.list.with(Watchlist::len)
    }

    pub fn is_empty(&self) -> bool {
        self.list.with(Watchlist::is_empty)
    }

    fn persist(&self) {
        let saved = self.list.with_untracked(|list| self.slot.with_value(|slot| slot.save(list)));
        if let Err(err) = saved {
            log_warn!(LogComponent::Application("Watchlist"), "could not persist watchlist: {}", err);
        }
    }
}
