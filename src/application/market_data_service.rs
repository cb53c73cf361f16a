use leptos::*;
use std::rc::Rc;

use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::domain::market_data::{MarketDataCache, MarketFeed, MarketSnapshot, Symbol};
use crate::log_debug;

/// Reactive front of the market data cache.
///
/// Fetches never cancel each other. Whichever resolves last overwrites the
/// entry, and the loading flag stays up while any fetch is pending.
#[derive(Clone, Copy)]
pub struct MarketDataService {
    cache: RwSignal<MarketDataCache>,
    in_flight: RwSignal<usize>,
    feed: StoredValue<Rc<dyn MarketFeed>>,
}

impl MarketDataService {
    pub fn new(feed: Rc<dyn MarketFeed>) -> Self {
        Self {
            cache: create_rw_signal(MarketDataCache::new()),
            in_flight: create_rw_signal(0),
            feed: store_value(feed),
        }
    }

    /// Ask the feed for `symbol` and overwrite its cache entry.
    ///
    /// A failed fetch is logged and leaves the previous snapshot alone.
    pub async fn fetch(&self, symbol: Symbol) -> AppResult<MarketSnapshot> {
        self.in_flight.update(|n| *n += 1);
        let feed = self.feed.get_value();
        let result = feed.snapshot(&symbol).await;
        self.in_flight.try_update(|n| *n = n.saturating_sub(1));

        match result {
            Ok(snapshot) => {
                log_debug!(
                    LogComponent::Application("MarketData"),
                    "📈 {} snapshot at {:.2}",
                    symbol,
                    snapshot.price
                );
                self.cache.try_update(|cache| cache.insert(symbol, snapshot));
                Ok(snapshot)
            }
            Err(err) => {
                get_logger().log_with_metadata(
                    LogLevel::Warn,
                    LogComponent::Application("MarketData"),
                    &format!("fetch failed: {}", err),
                    &format!("symbol={}", symbol),
                );
                Err(err)
            }
        }
    }

    /// Fire-and-forget [`fetch`](Self::fetch) for UI callbacks.
    pub fn refresh(&self, symbol: Symbol) {
        let service = *self;
        spawn_local(async move {
            // failures are already logged
            let _ = service.fetch(symbol).await;
        });
    }

    pub fn snapshot(&self, symbol: &Symbol) -> Option<MarketSnapshot> {
        self.cache.with(|cache| cache.get(symbol).copied())
    }

    /// Cached price, 0 when nothing was fetched yet.
    pub fn price(&self, symbol: &Symbol) -> f64 {
        self.cache.with(|cache| cache.price_or_default(symbol))
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    pub fn cached_count(&self) -> usize {
        self.cache.with(MarketDataCache::len)
    }
}
