use leptos::*;
use std::rc::Rc;
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::MarketFeed;
use crate::domain::random::RandomSource;
use crate::infrastructure::storage::{KeyValueStore, LocalStorage, MemoryStorage, PersistentSlot};
use crate::infrastructure::{BrowserRandom, SyntheticMarketFeed};
use crate::log_warn;

use super::{DisplayModeService, MarketDataService, NotificationService, WatchlistService};

/// Every shared service the dashboard uses, created once by the root
/// component and handed down as a prop.
#[derive(Clone, Copy)]
pub struct DashboardServices {
    pub config: StoredValue<DashboardConfig>,
    pub market: MarketDataService,
    pub notifications: NotificationService,
    pub watchlist: WatchlistService,
    pub display: DisplayModeService,
    rng: StoredValue<Rc<dyn RandomSource>>,
}

impl DashboardServices {
    pub fn new(
        config: DashboardConfig,
        store: Rc<dyn KeyValueStore>,
        feed: Rc<dyn MarketFeed>,
        rng: Rc<dyn RandomSource>,
    ) -> Self {
        let watchlist =
            WatchlistService::load(PersistentSlot::new(config.watchlist_key.clone(), Rc::clone(&store)));
        let display = DisplayModeService::load(PersistentSlot::new(config.dark_mode_key.clone(), store));
        Self {
            market: MarketDataService::new(feed),
            notifications: NotificationService::new(config.notification_ttl_ms),
            watchlist,
            display,
            rng: store_value(rng),
            config: store_value(config),
        }
    }

    /// Production wiring: `localStorage`, `Math.random` and the synthetic
    /// feed with its simulated latency.
    pub fn browser(config: DashboardConfig) -> Self {
        let store: Rc<dyn KeyValueStore> = match LocalStorage::open() {
            Ok(storage) => Rc::new(storage),
            Err(err) => {
                log_warn!(
                    LogComponent::Application("Dashboard"),
                    "{}; preferences will not survive a reload",
                    err
                );
                Rc::new(MemoryStorage::new())
            }
        };
        let latency = Duration::from_millis(u64::from(config.fetch_delay_ms));
        let feed = Rc::new(SyntheticMarketFeed::new(BrowserRandom, latency));
        Self::new(config, store, feed, Rc::new(BrowserRandom))
    }

    pub fn rng(&self) -> Rc<dyn RandomSource> {
        self.rng.get_value()
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }
}
