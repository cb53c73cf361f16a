use futures::executor::block_on;
use futures::future::{FutureExt, LocalBoxFuture};
use leptos::create_runtime;
use std::rc::Rc;
use trading_dashboard_wasm::application::MarketDataService;
use trading_dashboard_wasm::domain::errors::{AppError, AppResult};
use trading_dashboard_wasm::domain::market_data::{MarketDataCache, MarketFeed, MarketSnapshot, Symbol};
use trading_dashboard_wasm::domain::market_data::services::synthetic_snapshot;
use trading_dashboard_wasm::domain::random::{RandomSource, SeededRandom};
use trading_dashboard_wasm::infrastructure::SyntheticMarketFeed;

struct FailingFeed;

impl MarketFeed for FailingFeed {
    fn snapshot<'a>(&'a self, _symbol: &'a Symbol) -> LocalBoxFuture<'a, AppResult<MarketSnapshot>> {
        async { Err(AppError::Feed("exchange unreachable".to_string())) }.boxed_local()
    }
}

/// Always draws the largest sample below one.
struct TopOfRange;

impl RandomSource for TopOfRange {
    fn next_f64(&self) -> f64 {
        1.0 - f64::EPSILON / 2.0
    }
}

#[test]
fn snapshot_stays_below_upper_bounds() {
    let snapshot = synthetic_snapshot(&TopOfRange);
    assert!((50_000.0..60_000.0).contains(&snapshot.price), "price {}", snapshot.price);
    assert!((55_000.0..60_000.0).contains(&snapshot.high_24h));
    assert!((45_000.0..50_000.0).contains(&snapshot.low_24h));
    assert!(snapshot.change < 1_000.0);
    assert!(snapshot.change_percent < 5.0);
}

#[test]
fn fetched_price_lands_in_range() {
    let runtime = create_runtime();
    let service = MarketDataService::new(Rc::new(SyntheticMarketFeed::immediate(SeededRandom::new(8))));
    let btc = Symbol::from("BTCUSDT");

    for _ in 0..50 {
        block_on(service.fetch(btc.clone())).unwrap();
        let price = service.price(&btc);
        assert!((50_000.0..60_000.0).contains(&price), "{price} out of range");
    }
    assert!(!service.is_loading());
    assert_eq!(service.cached_count(), 1);

    runtime.dispose();
}

#[test]
fn later_fetch_overwrites_entry() {
    let runtime = create_runtime();
    let service = MarketDataService::new(Rc::new(SyntheticMarketFeed::immediate(SeededRandom::new(21))));
    let eth = Symbol::from("ETHUSDT");

    let first = block_on(service.fetch(eth.clone())).unwrap();
    let second = block_on(service.fetch(eth.clone())).unwrap();
    assert_ne!(first, second);
    assert_eq!(service.snapshot(&eth), Some(second));

    runtime.dispose();
}

#[test]
fn failed_fetch_keeps_previous_snapshot() {
    let runtime = create_runtime();
    let service = MarketDataService::new(Rc::new(FailingFeed));
    let sol = Symbol::from("SOLUSDT");

    assert!(block_on(service.fetch(sol.clone())).is_err());
    assert_eq!(service.snapshot(&sol), None);
    assert_eq!(service.price(&sol), 0.0);
    assert!(!service.is_loading());

    runtime.dispose();
}

#[test]
fn cache_defaults_to_zero_price() {
    let mut cache = MarketDataCache::new();
    let ada = Symbol::from("ADAUSDT");
    assert_eq!(cache.price_or_default(&ada), 0.0);

    let snapshot = MarketSnapshot {
        price: 0.52,
        change: -0.01,
        change_percent: -2.3,
        volume: 890e6,
        market_cap: 18.5e9,
        high_24h: 0.55,
        low_24h: 0.50,
    };
    cache.insert(ada.clone(), snapshot);
    assert_eq!(cache.get(&ada), Some(&snapshot));
    assert!(!snapshot.is_up());
}
