use futures::future::LocalBoxFuture;

use crate::domain::errors::AppResult;
use crate::domain::market_data::{MarketSnapshot, Symbol};

/// Source of market snapshots.
///
/// Only a synthetic implementation exists; a real exchange client would slot
/// in here without touching the cache or the chart.
pub trait MarketFeed {
    fn snapshot<'a>(&'a self, symbol: &'a Symbol) -> LocalBoxFuture<'a, AppResult<MarketSnapshot>>;
}
