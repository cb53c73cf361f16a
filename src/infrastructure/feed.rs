use futures::future::{FutureExt, LocalBoxFuture};
use std::time::Duration;

use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::services::synthetic_snapshot;
use crate::domain::market_data::{MarketFeed, MarketSnapshot, Symbol};
use crate::domain::random::RandomSource;
use crate::log_trace;

/// Stand-in for an exchange API: waits, then invents a snapshot.
pub struct SyntheticMarketFeed<R: RandomSource> {
    rng: R,
    latency: Duration,
}

impl<R: RandomSource> SyntheticMarketFeed<R> {
    pub fn new(rng: R, latency: Duration) -> Self {
        Self { rng, latency }
    }

    /// No simulated latency; resolves on first poll.
    pub fn immediate(rng: R) -> Self {
        Self::new(rng, Duration::ZERO)
    }
}

impl<R: RandomSource> MarketFeed for SyntheticMarketFeed<R> {
    fn snapshot<'a>(&'a self, symbol: &'a Symbol) -> LocalBoxFuture<'a, AppResult<MarketSnapshot>> {
        async move {
            if !self.latency.is_zero() {
                gloo_timers::future::sleep(self.latency).await;
            }
            let snapshot = synthetic_snapshot(&self.rng);
            log_trace!(
                LogComponent::Infrastructure("SyntheticFeed"),
                "{} -> {:.2}",
                symbol,
                snapshot.price
            );
            Ok(snapshot)
        }
        .boxed_local()
    }
}
