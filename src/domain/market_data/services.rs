use crate::domain::random::RandomSource;

use super::{Candle, MarketSnapshot, OHLCV, Price, TimeFrame, Timestamp, Volume};

/// Baseline every synthetic series walks around.
pub const BASELINE_PRICE: f64 = 50_000.0;
/// Width of the band the walk offset is kept in, above the baseline.
pub const WALK_BAND: f64 = 10_000.0;

const WALK_STEP: f64 = 500.0;
const OPEN_JITTER: f64 = 500.0;
const CLOSE_SWING: f64 = 1_000.0;
const WICK_MAX: f64 = 500.0;
const VOLUME_FLOOR: f64 = 100.0;
const VOLUME_SPAN: f64 = 1_000.0;

/// Fabricates OHLCV series for the chart.
pub struct SeriesGenerator<'a, R: RandomSource + ?Sized> {
    rng: &'a R,
}

impl<'a, R: RandomSource + ?Sized> SeriesGenerator<'a, R> {
    pub fn new(rng: &'a R) -> Self {
        Self { rng }
    }

    /// Build `timeframe.point_count()` candles ending at `now_secs`, oldest
    /// first, one bucket apart.
    pub fn generate(&self, timeframe: TimeFrame, now_secs: u64) -> Vec<Candle> {
        let count = timeframe.point_count();
        let step = timeframe.duration_secs();
        let mut offset = self.rng.range(0.0, WALK_BAND);

        (0..count)
            .rev()
            .map(|back| {
                offset = (offset + self.rng.centered(WALK_STEP)).clamp(0.0, WALK_BAND);
                let time = now_secs.saturating_sub(back as u64 * step);
                self.candle_at(Timestamp::from_secs(time), BASELINE_PRICE + offset)
            })
            .collect()
    }

    fn candle_at(&self, timestamp: Timestamp, base: f64) -> Candle {
        let open = base + self.rng.centered(OPEN_JITTER);
        let close = open + self.rng.centered(CLOSE_SWING);
        let high = open.max(close) + self.rng.range(0.0, WICK_MAX);
        let low = open.min(close) - self.rng.range(0.0, WICK_MAX);
        let volume = VOLUME_FLOOR + self.rng.range(0.0, VOLUME_SPAN);

        Candle::new(
            timestamp,
            OHLCV::new(
                Price::from(open),
                Price::from(high),
                Price::from(low),
                Price::from(close),
                Volume::from(volume),
            ),
        )
    }
}

/// Fabricate one market snapshot. Ranges match what the dashboard has always
/// shown; consecutive snapshots are unrelated.
pub fn synthetic_snapshot<R: RandomSource + ?Sized>(rng: &R) -> MarketSnapshot {
    MarketSnapshot {
        price: rng.range(50_000.0, 60_000.0),
        change: rng.centered(1_000.0),
        change_percent: rng.centered(5.0),
        volume: rng.range(0.0, 1_000_000_000.0),
        market_cap: rng.range(0.0, 1_000_000_000_000.0),
        high_24h: rng.range(55_000.0, 60_000.0),
        low_24h: rng.range(45_000.0, 50_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::random::SeededRandom;

    #[test]
    fn series_is_chronological_and_bucket_spaced() {
        let rng = SeededRandom::new(11);
        let candles = SeriesGenerator::new(&rng).generate(TimeFrame::OneHour, 1_700_000_000);
        assert_eq!(candles.len(), TimeFrame::OneHour.point_count());
        for pair in candles.windows(2) {
            assert_eq!(pair[1].timestamp.value() - pair[0].timestamp.value(), 3_600);
        }
        assert_eq!(candles.last().map(|c| c.timestamp.value()), Some(1_700_000_000));
    }

    #[test]
    fn snapshot_price_within_range() {
        let rng = SeededRandom::new(3);
        for _ in 0..500 {
            let snap = synthetic_snapshot(&rng);
            assert!((50_000.0..60_000.0).contains(&snap.price));
            assert!((45_000.0..50_000.0).contains(&snap.low_24h));
        }
    }
}
