use crate::domain::market_data::{Candle, Symbol, TimeFrame, VolumeBar};

/// Both series the chart shows, always replaced together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub symbol: Option<Symbol>,
    pub timeframe: TimeFrame,
    candles: Vec<Candle>,
    volume: Vec<VolumeBar>,
}

impl ChartSeries {
    /// Derive the volume histogram from the candles so both stay aligned.
    pub fn from_candles(symbol: Symbol, timeframe: TimeFrame, candles: Vec<Candle>) -> Self {
        let volume = candles.iter().map(Candle::volume_bar).collect();
        Self { symbol: Some(symbol), timeframe, candles, volume }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn volume(&self) -> &[VolumeBar] {
        &self.volume
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// `(min low, max high)` across the series.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let first = self.candles.first()?;
        let init = (first.ohlcv.low.value(), first.ohlcv.high.value());
        Some(self.candles.iter().fold(init, |(lo, hi), c| {
            (lo.min(c.ohlcv.low.value()), hi.max(c.ohlcv.high.value()))
        }))
    }

    pub fn max_volume(&self) -> f64 {
        self.volume.iter().map(|v| v.value.value()).fold(0.0, f64::max)
    }
}
