use serde::{Deserialize, Serialize};

use super::{OHLCV, Timestamp, Volume};

/// Domain entity - Candle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub ohlcv: OHLCV,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlcv: OHLCV) -> Self {
        Self { timestamp, ohlcv }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlcv.close > self.ohlcv.open
    }

    pub fn volume_bar(&self) -> VolumeBar {
        VolumeBar {
            timestamp: self.timestamp,
            value: self.ohlcv.volume,
            tint: if self.is_bullish() { VolumeTint::Up } else { VolumeTint::Down },
        }
    }
}

/// Direction of the candle a volume bar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeTint {
    Up,
    Down,
}

/// Domain entity - one histogram bar under the price series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub timestamp: Timestamp,
    pub value: Volume,
    pub tint: VolumeTint,
}

/// Last fetched price state for one symbol. Every field is synthetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: f64,
    pub market_cap: f64,
    pub high_24h: f64,
    pub low_24h: f64,
}

impl MarketSnapshot {
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}
