use serde::Deserialize;

use crate::domain::errors::AppResult;
use crate::domain::market_data::{Symbol, TimeFrame};

/// Tunables for the dashboard. `Default` is what ships; tests shrink the
/// delays through [`DashboardConfig::from_json`] or struct update syntax.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Simulated latency of a market data fetch.
    pub fetch_delay_ms: u32,
    pub notification_ttl_ms: u32,
    pub alert_interval_ms: u32,
    pub alert_probability: f64,
    pub chart_height: u32,
    /// Delay between toggling fullscreen and re-measuring the container.
    pub fullscreen_settle_ms: u32,
    pub default_symbol: String,
    pub default_timeframe: TimeFrame,
    pub watchlist_key: String,
    pub dark_mode_key: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 1_000,
            notification_ttl_ms: 10_000,
            alert_interval_ms: 15_000,
            alert_probability: 0.3,
            chart_height: 500,
            fullscreen_settle_ms: 150,
            default_symbol: "BTCUSDT".to_string(),
            default_timeframe: TimeFrame::OneDay,
            watchlist_key: "watchlist".to_string(),
            dark_mode_key: "darkMode".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Overlay a partial JSON object on top of the defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn default_symbol(&self) -> Symbol {
        Symbol::from(self.default_symbol.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = DashboardConfig::from_json(r#"{ "notification_ttl_ms": 50 }"#).unwrap();
        assert_eq!(cfg.notification_ttl_ms, 50);
        assert_eq!(cfg.fetch_delay_ms, 1_000);
        assert_eq!(cfg.watchlist_key, "watchlist");
    }

    #[test]
    fn timeframe_uses_chart_labels() {
        let cfg = DashboardConfig::from_json(r#"{ "default_timeframe": "4h" }"#).unwrap();
        assert_eq!(cfg.default_timeframe, TimeFrame::FourHours);
    }
}
