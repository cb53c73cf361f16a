//! Leptos components. Every component receives the services it needs as props.

pub mod alert_system;
pub mod format;
pub mod fundamental_analysis;
pub mod header;
pub mod market_overview;
pub mod technical_analysis;
pub mod timeframe_selector;
pub mod trading_chart;
pub mod watchlist;

pub use alert_system::AlertSystem;
pub use fundamental_analysis::FundamentalAnalysis;
pub use header::Header;
pub use market_overview::MarketOverview;
pub use technical_analysis::TechnicalAnalysis;
pub use timeframe_selector::TimeframeSelector;
pub use trading_chart::TradingChart;
pub use watchlist::Watchlist;
