//! Application layer: signal-backed services the components share.

pub mod alert_simulator;
pub mod dashboard;
pub mod display_mode_service;
pub mod market_data_service;
pub mod notification_service;
pub mod watchlist_service;

pub use alert_simulator::AlertSimulator;
pub use dashboard::DashboardServices;
pub use display_mode_service::DisplayModeService;
pub use market_data_service::MarketDataService;
pub use notification_service::NotificationService;
pub use watchlist_service::WatchlistService;
