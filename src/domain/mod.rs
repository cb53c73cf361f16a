//! Domain layer: dashboard entities, value objects and pure services.
//!
//! Nothing in here touches the browser, so all of it runs under plain
//! `cargo test`.

pub mod analysis;
pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod notifications;
pub mod random;
pub mod watchlist;
