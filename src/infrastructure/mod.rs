//! Browser adapters: console logging, storage, the synthetic feed and the
//! canvas chart surface.

pub mod feed;
pub mod rendering;
pub mod services;
pub mod storage;

pub use feed::SyntheticMarketFeed;
pub use services::{BrowserRandom, BrowserTimeProvider, ConsoleLogger};
pub use storage::{KeyValueStore, LocalStorage, MemoryStorage, PersistentSlot};

/// Render a `JsValue` thrown by a browser API into something loggable.
pub fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
