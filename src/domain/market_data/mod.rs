//! Market data aggregate: value objects, candles, snapshots and the cache.

pub mod cache;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use cache::*;
pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
