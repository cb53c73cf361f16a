//! Chart aggregate: series, palette and the surface lifecycle handle.

pub mod entities;
pub mod handle;
pub mod value_objects;

pub use entities::*;
pub use handle::*;
pub use value_objects::*;
