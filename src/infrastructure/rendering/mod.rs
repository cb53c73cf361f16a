pub mod canvas_surface;
pub mod layout;

pub use canvas_surface::CanvasSurface;
pub use layout::ChartLayout;
