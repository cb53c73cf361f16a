use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

use super::{ChartDimensions, ChartSeries, ChartTheme};

/// Something the chart can be drawn onto.
pub trait ChartSurface {
    fn dimensions(&self) -> ChartDimensions;
    fn resize(&mut self, dims: ChartDimensions) -> AppResult<()>;
    fn draw(&mut self, series: &ChartSeries, theme: &ChartTheme) -> AppResult<()>;
    /// Detach from the page. Called at most once.
    fn release(&mut self);
}

/// Owns a chart surface for the lifetime of a chart view.
///
/// The surface is released by [`ChartHandle::close`] or, failing that, on
/// drop. Every operation after close is rejected.
pub struct ChartHandle<S: ChartSurface> {
    surface: Option<S>,
    series: ChartSeries,
    theme: ChartTheme,
}

impl<S: ChartSurface> ChartHandle<S> {
    /// Take ownership of `surface` and paint the empty chart.
    pub fn open(surface: S, theme: ChartTheme) -> AppResult<Self> {
        let mut handle = Self { surface: Some(surface), series: ChartSeries::default(), theme };
        handle.redraw()?;
        log_debug!(LogComponent::Domain("ChartHandle"), "chart surface opened");
        Ok(handle)
    }

    /// Replace both series wholesale and repaint.
    pub fn update(&mut self, series: ChartSeries) -> AppResult<()> {
        self.ensure_open()?;
        self.series = series;
        self.redraw()
    }

    pub fn resize(&mut self, dims: ChartDimensions) -> AppResult<()> {
        let surface = self.surface.as_mut().ok_or_else(closed)?;
        if dims.is_empty() || surface.dimensions() == dims {
            return Ok(());
        }
        log_trace!(
            LogComponent::Domain("ChartHandle"),
            "resize to {}x{}",
            dims.width,
            dims.height
        );
        surface.resize(dims)?;
        self.redraw()
    }

    pub fn set_theme(&mut self, theme: ChartTheme) -> AppResult<()> {
        self.ensure_open()?;
        if self.theme == theme {
            return Ok(());
        }
        self.theme = theme;
        self.redraw()
    }

    /// Release the surface. Safe to call any number of times.
    pub fn close(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.release();
            log_debug!(LogComponent::Domain("ChartHandle"), "chart surface released");
        }
    }

    pub fn is_open(&self) -> bool {
        self.surface.is_some()
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    fn ensure_open(&self) -> AppResult<()> {
        if self.surface.is_some() { Ok(()) } else { Err(closed()) }
    }

    fn redraw(&mut self) -> AppResult<()> {
        let surface = self.surface.as_mut().ok_or_else(closed)?;
        surface.draw(&self.series, &self.theme)
    }
}

impl<S: ChartSurface> Drop for ChartHandle<S> {
    fn drop(&mut self) {
        self.close();
    }
}

fn closed() -> AppError {
    AppError::Rendering("chart handle is closed".to_string())
}
