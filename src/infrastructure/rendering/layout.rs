use crate::domain::chart::{ChartDimensions, ChartSeries};

/// Pixel geometry for one frame, computed once and shared by every draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub padding: f64,
    pub axis_width: f64,
    pub plot_width: f64,
    pub price_height: f64,
    pub volume_top: f64,
    pub volume_height: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub max_volume: f64,
    pub slot_width: f64,
}

const PADDING: f64 = 12.0;
const AXIS_WIDTH: f64 = 72.0;
const TIME_AXIS_HEIGHT: f64 = 22.0;
const VOLUME_SHARE: f64 = 0.2;
const PRICE_MARGIN: f64 = 0.05;
const BODY_RATIO: f64 = 0.7;

impl ChartLayout {
    /// `None` for an empty series or a surface too small to draw on.
    pub fn compute(dims: ChartDimensions, series: &ChartSeries) -> Option<Self> {
        let (low, high) = series.price_range()?;
        let plot_width = dims.width as f64 - PADDING * 2.0 - AXIS_WIDTH;
        let plot_height = dims.height as f64 - PADDING * 2.0 - TIME_AXIS_HEIGHT;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return None;
        }

        let volume_height = plot_height * VOLUME_SHARE;
        let price_height = plot_height - volume_height;
        let span = (high - low).max(f64::EPSILON);
        let margin = span * PRICE_MARGIN;

        Some(Self {
            padding: PADDING,
            axis_width: AXIS_WIDTH,
            plot_width,
            price_height,
            volume_top: PADDING + price_height,
            volume_height,
            min_price: low - margin,
            max_price: high + margin,
            max_volume: series.max_volume(),
            slot_width: plot_width / series.len() as f64,
        })
    }

    pub fn x_center(&self, index: usize) -> f64 {
        self.padding + (index as f64 + 0.5) * self.slot_width
    }

    pub fn body_width(&self) -> f64 {
        (self.slot_width * BODY_RATIO).max(1.0)
    }

    /// Screen y for a price; y grows downwards.
    pub fn price_y(&self, price: f64) -> f64 {
        let ratio = (self.max_price - price) / (self.max_price - self.min_price);
        self.padding + ratio * self.price_height
    }

    /// `(top, height)` of the volume bar for `volume`.
    pub fn volume_bar(&self, volume: f64) -> (f64, f64) {
        if self.max_volume <= 0.0 {
            return (self.volume_top + self.volume_height, 0.0);
        }
        let height = (volume / self.max_volume).clamp(0.0, 1.0) * self.volume_height;
        (self.volume_top + self.volume_height - height, height)
    }

    pub fn plot_right(&self) -> f64 {
        self.padding + self.plot_width
    }

    pub fn plot_bottom(&self) -> f64 {
        self.volume_top + self.volume_height
    }

    /// Evenly spaced price levels for grid lines and axis labels, top first.
    pub fn price_ticks(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.max_price];
        }
        let step = (self.max_price - self.min_price) / (count - 1) as f64;
        (0..count).map(|i| self.max_price - step * i as f64).collect()
    }
}
