use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::domain::chart::{ChartDimensions, ChartSeries, ChartSurface, ChartTheme};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::VolumeTint;
use crate::infrastructure::describe_js_error;
use crate::time_utils::format_axis_label;
use crate::{log_debug, log_warn};

use super::layout::ChartLayout;

const PRICE_TICKS: usize = 6;
const TIME_LABELS: usize = 6;

/// Canvas 2D chart surface living inside a container element.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    dims: ChartDimensions,
}

impl CanvasSurface {
    /// Create a canvas sized to `container`'s width and append it there.
    pub fn attach(container: &HtmlElement, height: u32) -> AppResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Rendering("document unavailable".to_string()))?;

        let canvas = document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::Rendering("created element is not a canvas".to_string()))?;
        canvas.set_class_name("chart-canvas");

        let context = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("failed to cast to 2D context".to_string()))?;

        container.append_child(&canvas).map_err(js_err)?;

        let dims = Self::measure(container, height);
        canvas.set_width(dims.width);
        canvas.set_height(dims.height);

        log_debug!(
            LogComponent::Infrastructure("CanvasSurface"),
            "attached {}x{} canvas",
            dims.width,
            dims.height
        );

        Ok(Self { canvas, context, dims })
    }

    /// Container width at the requested height.
    pub fn measure(container: &HtmlElement, height: u32) -> ChartDimensions {
        ChartDimensions::new(container.client_width().max(0) as u32, height)
    }

    fn paint(&self, series: &ChartSeries, theme: &ChartTheme) -> AppResult<()> {
        let ctx = &self.context;
        let (width, height) = (self.dims.width as f64, self.dims.height as f64);

        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str(theme.background);
        ctx.fill_rect(0.0, 0.0, width, height);

        let Some(layout) = ChartLayout::compute(self.dims, series) else {
            ctx.set_fill_style_str(theme.text);
            ctx.set_font("14px sans-serif");
            ctx.fill_text("Loading chart data...", 24.0, height / 2.0).map_err(js_err)?;
            return Ok(());
        };

        self.paint_grid(&layout, theme)?;
        self.paint_volume(&layout, series, theme);
        self.paint_candles(&layout, series, theme);
        self.paint_time_axis(&layout, series, theme)?;
        self.paint_last_price(&layout, series, theme)?;

        ctx.set_stroke_style_str(theme.border);
        ctx.set_line_width(1.0);
        ctx.stroke_rect(
            layout.padding,
            layout.padding,
            layout.plot_width,
            layout.plot_bottom() - layout.padding,
        );
        Ok(())
    }

    fn paint_grid(&self, layout: &ChartLayout, theme: &ChartTheme) -> AppResult<()> {
        let ctx = &self.context;
        ctx.set_line_width(1.0);
        ctx.set_font("11px sans-serif");

        for price in layout.price_ticks(PRICE_TICKS) {
            let y = layout.price_y(price).round() + 0.5;
            ctx.set_stroke_style_str(theme.grid);
            ctx.begin_path();
            ctx.move_to(layout.padding, y);
            ctx.line_to(layout.plot_right(), y);
            ctx.stroke();

            ctx.set_fill_style_str(theme.text);
            ctx.fill_text(&format!("{:.2}", price), layout.plot_right() + 6.0, y + 4.0)
                .map_err(js_err)?;
        }
        Ok(())
    }

    fn paint_volume(&self, layout: &ChartLayout, series: &ChartSeries, theme: &ChartTheme) {
        let ctx = &self.context;
        let width = layout.body_width();
        for (i, bar) in series.volume().iter().enumerate() {
            let (top, height) = layout.volume_bar(bar.value.value());
            let color = match bar.tint {
                VolumeTint::Up => theme.volume_up,
                VolumeTint::Down => theme.volume_down,
            };
            ctx.set_fill_style_str(color);
            ctx.fill_rect(layout.x_center(i) - width / 2.0, top, width, height);
        }
    }

    fn paint_candles(&self, layout: &ChartLayout, series: &ChartSeries, theme: &ChartTheme) {
        let ctx = &self.context;
        let body_width = layout.body_width();
        ctx.set_line_width(1.0);

        for (i, candle) in series.candles().iter().enumerate() {
            let x = layout.x_center(i).round() + 0.5;
            let color = if candle.is_bullish() { theme.up } else { theme.down };
            let open_y = layout.price_y(candle.ohlcv.open.value());
            let close_y = layout.price_y(candle.ohlcv.close.value());

            ctx.set_stroke_style_str(color);
            ctx.begin_path();
            ctx.move_to(x, layout.price_y(candle.ohlcv.high.value()));
            ctx.line_to(x, layout.price_y(candle.ohlcv.low.value()));
            ctx.stroke();

            let top = open_y.min(close_y);
            let body = (open_y - close_y).abs().max(1.0);
            ctx.set_fill_style_str(color);
            ctx.fill_rect(x - body_width / 2.0, top, body_width, body);
        }
    }

    fn paint_time_axis(
        &self,
        layout: &ChartLayout,
        series: &ChartSeries,
        theme: &ChartTheme,
    ) -> AppResult<()> {
        let ctx = &self.context;
        let candles = series.candles();
        let stride = (candles.len() / TIME_LABELS).max(1);
        ctx.set_fill_style_str(theme.text);
        ctx.set_font("11px sans-serif");
        ctx.set_text_align("center");

        for (i, candle) in candles.iter().enumerate().step_by(stride) {
            let label = format_axis_label(candle.timestamp.value(), series.timeframe);
            ctx.fill_text(&label, layout.x_center(i), layout.plot_bottom() + 16.0)
                .map_err(js_err)?;
        }
        ctx.set_text_align("start");
        Ok(())
    }

    fn paint_last_price(
        &self,
        layout: &ChartLayout,
        series: &ChartSeries,
        theme: &ChartTheme,
    ) -> AppResult<()> {
        let Some(latest) = series.latest() else {
            return Ok(());
        };
        let ctx = &self.context;
        let price = latest.ohlcv.close.value();
        let y = layout.price_y(price);

        ctx.set_stroke_style_str(theme.last_price);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(layout.padding, y);
        ctx.line_to(layout.plot_right(), y);
        ctx.stroke();

        ctx.set_fill_style_str(theme.last_price);
        ctx.fill_rect(layout.plot_right() + 2.0, y - 9.0, layout.axis_width - 4.0, 18.0);
        ctx.set_fill_style_str(theme.background);
        ctx.set_font("bold 11px sans-serif");
        ctx.fill_text(&format!("{:.2}", price), layout.plot_right() + 6.0, y + 4.0)
            .map_err(js_err)?;
        Ok(())
    }
}

impl ChartSurface for CanvasSurface {
    fn dimensions(&self) -> ChartDimensions {
        self.dims
    }

    fn resize(&mut self, dims: ChartDimensions) -> AppResult<()> {
        self.canvas.set_width(dims.width);
        self.canvas.set_height(dims.height);
        self.dims = dims;
        Ok(())
    }

    fn draw(&mut self, series: &ChartSeries, theme: &ChartTheme) -> AppResult<()> {
        if self.dims.is_empty() {
            log_warn!(LogComponent::Infrastructure("CanvasSurface"), "skipping draw on empty canvas");
            return Ok(());
        }
        self.paint(series, theme)
    }

    fn release(&mut self) {
        self.canvas.remove();
    }
}

fn js_err(value: wasm_bindgen::JsValue) -> AppError {
    AppError::Rendering(describe_js_error(&value))
}
