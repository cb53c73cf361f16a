use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use leptos::html::Div;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::application::DashboardServices;
use crate::domain::chart::{ChartDimensions, ChartHandle, ChartSeries};
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::services::SeriesGenerator;
use crate::domain::market_data::{Symbol, TimeFrame};
use crate::domain::random::RandomSource;
use crate::infrastructure::rendering::CanvasSurface;
use crate::time_utils::now_secs;
use crate::{log_debug, log_error, log_warn};

use super::format::{format_change, format_compact_usd, format_percent, format_price, trend_class};
use super::TimeframeSelector;

type SharedChart = Rc<RefCell<Option<ChartHandle<CanvasSurface>>>>;

/// Candles plus volume for the selected symbol, with its price header.
///
/// The chart handle is opened once per mount. Symbol and timeframe changes
/// swap the series, resizes and fullscreen only resize the surface.
#[component]
pub fn TradingChart(
    services: DashboardServices,
    symbol: RwSignal<Symbol>,
    timeframe: RwSignal<TimeFrame>,
) -> impl IntoView {
    let container_ref = create_node_ref::<Div>();
    let (fullscreen, set_fullscreen) = create_signal(false);
    let config = services.config();
    let base_height = config.chart_height;
    let settle_ms = config.fullscreen_settle_ms;
    let chart: SharedChart = Rc::default();

    // Open the handle as soon as the container is in the DOM.
    {
        let chart = Rc::clone(&chart);
        create_effect(move |_| {
            let Some(container) = container_ref.get() else {
                return;
            };
            if chart.borrow().is_some() {
                return;
            }
            let theme = untrack(|| services.display.theme());
            let opened = CanvasSurface::attach(&container, base_height)
                .and_then(|surface| ChartHandle::open(surface, theme));
            match opened {
                Ok(handle) => {
                    *chart.borrow_mut() = Some(handle);
                    let series = synthesize(
                        services.rng().as_ref(),
                        symbol.get_untracked(),
                        timeframe.get_untracked(),
                    );
                    with_chart(&chart, |handle| handle.update(series));
                    log_debug!(LogComponent::Presentation("TradingChart"), "🎨 chart mounted");
                }
                Err(err) => {
                    log_error!(LogComponent::Presentation("TradingChart"), "chart init failed: {}", err);
                }
            }
        });
    }

    // Symbol or timeframe change: new series; a new symbol also refetches.
    {
        let chart = Rc::clone(&chart);
        create_effect(move |previous: Option<Symbol>| {
            let current = symbol.get();
            let tf = timeframe.get();
            if previous.as_ref() != Some(&current) {
                services.market.refresh(current.clone());
            }
            let series = synthesize(services.rng().as_ref(), current.clone(), tf);
            with_chart(&chart, |handle| handle.update(series));
            current
        });
    }

    {
        let chart = Rc::clone(&chart);
        create_effect(move |_| {
            let theme = services.display.theme();
            with_chart(&chart, |handle| handle.set_theme(theme));
        });
    }

    let resize_listener = web_sys::window().map(|window| {
        let chart = Rc::clone(&chart);
        EventListener::new(&window, "resize", move |_| {
            remeasure(&chart, container_ref, fullscreen.get_untracked(), base_height);
        })
    });

    {
        let chart = Rc::clone(&chart);
        on_cleanup(move || {
            drop(resize_listener);
            if let Some(mut handle) = chart.borrow_mut().take() {
                handle.close();
            }
        });
    }

    let toggle_fullscreen = {
        let chart = Rc::clone(&chart);
        move |_: ev::MouseEvent| {
            set_fullscreen.update(|on| *on = !*on);
            let chart = Rc::clone(&chart);
            // wait for the layout class to take effect before measuring
            Timeout::new(settle_ms, move || {
                remeasure(&chart, container_ref, fullscreen.get_untracked(), base_height);
            })
            .forget();
        }
    };

    let snapshot = move || symbol.with(|s| services.market.snapshot(s));
    let change = move || snapshot().map(|s| s.change).unwrap_or_default();
    let change_percent = move || snapshot().map(|s| s.change_percent).unwrap_or_default();

    view! {
        <div class="chart-card" class:fullscreen=move || fullscreen.get()>
            <div class="chart-header">
                <div class="chart-title">
                    <h2>{move || symbol.get().to_string()}</h2>
                    <div class="chart-price">
                        {move || format!("${}", format_price(symbol.with(|s| services.market.price(s))))}
                    </div>
                    <div class=move || format!("chart-change {}", trend_class(change()))>
                        {move || format!("{} ({})", format_change(change()), format_percent(change_percent()))}
                    </div>
                    <div class="chart-stats muted">
                        {move || {
                            snapshot()
                                .map(|s| {
                                    format!(
                                        "Vol {} · MCap {} · H {} · L {}",
                                        format_compact_usd(s.volume),
                                        format_compact_usd(s.market_cap),
                                        format_price(s.high_24h),
                                        format_price(s.low_24h),
                                    )
                                })
                                .unwrap_or_default()
                        }}
                    </div>
                </div>
                <div class="chart-controls">
                    <TimeframeSelector timeframe=timeframe />
                    <button class="icon-btn" title="Toggle fullscreen" on:click=toggle_fullscreen>
                        {move || if fullscreen.get() { "🗗" } else { "⛶" }}
                    </button>
                    <span class="live-badge">
                        <span class="live-dot"></span>
                        "Live"
                    </span>
                </div>
            </div>
            <div class="chart-body">
                <Show when=move || services.market.is_loading()>
                    <div class="chart-loading">
                        <div class="spinner"></div>
                        <span>"Loading chart data..."</span>
                    </div>
                </Show>
                <div
                    class="chart-canvas-host"
                    node_ref=container_ref
                    style:height=move || {
                        if fullscreen.get() { "100%".to_string() } else { format!("{}px", base_height) }
                    }
                />
            </div>
        </div>
    }
}

fn synthesize(rng: &dyn RandomSource, symbol: Symbol, timeframe: TimeFrame) -> ChartSeries {
    let candles = SeriesGenerator::new(rng).generate(timeframe, now_secs());
    ChartSeries::from_candles(symbol, timeframe, candles)
}

fn with_chart(
    chart: &SharedChart,
    op: impl FnOnce(&mut ChartHandle<CanvasSurface>) -> AppResult<()>,
) {
    let Ok(mut slot) = chart.try_borrow_mut() else {
        log_warn!(LogComponent::Presentation("TradingChart"), "chart busy, skipping update");
        return;
    };
    if let Some(handle) = slot.as_mut() {
        if let Err(err) = op(handle) {
            log_warn!(LogComponent::Presentation("TradingChart"), "chart update failed: {}", err);
        }
    }
}

fn remeasure(chart: &SharedChart, container_ref: NodeRef<Div>, fullscreen: bool, base_height: u32) {
    let Some(container) = container_ref.get_untracked() else {
        return;
    };
    let height = if fullscreen {
        (container.client_height().max(0) as u32).max(base_height)
    } else {
        base_height
    };
    let dims: ChartDimensions = CanvasSurface::measure(&container, height);
    with_chart(chart, |handle| handle.resize(dims));
}
