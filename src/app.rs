use leptos::*;
use strum::{EnumIter, IntoEnumIterator};

use crate::application::DashboardServices;
use crate::config::DashboardConfig;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Symbol;
use crate::log_info;
use crate::presentation::{
    AlertSystem, FundamentalAnalysis, Header, MarketOverview, TechnicalAnalysis, TradingChart,
    Watchlist,
};

/// Analysis panel shown under the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter)]
pub enum Tab {
    #[default]
    Technical,
    Fundamental,
    Overview,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Technical => "📊 Technical",
            Tab::Fundamental => "📈 Fundamental",
            Tab::Overview => "🌐 Overview",
        }
    }
}

const STYLES: &str = r#"
:root {
    --bg: #f3f4f6;
    --panel: #ffffff;
    --border: #e5e7eb;
    --text: #111827;
    --muted: #6b7280;
    --primary: #2563eb;
    --up: #16a34a;
    --down: #dc2626;
}

:root.dark {
    --bg: #111827;
    --panel: #1f2937;
    --border: #374151;
    --text: #f9fafb;
    --muted: #9ca3af;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    transition: background 0.2s, color 0.2s;
}

.header {
    position: sticky;
    top: 0;
    z-index: 50;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 12px 24px;
    background: var(--panel);
    border-bottom: 1px solid var(--border);
}

.brand { display: flex; align-items: center; gap: 12px; }
.brand h1 { margin: 0; font-size: 20px; }
.brand-logo {
    width: 40px; height: 40px; border-radius: 8px;
    display: flex; align-items: center; justify-content: center;
    background: linear-gradient(135deg, #3b82f6, #2563eb);
}
.brand-subtitle { margin: 0; font-size: 13px; color: var(--muted); }

.header-actions { display: flex; align-items: center; gap: 12px; }
.symbol-search { position: relative; }
.symbol-search input, .watchlist-form input {
    padding: 8px 12px;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--panel);
    color: var(--text);
}
.symbol-search input { width: 240px; }
.symbol-dropdown {
    position: absolute; top: 100%; left: 0; right: 0; margin-top: 4px;
    max-height: 240px; overflow-y: auto;
    background: var(--panel); border: 1px solid var(--border); border-radius: 8px;
    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
}
.symbol-option {
    display: block; width: 100%; text-align: left; padding: 8px 14px;
    border: none; background: transparent; color: var(--text); cursor: pointer;
}
.symbol-option:hover, .symbol-option.selected { background: rgba(37, 99, 235, 0.1); color: var(--primary); }
.current-symbol {
    padding: 8px 14px; border-radius: 8px; font-weight: 600;
    color: var(--primary); border: 1px solid rgba(37, 99, 235, 0.3);
}

.icon-btn {
    border: none; background: transparent; color: var(--muted);
    cursor: pointer; padding: 6px; border-radius: 6px; font-size: 16px;
}
.icon-btn:hover { background: rgba(127, 127, 127, 0.15); color: var(--text); }
.btn {
    padding: 8px 12px; border-radius: 6px; border: 1px solid var(--border);
    background: var(--panel); color: var(--text); cursor: pointer;
}
.btn.primary { background: var(--primary); color: white; border-color: var(--primary); }

.layout { display: flex; }
.sidebar {
    position: relative; flex-shrink: 0; width: 320px;
    min-height: calc(100vh - 65px);
    background: var(--panel); border-right: 1px solid var(--border);
    transition: width 0.3s ease-in-out;
}
.sidebar.collapsed { width: 60px; }
.sidebar-inner { padding: 16px; }
.sidebar-toggle {
    position: absolute; top: 16px; right: -12px; z-index: 10;
    width: 24px; height: 24px; border-radius: 50%;
    border: 1px solid var(--border); background: var(--panel); color: var(--muted); cursor: pointer;
}
.sidebar-star { text-align: center; padding-top: 32px; font-size: 22px; }

.main { flex: 1; min-width: 0; padding: 24px; display: flex; flex-direction: column; gap: 24px; }

.panel {
    background: var(--panel); border: 1px solid var(--border);
    border-radius: 10px; padding: 16px;
}
.panel-header { display: flex; justify-content: space-between; align-items: center; gap: 12px; }
.panel h2, .panel h3, .panel h4 { margin: 0 0 8px 0; }
.muted { color: var(--muted); }
.small { font-size: 12px; }
.positive { color: var(--up); }
.negative { color: var(--down); }

.chart-card {
    background: var(--panel); border: 1px solid var(--border); border-radius: 10px; overflow: hidden;
}
.chart-card.fullscreen {
    position: fixed; inset: 0; z-index: 100; border-radius: 0;
    display: flex; flex-direction: column;
}
.chart-header {
    display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 12px;
    padding: 16px; border-bottom: 1px solid var(--border);
}
.chart-title { display: flex; align-items: baseline; gap: 16px; flex-wrap: wrap; }
.chart-title h2 { margin: 0; font-size: 18px; }
.chart-price { font-size: 24px; font-weight: 700; font-family: 'Courier New', monospace; }
.chart-change.positive { color: var(--up); }
.chart-change.negative { color: var(--down); }
.chart-stats { font-size: 12px; }
.chart-controls { display: flex; align-items: center; gap: 8px; }
.live-badge { display: flex; align-items: center; gap: 6px; color: var(--muted); font-size: 13px; }
.live-dot { width: 8px; height: 8px; border-radius: 50%; background: var(--up); animation: pulse 1.5s infinite; }
.chart-body { position: relative; flex: 1; }
.chart-canvas-host { position: relative; width: 100%; }
.chart-canvas { position: absolute; top: 0; left: 0; display: block; }
.chart-loading {
    position: absolute; inset: 0; z-index: 10;
    display: flex; align-items: center; justify-content: center; gap: 12px;
    background: rgba(255, 255, 255, 0.8); backdrop-filter: blur(3px); color: #4b5563;
}
:root.dark .chart-loading { background: rgba(17, 24, 39, 0.8); color: #d1d5db; }
.spinner {
    width: 22px; height: 22px; border-radius: 50%;
    border: 2px solid var(--primary); border-top-color: transparent;
    animation: spin 0.8s linear infinite;
}

.timeframe-selector { display: flex; gap: 2px; padding: 2px; border-radius: 8px; background: var(--bg); }
.timeframe-btn {
    border: none; background: transparent; color: var(--muted);
    padding: 4px 10px; border-radius: 6px; cursor: pointer; font-size: 13px;
}
.timeframe-btn.active { background: var(--primary); color: white; }

.tabs {
    display: flex; gap: 4px; padding: 4px; border-radius: 10px;
    background: var(--panel); border: 1px solid var(--border);
}
.tab {
    flex: 1; padding: 12px; border: none; border-radius: 6px;
    background: transparent; color: var(--muted); font-weight: 500; cursor: pointer;
}
.tab.active { background: var(--primary); color: white; }

.analysis { display: flex; flex-direction: column; gap: 16px; }
.signal-badge { padding: 4px 12px; border-radius: 999px; font-size: 13px; font-weight: 500; border: 1px solid; }
.signal-badge.buy { color: var(--up); border-color: var(--up); }
.signal-badge.sell { color: var(--down); border-color: var(--down); }
.signal-badge.neutral { color: var(--muted); border-color: var(--muted); }
.tally { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin: 16px 0; text-align: center; }
.tally-cell { padding: 12px; border-radius: 8px; border: 1px solid var(--border); }
.tally-cell.buy { color: var(--up); }
.tally-cell.sell { color: var(--down); }
.tally-count { font-size: 24px; font-weight: 700; }
.recommendation { padding: 12px; border-radius: 8px; background: rgba(37, 99, 235, 0.08); }
.indicator-grid, .metric-grid, .sentiment-grid {
    display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;
}
.indicator-value, .metric-value { font-size: 20px; font-weight: 600; }
.levels { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
.level-row { display: flex; justify-content: space-between; padding: 6px 0; border-bottom: 1px solid var(--border); }
.news-item { border-left: 3px solid var(--muted); padding: 8px 12px; margin-bottom: 8px; }
.news-item.positive { border-color: var(--up); }
.news-item.negative { border-color: var(--down); }
.calendar-row { display: grid; grid-template-columns: 100px 1fr auto; gap: 12px; padding: 6px 0; }
.impact { font-size: 12px; color: #b45309; }
.impact.high { color: var(--down); font-weight: 600; }
.overview-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; }
.gauge { height: 10px; border-radius: 5px; background: var(--border); overflow: hidden; margin: 8px 0; }
.gauge-fill { height: 100%; background: linear-gradient(90deg, #ef4444, #f59e0b, #22c55e); }
.overview-cards { display: flex; flex-direction: column; gap: 12px; }
.overview-card { padding: 12px; border-radius: 8px; border: 1px solid var(--border); }
.overview-card.volatility { color: #2563eb; }
.overview-card.trend { color: #7c3aed; }
.crypto-table { width: 100%; border-collapse: collapse; }
.crypto-table th, .crypto-table td { text-align: left; padding: 8px; border-bottom: 1px solid var(--border); }

.watchlist-form { display: flex; gap: 6px; margin: 12px 0; }
.watchlist-form input { flex: 1; min-width: 0; }
.watchlist-empty { text-align: center; padding: 32px 0; color: var(--muted); }
.watchlist-items { display: flex; flex-direction: column; gap: 8px; margin-top: 12px; }
.watchlist-item {
    display: flex; align-items: center; justify-content: space-between; gap: 8px;
    padding: 10px; border: 1px solid var(--border); border-radius: 8px; cursor: pointer;
}
.watchlist-item:hover { background: rgba(127, 127, 127, 0.08); }
.watchlist-item .remove { opacity: 0; }
.watchlist-item:hover .remove { opacity: 1; }
.watchlist-info, .watchlist-quote { display: flex; flex-direction: column; gap: 2px; }
.watchlist-name { font-weight: 500; }

.toast-stack {
    position: fixed; bottom: 16px; right: 16px; z-index: 200;
    display: flex; flex-direction: column; gap: 8px; max-width: 360px;
}
.toast {
    display: flex; align-items: flex-start; gap: 12px; padding: 14px;
    border-radius: 10px; border: 1px solid; box-shadow: 0 8px 20px rgba(0, 0, 0, 0.15);
    animation: slide-in 0.3s ease-out;
}
.toast h4, .toast p { margin: 0 0 4px 0; }
.toast-body { flex: 1; }
.toast-time { font-size: 11px; opacity: 0.75; }
.toast.success { background: #f0fdf4; border-color: #bbf7d0; color: #166534; }
.toast.warning { background: #fefce8; border-color: #fef08a; color: #854d0e; }
.toast.error { background: #fef2f2; border-color: #fecaca; color: #991b1b; }
.toast.info { background: #eff6ff; border-color: #bfdbfe; color: #1e40af; }

@keyframes spin { to { transform: rotate(360deg); } }
@keyframes pulse { 50% { opacity: 0.4; } }
@keyframes slide-in { from { opacity: 0; transform: translateX(300px); } }
"#;

/// Root component. Owns the shared services and the dashboard-wide UI state.
#[component]
pub fn App() -> impl IntoView {
    let services = DashboardServices::browser(DashboardConfig::default());
    let config = services.config();
    let symbol = create_rw_signal(config.default_symbol());
    let timeframe = create_rw_signal(config.default_timeframe);
    let (tab, set_tab) = create_signal(Tab::default());
    let (sidebar_collapsed, set_sidebar_collapsed) = create_signal(false);

    log_info!(
        LogComponent::Presentation("App"),
        "🚀 dashboard ready with {} on {}",
        config.default_symbol,
        config.default_timeframe
    );

    let select_symbol = Callback::new(move |picked: Symbol| symbol.set(picked));

    view! {
        <style>{STYLES}</style>
        <div class="dashboard">
            <Header services=services symbol=symbol />

            <div class="layout">
                <aside class="sidebar" class:collapsed=move || sidebar_collapsed.get()>
                    <button
                        class="sidebar-toggle"
                        on:click=move |_| set_sidebar_collapsed.update(|c| *c = !*c)
                    >
                        {move || if sidebar_collapsed.get() { "›" } else { "‹" }}
                    </button>
                    <div class="sidebar-inner">
                        <Show
                            when=move || !sidebar_collapsed.get()
                            fallback=|| view! { <div class="sidebar-star">"⭐"</div> }
                        >
                            <Watchlist services=services on_select=select_symbol />
                        </Show>
                    </div>
                </aside>

                <main class="main">
                    <TradingChart services=services symbol=symbol timeframe=timeframe />

                    <nav class="tabs">
                        {Tab::iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class="tab"
                                        class:active=move || tab.get() == t
                                        on:click=move |_| set_tab.set(t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    {move || match tab.get() {
                        Tab::Technical => view! { <TechnicalAnalysis symbol=symbol /> }.into_view(),
                        Tab::Fundamental => view! { <FundamentalAnalysis symbol=symbol /> }.into_view(),
                        Tab::Overview => view! { <MarketOverview /> }.into_view(),
                    }}
                </main>
            </div>

            <AlertSystem services=services />
        </div>
    }
}
