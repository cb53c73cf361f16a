use leptos::*;

use crate::application::DashboardServices;
use crate::domain::analysis::known_quote;
use crate::domain::market_data::Symbol;
use crate::domain::watchlist::WatchlistEntry;

use super::format::{format_percent, format_price, trend_class};

/// Row figures for a tracked symbol: static quote first, then whatever the
/// cache holds, then zeros.
fn row_figures(services: DashboardServices, symbol: &Symbol) -> (String, f64, f64) {
    if let Some(quote) = known_quote(symbol) {
        return (quote.name.to_string(), quote.price, quote.change_percent);
    }
    let name = symbol.to_string();
    match services.market.snapshot(symbol) {
        Some(snapshot) => (name, snapshot.price, snapshot.change_percent),
        None => (name, 0.0, 0.0),
    }
}

#[component]
pub fn Watchlist(services: DashboardServices, on_select: Callback<Symbol>) -> impl IntoView {
    let (adding, set_adding) = create_signal(false);
    let (draft, set_draft) = create_signal(String::new());

    let submit = move || {
        if services.watchlist.add(&draft.get_untracked()) {
            set_draft.set(String::new());
            set_adding.set(false);
        }
    };

    view! {
        <div class="panel watchlist">
            <div class="panel-header">
                <h3>"⭐ Watchlist"</h3>
                <button class="icon-btn" title="Add symbol" on:click=move |_| set_adding.set(true)>
                    "+"
                </button>
            </div>

            <Show when=move || adding.get()>
                <div class="watchlist-form">
                    <input
                        type="text"
                        placeholder="Symbol (e.g., BTCUSDT)"
                        prop:value=draft
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <button class="btn primary" on:click=move |_| submit()>"Add"</button>
                    <button class="btn" on:click=move |_| set_adding.set(false)>"Cancel"</button>
                </div>
            </Show>

            <Show
                when=move || !services.watchlist.is_empty()
                fallback=|| {
                    view! {
                        <div class="watchlist-empty">
                            <p>"Your watchlist is empty"</p>
                            <p class="muted">"Add symbols to track your favorite assets"</p>
                        </div>
                    }
                }
            >
                <div class="watchlist-items">
                    <For
                        each=move || services.watchlist.entries()
                        key=|entry: &WatchlistEntry| entry.symbol.clone()
                        children=move |entry: WatchlistEntry| {
                            let symbol = entry.symbol;
                            let selected = symbol.clone();
                            let removed = symbol.clone();
                            let figures = {
                                let symbol = symbol.clone();
                                move || row_figures(services, &symbol)
                            };
                            let name = {
                                let figures = figures.clone();
                                move || figures().0
                            };
                            let price = {
                                let figures = figures.clone();
                                move || format!("${}", format_price(figures().1))
                            };
                            let trend = {
                                let figures = figures.clone();
                                move || trend_class(figures().2)
                            };
                            let percent = move || format_percent(figures().2);
                            let ticker = symbol.to_string();
                            view! {
                                <div class="watchlist-item" on:click=move |_| on_select.call(selected.clone())>
                                    <div class="watchlist-info">
                                        <span class="watchlist-name">{name}</span>
                                        <span class="muted">{ticker}</span>
                                    </div>
                                    <div class="watchlist-quote">
                                        <span>{price}</span>
                                        <span class=trend>{percent}</span>
                                    </div>
                                    <button
                                        class="icon-btn remove"
                                        title="Remove"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            services.watchlist.remove(&removed);
                                        }
                                    >
                                        "🗑"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
