use leptos::*;

use crate::application::DashboardServices;
use crate::domain::analysis::filter_symbols;
use crate::domain::market_data::Symbol;

/// Logo, symbol search and the dark-mode switch.
#[component]
pub fn Header(services: DashboardServices, symbol: RwSignal<Symbol>) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (dropdown_open, set_dropdown_open) = create_signal(false);
    let matches = create_memo(move |_| filter_symbols(&query.get()));

    let select = move |picked: Symbol| {
        symbol.set(picked);
        set_query.set(String::new());
        set_dropdown_open.set(false);
    };

    view! {
        <header class="header">
            <div class="brand">
                <div class="brand-logo">"📈"</div>
                <div>
                    <h1>"TradingPro"</h1>
                    <p class="brand-subtitle">"Professional chart analysis"</p>
                </div>
            </div>

            <div class="header-actions">
                <div class="symbol-search">
                    <input
                        type="text"
                        placeholder="Search symbol..."
                        prop:value=query
                        on:input=move |ev| {
                            set_query.set(event_target_value(&ev));
                            set_dropdown_open.set(true);
                        }
                        on:focus=move |_| set_dropdown_open.set(true)
                    />
                    <Show when=move || dropdown_open.get()>
                        <div class="symbol-dropdown">
                            <For
                                each=move || matches.get()
                                key=|candidate: &Symbol| candidate.clone()
                                children=move |candidate: Symbol| {
                                    let label = candidate.to_string();
                                    let current = candidate.clone();
                                    view! {
                                        <button
                                            class="symbol-option"
                                            class:selected=move || symbol.with(|s| *s == current)
                                            on:click=move |_| select(candidate.clone())
                                        >
                                            {label}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>

                <div class="current-symbol">{move || symbol.get().to_string()}</div>

                <button
                    class="icon-btn"
                    title="Toggle dark mode"
                    on:click=move |_| services.display.toggle()
                >
                    {move || if services.display.is_dark() { "☀️" } else { "🌙" }}
                </button>
            </div>
        </header>
    }
}
