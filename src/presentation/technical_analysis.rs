use leptos::*;

use crate::domain::analysis::{INDICATORS, RESISTANCE_LEVELS, SUPPORT_LEVELS, Signal, SignalTally};
use crate::domain::market_data::Symbol;

use super::format::format_price;

fn signal_icon(signal: Signal) -> &'static str {
    match signal {
        Signal::Buy => "▲",
        Signal::Sell => "▼",
        Signal::Neutral => "–",
    }
}

#[component]
pub fn TechnicalAnalysis(symbol: RwSignal<Symbol>) -> impl IntoView {
    let tally = SignalTally::of(&INDICATORS);
    let overall = tally.overall();

    view! {
        <div class="analysis">
            <section class="panel">
                <div class="panel-header">
                    <h2>{move || format!("📊 Technical analysis {}", symbol.get())}</h2>
                    <span class=format!("signal-badge {}", overall.as_ref())>
                        {signal_icon(overall)} " " {overall.verdict()}
                    </span>
                </div>

                <div class="tally">
                    <div class="tally-cell buy">
                        <div class="tally-count">{tally.buy}</div>
                        <div>"Buy signals"</div>
                    </div>
                    <div class="tally-cell neutral">
                        <div class="tally-count">{tally.neutral}</div>
                        <div>"Neutral"</div>
                    </div>
                    <div class="tally-cell sell">
                        <div class="tally-count">{tally.sell}</div>
                        <div>"Sell signals"</div>
                    </div>
                </div>

                <div class="recommendation">
                    <h3>"Recommendation"</h3>
                    <p>{overall.recommendation()}</p>
                </div>
            </section>

            <div class="indicator-grid">
                {INDICATORS
                    .iter()
                    .map(|indicator| {
                        view! {
                            <div class="panel indicator">
                                <div class="panel-header">
                                    <h3>{indicator.name}</h3>
                                    <span class=format!("signal-badge {}", indicator.signal.as_ref())>
                                        {signal_icon(indicator.signal)} " " {indicator.signal.action()}
                                    </span>
                                </div>
                                <div class="indicator-value">{format_price(indicator.value)}</div>
                                <p class="muted">{indicator.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="panel">
                <h3>"🎯 Support & Resistance"</h3>
                <div class="levels">
                    <div>
                        <h4 class="negative">"Resistance"</h4>
                        {RESISTANCE_LEVELS
                            .iter()
                            .enumerate()
                            .map(|(i, level)| {
                                view! {
                                    <div class="level-row">
                                        <span>{format!("R{}", i + 1)}</span>
                                        <span>{format!("${}", format_price(*level))}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div>
                        <h4 class="positive">"Support"</h4>
                        {SUPPORT_LEVELS
                            .iter()
                            .enumerate()
                            .map(|(i, level)| {
                                view! {
                                    <div class="level-row">
                                        <span>{format!("S{}", i + 1)}</span>
                                        <span>{format!("${}", format_price(*level))}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}
