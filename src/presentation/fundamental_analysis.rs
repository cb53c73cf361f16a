use leptos::*;

use crate::domain::analysis::{ECONOMIC_CALENDAR, FUNDAMENTAL_METRICS, NEWS, SENTIMENT_SCORES};
use crate::domain::market_data::Symbol;

use super::format::{format_percent, trend_class};

#[component]
pub fn FundamentalAnalysis(symbol: RwSignal<Symbol>) -> impl IntoView {
    view! {
        <div class="analysis">
            <section class="panel">
                <h2>{move || format!("📈 Fundamental analysis {}", symbol.get())}</h2>
                <div class="metric-grid">
                    {FUNDAMENTAL_METRICS
                        .iter()
                        .map(|metric| {
                            view! {
                                <div class="metric">
                                    <div class="muted">{metric.label}</div>
                                    <div class="metric-value">{metric.value}</div>
                                    <div class=trend_class(metric.change)>{format_percent(metric.change)}</div>
                                    <p class="muted small">{metric.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="panel">
                <h3>"Market sentiment"</h3>
                <div class="sentiment-grid">
                    {SENTIMENT_SCORES
                        .iter()
                        .map(|score| {
                            view! {
                                <div class="sentiment">
                                    <div class="metric-value">{score.value}</div>
                                    <div>{score.label}</div>
                                    <div class="muted small">{score.caption}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="panel">
                <h3>"📰 Latest news"</h3>
                {NEWS
                    .iter()
                    .map(|item| {
                        view! {
                            <article class=format!("news-item {}", item.impact.as_ref())>
                                <div class="panel-header">
                                    <h4>{item.title}</h4>
                                    <span class="muted small">{item.age}</span>
                                </div>
                                <p>{item.summary}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="panel">
                <h3>"📅 Economic calendar"</h3>
                {ECONOMIC_CALENDAR
                    .iter()
                    .map(|event| {
                        view! {
                            <div class="calendar-row">
                                <span class="muted">{event.when}</span>
                                <span>{event.event}</span>
                                <span class="impact" class:high=event.high_impact>
                                    {if event.high_impact { "High" } else { "Medium" }}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
