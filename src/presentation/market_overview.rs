use leptos::*;

use crate::domain::analysis::{FEAR_GREED, MARKET_STATS, TOP_CRYPTOS, TOP_MOVERS};

use super::format::{format_change, format_percent, format_price, trend_class};

#[component]
pub fn MarketOverview() -> impl IntoView {
    view! {
        <div class="analysis">
            <div class="metric-grid">
                {MARKET_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="panel metric">
                                <div class="muted">{stat.label}</div>
                                <div class="metric-value">{stat.value}</div>
                                <div class=trend_class(stat.change)>{format_percent(stat.change)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="panel overview-grid">
                <div class="fear-greed">
                    <h3>"Fear & Greed Index"</h3>
                    <div class="gauge">
                        <div class="gauge-fill" style:width=format!("{}%", FEAR_GREED.score)></div>
                    </div>
                    <div class="metric-value">{FEAR_GREED.score} " " {FEAR_GREED.label}</div>
                    <p class="muted small">{FEAR_GREED.description}</p>
                </div>

                <div class="overview-cards">
                    <div class="overview-card volatility">
                        <div>"⚡ Volatility"</div>
                        <div class="metric-value">"Medium"</div>
                        <div class="small">"Crypto VIX: 45.2"</div>
                    </div>
                    <div class="overview-card trend">
                        <div>"🌐 Global trend"</div>
                        <div class="metric-value">"Bullish"</div>
                        <div class="small">"7 day trend: +12.5%"</div>
                    </div>
                </div>

                <div class="movers">
                    <h4>"Top movers"</h4>
                    {TOP_MOVERS
                        .iter()
                        .map(|mover| {
                            view! {
                                <div class="level-row">
                                    <span>{mover.ticker}</span>
                                    <span class=trend_class(mover.change)>{format_percent(mover.change)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="panel">
                <h3>"Top 5 cryptocurrencies"</h3>
                <table class="crypto-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"Price"</th>
                            <th>"24h"</th>
                            <th>"Volume"</th>
                            <th>"Market Cap"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {TOP_CRYPTOS
                            .iter()
                            .enumerate()
                            .map(|(rank, quote)| {
                                view! {
                                    <tr>
                                        <td>{rank + 1}</td>
                                        <td>
                                            <strong>{quote.name}</strong>
                                            " "
                                            <span class="muted">{quote.ticker}</span>
                                        </td>
                                        <td>{format!("${}", format_price(quote.price))}</td>
                                        <td class=trend_class(quote.change)>
                                            {format_change(quote.change)} " (" {format_percent(quote.change_percent)} ")"
                                        </td>
                                        <td>{quote.volume}</td>
                                        <td>{quote.market_cap}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
