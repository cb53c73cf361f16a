use leptos::*;
use strum::IntoEnumIterator;

use crate::domain::market_data::TimeFrame;

#[component]
pub fn TimeframeSelector(timeframe: RwSignal<TimeFrame>) -> impl IntoView {
    view! {
        <div class="timeframe-selector">
            {TimeFrame::iter()
                .map(|tf| {
                    view! {
                        <button
                            class="timeframe-btn"
                            class:active=move || timeframe.get() == tf
                            on:click=move |_| timeframe.set(tf)
                        >
                            {tf.label().to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
