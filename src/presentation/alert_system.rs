use leptos::*;

use crate::application::{AlertSimulator, DashboardServices};
use crate::domain::notifications::{Notification, NotificationCategory};
use crate::time_utils::format_clock_time;

fn category_icon(category: NotificationCategory) -> &'static str {
    match category {
        NotificationCategory::Price => "📈",
        NotificationCategory::Technical => "⚠️",
        NotificationCategory::News => "🔔",
        NotificationCategory::Alert => "🚨",
    }
}

/// Toast stack in the bottom-right corner. Also drives the alert simulator
/// for as long as it is mounted.
#[component]
pub fn AlertSystem(services: DashboardServices) -> impl IntoView {
    let config = services.config();
    let simulator = AlertSimulator::start(
        services.notifications,
        services.rng(),
        config.alert_interval_ms,
        config.alert_probability,
    );
    on_cleanup(move || drop(simulator));

    view! {
        <div class="toast-stack">
            <For
                each=move || services.notifications.items()
                key=|notification: &Notification| notification.id.clone()
                children=move |notification: Notification| {
                    let id = notification.id.clone();
                    view! {
                        <div class=format!("toast {}", notification.severity.as_ref())>
                            <div class="toast-icon">{category_icon(notification.category)}</div>
                            <div class="toast-body">
                                <h4>{notification.title}</h4>
                                <p>{notification.message}</p>
                                <div class="toast-time">{format_clock_time(notification.timestamp)}</div>
                            </div>
                            <button
                                class="icon-btn"
                                title="Dismiss"
                                on:click=move |_| services.notifications.remove(&id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
