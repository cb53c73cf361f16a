#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::create_runtime;
use std::rc::Rc;
use trading_dashboard_wasm::application::{AlertSimulator, NotificationService};
use trading_dashboard_wasm::domain::notifications::{NotificationCategory, NotificationDraft, Severity};
use trading_dashboard_wasm::domain::random::RandomSource;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct AlwaysFire;

impl RandomSource for AlwaysFire {
    fn next_f64(&self) -> f64 {
        0.0
    }
}

fn draft() -> NotificationDraft {
    NotificationDraft::new(NotificationCategory::Alert, "Test", "expiring soon", Severity::Info)
}

#[wasm_bindgen_test]
async fn notification_expires_after_ttl() {
    let runtime = create_runtime();
    let service = NotificationService::new(50);

    let id = service.add(draft());
    assert!(service.contains(&id));

    TimeoutFuture::new(120).await;
    assert!(!service.contains(&id));
    assert!(service.is_empty());

    runtime.dispose();
}

#[wasm_bindgen_test]
async fn manual_dismiss_beats_expiry() {
    let runtime = create_runtime();
    let service = NotificationService::new(50);

    let first = service.add(draft());
    let second = service.add(draft());
    assert_ne!(first, second);

    service.remove(&first);
    assert_eq!(service.len(), 1);
    // expiry of an already removed id changes nothing
    TimeoutFuture::new(120).await;
    assert!(service.is_empty());

    runtime.dispose();
}

#[wasm_bindgen_test]
async fn simulator_pushes_alerts_until_dropped() {
    let runtime = create_runtime();
    let service = NotificationService::new(10_000);

    let simulator = AlertSimulator::start(service, Rc::new(AlwaysFire), 20, 0.3);
    TimeoutFuture::new(70).await;
    drop(simulator);
    let fired = service.len();
    assert!(fired >= 2, "only {fired} alerts");
    assert_eq!(service.items()[0].title, "Price Alert");

    TimeoutFuture::new(60).await;
    assert_eq!(service.len(), fired);

    runtime.dispose();
}

#[wasm_bindgen_test]
async fn clear_empties_queue_before_pending_expiry() {
    let runtime = create_runtime();
    let service = NotificationService::new(50);

    let first = service.add(draft());
    service.add(draft());
    service.clear();
    assert!(service.is_empty());
    assert!(!service.contains(&first));

    // a notification added after clear keeps its own full lifetime
    let late = service.add(draft());
    TimeoutFuture::new(30).await;
    assert!(service.contains(&late));
    assert_eq!(service.len(), 1);

    TimeoutFuture::new(80).await;
    assert!(service.is_empty());

    runtime.dispose();
}
