#![cfg(target_arch = "wasm32")]

use leptos::create_runtime;
use std::rc::Rc;
use trading_dashboard_wasm::application::DisplayModeService;
use trading_dashboard_wasm::domain::chart::{ChartTheme, DisplayMode};
use trading_dashboard_wasm::domain::market_data::Symbol;
use trading_dashboard_wasm::domain::watchlist::Watchlist;
use trading_dashboard_wasm::infrastructure::storage::{KeyValueStore, LocalStorage, PersistentSlot};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn local() -> Rc<dyn KeyValueStore> {
    Rc::new(LocalStorage::open().unwrap())
}

fn root_is_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains("dark"))
        .unwrap_or(false)
}

#[wasm_bindgen_test]
fn watchlist_survives_a_new_slot() {
    let slot: PersistentSlot<Watchlist> = PersistentSlot::new("test-watchlist", local());
    slot.clear().unwrap();
    assert_eq!(slot.load().unwrap(), None);

    let mut list = Watchlist::new();
    list.add(Symbol::from("BTCUSDT"), 42);
    slot.save(&list).unwrap();

    let reopened: PersistentSlot<Watchlist> = PersistentSlot::new("test-watchlist", local());
    assert_eq!(reopened.load().unwrap(), Some(list));
    reopened.clear().unwrap();
}

#[wasm_bindgen_test]
fn dark_mode_toggle_persists_and_marks_root() {
    let runtime = create_runtime();
    let store = local();
    store.remove_item("test-darkMode").unwrap();

    let service = DisplayModeService::load(PersistentSlot::new("test-darkMode", Rc::clone(&store)));
    assert_eq!(service.mode(), DisplayMode::Light);
    assert!(!root_is_dark());

    service.toggle();
    assert!(service.is_dark());
    assert_eq!(service.theme(), ChartTheme::DARK);
    assert!(root_is_dark());
    assert_eq!(store.get_item("test-darkMode").unwrap().as_deref(), Some("true"));

    let reloaded = DisplayModeService::load(PersistentSlot::new("test-darkMode", Rc::clone(&store)));
    assert_eq!(reloaded.mode(), DisplayMode::Dark);

    service.toggle();
    assert!(!root_is_dark());
    assert_eq!(store.get_item("test-darkMode").unwrap().as_deref(), Some("false"));

    store.remove_item("test-darkMode").unwrap();
    runtime.dispose();
}

#[wasm_bindgen_test]
fn unreadable_dark_mode_defaults_to_light() {
    let runtime = create_runtime();
    let store = local();
    store.set_item("test-darkMode-bad", "maybe").unwrap();

    let service = DisplayModeService::load(PersistentSlot::new("test-darkMode-bad", Rc::clone(&store)));
    assert_eq!(service.mode(), DisplayMode::Light);

    store.remove_item("test-darkMode-bad").unwrap();
    runtime.dispose();
}
