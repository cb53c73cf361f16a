use leptos::create_runtime;
use quickcheck_macros::quickcheck;
use std::rc::Rc;
use trading_dashboard_wasm::application::WatchlistService;
use trading_dashboard_wasm::domain::market_data::Symbol;
use trading_dashboard_wasm::domain::watchlist::Watchlist;
use trading_dashboard_wasm::infrastructure::storage::{KeyValueStore, MemoryStorage, PersistentSlot};

fn slot(store: &MemoryStorage) -> PersistentSlot<Watchlist> {
    let store: Rc<dyn KeyValueStore> = Rc::new(store.clone());
    PersistentSlot::new("watchlist", store)
}

#[quickcheck]
fn adding_everything_twice_changes_nothing(inputs: Vec<String>) -> bool {
    let mut list = Watchlist::new();
    for (i, raw) in inputs.iter().enumerate() {
        if let Ok(symbol) = Symbol::parse(raw) {
            list.add(symbol, i as u64);
        }
    }
    let snapshot = list.clone();
    let changed = inputs
        .iter()
        .filter_map(|raw| Symbol::parse(raw).ok())
        .any(|symbol| list.add(symbol, 0));
    !changed && list == snapshot
}

#[test]
fn removing_an_absent_symbol_is_a_noop() {
    let mut list = Watchlist::new();
    list.add(Symbol::from("BTCUSDT"), 1);
    let before = list.clone();
    assert!(!list.remove(&Symbol::from("DOGEUSDT")));
    assert_eq!(list, before);
}

#[test]
fn slot_uses_symbol_and_added_at_keys() {
    let store = MemoryStorage::new();
    let mut list = Watchlist::new();
    list.add(Symbol::from("ethusdt"), 1_700_000_000_000);
    slot(&store).save(&list).unwrap();

    let raw = store.get_item("watchlist").unwrap().unwrap();
    assert_eq!(raw, r#"[{"symbol":"ETHUSDT","addedAt":1700000000000}]"#);
    assert_eq!(slot(&store).load().unwrap(), Some(list));
}

#[test]
fn corrupt_slot_falls_back_to_empty() {
    let store = MemoryStorage::new();
    store.set_item("watchlist", "{not json").unwrap();
    assert!(slot(&store).load().is_err());
    assert!(slot(&store).load_or(Watchlist::new()).is_empty());
}

#[test]
fn service_normalizes_and_persists_every_change() {
    let runtime = create_runtime();
    let store = MemoryStorage::new();
    let service = WatchlistService::load(slot(&store));

    assert!(service.add("  solusdt "));
    assert!(!service.add("SOLUSDT"));
    assert!(!service.add("   "));
    assert!(service.add("BNBUSDT"));
    assert_eq!(service.len(), 2);
    assert!(service.contains(&Symbol::from("SOLUSDT")));

    let persisted = slot(&store).load().unwrap().unwrap();
    assert_eq!(persisted.len(), 2);

    assert!(service.remove(&Symbol::from("SOLUSDT")));
    assert!(!service.remove(&Symbol::from("SOLUSDT")));
    let persisted = slot(&store).load().unwrap().unwrap();
    let symbols: Vec<&str> = persisted.entries().iter().map(|e| e.symbol.value()).collect();
    assert_eq!(symbols, vec!["BNBUSDT"]);

    runtime.dispose();
}

#[test]
fn service_collapses_duplicates_from_storage() {
    let runtime = create_runtime();
    let store = MemoryStorage::new();
    store
        .set_item(
            "watchlist",
            r#"[{"symbol":"BTCUSDT","addedAt":1},{"symbol":"BTCUSDT","addedAt":2},{"symbol":"ETHUSDT","addedAt":3}]"#,
        )
        .unwrap();

    let service = WatchlistService::load(slot(&store));
    let entries = service.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].added_at, 1);

    runtime.dispose();
}

#[test]
fn stored_symbols_are_normalized_on_load() {
    let runtime = create_runtime();
    let store = MemoryStorage::new();
    store
        .set_item(
            "watchlist",
            r#"[{"symbol":"btcusdt","addedAt":1},{"symbol":" BTCUSDT ","addedAt":2},{"symbol":"EthUsdt","addedAt":3}]"#,
        )
        .unwrap();

    let service = WatchlistService::load(slot(&store));
    let symbols: Vec<String> = service.entries().iter().map(|e| e.symbol.to_string()).collect();
    assert_eq!(symbols, vec!["BTCUSDT", "ETHUSDT"]);
    assert!(service.contains(&Symbol::from("BTCUSDT")));

    runtime.dispose();
}

#[test]
fn blank_stored_symbol_is_rejected() {
    let store = MemoryStorage::new();
    store.set_item("watchlist", r#"[{"symbol":"  ","addedAt":1}]"#).unwrap();
    assert!(slot(&store).load().is_err());
}
