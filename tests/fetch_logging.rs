use futures::executor::block_on;
use futures::future::{FutureExt, LocalBoxFuture};
use leptos::create_runtime;
use std::rc::Rc;
use std::sync::Mutex;
use trading_dashboard_wasm::application::MarketDataService;
use trading_dashboard_wasm::domain::errors::{AppError, AppResult};
use trading_dashboard_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};
use trading_dashboard_wasm::domain::market_data::{MarketFeed, MarketSnapshot, Symbol};

static ENTRIES: Mutex<Vec<LogEntry>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        ENTRIES.lock().unwrap().push(entry);
    }
}

struct Unreachable;

impl MarketFeed for Unreachable {
    fn snapshot<'a>(&'a self, _symbol: &'a Symbol) -> LocalBoxFuture<'a, AppResult<MarketSnapshot>> {
        async { Err(AppError::Feed("timeout".to_string())) }.boxed_local()
    }
}

#[test]
fn failed_fetch_logs_symbol_as_metadata() {
    init_logger(Box::new(CapturingLogger));
    let runtime = create_runtime();
    let service = MarketDataService::new(Rc::new(Unreachable));

    assert!(block_on(service.fetch(Symbol::from("dotusdt"))).is_err());

    let entries = ENTRIES.lock().unwrap();
    let warn = entries
        .iter()
        .find(|e| e.level == LogLevel::Warn)
        .expect("warn entry");
    assert_eq!(warn.message, "fetch failed: Feed Error: timeout");
    assert_eq!(warn.metadata.as_deref(), Some("symbol=DOTUSDT"));

    drop(entries);
    runtime.dispose();
}
