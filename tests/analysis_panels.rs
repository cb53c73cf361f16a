use insta::assert_json_snapshot;
use trading_dashboard_wasm::domain::analysis::{
    INDICATORS, Signal, SignalTally, TOP_CRYPTOS, filter_symbols, known_quote, roll_alert,
};
use trading_dashboard_wasm::domain::market_data::Symbol;
use trading_dashboard_wasm::domain::random::{RandomSource, SeededRandom};

/// Always returns the same sample.
struct Fixed(f64);

impl RandomSource for Fixed {
    fn next_f64(&self) -> f64 {
        self.0
    }
}

#[test]
fn indicator_tally() {
    let tally = SignalTally::of(&INDICATORS);
    assert_json_snapshot!(tally);
    assert_eq!(tally.overall(), Signal::Buy);
}

#[test]
fn indicator_signals() {
    let signals: Vec<(&str, Signal)> = INDICATORS.iter().map(|i| (i.name, i.signal)).collect();
    assert_json_snapshot!(signals);
}

#[test]
fn ties_are_neutral() {
    let tally = SignalTally { buy: 2, neutral: 0, sell: 2 };
    assert_eq!(tally.overall(), Signal::Neutral);
    assert_eq!(SignalTally { buy: 0, neutral: 3, sell: 1 }.overall(), Signal::Sell);
    assert_eq!(SignalTally::default().overall(), Signal::Neutral);
}

#[test]
fn symbol_filter_is_case_insensitive() {
    let hits: Vec<String> = filter_symbols("eth").iter().map(Symbol::to_string).collect();
    assert_eq!(hits, vec!["ETHUSDT"]);
    assert_eq!(filter_symbols("").len(), 10);
    assert_eq!(filter_symbols("  Usdt ").len(), 10);
    assert!(filter_symbols("doge").is_empty());
}

#[test]
fn watchlist_quotes_cover_four_pairs() {
    assert_eq!(known_quote(&Symbol::from("btcusdt")).map(|q| q.name), Some("Bitcoin"));
    assert_eq!(known_quote(&Symbol::from("SOLUSDT")).map(|q| q.price), Some(145.23));
    // listed in the overview table but not a watchlist quote
    assert!(known_quote(&Symbol::from("ADAUSDT")).is_none());
    assert_eq!(TOP_CRYPTOS.len(), 5);
}

#[test]
fn alert_roll_respects_probability() {
    assert!(roll_alert(&Fixed(0.5), 0.3).is_none());
    let draft = roll_alert(&Fixed(0.1), 0.3).unwrap();
    assert_eq!(draft.title, "Price Alert");

    let rng = SeededRandom::new(17);
    let fired = (0..10_000).filter(|_| roll_alert(&rng, 0.3).is_some()).count();
    assert!((2_500..3_500).contains(&fired), "fired {fired} times");
}
