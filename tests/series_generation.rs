use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;
use trading_dashboard_wasm::domain::chart::ChartSeries;
use trading_dashboard_wasm::domain::market_data::services::{BASELINE_PRICE, SeriesGenerator, WALK_BAND};
use trading_dashboard_wasm::domain::market_data::{Symbol, TimeFrame, VolumeTint};
use trading_dashboard_wasm::domain::random::SeededRandom;

const NOW: u64 = 1_700_000_000;

fn timeframe_at(index: u8) -> TimeFrame {
    let all: Vec<TimeFrame> = TimeFrame::iter().collect();
    all[index as usize % all.len()]
}

#[quickcheck]
fn wicks_enclose_every_body(seed: u64, frame: u8) -> bool {
    let rng = SeededRandom::new(seed);
    SeriesGenerator::new(&rng).generate(timeframe_at(frame), NOW).iter().all(|candle| {
        let o = candle.ohlcv.open.value();
        let c = candle.ohlcv.close.value();
        candle.ohlcv.is_valid()
            && candle.ohlcv.high.value() >= o.max(c)
            && candle.ohlcv.low.value() <= o.min(c)
    })
}

#[quickcheck]
fn volume_tint_follows_direction(seed: u64) -> bool {
    let rng = SeededRandom::new(seed);
    let candles = SeriesGenerator::new(&rng).generate(TimeFrame::OneHour, NOW);
    let series = ChartSeries::from_candles(Symbol::from("ETHUSDT"), TimeFrame::OneHour, candles);
    series.candles().iter().zip(series.volume()).all(|(candle, bar)| {
        bar.timestamp == candle.timestamp
            && bar.tint == if candle.is_bullish() { VolumeTint::Up } else { VolumeTint::Down }
    })
}

#[test]
fn coarser_timeframes_get_longer_history() {
    let counts: Vec<usize> = TimeFrame::iter().map(|tf| tf.point_count()).collect();
    assert!(counts.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn opens_stay_near_the_baseline_band() {
    let rng = SeededRandom::new(99);
    for tf in TimeFrame::iter() {
        for candle in SeriesGenerator::new(&rng).generate(tf, NOW) {
            let open = candle.ohlcv.open.value();
            assert!(open >= BASELINE_PRICE - 500.0, "{open} below band");
            assert!(open <= BASELINE_PRICE + WALK_BAND + 500.0, "{open} above band");
        }
    }
}

#[test]
fn same_seed_same_series() {
    let a = SeriesGenerator::new(&SeededRandom::new(5)).generate(TimeFrame::OneDay, NOW);
    let b = SeriesGenerator::new(&SeededRandom::new(5)).generate(TimeFrame::OneDay, NOW);
    assert_eq!(a, b);
}
