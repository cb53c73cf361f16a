use js_sys::Date;
use wasm_bindgen::JsValue;

use crate::domain::market_data::TimeFrame;

/// Axis label for a chart point, using UTC components.
///
/// - intraday timeframes -> `HH:MM`
/// - `1d` and `1w` -> `DD.MM`
/// - `1M` -> `MM.YYYY`
pub fn format_axis_label(timestamp_secs: u64, timeframe: TimeFrame) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp_secs as f64 * 1000.0));
    match timeframe {
        TimeFrame::OneMinute
        | TimeFrame::FiveMinutes
        | TimeFrame::FifteenMinutes
        | TimeFrame::OneHour
        | TimeFrame::FourHours => {
            format!("{:02}:{:02}", date.get_utc_hours(), date.get_utc_minutes())
        }
        TimeFrame::OneDay | TimeFrame::OneWeek => {
            format!("{:02}.{:02}", date.get_utc_date(), date.get_utc_month() + 1)
        }
        TimeFrame::OneMonth => {
            format!("{:02}.{}", date.get_utc_month() + 1, date.get_utc_full_year())
        }
    }
}

/// Local wall-clock `HH:MM:SS` for a millisecond timestamp.
pub fn format_clock_time(timestamp_ms: u64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp_ms as f64));
    format!("{:02}:{:02}:{:02}", date.get_hours(), date.get_minutes(), date.get_seconds())
}

/// Current time in whole seconds.
pub fn now_secs() -> u64 {
    (Date::now() / 1000.0) as u64
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn labels_follow_timeframe() {
        assert_eq!(format_axis_label(0, TimeFrame::OneHour), "00:00");
        assert_eq!(format_axis_label(0, TimeFrame::OneDay), "01.01");
        assert_eq!(format_axis_label(0, TimeFrame::OneMonth), "01.1970");
    }
}
