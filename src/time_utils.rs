use js_sys::Date;
use wasm_bindgen::JsValue;

const DAY_SECONDS: i64 = 24 * 60 * 60;

fn utc_date(timestamp: i64) -> Date {
    Date::new(&JsValue::from_f64(timestamp as f64 * 1000.0))
}

/// Format an axis label for a Unix-seconds timestamp, coarser as the
/// visible span grows. UTC components are used throughout.
///
/// - `span <= 2 days` -> `DD.MM HH:MM`
/// - `span <= 1 year` -> `DD.MM`
/// - longer -> `MM.YYYY`
pub fn format_time_label(timestamp: i64, span_seconds: i64) -> String {
    let date = utc_date(timestamp);
    if span_seconds <= 2 * DAY_SECONDS {
        format!(
            "{:02}.{:02} {:02}:{:02}",
            date.get_utc_date(),
            date.get_utc_month() + 1,
            date.get_utc_hours(),
            date.get_utc_minutes()
        )
    } else if span_seconds <= 365 * DAY_SECONDS {
        format!("{:02}.{:02}", date.get_utc_date(), date.get_utc_month() + 1)
    } else {
        format!("{:02}.{}", date.get_utc_month() + 1, date.get_utc_full_year())
    }
}

/// Full `DD.MM.YYYY` date used in the chart tooltip.
pub fn format_date(timestamp: i64) -> String {
    let date = utc_date(timestamp);
    format!(
        "{:02}.{:02}.{}",
        date.get_utc_date(),
        date.get_utc_month() + 1,
        date.get_utc_full_year()
    )
}

pub fn format_price(value: f64, unit: &str) -> String {
    format!("{value:.2} {unit}")
}
