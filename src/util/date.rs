//! Display formatting for server timestamps.
//!
//! In the browser the ISO-8601 string goes through `js_sys::Date` for a
//! locale-aware rendering; natively we fall back to the date portion.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Human-readable form of an ISO-8601 timestamp.
pub fn format_timestamp(ts: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(ts));
        if date.get_time().is_nan() {
            return date_portion(ts).to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        date_portion(ts).to_owned()
    }
}

/// The `YYYY-MM-DD` prefix of an ISO-8601 timestamp, or the whole string
/// when there is no time part.
pub fn date_portion(ts: &str) -> &str {
    ts.split('T').next().unwrap_or(ts)
}
