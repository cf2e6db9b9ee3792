use chrono::{DateTime, Datelike, NaiveDate};

/// Text rendered for dates the profile source sent in an unknown format
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse an achievement date: a plain `YYYY-MM-DD` or an RFC 3339 timestamp
///
/// Only dates in year 1 or later are accepted.
pub fn parse_earned_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .filter(|date| date.year() >= 1)
}

/// Format an achievement date for display using the browser locale
///
/// The calendar date is built in local time so "2024-03-15" always shows as the
/// 15th, whatever the user's UTC offset.
pub fn format_earned_date(raw: &str) -> String {
    match parse_earned_date(raw) {
        Some(date) => locale_date_string(date),
        None => {
            log::debug!("Unparseable achievement date: {}", raw);
            INVALID_DATE.to_string()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn locale_date_string(date: NaiveDate) -> String {
    // The (year, month, day) constructor maps years 0-99 to 1900-1999
    let js_date = js_sys::Date::new_0();
    js_date.set_full_year_with_month_date(
        date.year() as u32,
        date.month0() as i32,
        date.day() as i32,
    );
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string());
    js_date
        .to_locale_date_string(&locale, &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

// en-US short date, matching what a default browser locale renders
#[cfg(not(target_arch = "wasm32"))]
fn locale_date_string(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_earned_date() {
        assert_eq!(
            parse_earned_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(
            parse_earned_date("2024-03-16T23:30:00+00:00"),
            NaiveDate::from_ymd_opt(2024, 3, 16)
        );
        assert_eq!(parse_earned_date("March 15"), None);
    }

    #[test]
    fn test_format_earned_date_is_localized() {
        assert_eq!(format_earned_date("2024-03-15"), "3/15/2024");
        assert_ne!(format_earned_date("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_format_invalid_date() {
        assert_eq!(format_earned_date("not a date"), INVALID_DATE);
        assert_eq!(format_earned_date("2024-02-30"), INVALID_DATE);
    }

    #[test]
    fn test_two_digit_year_is_not_shifted() {
        assert_eq!(
            parse_earned_date("0024-03-15"),
            NaiveDate::from_ymd_opt(24, 3, 15)
        );
        assert_eq!(format_earned_date("0024-03-15"), "3/15/24");
    }

    #[test]
    fn test_year_zero_and_before_rejected() {
        assert_eq!(parse_earned_date("0000-03-15"), None);
        assert_eq!(format_earned_date("0000-03-15"), INVALID_DATE);
        assert_eq!(format_earned_date("-0001-03-15T00:00:00Z"), INVALID_DATE);
    }
}
