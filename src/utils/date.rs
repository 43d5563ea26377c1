use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Check a date string the way a date picker would produce it.
pub fn is_form_date(s: &str) -> bool {
    s.len() == 10 && parse_date(s).is_some()
}
