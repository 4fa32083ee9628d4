use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Monday of the week containing `date`. Weeks are ISO-style, Monday-first;
/// chrono's `num_days_from_monday` gives that directly, no locale involved.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Sunday of the week containing `date` (inclusive end).
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}

/// Inclusive membership test against the week anchored at `monday`.
pub fn is_date_in_week(date: NaiveDate, monday: NaiveDate) -> bool {
    date >= monday && date <= monday + Duration::days(6)
}

/// Strictly before the week's Monday — the "should be promoted" test.
pub fn is_date_before_week(date: NaiveDate, monday: NaiveDate) -> bool {
    date < monday
}

/// Signed day count from `a` to `b` on calendar dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Calendar-day equality for timestamps, ignoring time of day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// The 7 calendar days of the week anchored at `monday`.
pub fn week_days(monday: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Short display form, e.g. "Mar 7".
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
