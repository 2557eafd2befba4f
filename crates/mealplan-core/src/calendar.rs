//! Day counts and weekday occurrence counts between calendar dates.

use chrono::{Datelike, NaiveDate};
use mealplan_domain::{Weekday, WeekdayCounts};

/// Returned by [`days_between`] when `start` is after `end`.
pub const INVALID_RANGE: i64 = -1;

/// Inclusive number of days from `start` to `end`, or [`INVALID_RANGE`].
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    if start > end {
        return INVALID_RANGE;
    }
    (end - start).num_days() + 1
}

/// Counts how often each weekday falls within `[start, end]`, minus `weeks_off`
/// from every weekday.
///
/// Returns all zeros for an inverted range or when more weeks are taken off
/// than the range holds.
pub fn weekday_occurrences(start: NaiveDate, end: NaiveDate, weeks_off: u32) -> WeekdayCounts {
    let total_days = days_between(start, end);
    if total_days == INVALID_RANGE {
        return WeekdayCounts::default();
    }
    let full_weeks = total_days / 7 - i64::from(weeks_off);
    let Ok(seed) = u32::try_from(full_weeks) else {
        return WeekdayCounts::default();
    };

    let mut counts = WeekdayCounts::filled(seed);
    let stop = Weekday::from(end.weekday()).succ();
    let mut cursor = Weekday::from(start.weekday());
    // When the range is a whole number of weeks the cursor starts on `stop`.
    while cursor != stop {
        counts[cursor] += 1;
        cursor = cursor.succ();
    }
    counts
}

/// Lazily yields every date from `start` to `end` inclusive.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}

/// Every date from `start` to `end` inclusive; empty when `start > end`.
pub fn all_dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    date_range(start, end).collect()
}

/// Whether `date` falls in the block of `weeks_off` weeks that begins at `start`.
pub fn is_within_weeks_off(start: NaiveDate, date: NaiveDate, weeks_off: u32) -> bool {
    let offset = (date - start).num_days();
    offset >= 0 && offset < i64::from(weeks_off) * 7
}
