//! Calendar arithmetic for recurrence rollover.
//!
//! Frequencies map to calendar-aware increments (`+1 day`, `+7 days`,
//! `+1 calendar month` with day-of-month clamping), never fixed
//! millisecond intervals, so occurrences do not drift across month-length
//! or year boundaries. A monthly task scheduled for Jan 31 lands on the
//! last valid day of February.

use chrono::{Days, Months, NaiveDate};

use crate::task::Frequency;

/// Advances a date by one unit of the given frequency.
///
/// Monthly advancement clamps the day-of-month: Jan 31 + 1 month is
/// Feb 28 (or Feb 29 in a leap year). Returns `None` only if the result
/// would fall outside chrono's representable date range.
#[must_use]
pub fn next_occurrence(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => date.checked_add_days(Days::new(1)),
        Frequency::Weekly => date.checked_add_days(Days::new(7)),
        Frequency::Monthly => date.checked_add_months(Months::new(1)),
    }
}

/// Rolls a passed occurrence date forward until it reaches `today`.
///
/// Applies [`next_occurrence`] repeatedly while the date is strictly
/// before `today`, so a sweep that runs after several elapsed periods
/// catches up in one pass. A date already at or past `today` is returned
/// unchanged.
#[must_use]
pub fn roll_forward(next_due: NaiveDate, frequency: Frequency, today: NaiveDate) -> NaiveDate {
    let mut due = next_due;
    while due < today {
        match next_occurrence(due, frequency) {
            Some(advanced) => due = advanced,
            None => break,
        }
    }
    due
}
