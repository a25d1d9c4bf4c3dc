use crate::models::DateRange;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday on or before the first of `today`'s month, shifted by whole weeks.
///
/// Week 1 may start in the previous month and late weeks run into the
/// following ones; dates are normalised, never clamped. Returns `None` only
/// when the result falls outside the representable calendar.
pub fn start_of_week(week: u32, today: NaiveDate) -> Option<NaiveDate> {
    let first = first_of_month(today);
    let dow = i64::from(first.weekday().num_days_from_monday());
    let day_of_month = 1 + (i64::from(week) - 1) * 7 - dow;
    offset_from_first(first, day_of_month)
}

/// Sunday closing the same window as [`start_of_week`].
pub fn end_of_week(week: u32, today: NaiveDate) -> Option<NaiveDate> {
    let first = first_of_month(today);
    let offset = if first.weekday() == Weekday::Sun {
        6
    } else {
        i64::from(first.weekday().number_from_monday()) - 1
    };
    let day_of_month = i64::from(week) * 7 - offset;
    offset_from_first(first, day_of_month)
}

pub fn week_range(week: u32, today: NaiveDate) -> Option<DateRange> {
    let start = start_of_week(week, today)?;
    let end = end_of_week(week, today)?;
    Some(DateRange { start, end })
}

/// Number of week rows needed to cover every day of `today`'s month.
pub fn weeks_in_month(today: NaiveDate) -> u32 {
    let first = first_of_month(today);
    let lead = first.weekday().num_days_from_monday();
    (lead + days_in_month(first)).div_ceil(7)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next.map(|next| (next - first).num_days() as u32).unwrap_or(31)
}

fn offset_from_first(first: NaiveDate, day_of_month: i64) -> Option<NaiveDate> {
    let days = Duration::try_days(day_of_month - 1)?;
    first.checked_add_signed(days)
}
