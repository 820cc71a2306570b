use chrono::{Datelike, Days, NaiveDate};

use crate::calendar::model::day_of_week;

/// Number of distinct seasonal patterns.
pub const SEASON_PATTERNS: u8 = 20;

/// Seasonal pattern index in `[0, 19]` for `date`.
///
/// The week is classified by the Sunday on or before `date`. The first month of each quarter
/// (September, December, March, June) ramps through five steps keyed on the Sunday's day of
/// month; the two following months hold the season's peak value.
///
/// | months    | index        |
/// |-----------|--------------|
/// | Sep       | 0 + step     |
/// | Oct, Nov  | 4            |
/// | Dec       | 5 + step     |
/// | Jan, Feb  | 9            |
/// | Mar       | 10 + step    |
/// | Apr, May  | 14           |
/// | Jun       | 15 + step    |
/// | Jul, Aug  | 19           |
pub fn season_pattern(date: NaiveDate) -> u8 {
    let sunday = date
        .checked_sub_days(Days::new(u64::from(day_of_week(date))))
        .unwrap_or(date);

    let step = match sunday.day() {
        ..=7 => 0,
        8..=14 => 1,
        15..=21 => 2,
        22..=28 => 3,
        _ => 4,
    };

    match sunday.month() {
        9 => step,
        10 | 11 => 4,
        12 => 5 + step,
        1 | 2 => 9,
        3 => 10 + step,
        4 | 5 => 14,
        6 => 15 + step,
        _ => 19,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/season.rs"]
mod tests;
