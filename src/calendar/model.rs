use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::foundation::core::ContributionLevel;
use crate::foundation::error::{ContribError, ContribResult};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_FROM_CE: i64 = 719_163;

/// One day of activity as produced by the aggregation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    /// UTC calendar day.
    pub date: NaiveDate,
    /// Raw activity count for the day.
    pub contribution_count: u32,
    /// Intensity bucket assigned by the aggregator.
    pub contribution_level: ContributionLevel,
}

impl CalendarEntry {
    /// Days since 1970-01-01.
    pub fn epoch_day(&self) -> i64 {
        epoch_day(self.date)
    }

    /// Day of week with Sunday = 0 .. Saturday = 6.
    pub fn day_of_week(&self) -> u32 {
        day_of_week(self.date)
    }
}

/// Days since 1970-01-01 for `date`.
pub fn epoch_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_FROM_CE
}

/// Day of week with Sunday = 0 .. Saturday = 6.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Calendar document read from the aggregation output.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    /// Date-ascending daily entries.
    pub contribution_calendar: Vec<CalendarEntry>,
    /// Overall total when the aggregator reports one; otherwise derived from the entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_contributions: Option<u64>,
    /// Stars across the owner's repositories, shown in the stats bar when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_stargazer_count: Option<u64>,
    /// Forks across the owner's repositories, shown in the stats bar when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_fork_count: Option<u64>,
}

impl Calendar {
    /// Wrap a list of entries.
    pub fn new(entries: Vec<CalendarEntry>) -> Self {
        Self {
            contribution_calendar: entries,
            total_contributions: None,
            total_stargazer_count: None,
            total_fork_count: None,
        }
    }

    /// Parse a calendar from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ContribResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ContribError::serde(format!("parse calendar JSON: {e}")))
    }

    /// Parse a calendar from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ContribResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ContribError::io(format!("open calendar JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Daily entries.
    pub fn entries(&self) -> &[CalendarEntry] {
        &self.contribution_calendar
    }

    /// Reported total, or the sum of daily counts.
    pub fn total(&self) -> u64 {
        self.total_contributions.unwrap_or_else(|| {
            self.contribution_calendar
                .iter()
                .map(|e| u64::from(e.contribution_count))
                .sum()
        })
    }

    /// First and last day covered, if any.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.contribution_calendar.first()?;
        let last = self.contribution_calendar.last()?;
        Some((first.date, last.date))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/model.rs"]
mod tests;
