use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::io::CollisionPolicy;

/// How far back a debug run looks.
pub const DEBUG_LOOKBACK_DAYS: i64 = 30;
/// How far back an incremental run looks when there is no last-run marker.
pub const FIRST_RUN_LOOKBACK_DAYS: i64 = 2;

/// Half-open window of journal dates to process: `[start, end)`.
///
/// Journal dates are compared at midnight, so a window starting part-way
/// through a day excludes that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    /// Just the given day.
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// The last `days` days up to `now`.
    pub fn recent(now: NaiveDateTime, days: i64) -> Self {
        Self {
            start: now - Duration::days(days),
            end: now,
        }
    }

    /// From the day after `last_run` up to `now`.
    pub fn since_last_run(last_run: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            start: (last_run + Duration::days(1)).and_time(NaiveTime::MIN),
            end: now,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let at = date.and_time(NaiveTime::MIN);
        self.start <= at && at < self.end
    }
}

/// Which journals a harvest run picks up and how it treats existing notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Everything since the last recorded run; records this run when done.
    Incremental,
    /// The last month, without touching the last-run marker.
    Debug,
    /// A single day; existing notes are overwritten.
    Date(NaiveDate),
}

impl RunMode {
    pub fn window(&self, last_run: Option<NaiveDate>, now: NaiveDateTime) -> DateWindow {
        match self {
            RunMode::Date(date) => DateWindow::for_date(*date),
            RunMode::Debug => DateWindow::recent(now, DEBUG_LOOKBACK_DAYS),
            RunMode::Incremental => match last_run {
                Some(last_run) => DateWindow::since_last_run(last_run, now),
                None => DateWindow::recent(now, FIRST_RUN_LOOKBACK_DAYS),
            },
        }
    }

    pub fn records_last_run(&self) -> bool {
        matches!(self, RunMode::Incremental)
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        match self {
            RunMode::Date(_) => CollisionPolicy::Overwrite,
            RunMode::Incremental | RunMode::Debug => CollisionPolicy::Rename,
        }
    }
}
