use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::task::DateValue;
use crate::util::dates;

/// A week's relationship to the reference "today". Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekPosition {
    Past,
    Current,
    Future,
}

/// A calendar week, anchored on its Monday. Weeks are never stored — they
/// are derived on demand from any date inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Week {
        Week {
            start: dates::week_start(date),
        }
    }

    /// Monday of this week.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Sunday of this week (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    /// Inclusive date-range membership.
    pub fn contains(&self, date: NaiveDate) -> bool {
        dates::is_date_in_week(date, self.start)
    }

    pub fn position(&self, today: NaiveDate) -> WeekPosition {
        if self.end() < today {
            WeekPosition::Past
        } else if self.start > today {
            WeekPosition::Future
        } else {
            WeekPosition::Current
        }
    }

    /// The 7 calendar days, Monday through Sunday.
    pub fn days(&self) -> [NaiveDate; 7] {
        dates::week_days(self.start)
    }

    pub fn prev(&self) -> Week {
        Week {
            start: self.start - Duration::days(7),
        }
    }

    pub fn next(&self) -> Week {
        Week {
            start: self.start + Duration::days(7),
        }
    }
}

/// Free-form annotation on a span of days. Purely descriptive — the
/// visibility engine never consults these; the rendering layer shows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekEvent {
    pub id: String,
    #[serde(default)]
    pub start_date: DateValue,
    #[serde(default)]
    pub end_date: DateValue,
    #[serde(default)]
    pub description: String,
}
