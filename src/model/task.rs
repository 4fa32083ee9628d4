use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl Status {
    /// The character used inside the checkbox `[ ]` in text output
    pub fn checkbox_char(self) -> char {
        match self {
            Status::Pending => ' ',
            Status::InProgress => '>',
            Status::Completed => 'x',
            Status::Blocked => '-',
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

/// Task priority, P0 highest. Variant order gives the sort order directly:
/// ascending sort puts P0 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    P0,
    P1,
    P2,
    P3,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::P2
    }
}

/// A task date field as it arrived through the storage boundary.
///
/// Unparseable-but-present values are kept distinct from absent ones: an
/// `Invalid` date never satisfies a week predicate, and it also keeps the
/// task out of the current week's dateless catch-all. A data-entry typo must
/// not silently reschedule a task into this week.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateValue {
    #[default]
    Absent,
    /// Present in the snapshot but not a parseable date; original text kept
    Invalid(String),
    Date(NaiveDate),
}

impl DateValue {
    /// Parse a raw snapshot value. `None` and empty strings are `Absent`.
    pub fn from_raw(raw: Option<String>) -> DateValue {
        match raw {
            None => DateValue::Absent,
            Some(s) if s.is_empty() => DateValue::Absent,
            Some(s) => match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                Ok(d) => DateValue::Date(d),
                Err(_) => DateValue::Invalid(s),
            },
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DateValue::Absent)
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DateValue::Absent => serializer.serialize_none(),
            DateValue::Invalid(raw) => serializer.serialize_str(raw),
            DateValue::Date(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(DateValue::from_raw(raw))
    }
}

/// A task with its three independent schedule dates and hierarchy links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    /// Hard deadline. Never promoted — an overdue deadline stays in its
    /// original week and is badged instead.
    #[serde(default)]
    pub deadline: DateValue,
    /// Soft "finish by" target; slides into the current week while open
    #[serde(default)]
    pub finish_by: DateValue,
    /// "Work on this" date; same promotion shape as finish_by
    #[serde(default)]
    pub todo: DateValue,
    /// When the task was marked completed; used only for late badging
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub completed: Option<NaiveDateTime>,
    /// Parent task id. Dangling references are treated as "no parent".
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Dot-delimited ancestor chain, kept as an opaque sort key
    #[serde(default)]
    pub path: String,
    /// Depth in the hierarchy, 0 for roots
    #[serde(default)]
    pub level: u32,
}

impl Task {
    /// Create a pending task with no dates and no parent
    pub fn new(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            status: Status::Pending,
            priority: Priority::default(),
            deadline: DateValue::Absent,
            finish_by: DateValue::Absent,
            todo: DateValue::Absent,
            completed: None,
            parent_id: None,
            path: String::new(),
            level: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// All three schedule fields cleanly absent. An `Invalid` date counts as
    /// present here: the task has a date, it is just unusable.
    pub fn has_no_dates(&self) -> bool {
        self.deadline.is_absent() && self.finish_by.is_absent() && self.todo.is_absent()
    }

    /// Effective date for the roll-up view: deadline, then finish_by, then
    /// todo, first usable value wins.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.deadline
            .as_date()
            .or_else(|| self.finish_by.as_date())
            .or_else(|| self.todo.as_date())
    }

    /// Date key for display ordering: todo, then deadline, then finish_by.
    /// Distinct from `effective_date` — display order favors the day the
    /// work is planned, the roll-up favors the day it is owed.
    pub fn sort_date(&self) -> Option<NaiveDate> {
        self.todo
            .as_date()
            .or_else(|| self.deadline.as_date())
            .or_else(|| self.finish_by.as_date())
    }

    /// Sort key for hierarchical ordering; falls back to the id when the
    /// snapshot carries no path.
    pub fn sort_path(&self) -> &str {
        if self.path.is_empty() { &self.id } else { &self.path }
    }
}

/// Accept either a full timestamp or a bare date for `completed`; anything
/// else reads as "not recorded" rather than failing the whole snapshot.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            })
    }))
}
