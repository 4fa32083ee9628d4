use serde::Serialize;

use chrono::NaiveDate;

use crate::engine::{Column, completed_late, days_overdue, is_promoted};
use crate::model::task::{Priority, Status, Task};
use crate::model::week::{Week, WeekEvent, WeekPosition};
use crate::util::dates;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<String>,
    pub level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_overdue: Option<i64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub late: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ghost: bool,
}

#[derive(Serialize)]
pub struct ColumnJson {
    pub column: &'static str,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct WeekJson {
    pub start: String,
    pub end: String,
    pub position: &'static str,
    pub columns: Vec<ColumnJson>,
}

#[derive(Serialize)]
pub struct OpenJson {
    pub start: String,
    pub end: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct OrderEntryJson {
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub deadline: Option<String>,
}

#[derive(Serialize)]
pub struct EventJson {
    pub id: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task, today: NaiveDate, ghost: bool) -> TaskJson {
    TaskJson {
        id: task.id.clone(),
        title: task.title.clone(),
        status: task.status,
        priority: task.priority,
        deadline: task.deadline.as_date().map(iso),
        finish_by: task.finish_by.as_date().map(iso),
        todo: task.todo.as_date().map(iso),
        level: task.level,
        days_overdue: days_overdue(task, today),
        late: completed_late(task),
        ghost,
    }
}

pub fn event_to_json(event: &WeekEvent) -> EventJson {
    EventJson {
        id: event.id.clone(),
        start: event.start_date.as_date().map(iso),
        end: event.end_date.as_date().map(iso),
        description: event.description.clone(),
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn position_label(position: WeekPosition) -> &'static str {
    match position {
        WeekPosition::Past => "past",
        WeekPosition::Current => "current",
        WeekPosition::Future => "future",
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

pub fn week_header(week: Week, today: NaiveDate) -> String {
    format!(
        "Week of {} - {} ({})",
        dates::format_short(week.start()),
        dates::format_short(week.end()),
        position_label(week.position(today))
    )
}

/// One task line: checkbox, priority, id, title, then any badges.
pub fn task_line(task: &Task, column: Column, week: Week, today: NaiveDate) -> String {
    let indent = "  ".repeat(task.level as usize);
    let mut line = format!(
        "{}[{}] {:?} {} {}",
        indent,
        task.status.checkbox_char(),
        task.priority,
        task.id,
        task.title
    );

    if let Some(date) = column.date_of(task).as_date() {
        line.push_str(&format!(" ({})", dates::format_short(date)));
    }
    if let Some(days) = days_overdue(task, today) {
        line.push_str(&format!(" [{}d overdue]", days));
    }
    if completed_late(task) {
        line.push_str(" [late]");
    }
    if is_promoted(task, column, week, today) {
        line.push_str(" [ghost -> this week]");
    }
    line
}

/// A task line for the roll-up view, badged with its effective date.
pub fn open_task_line(task: &Task, today: NaiveDate) -> String {
    let indent = "  ".repeat(task.level as usize);
    let mut line = format!(
        "{}[{}] {:?} {} {}",
        indent,
        task.status.checkbox_char(),
        task.priority,
        task.id,
        task.title
    );
    if let Some(date) = task.effective_date() {
        line.push_str(&format!(" ({})", dates::format_short(date)));
    }
    if let Some(days) = days_overdue(task, today) {
        line.push_str(&format!(" [{}d overdue]", days));
    }
    line
}

pub fn event_line(event: &WeekEvent) -> String {
    let span = match (event.start_date.as_date(), event.end_date.as_date()) {
        (Some(a), Some(b)) if a == b => dates::format_short(a),
        (Some(a), Some(b)) => format!("{} - {}", dates::format_short(a), dates::format_short(b)),
        (Some(a), None) | (None, Some(a)) => dates::format_short(a),
        (None, None) => "undated".to_string(),
    };
    format!("  {} {}", span, event.description)
}
