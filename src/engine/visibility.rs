use chrono::NaiveDate;

use crate::model::task::{DateValue, Task};
use crate::model::week::{Week, WeekPosition};

use super::ancestors::{close_over_ancestors, index_by_id};
use super::sort::sort_tasks;

/// The three columns of a week view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Deadline,
    FinishBy,
    Todo,
}

impl Column {
    /// The task date field this column keys on.
    pub fn date_of<'a>(self, task: &'a Task) -> &'a DateValue {
        match self {
            Column::Deadline => &task.deadline,
            Column::FinishBy => &task.finish_by,
            Column::Todo => &task.todo,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Deadline => "Deadline",
            Column::FinishBy => "Finish by",
            Column::Todo => "Todo",
        }
    }
}

/// Tasks to show in one column of one week, with ancestors pulled in and the
/// canonical sort applied.
///
/// Deadlines never move: an overdue open deadline stays in its original
/// week. Finish-by and todo dates promote — an open task whose date has
/// passed slides into the current week's column and vanishes from the past
/// week's live list. Past weeks show only completed work. The todo column of
/// the current week additionally catches open tasks with no dates at all.
pub fn tasks_for_week<'a>(
    tasks: &'a [Task],
    week: Week,
    today: NaiveDate,
    column: Column,
) -> Vec<&'a Task> {
    let position = week.position(today);
    let selected: Vec<&Task> = tasks
        .iter()
        .filter(|t| in_column(t, week, position, column))
        .collect();

    let index = index_by_id(tasks);
    let mut out = close_over_ancestors(selected, &index);
    sort_tasks(&mut out);
    out
}

fn in_column(task: &Task, week: Week, position: WeekPosition, column: Column) -> bool {
    match column {
        Column::Deadline => task.deadline.as_date().is_some_and(|d| week.contains(d)),
        Column::FinishBy => scheduled_in(task, &task.finish_by, week, position),
        Column::Todo => {
            if scheduled_in(task, &task.todo, week, position) {
                return true;
            }
            // Catch-all: undated open work lands in the current week only.
            // Applies strictly to tasks with all three fields cleanly absent.
            position == WeekPosition::Current && task.has_no_dates() && !task.is_completed()
        }
    }
}

/// Promotion shape shared by the finish-by and todo columns.
fn scheduled_in(task: &Task, field: &DateValue, week: Week, position: WeekPosition) -> bool {
    let Some(date) = field.as_date() else {
        return false;
    };
    match position {
        // Past weeks keep only the work that actually got done there
        WeekPosition::Past => task.is_completed() && week.contains(date),
        // Current week: natives, plus open tasks promoted from any past week
        WeekPosition::Current => {
            week.contains(date) || (date < week.start() && !task.is_completed())
        }
        // No promotion into or across future weeks
        WeekPosition::Future => week.contains(date),
    }
}
