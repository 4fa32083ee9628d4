use chrono::NaiveDate;

use crate::model::task::Task;
use crate::model::week::{Week, WeekPosition};

use super::ancestors::{close_over_ancestors, index_by_id};
use super::sort::sort_tasks;

/// The coarse "what's outstanding as of this week" view, distinct from the
/// three per-column filters.
///
/// Past weeks answer "what got done here": completed tasks whose effective
/// date (deadline, else finish-by, else todo) fell inside the week. The
/// current week answers "what needs attention now": todo-dated work for this
/// week, undated open work, anything open that slipped from an earlier week,
/// and work completed against this week's deadline or finish-by so it stays
/// visible through its closing week. Future weeks are empty — the view is
/// not defined ahead of today.
pub fn open_todos_up_to_current_week<'a>(
    tasks: &'a [Task],
    week: Week,
    today: NaiveDate,
) -> Vec<&'a Task> {
    let selected: Vec<&Task> = match week.position(today) {
        WeekPosition::Past => tasks
            .iter()
            .filter(|t| {
                t.is_completed() && t.effective_date().is_some_and(|d| week.contains(d))
            })
            .collect(),
        WeekPosition::Current => tasks.iter().filter(|t| open_in_current(t, week)).collect(),
        WeekPosition::Future => return Vec::new(),
    };

    let index = index_by_id(tasks);
    let mut out = close_over_ancestors(selected, &index);
    sort_tasks(&mut out);
    out
}

fn open_in_current(task: &Task, week: Week) -> bool {
    if task.todo.as_date().is_some_and(|d| week.contains(d)) {
        return true;
    }
    if task.is_completed() {
        // Recently closed work stays visible in its closing week
        return task.deadline.as_date().is_some_and(|d| week.contains(d))
            || task.finish_by.as_date().is_some_and(|d| week.contains(d));
    }
    if task.has_no_dates() {
        return true;
    }
    any_date_before(task, week.start())
}

fn any_date_before(task: &Task, monday: NaiveDate) -> bool {
    [&task.deadline, &task.finish_by, &task.todo]
        .into_iter()
        .any(|f| f.as_date().is_some_and(|d| d < monday))
}
