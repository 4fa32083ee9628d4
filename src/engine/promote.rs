use chrono::NaiveDate;

use crate::model::task::Task;
use crate::model::week::{Week, WeekPosition};
use crate::util::dates;

use super::visibility::Column;

/// Whether `week` is this task's original home for the given column while
/// the task itself now lives in the current week.
///
/// This is a display concept only: the live column membership has already
/// excluded such tasks from the past week, and a renderer reviewing that
/// week with its original scheduling intact draws them as dimmed ghosts.
/// Deadlines never promote, so the deadline column never ghosts.
pub fn is_promoted(task: &Task, column: Column, week: Week, today: NaiveDate) -> bool {
    if column == Column::Deadline || task.is_completed() {
        return false;
    }
    if week.position(today) != WeekPosition::Past {
        return false;
    }
    column.date_of(task).as_date().is_some_and(|d| week.contains(d))
}

/// Days since the task's deadline passed, for overdue badging on open tasks.
/// `None` when there is no usable deadline, it has not passed, or the task
/// is already completed.
pub fn days_overdue(task: &Task, today: NaiveDate) -> Option<i64> {
    if task.is_completed() {
        return None;
    }
    let deadline = task.deadline.as_date()?;
    let days = dates::days_between(deadline, today);
    (days > 0).then_some(days)
}

/// A completed task still counts as late when its completion timestamp lands
/// after the deadline (or, lacking one, the finish-by day) it was given.
pub fn completed_late(task: &Task) -> bool {
    let Some(done) = task.completed else {
        return false;
    };
    task.deadline
        .as_date()
        .or_else(|| task.finish_by.as_date())
        .is_some_and(|target| done.date() > target)
}
