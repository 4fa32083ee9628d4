use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::task::Task;

/// Stable total order applied to every list the engine returns:
/// hierarchical path, then level (parents before descendants), then
/// completed-before-incomplete, then scheduled date, then id.
///
/// Completed-first holds everywhere, including the roll-up view — a finished
/// subtree settles at the top of its group.
pub fn sort_tasks(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| compare(a, b));
}

pub fn compare(a: &Task, b: &Task) -> Ordering {
    a.sort_path()
        .cmp(b.sort_path())
        .then_with(|| a.level.cmp(&b.level))
        .then_with(|| completed_rank(a).cmp(&completed_rank(b)))
        .then_with(|| date_key(a).cmp(&date_key(b)))
        .then_with(|| a.id.cmp(&b.id))
}

fn completed_rank(task: &Task) -> u8 {
    if task.is_completed() { 0 } else { 1 }
}

/// Undated tasks sort after dated ones.
fn date_key(task: &Task) -> (bool, Option<NaiveDate>) {
    let date = task.sort_date();
    (date.is_none(), date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{DateValue, Status};

    fn task(id: &str, path: &str, level: u32) -> Task {
        let mut t = Task::new(id, id);
        t.path = path.to_string();
        t.level = level;
        t
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_path_is_primary_key() {
        let a = task("T-2", "b", 0);
        let b = task("T-1", "a", 0);
        let mut list = vec![&a, &b];
        sort_tasks(&mut list);
        assert_eq!(ids(&list), vec!["T-1", "T-2"]);
    }

    #[test]
    fn test_parent_before_descendant_on_tied_path() {
        let parent = task("T-1", "x", 0);
        let child = task("T-2", "x", 1);
        let mut list = vec![&child, &parent];
        sort_tasks(&mut list);
        assert_eq!(ids(&list), vec!["T-1", "T-2"]);
    }

    #[test]
    fn test_completed_sorts_before_incomplete() {
        let mut done = task("T-2", "x", 0);
        done.status = Status::Completed;
        let open = task("T-1", "x", 0);
        let mut list = vec![&open, &done];
        sort_tasks(&mut list);
        assert_eq!(ids(&list), vec!["T-2", "T-1"]);
    }

    #[test]
    fn test_date_ascending_undated_last() {
        let mut early = task("T-3", "x", 0);
        early.todo = DateValue::from_raw(Some("2025-03-01".into()));
        let mut late = task("T-1", "x", 0);
        late.todo = DateValue::from_raw(Some("2025-03-05".into()));
        let undated = task("T-2", "x", 0);
        let mut list = vec![&undated, &late, &early];
        sort_tasks(&mut list);
        assert_eq!(ids(&list), vec!["T-3", "T-1", "T-2"]);
    }

    #[test]
    fn test_id_breaks_final_ties() {
        let a = task("T-2", "x", 0);
        let b = task("T-1", "x", 0);
        let mut list = vec![&a, &b];
        sort_tasks(&mut list);
        assert_eq!(ids(&list), vec!["T-1", "T-2"]);
    }

    #[test]
    fn test_path_falls_back_to_id_when_empty() {
        let a = Task::new("B-1", "b");
        let b = Task::new("A-1", "a");
        let mut list = vec![&a, &b];
        sort_tasks(&mut list);
        assert_eq!(ids(&list), vec!["A-1", "B-1"]);
    }

    #[test]
    fn test_sort_is_deterministic() {
        let mut x = task("T-1", "p", 0);
        x.todo = DateValue::from_raw(Some("2025-03-04".into()));
        let y = task("T-2", "p.q", 1);
        let z = task("T-3", "p.q", 1);
        let mut first = vec![&z, &x, &y];
        let mut second = vec![&y, &z, &x];
        sort_tasks(&mut first);
        sort_tasks(&mut second);
        assert_eq!(ids(&first), ids(&second));
    }
}
