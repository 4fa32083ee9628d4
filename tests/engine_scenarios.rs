//! End-to-end scenarios for the visibility and promotion engine, built
//! around one reference setup: today is Friday 2025-03-07, so the current
//! week runs Mon 2025-03-03 through Sun 2025-03-09.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use weekplan::engine::{
    Column, calculate_work_order, is_promoted, open_todos_up_to_current_week, tasks_for_week,
};
use weekplan::model::task::{DateValue, Priority, Status, Task};
use weekplan::model::week::Week;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn today() -> NaiveDate {
    d("2025-03-07")
}

fn current_week() -> Week {
    Week::containing(today())
}

fn date(s: &str) -> DateValue {
    DateValue::from_raw(Some(s.to_string()))
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

// ---------------------------------------------------------------------------
// X open, Y completed, both finish-by in the prior week
// ---------------------------------------------------------------------------

#[test]
fn open_task_promotes_completed_task_stays() {
    let mut x = Task::new("X", "still open");
    x.finish_by = date("2025-02-26");
    let mut y = Task::new("Y", "finished on time");
    y.finish_by = date("2025-02-26");
    y.status = Status::Completed;
    let tasks = vec![x, y];
    let previous = current_week().prev();

    // X has been promoted away from its original week...
    let out = tasks_for_week(&tasks, previous, today(), Column::FinishBy);
    assert_eq!(ids(&out), vec!["Y"]);

    // ...and now lives in the current week's column; Y stayed put.
    let out = tasks_for_week(&tasks, current_week(), today(), Column::FinishBy);
    assert_eq!(ids(&out), vec!["X"]);

    // The past week still knows X's original home, for ghost rendering.
    assert!(is_promoted(&tasks[0], Column::FinishBy, previous, today()));
    assert!(!is_promoted(&tasks[1], Column::FinishBy, previous, today()));
}

// ---------------------------------------------------------------------------
// Deadline immutability
// ---------------------------------------------------------------------------

#[test]
fn overdue_deadline_never_relocates() {
    let mut task = Task::new("T-1", "hard deadline");
    task.deadline = date("2025-02-27");
    let tasks = vec![task];
    let previous = current_week().prev();

    let out = tasks_for_week(&tasks, previous, today(), Column::Deadline);
    assert_eq!(ids(&out), vec!["T-1"]);
    let out = tasks_for_week(&tasks, current_week(), today(), Column::Deadline);
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// No-date catch-all
// ---------------------------------------------------------------------------

#[test]
fn dateless_pending_task_only_in_current_todo() {
    let tasks = vec![Task::new("T-1", "undated idea")];

    let out = tasks_for_week(&tasks, current_week(), today(), Column::Todo);
    assert_eq!(ids(&out), vec!["T-1"]);

    for week in [
        current_week().prev(),
        current_week().next(),
        current_week().prev().prev(),
    ] {
        assert!(tasks_for_week(&tasks, week, today(), Column::Todo).is_empty());
    }
}

// ---------------------------------------------------------------------------
// Ancestor inclusion
// ---------------------------------------------------------------------------

#[test]
fn visible_grandchild_pulls_completed_dateless_ancestors() {
    let mut grandparent = Task::new("A", "project");
    grandparent.status = Status::Completed;
    grandparent.path = "A".into();
    let mut parent = Task::new("B", "phase");
    parent.parent_id = Some("A".into());
    parent.path = "A.B".into();
    parent.level = 1;
    let mut child = Task::new("C", "the actual work");
    child.parent_id = Some("B".into());
    child.path = "A.B.C".into();
    child.level = 2;
    child.todo = date("2025-03-05");
    let tasks = vec![parent, child, grandparent];

    let out = tasks_for_week(&tasks, current_week(), today(), Column::Todo);
    assert_eq!(ids(&out), vec!["A", "B", "C"]);

    // Ancestors only: a sibling under B does not ride along
    let mut sibling = Task::new("D", "unrelated");
    sibling.parent_id = Some("B".into());
    sibling.path = "A.B.D".into();
    sibling.level = 2;
    let mut tasks = tasks;
    tasks.push(sibling);
    let out = tasks_for_week(&tasks, current_week(), today(), Column::Todo);
    assert!(!out.iter().any(|t| t.id == "D"));
}

// ---------------------------------------------------------------------------
// Cycle safety
// ---------------------------------------------------------------------------

#[test]
fn parent_cycle_returns_in_bounded_time() {
    let mut a = Task::new("A", "half of a loop");
    a.parent_id = Some("B".into());
    a.todo = date("2025-03-05");
    let mut b = Task::new("B", "other half");
    b.parent_id = Some("A".into());
    let tasks = vec![a, b];

    for column in [Column::Deadline, Column::FinishBy, Column::Todo] {
        let out = tasks_for_week(&tasks, current_week(), today(), column);
        assert!(out.len() <= 2);
    }
    let out = open_todos_up_to_current_week(&tasks, current_week(), today());
    assert_eq!(out.len(), 2);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn identical_inputs_give_identical_outputs() {
    let mut a = Task::new("T-1", "one");
    a.finish_by = date("2025-02-26");
    let mut b = Task::new("T-2", "two");
    b.deadline = date("2025-03-05");
    let c = Task::new("T-3", "three");
    let tasks = vec![a, b, c];

    for column in [Column::Deadline, Column::FinishBy, Column::Todo] {
        let first = ids(&tasks_for_week(&tasks, current_week(), today(), column));
        let second = ids(&tasks_for_week(&tasks, current_week(), today(), column));
        assert_eq!(first, second);
    }
    assert_eq!(
        calculate_work_order(&tasks),
        calculate_work_order(&tasks)
    );
}

#[test]
fn engine_does_not_mutate_input() {
    let mut a = Task::new("T-1", "one");
    a.finish_by = date("2025-02-26");
    let tasks = vec![a];
    let before = tasks.clone();
    let _ = tasks_for_week(&tasks, current_week(), today(), Column::FinishBy);
    let _ = open_todos_up_to_current_week(&tasks, current_week(), today());
    let _ = calculate_work_order(&tasks);
    assert_eq!(tasks, before);
}

// ---------------------------------------------------------------------------
// Work-order density
// ---------------------------------------------------------------------------

#[test]
fn work_order_is_dense_and_urgency_sorted() {
    let mut tasks = Vec::new();
    for (id, deadline, priority) in [
        ("T-1", "2025-03-12", Priority::P2),
        ("T-2", "2025-03-05", Priority::P1),
        ("T-3", "2025-03-05", Priority::P0),
        ("T-4", "2025-03-20", Priority::P0),
    ] {
        let mut t = Task::new(id, id);
        t.deadline = date(deadline);
        t.priority = priority;
        tasks.push(t);
    }
    // Completed and deadline-less tasks take no rank
    let mut done = Task::new("T-5", "done");
    done.deadline = date("2025-03-01");
    done.status = Status::Completed;
    tasks.push(done);
    tasks.push(Task::new("T-6", "no deadline"));

    let order = calculate_work_order(&tasks);
    assert_eq!(order.len(), 4);
    let mut ranks: Vec<usize> = order.values().copied().collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert_eq!(order["T-3"], 1);
    assert_eq!(order["T-2"], 2);
    assert_eq!(order["T-1"], 3);
    assert_eq!(order["T-4"], 4);
}

// ---------------------------------------------------------------------------
// A fuller week: all three columns over a mixed snapshot
// ---------------------------------------------------------------------------

#[test]
fn mixed_snapshot_week_view() {
    let snapshot: Vec<Task> = serde_json::from_str(
        r#"[
            {"id": "T-1", "title": "Quarterly report", "priority": "P0",
             "deadline": "2025-03-07"},
            {"id": "T-2", "title": "Review slides", "finishBy": "2025-03-08"},
            {"id": "T-3", "title": "Slipped chore", "finishBy": "2025-02-25"},
            {"id": "T-4", "title": "Done last week", "status": "completed",
             "finishBy": "2025-02-25"},
            {"id": "T-5", "title": "Someday idea"},
            {"id": "T-6", "title": "Next week prep", "todo": "2025-03-11"}
        ]"#,
    )
    .unwrap();

    let deadline = tasks_for_week(&snapshot, current_week(), today(), Column::Deadline);
    assert_eq!(ids(&deadline), vec!["T-1"]);

    let finish_by = tasks_for_week(&snapshot, current_week(), today(), Column::FinishBy);
    assert_eq!(ids(&finish_by), vec!["T-2", "T-3"]);

    let todo = tasks_for_week(&snapshot, current_week(), today(), Column::Todo);
    assert_eq!(ids(&todo), vec!["T-5"]);

    let next_todo = tasks_for_week(&snapshot, current_week().next(), today(), Column::Todo);
    assert_eq!(ids(&next_todo), vec!["T-6"]);

    let past_finish = tasks_for_week(&snapshot, current_week().prev(), today(), Column::FinishBy);
    assert_eq!(ids(&past_finish), vec!["T-4"]);

    // The roll-up keeps slipped and undated open work; open tasks scheduled
    // inside the week via deadline/finish-by belong to the columns instead.
    let open = open_todos_up_to_current_week(&snapshot, current_week(), today());
    assert_eq!(ids(&open), vec!["T-3", "T-5"]);
}
