use indexmap::IndexMap;

use crate::model::task::Task;

/// Global urgency ranking: dense 1-based ranks over the open tasks that
/// carry a usable deadline, ordered by (deadline, priority, id). The id key
/// is not in the urgency semantics — it only pins ties so the ranking is
/// fully deterministic. Tasks outside the subset are absent from the map.
///
/// The map iterates in rank order.
pub fn calculate_work_order(tasks: &[Task]) -> IndexMap<String, usize> {
    let mut ranked: Vec<&Task> = tasks
        .iter()
        .filter(|t| !t.is_completed() && t.deadline.as_date().is_some())
        .collect();

    ranked.sort_by(|a, b| {
        a.deadline
            .as_date()
            .cmp(&b.deadline.as_date())
            .then_with(|| a.priority.cmp(&b.priority))
            .then_with(|| a.id.cmp(&b.id))
    });

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, t)| (t.id.clone(), i + 1))
        .collect()
}
