use std::collections::{HashMap, HashSet};

use crate::model::task::Task;

/// Index tasks by id for O(1) parent lookups during ancestor walks.
/// Built once per engine call; duplicate ids keep the first occurrence.
pub fn index_by_id(tasks: &[Task]) -> HashMap<&str, &Task> {
    let mut index = HashMap::with_capacity(tasks.len());
    for task in tasks {
        index.entry(task.id.as_str()).or_insert(task);
    }
    index
}

/// Expand a selection with every ancestor reachable through `parent_id`.
///
/// Ancestors are pulled in unconditionally — their own dates and status do
/// not matter; a completed, dateless grandparent still appears beside a
/// visible grandchild. Only the upward chain is added, never siblings or
/// children. A dangling `parent_id` ends the walk (the child is effectively
/// a root), and a visited set bounds each walk so cyclic chains terminate.
pub fn close_over_ancestors<'a>(
    selected: Vec<&'a Task>,
    index: &HashMap<&str, &'a Task>,
) -> Vec<&'a Task> {
    let mut have: HashSet<&str> = selected.iter().map(|t| t.id.as_str()).collect();
    let seeds = selected.clone();
    let mut out = selected;

    for task in seeds {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(task.id.as_str());

        let mut parent = task.parent_id.as_deref();
        while let Some(parent_id) = parent {
            if !visited.insert(parent_id) {
                break; // cycle
            }
            let Some(&ancestor) = index.get(parent_id) else {
                break; // dangling reference: treat as root
            };
            if have.insert(ancestor.id.as_str()) {
                out.push(ancestor);
            }
            parent = ancestor.parent_id.as_deref();
        }
    }
    out
}
