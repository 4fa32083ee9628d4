use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::model::task::Task;
use crate::model::week::WeekEvent;

/// The storage collaborator's interface: full, unfiltered snapshots. The
/// engine only ever sees the returned slices and never mutates them.
pub trait TaskSource {
    fn list_tasks(&self) -> &[Task];
    fn list_week_events(&self) -> &[WeekEvent];
}

/// Error type for snapshot loading
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed snapshot {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A read-only snapshot loaded from a JSON file. Validation is lenient per
/// the model's serde boundary: missing collections default to empty,
/// unparseable task dates become `DateValue::Invalid`, and unknown fields
/// are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub week_events: Vec<WeekEvent>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Snapshot, StoreError> {
        let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

impl TaskSource for Snapshot {
    fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn list_week_events(&self) -> &[WeekEvent] {
        &self.week_events
    }
}
