use super::kv::KeyValueStore;
use crate::domain::Task;
use crate::error::StorageResult;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Key holding the JSON array of tasks
pub const TASKS_KEY: &str = "taskFlowTasks";
/// Key holding the next id to allocate
pub const NEXT_ID_KEY: &str = "taskFlowNextId";

/// Board contents as read back from storage
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub next_id: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

/// Read one key and decode it, treating absent, unreadable and corrupt
/// values alike as missing
fn read_key<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored value; using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored value is corrupt; using default");
            None
        }
    }
}

/// Load both keys, each falling back to its default independently.
///
/// The result always satisfies the store invariants: ids are unique (first
/// occurrence wins) and `next_id` is greater than every id.
pub fn load_snapshot(storage: &dyn KeyValueStore) -> Snapshot {
    let tasks: Vec<Task> = read_key(storage, TASKS_KEY).unwrap_or_default();
    let stored_next_id: u64 = read_key(storage, NEXT_ID_KEY).unwrap_or(1);

    // u64::MAX leaves no room for a next id
    let total = tasks.len();
    let tasks: Vec<Task> = tasks.into_iter().filter(|t| t.id < u64::MAX).collect();
    if tasks.len() != total {
        tracing::warn!(dropped = total - tasks.len(), "Dropped tasks with out-of-range ids");
    }

    let mut seen = HashSet::new();
    let total = tasks.len();
    let tasks: Vec<Task> = tasks.into_iter().filter(|t| seen.insert(t.id)).collect();
    if tasks.len() != total {
        tracing::warn!(dropped = total - tasks.len(), "Dropped tasks with duplicate ids");
    }

    let min_next_id = tasks.iter().map(|t| t.id + 1).max().unwrap_or(1);
    let next_id = stored_next_id.max(min_next_id);
    if next_id != stored_next_id {
        tracing::warn!(stored_next_id, next_id, "Raised next id above existing tasks");
    }

    Snapshot { tasks, next_id }
}

/// Write both keys
pub fn save_snapshot(
    storage: &mut dyn KeyValueStore,
    tasks: &[Task],
    next_id: u64,
) -> StorageResult<()> {
    let tasks_json = serde_json::to_string(tasks)?;
    let next_id_json = serde_json::to_string(&next_id)?;
    storage.set(TASKS_KEY, &tasks_json)?;
    storage.set(NEXT_ID_KEY, &next_id_json)?;
    Ok(())
}
