use crate::domain::{Task, TaskPatch, TaskStatus};
use crate::error::StorageResult;
use crate::persistence::{load_snapshot, save_snapshot, KeyValueStore};

/// Authoritative task list plus id counter, written through to storage
/// after every mutation.
///
/// Lookups by unknown id are not errors: `update` and `delete` quietly do
/// nothing and report `false`.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    storage: Box<dyn KeyValueStore>,
    /// Bumped on every mutation so views know when to rebuild
    revision: u64,
    /// Set while the persisted copy lags behind memory
    stale: bool,
}

impl TaskStore {
    /// Load from storage, defaulting to an empty board
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let snapshot = load_snapshot(storage.as_ref());
        tracing::info!(
            tasks = snapshot.tasks.len(),
            next_id = snapshot.next_id,
            "Loaded task store"
        );

        Self {
            tasks: snapshot.tasks,
            next_id: snapshot.next_id,
            storage,
            revision: 0,
            stale: false,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    #[cfg(test)]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the last write-through failed
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task. Blank text is rejected and yields `None`, as does
    /// an exhausted id counter.
    pub fn create(&mut self, text: &str, status: TaskStatus) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id;
        let Some(next_id) = id.checked_add(1) else {
            tracing::warn!(next_id = id, "Task ids exhausted; not creating task");
            return None;
        };
        self.next_id = next_id;
        self.tasks.push(Task::new(id, text.to_string(), status));
        tracing::debug!(id, status = status.to_tag(), "Created task");

        self.commit();
        Some(id)
    }

    /// Merge `patch` over the task with `id`
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        task.apply(patch);
        tracing::debug!(id, status = task.status.to_tag(), "Updated task");

        self.commit();
        true
    }

    /// Remove the task with `id`
    pub fn delete(&mut self, id: u64) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };

        self.tasks.remove(index);
        tracing::debug!(id, "Deleted task");

        self.commit();
        true
    }

    /// Hand the storage back, e.g. to reload from it
    #[cfg(test)]
    pub fn into_storage(self) -> Box<dyn KeyValueStore> {
        self.storage
    }

    fn commit(&mut self) {
        self.revision += 1;
        self.persist();
    }

    /// Write-through with one retry. A second failure is logged and the
    /// in-memory state kept; the next successful write carries the full
    /// snapshot and heals the stored copy.
    fn persist(&mut self) {
        let result = self.write_snapshot().or_else(|first| {
            tracing::debug!(error = %first, "Persist failed; retrying once");
            self.write_snapshot()
        });

        match result {
            Ok(()) => {
                if self.stale {
                    tracing::info!("Persisted copy caught up with memory");
                }
                self.stale = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to persist tasks; keeping in-memory state");
                self.stale = true;
            }
        }
    }

    fn write_snapshot(&mut self) -> StorageResult<()> {
        save_snapshot(self.storage.as_mut(), &self.tasks, self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::persistence::{FileKvStore, MemoryKvStore};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn empty_store() -> TaskStore {
        TaskStore::load(Box::new(MemoryKvStore::new()))
    }

    /// Storage whose writes fail until `failures_left` runs out
    struct FlakyStore {
        inner: MemoryKvStore,
        failures_left: Rc<Cell<u32>>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
            let left = self.failures_left.get();
            if left > 0 {
                self.failures_left.set(left - 1);
                return Err(StorageError::Write {
                    key: key.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
                });
            }
            self.inner.set(key, value)
        }

    }

    #[test]
    fn test_create_rejects_blank_text() {
        let mut store = empty_store();

        assert_eq!(store.create("", TaskStatus::Todo), None);
        assert_eq!(store.create("   ", TaskStatus::Todo), None);
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_create_appends_todo_with_next_id() {
        let mut store = empty_store();
        let before = store.next_id();

        let id = store.create("Buy milk", TaskStatus::Todo).unwrap();

        assert_eq!(id, before);
        assert_eq!(store.next_id(), before + 1);
        assert_eq!(store.len(), 1);

        let task = store.get(id).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.created_at, task.updated_at);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_create_done_leaves_completed_at_unset() {
        let mut store = empty_store();
        let id = store.create("Already shipped", TaskStatus::Done).unwrap();

        let task = store.get(id).unwrap();
        assert_eq!(task.status, TaskStatus::Done);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_create_with_exhausted_ids() {
        let storage = MemoryKvStore::with_entries([("taskFlowNextId", u64::MAX.to_string())]);
        let mut store = TaskStore::load(Box::new(storage));
        assert_eq!(store.next_id(), u64::MAX);

        assert_eq!(store.create("x", TaskStatus::Todo), None);
        assert!(store.is_empty());
        assert_eq!(store.next_id(), u64::MAX);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_create_trims_text() {
        let mut store = empty_store();
        let id = store.create("  Buy milk \n", TaskStatus::Todo).unwrap();
        assert_eq!(store.get(id).unwrap().text, "Buy milk");
    }

    #[test]
    fn test_ids_distinct_and_increasing() {
        let mut store = empty_store();
        let ids: Vec<u64> = ["a", "b", "c", "d"]
            .iter()
            .filter_map(|t| store.create(t, TaskStatus::Todo))
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = empty_store();
        let a = store.create("a", TaskStatus::Todo).unwrap();
        store.delete(a);

        let b = store.create("b", TaskStatus::Todo).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_update_status_tracks_completed_at() {
        let mut store = empty_store();
        let id = store.create("Ship", TaskStatus::Todo).unwrap();

        assert!(store.update(id, TaskPatch::status(TaskStatus::Done)));
        assert!(store.get(id).unwrap().completed_at.is_some());

        assert!(store.update(id, TaskPatch::status(TaskStatus::Todo)));
        assert!(store.get(id).unwrap().completed_at.is_none());
    }

    #[test]
    fn test_update_merges_only_given_fields() {
        let mut store = empty_store();
        let id = store.create("Draft", TaskStatus::InProgress).unwrap();
        let created_at = store.get(id).unwrap().created_at;

        store.update(id, TaskPatch::text("Final"));

        let task = store.get(id).unwrap();
        assert_eq!(task.text, "Final");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.created_at, created_at);
        assert!(task.updated_at >= created_at);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = empty_store();
        store.create("a", TaskStatus::Todo);
        let before = store.tasks().to_vec();
        let revision = store.revision();

        assert!(!store.update(99, TaskPatch::status(TaskStatus::Done)));
        assert!(!store.delete(99));

        assert_eq!(store.tasks(), before.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = empty_store();
        let a = store.create("a", TaskStatus::Todo).unwrap();
        let b = store.create("b", TaskStatus::Todo).unwrap();
        let c = store.create("c", TaskStatus::Todo).unwrap();

        assert!(store.delete(b));

        assert_eq!(store.len(), 2);
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_reload_reproduces_state() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FileKvStore::open(temp_dir.path()).unwrap();
        let mut store = TaskStore::load(Box::new(storage));

        let a = store.create("a", TaskStatus::Todo).unwrap();
        let b = store.create("b", TaskStatus::Todo).unwrap();
        store.update(b, TaskPatch::status(TaskStatus::Done));
        store.delete(a);
        store.create("c", TaskStatus::InProgress);

        let tasks = store.tasks().to_vec();
        let next_id = store.next_id();

        let reloaded = TaskStore::load(store.into_storage());
        assert_eq!(reloaded.tasks(), tasks.as_slice());
        assert_eq!(reloaded.next_id(), next_id);

        // And from a fresh handle on the same directory
        let fresh = TaskStore::load(Box::new(FileKvStore::open(temp_dir.path()).unwrap()));
        assert_eq!(fresh.tasks(), tasks.as_slice());
        assert_eq!(fresh.next_id(), next_id);
    }

    #[test]
    fn test_persist_retries_once() {
        let failures = Rc::new(Cell::new(1));
        let storage = FlakyStore {
            inner: MemoryKvStore::new(),
            failures_left: failures.clone(),
        };
        let mut store = TaskStore::load(Box::new(storage));

        store.create("a", TaskStatus::Todo);

        assert!(!store.is_stale());
        assert_eq!(failures.get(), 0);
        let reloaded = TaskStore::load(store.into_storage());
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_persist_failure_keeps_memory_and_heals_later() {
        let failures = Rc::new(Cell::new(2));
        let storage = FlakyStore {
            inner: MemoryKvStore::new(),
            failures_left: failures.clone(),
        };
        let mut store = TaskStore::load(Box::new(storage));

        store.create("a", TaskStatus::Todo);
        assert!(store.is_stale());
        assert_eq!(store.len(), 1);

        store.create("b", TaskStatus::Todo);
        assert!(!store.is_stale());

        let reloaded = TaskStore::load(store.into_storage());
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.next_id(), 3);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut store = empty_store();
        let a = store.create("A", TaskStatus::Todo).unwrap();
        let b = store.create("B", TaskStatus::Todo).unwrap();
        store.update(b, TaskPatch::status(TaskStatus::InProgress));
        store.delete(a);

        assert_eq!(store.len(), 1);
        let task = &store.tasks()[0];
        assert_eq!(task.id, b);
        assert_eq!(task.text, "B");
        assert_eq!(task.status, TaskStatus::InProgress);

        let view = crate::domain::BoardView::project(store.tasks());
        assert_eq!(view.counts(), (0, 1, 0));
    }
}
