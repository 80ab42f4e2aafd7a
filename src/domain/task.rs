use super::enums::TaskStatus;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Allocated from the store's counter, never reused
    pub id: u64,
    pub text: String,
    pub status: TaskStatus,
    /// Set once at creation
    pub created_at: DateTime<Local>,
    /// Overwritten on every mutation
    pub updated_at: DateTime<Local>,
    /// Stamped when the status moves into done, cleared when it leaves
    #[serde(default)]
    pub completed_at: Option<DateTime<Local>>,
}

/// Partial update merged over an existing task
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            status: None,
        }
    }

    pub fn status(status: TaskStatus) -> Self {
        Self {
            text: None,
            status: Some(status),
        }
    }
}

impl Task {
    pub fn new(id: u64, text: String, status: TaskStatus) -> Self {
        let now = Local::now();
        Self {
            id,
            text,
            status,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Merge a patch and stamp the mutation.
    ///
    /// `completed_at` follows transitions across the done boundary only:
    /// entering done stamps it, leaving done clears it, anything else keeps it.
    pub fn apply(&mut self, patch: TaskPatch) {
        let now = Local::now();
        let was_done = self.is_done();

        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }

        match (was_done, self.is_done()) {
            (false, true) => self.completed_at = Some(now),
            (true, false) => self.completed_at = None,
            _ => {}
        }

        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new(7, "Write report".to_string(), TaskStatus::Todo);
        assert_eq!(task.id, 7);
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.created_at, task.updated_at);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_task_new_done_has_no_completion_time() {
        let task = Task::new(3, "Already shipped".to_string(), TaskStatus::Done);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_apply_into_and_out_of_done() {
        let mut task = Task::new(1, "Ship it".to_string(), TaskStatus::InProgress);

        task.apply(TaskPatch::status(TaskStatus::Done));
        assert!(task.completed_at.is_some());

        task.apply(TaskPatch::status(TaskStatus::Todo));
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_apply_text_keeps_completed_at() {
        let mut task = Task::new(1, "Ship it".to_string(), TaskStatus::Todo);
        task.apply(TaskPatch::status(TaskStatus::Done));
        let completed = task.completed_at;

        task.apply(TaskPatch::text("Shipped"));
        assert_eq!(task.text, "Shipped");
        assert_eq!(task.completed_at, completed);
    }

    #[test]
    fn test_apply_always_touches_updated_at() {
        let mut task = Task::new(1, "Ship it".to_string(), TaskStatus::Todo);
        let created = task.created_at;

        task.apply(TaskPatch::default());
        assert!(task.updated_at >= created);
        assert_eq!(task.created_at, created);
    }

    #[test]
    fn test_json_field_names() {
        let task = Task::new(3, "Milk".to_string(), TaskStatus::Todo);
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["status"], "todo");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value["completedAt"].is_null());
    }
}
