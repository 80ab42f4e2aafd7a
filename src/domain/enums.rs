use serde::{Deserialize, Serialize};

/// Workflow stage of a task; decides which column it is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Columns in board order (left to right)
    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    }

    /// Parse the persisted/CLI form ("todo", "in_progress", "done")
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "todo" => Some(Self::Todo),
            "in_progress" | "progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Hint shown in place of cards when the column is empty
    pub fn empty_hint(&self) -> &'static str {
        match self {
            Self::Todo => "Nothing to do yet. Press 'a' to add a task.",
            Self::InProgress => "Drag a task here to start working on it.",
            Self::Done => "Finished tasks will land here.",
        }
    }

    /// Position of this column on the board
    pub fn index(&self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Column to the left, saturating at the first column
    pub fn prev(&self) -> Self {
        match self {
            Self::Todo | Self::InProgress => Self::Todo,
            Self::Done => Self::InProgress,
        }
    }

    /// Column to the right, saturating at the last column
    pub fn next(&self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress | Self::Done => Self::Done,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,
    Dragging,
}
