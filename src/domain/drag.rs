use super::enums::TaskStatus;

/// Drag-and-drop lifecycle: idle, or carrying one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: u64,
        /// Column currently highlighted as drop target
        over: Option<TaskStatus>,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Id of the card being carried
    pub fn task_id(&self) -> Option<u64> {
        match self {
            DragState::Dragging { task_id, .. } => Some(*task_id),
            DragState::Idle => None,
        }
    }

    /// Column highlighted as drop target
    pub fn drop_target(&self) -> Option<TaskStatus> {
        match self {
            DragState::Dragging { over, .. } => *over,
            DragState::Idle => None,
        }
    }

    /// Move the highlight; ignored when idle
    pub fn hover(&mut self, column: Option<TaskStatus>) {
        if let DragState::Dragging { over, .. } = self {
            *over = column;
        }
    }

    /// End the drag, yielding `(task_id, target)` when released over a column.
    /// Always leaves the state idle.
    pub fn finish(&mut self) -> Option<(u64, TaskStatus)> {
        let result = match *self {
            DragState::Dragging {
                task_id,
                over: Some(target),
            } => Some((task_id, target)),
            _ => None,
        };
        *self = DragState::Idle;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_over_column() {
        let mut drag = DragState::Dragging { task_id: 4, over: None };
        drag.hover(Some(TaskStatus::Done));

        assert_eq!(drag.drop_target(), Some(TaskStatus::Done));
        assert_eq!(drag.finish(), Some((4, TaskStatus::Done)));
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_release_outside_columns_cancels() {
        let mut drag = DragState::Dragging {
            task_id: 4,
            over: Some(TaskStatus::Todo),
        };
        drag.hover(None);

        assert_eq!(drag.finish(), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_hover_when_idle_is_ignored() {
        let mut drag = DragState::Idle;
        drag.hover(Some(TaskStatus::Done));
        assert_eq!(drag, DragState::Idle);
        assert_eq!(drag.finish(), None);
    }
}
