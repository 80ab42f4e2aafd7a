use crate::config::Settings;
use crate::domain::{BoardView, DragState, TaskPatch, TaskStatus, UiMode};
use crate::store::TaskStore;
use ratatui::{layout::Rect, widgets::ListState};

/// New-task input state
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub text: String,
}

/// Inline edit of one card's text
#[derive(Debug, Clone)]
pub struct EditState {
    pub task_id: u64,
    pub buffer: String,
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    /// Projection of `store`, rebuilt whenever the store's revision moves
    pub view: BoardView,
    view_revision: u64,
    pub ui_mode: UiMode,
    pub selected_column: TaskStatus,
    pub selected_row: usize,
    pub input_form: Option<InputFormState>,
    pub editing: Option<EditState>,
    pub drag: DragState,
    pub settings: Settings,
    /// Screen areas of the three columns from the last draw, for mouse hit tests
    pub column_areas: [Rect; 3],
    /// Scroll position of each column's list, kept between draws
    pub column_states: [ListState; 3],
}

impl AppState {
    pub fn new(store: TaskStore, settings: Settings) -> Self {
        let view = BoardView::project(store.tasks());
        let view_revision = store.revision();

        Self {
            store,
            view,
            view_revision,
            ui_mode: UiMode::Normal,
            selected_column: TaskStatus::Todo,
            selected_row: 0,
            input_form: None,
            editing: None,
            drag: DragState::Idle,
            settings,
            column_areas: [Rect::default(); 3],
            column_states: Default::default(),
        }
    }

    /// Rebuild the view from the store if it changed since the last build
    pub fn refresh_view(&mut self) {
        if self.store.revision() != self.view_revision {
            self.view = BoardView::project(self.store.tasks());
            self.view_revision = self.store.revision();
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let count = self.view.bucket(self.selected_column).count();
        if count == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= count {
            self.selected_row = count - 1;
        }
    }

    /// Id of the highlighted card, if its column has any
    pub fn selected_task_id(&self) -> Option<u64> {
        self.view
            .bucket(self.selected_column)
            .cards
            .get(self.selected_row)
            .map(|c| c.id)
    }

    /// Point the selection at a task wherever it currently sits
    fn select_task(&mut self, id: u64) {
        for bucket in &self.view.buckets {
            if let Some(row) = bucket.cards.iter().position(|c| c.id == id) {
                self.selected_column = bucket.status;
                self.selected_row = row;
                return;
            }
        }
    }

    pub fn move_column_left(&mut self) {
        self.selected_column = self.selected_column.prev();
        self.clamp_selection();
    }

    pub fn move_column_right(&mut self) {
        self.selected_column = self.selected_column.next();
        self.clamp_selection();
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let count = self.view.bucket(self.selected_column).count();
        if self.selected_row + 1 < count {
            self.selected_row += 1;
        }
    }

    /// Open the new-task input (focused, empty)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.text.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.text.pop();
        }
    }

    /// Create a todo from the input. On success the input clears and keeps
    /// focus for the next entry; blank input is ignored.
    pub fn submit_input_form(&mut self) {
        let Some(form) = &mut self.input_form else {
            return;
        };

        if let Some(id) = self.store.create(&form.text, TaskStatus::Todo) {
            form.text.clear();
            self.refresh_view();
            self.select_task(id);
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Start editing the selected card in place
    pub fn start_edit_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let Some(task) = self.store.get(id) else {
            return;
        };

        self.editing = Some(EditState {
            task_id: id,
            buffer: task.text.clone(),
        });
        self.ui_mode = UiMode::EditingTask;
    }

    pub fn edit_add_char(&mut self, c: char) {
        if let Some(edit) = &mut self.editing {
            edit.buffer.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.buffer.pop();
        }
    }

    /// Leave the editor, committing its text. Blank text keeps the old text.
    pub fn commit_edit(&mut self) {
        let Some(edit) = self.editing.take() else {
            return;
        };
        if self.ui_mode == UiMode::EditingTask {
            self.ui_mode = UiMode::Normal;
        }

        let text = edit.buffer.trim();
        if !text.is_empty() {
            self.store.update(edit.task_id, TaskPatch::text(text));
            self.refresh_view();
        }
    }

    /// Delete the selected card, no confirmation
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.delete(id);
            self.refresh_view();
        }
    }

    /// Pick up a card. An open inline edit is committed first, so the drop
    /// lands after it in commit order.
    pub fn begin_drag(&mut self, task_id: u64, over: Option<TaskStatus>) {
        if self.editing.is_some() {
            self.commit_edit();
        }
        if self.store.get(task_id).is_none() {
            return;
        }

        self.drag = DragState::Dragging { task_id, over };
        self.ui_mode = UiMode::Dragging;
    }

    /// Pick up the selected card, targeting its own column
    pub fn begin_drag_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.begin_drag(id, Some(self.selected_column));
        }
    }

    /// Highlight a drop target (`None` when outside every column)
    pub fn drag_over(&mut self, column: Option<TaskStatus>) {
        self.drag.hover(column);
    }

    pub fn drag_target_left(&mut self) {
        let target = self.drag.drop_target().map(|s| s.prev()).unwrap_or(TaskStatus::Todo);
        self.drag.hover(Some(target));
    }

    pub fn drag_target_right(&mut self) {
        let target = self.drag.drop_target().map(|s| s.next()).unwrap_or(TaskStatus::Done);
        self.drag.hover(Some(target));
    }

    /// Release the card: move it to the highlighted column if there is one,
    /// then clear all drag state either way
    pub fn drop_drag(&mut self) {
        let dropped = self.drag.finish();
        self.ui_mode = UiMode::Normal;

        if let Some((task_id, target)) = dropped {
            self.store.update(task_id, TaskPatch::status(target));
            self.refresh_view();
            self.select_task(task_id);
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
        self.ui_mode = UiMode::Normal;
    }

    /// Column under a screen position
    pub fn column_at(&self, x: u16, y: u16) -> Option<TaskStatus> {
        TaskStatus::all()
            .into_iter()
            .find(|s| rect_contains(self.column_areas[s.index()], x, y))
    }

    /// Card under a screen position, as (column, row). Accounts for the
    /// column's scroll offset.
    pub fn card_at(&self, x: u16, y: u16) -> Option<(TaskStatus, usize)> {
        let status = self.column_at(x, y)?;
        let area = self.column_areas[status.index()];
        // First card sits just below the top border
        let first_row = area.y + 1;
        if y < first_row || y + 1 >= area.y + area.height {
            return None;
        }
        let row = (y - first_row) as usize + self.column_states[status.index()].offset();
        (row < self.view.bucket(status).count()).then_some((status, row))
    }

    /// Select the card at (column, row)
    pub fn select_card(&mut self, column: TaskStatus, row: usize) {
        self.selected_column = column;
        self.selected_row = row;
        self.clamp_selection();
    }
}

fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
