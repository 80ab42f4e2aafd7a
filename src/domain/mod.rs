pub mod drag;
pub mod enums;
pub mod task;
pub mod views;

pub use drag::DragState;
pub use enums::{TaskStatus, UiMode};
pub use task::{Task, TaskPatch};
pub use views::{escape_html, BoardView, Bucket, CardView};
