//! UI Components
//!
//! Reusable Leptos components.

mod board_column;
mod drag_overlay;
mod drop_to_delete;
mod new_item_form;
mod task_card;

pub use board_column::BoardColumn;
pub use drag_overlay::DragOverlay;
pub use drop_to_delete::DropToDelete;
pub use new_item_form::NewItemForm;
pub use task_card::TaskCard;
