//! Drag Overlay Component
//!
//! Floating copy of the dragged item that follows the pointer, plus a
//! hint line while dragging with the keyboard.

use leptos::prelude::*;
use leptos_dragdrop::DragSource;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Offset so the overlay does not sit under the pointer
const OVERLAY_OFFSET_PX: i32 = 12;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let active_text = move || {
        let id = store.drag().read().active().cloned()?;
        store.items().read().get(id.as_str()).map(|item| item.text.clone())
    };

    let style = move || {
        let (x, y) = ctx.dnd.pointer_read.get();
        format!("left: {}px; top: {}px;", x + OVERLAY_OFFSET_PX, y + OVERLAY_OFFSET_PX)
    };

    view! {
        {move || {
            let text = active_text()?;
            let overlay = match ctx.dnd.source_read.get()? {
                DragSource::Pointer => view! {
                    <div class="drag-overlay" style=style>
                        <span class="todo-text">{text}</span>
                    </div>
                }.into_any(),
                DragSource::Keyboard => view! {
                    <div class="drag-hint" role="status">
                        "Moving \"" {text} "\": arrow keys choose a target, Space drops, Escape cancels"
                    </div>
                }.into_any(),
            };
            Some(overlay)
        }}
    }
}
