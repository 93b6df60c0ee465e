//! Drop To Delete Component
//!
//! Drop target that deletes whatever item lands on it.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::DELETE_AREA_ID;

#[component]
pub fn DropToDelete() -> impl IntoView {
    let ctx = use_app_context();

    let is_over = move || ctx.over_id().as_deref() == Some(DELETE_AREA_ID);

    view! {
        <div
            class=move || {
                let mut c = "delete-area".to_string();
                if ctx.is_dragging() { c.push_str(" armed"); }
                if is_over() { c.push_str(" active"); }
                c
            }
            data-dnd-id=DELETE_AREA_ID
        >
            "Drop Here to Delete"
        </div>
    }
}
