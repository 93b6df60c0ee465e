//! Task Card Component
//!
//! A single draggable item row inside a column.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_keydown, make_on_pointerdown};

use crate::context::use_app_context;
use crate::models::Item;
use crate::store::{store_remove_item, use_app_store, AppStateStoreFields};

/// A single item in a column
#[component]
pub fn TaskCard(item: Item) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = item.id.to_string();

    let is_active = {
        let id = id.clone();
        move || store.drag().read().active().is_some_and(|active| active.as_str() == id)
    };
    let is_over = {
        let id = id.clone();
        move || ctx.over_id().as_deref() == Some(id.as_str())
    };
    let on_delete = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| store_remove_item(&store, &id)
    };
    let on_pointerdown = make_on_pointerdown(ctx.dnd, id.clone());
    let on_keydown = make_on_keydown(ctx.dnd, ctx.callbacks, id.clone());

    view! {
        <li
            class=move || {
                let mut c = "todo-item".to_string();
                if is_active() { c.push_str(" dragging"); }
                if is_over() { c.push_str(" over"); }
                c
            }
            tabindex="0"
            data-dnd-id=id
            on:pointerdown=on_pointerdown
            on:keydown=on_keydown
        >
            <span class="todo-text">{item.text}</span>
            <button class="delete-btn" title="Delete" on:click=on_delete>"X"</button>
        </li>
    }
}
