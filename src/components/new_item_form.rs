//! New Item Form Component
//!
//! Form for adding a to-do item.

use leptos::prelude::*;

use crate::store::{store_add_item, use_app_store};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_item(&store, &new_text.get()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=add_item>
            <input
                type="text"
                class="todo-input"
                placeholder="Add a new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="todo-button">"Add To-Do"</button>
        </form>
    }
}
