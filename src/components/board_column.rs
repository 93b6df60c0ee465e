//! Board Column Component
//!
//! One status column; the list itself is the drop target for the status,
//! so an empty column can still receive items.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::containers::Containers;
use crate::context::use_app_context;
use crate::drag::resolve_container;
use crate::models::{ContainerId, Item, Status};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardColumn(status: Status) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let items = move || {
        let items = store.items().read();
        let containers = Containers::derive(&items);
        containers.column(status).iter().map(|item| (*item).clone()).collect::<Vec<Item>>()
    };

    // Highlight while hovering the column or any item in it
    let is_over = move || {
        ctx.over_id().is_some_and(|over| {
            resolve_container(&store.items().read(), &over) == Some(ContainerId::Column(status))
        })
    };

    view! {
        <div class="todo-col">
            <h2 class="todo-column-title">
                {status.title()}
                <span class="todo-count">{move || items().len()}</span>
            </h2>
            <ul
                class=move || if is_over() { "todo-list over" } else { "todo-list" }
                data-dnd-id=status.as_str()
            >
                <For
                    each=items
                    key=|item| item.id.clone()
                    children=move |item| view! { <TaskCard item=item /> }
                />
            </ul>
        </div>
    }
}
