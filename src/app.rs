//! Todo Board App
//!
//! Main application component: add form, three status columns and the
//! delete area, wired to the drag-and-drop layer.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals, DndCallbacks, KeyDirection};
use reactive_stores::Store;

use crate::components::{BoardColumn, DragOverlay, DropToDelete, NewItemForm};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::drag::keyboard_target;
use crate::models::Status;
use crate::store::{store_drag_cancel, store_drag_end, store_drag_start, AppState, AppStateStoreFields};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::load(&config));
    provide_context(store);

    let dnd = create_dnd_signals();
    let callbacks = DndCallbacks {
        on_start: Callback::new(move |id: String| store_drag_start(&store, &id)),
        on_drop: Callback::new(move |(active, over): (String, Option<String>)| {
            store_drag_end(&store, &active, over.as_deref());
        }),
        on_cancel: Callback::new(move |_: ()| store_drag_cancel(&store)),
    };
    let navigate = Callback::new(move |(from, dir): (String, KeyDirection)| {
        keyboard_target(&store.items().read_untracked(), &from, dir)
    });
    bind_global_handlers(dnd, callbacks, navigate);

    // Provide context to all children
    provide_context(AppContext::new(dnd, callbacks));

    view! {
        <div class="todo-container">
            <h1 class="todo-title">"Todo List"</h1>

            <NewItemForm />

            <div class="todo-columns">
                {Status::ALL
                    .into_iter()
                    .map(|status| view! { <BoardColumn status=status /> })
                    .collect_view()}
            </div>

            <DropToDelete />

            <p class="item-count">{move || format!("{} items", store.items().read().len())}</p>

            <DragOverlay />
        </div>
    }
}
