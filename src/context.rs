//! Application Context
//!
//! Shared drag-and-drop wiring provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{DndCallbacks, DndSignals};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Gesture state: dragging id, hovered target, pointer position
    pub dnd: DndSignals,
    /// Store actions run when a gesture starts, drops or is cancelled
    pub callbacks: DndCallbacks,
}

impl AppContext {
    pub fn new(dnd: DndSignals, callbacks: DndCallbacks) -> Self {
        Self { dnd, callbacks }
    }

    /// Whether any item is being dragged
    pub fn is_dragging(&self) -> bool {
        self.dnd.dragging_id_read.get().is_some()
    }

    /// Current drop target, only while dragging
    pub fn over_id(&self) -> Option<String> {
        if self.is_dragging() {
            self.dnd.over_id_read.get()
        } else {
            None
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
