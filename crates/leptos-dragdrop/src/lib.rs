//! Leptos DragDrop Utilities
//!
//! Pointer and keyboard drag-and-drop for Leptos.
//! Uses movement threshold to distinguish click from drag. Drop targets are
//! any element carrying a `data-dnd-id` attribute; the one under the pointer
//! is found by hit-testing, so touch input works the same as a mouse.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Attribute naming the drag/drop identifier of an element
pub const DND_ID_ATTR: &str = "data-dnd-id";

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Arrow-key direction used while a keyboard drag is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDirection {
    Up,
    Down,
    Left,
    Right,
}

impl KeyDirection {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Input device that started the current drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Keyboard,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    /// Identifier of the element currently under the drag
    pub over_id_read: ReadSignal<Option<String>>,
    pub over_id_write: WriteSignal<Option<String>>,
    pub source_read: ReadSignal<Option<DragSource>>,
    pub source_write: WriteSignal<Option<DragSource>>,
    /// Pending item id (pointer down but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
    /// Last pointer position, for the overlay
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
}

/// Gesture callbacks
#[derive(Clone, Copy)]
pub struct DndCallbacks {
    /// Drag started for an item id
    pub on_start: Callback<String>,
    /// Drag released: (active id, id under the drag if any)
    pub on_drop: Callback<(String, Option<String>)>,
    pub on_cancel: Callback<()>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (over_id_read, over_id_write) = signal(None::<String>);
    let (source_read, source_write) = signal(None::<DragSource>);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_read, start_write) = signal((0i32, 0i32));
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        source_read,
        source_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
        pointer_read,
        pointer_write,
    }
}

/// True once the pointer has moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    (now.0 - start.0).abs() > DRAG_THRESHOLD_PX || (now.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// Find the nearest drop target under a viewport position
pub fn drop_target_at(x: i32, y: i32) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let hit = doc.element_from_point(x as f32, y as f32)?;
    let target = hit.closest(&format!("[{}]", DND_ID_ATTR)).ok()??;
    target.get_attribute(DND_ID_ATTR)
}

fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
    match target {
        Some(t) => {
            t.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || t.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        }
        None => false,
    }
}

fn begin_drag(dnd: &DndSignals, callbacks: &DndCallbacks, id: String, source: DragSource) {
    tracing::debug!("[DND] start {} via {:?}", id, source);
    dnd.pending_id_write.set(None);
    dnd.source_write.set(Some(source));
    dnd.dragging_id_write.set(Some(id.clone()));
    callbacks.on_start.run(id);
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.source_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create pointerdown handler for draggable items
/// Records pending drag with start position
pub fn make_on_pointerdown(
    dnd: DndSignals,
    item_id: String,
) -> impl Fn(web_sys::PointerEvent) + Clone + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        // Ignore if target is input or button
        if is_interactive(ev.target()) {
            return;
        }
        if dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let pos = (ev.client_x(), ev.client_y());
        dnd.pending_id_write.set(Some(item_id.clone()));
        dnd.start_write.set(pos);
        dnd.pointer_write.set(pos);
    }
}

/// Create keydown handler for draggable items
/// Space or Enter picks the item up for a keyboard drag
pub fn make_on_keydown(
    dnd: DndSignals,
    callbacks: DndCallbacks,
    item_id: String,
) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static {
    move |ev: web_sys::KeyboardEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() || is_interactive(ev.target()) {
            return;
        }
        let key = ev.key();
        if key == " " || key == "Enter" {
            ev.prevent_default();
            // Keep the document listener from treating this press as the drop
            ev.stop_propagation();
            begin_drag(&dnd, &callbacks, item_id.clone(), DragSource::Keyboard);
            dnd.over_id_write.set(Some(item_id.clone()));
        }
    }
}

fn bind_global_pointer(dnd: DndSignals, callbacks: DndCallbacks, doc: &web_sys::Document) {
    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        let pos = (ev.client_x(), ev.client_y());

        // If we have a pending drag and haven't started dragging yet
        if let Some(pending) = dnd.pending_id_read.get_untracked() {
            if dnd.dragging_id_read.get_untracked().is_none()
                && exceeds_threshold(dnd.start_read.get_untracked(), pos)
            {
                begin_drag(&dnd, &callbacks, pending, DragSource::Pointer);
            }
        }

        if dnd.source_read.get_untracked() == Some(DragSource::Pointer) {
            dnd.pointer_write.set(pos);
            let over = drop_target_at(pos.0, pos.1);
            if over != dnd.over_id_read.get_untracked() {
                dnd.over_id_write.set(over);
            }
        }
    });

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        // Clear pending state first
        dnd.pending_id_write.set(None);

        if dnd.source_read.get_untracked() != Some(DragSource::Pointer) {
            return;
        }
        if let Some(active) = dnd.dragging_id_read.get_untracked() {
            let over = drop_target_at(ev.client_x(), ev.client_y());
            end_drag(&dnd);
            callbacks.on_drop.run((active, over));
        }
    });

    let on_pointercancel = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_ev: web_sys::PointerEvent| {
        if dnd.source_read.get_untracked() == Some(DragSource::Pointer) {
            end_drag(&dnd);
            callbacks.on_cancel.run(());
        } else {
            dnd.pending_id_write.set(None);
        }
    });

    let _ = doc.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("pointerup", on_pointerup.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("pointercancel", on_pointercancel.as_ref().unchecked_ref());
    on_pointermove.forget();
    on_pointerup.forget();
    on_pointercancel.forget();
}

/// What a key press does while a drag is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Cancel,
    Drop,
    Move(KeyDirection),
}

/// Map a key press during a drag to an action
///
/// Escape cancels any drag. Drop and arrow keys only apply to keyboard
/// drags, and never while focus is in an input or button, so typing and
/// form submission keep working.
pub fn keyboard_action(key: &str, keyboard_drag: bool, in_control: bool) -> Option<KeyAction> {
    if key == "Escape" {
        return Some(KeyAction::Cancel);
    }
    if !keyboard_drag || in_control {
        return None;
    }
    match key {
        " " | "Enter" => Some(KeyAction::Drop),
        _ => KeyDirection::from_key(key).map(KeyAction::Move),
    }
}

fn bind_global_keyboard(
    dnd: DndSignals,
    callbacks: DndCallbacks,
    navigate: Callback<(String, KeyDirection), Option<String>>,
    doc: &web_sys::Document,
) {
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let Some(active) = dnd.dragging_id_read.get_untracked() else {
            return;
        };
        let keyboard = dnd.source_read.get_untracked() == Some(DragSource::Keyboard);

        match keyboard_action(&ev.key(), keyboard, is_interactive(ev.target())) {
            Some(KeyAction::Cancel) => {
                ev.prevent_default();
                end_drag(&dnd);
                callbacks.on_cancel.run(());
            }
            Some(KeyAction::Drop) => {
                ev.prevent_default();
                let over = dnd.over_id_read.get_untracked();
                end_drag(&dnd);
                callbacks.on_drop.run((active, over));
            }
            Some(KeyAction::Move(dir)) => {
                ev.prevent_default();
                let from = dnd.over_id_read.get_untracked().unwrap_or(active);
                if let Some(next) = navigate.run((from, dir)) {
                    dnd.over_id_write.set(Some(next));
                }
            }
            None => {}
        }
    });

    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

/// Bind document-level pointer and keyboard handlers
///
/// `navigate` maps the current keyboard target and an arrow key to the next
/// target; returning `None` leaves the target where it is.
pub fn bind_global_handlers(
    dnd: DndSignals,
    callbacks: DndCallbacks,
    navigate: Callback<(String, KeyDirection), Option<String>>,
) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        tracing::warn!("[DND] no document, drag and drop disabled");
        return;
    };
    bind_global_pointer(dnd, callbacks, &doc);
    bind_global_keyboard(dnd, callbacks, navigate, &doc);
}
