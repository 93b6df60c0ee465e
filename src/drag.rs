//! Drag Coordinator
//!
//! Tracks the active drag and turns a drop into item store edits:
//! reorder within the backing sequence, status change across columns,
//! or removal on the delete area.

use leptos_dragdrop::KeyDirection;

use crate::containers::Containers;
use crate::item_store::ItemStore;
use crate::models::{ContainerId, ItemId, Status, DELETE_AREA_ID};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { active: ItemId },
}

/// What a drop did to the item store
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Released over nothing
    NoTarget,
    /// Source or target id matched no container
    Unresolved,
    Deleted(ItemId),
    Moved { reordered: bool, status: Option<Status> },
    /// Valid drop that left everything in place
    Unchanged,
}

impl DragOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, DragOutcome::Deleted(_) | DragOutcome::Moved { .. })
    }
}

/// Container a drag id belongs to
///
/// Container ids resolve to themselves; item ids resolve to their status
/// column. Anything else is `None`.
pub fn resolve_container(store: &ItemStore, id: &str) -> Option<ContainerId> {
    if let Ok(container) = id.parse::<ContainerId>() {
        return Some(container);
    }
    Containers::derive(store).container_of(id).map(ContainerId::Column)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Item currently being dragged
    pub fn active(&self) -> Option<&ItemId> {
        match &self.state {
            DragState::Dragging { active } => Some(active),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    pub fn on_drag_start(&mut self, id: &str) {
        self.state = DragState::Dragging { active: ItemId::new(id) };
    }

    pub fn on_drag_cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Apply a drop of `active` onto `over` and return to idle
    pub fn on_drag_end(&mut self, store: &mut ItemStore, active: &str, over: Option<&str>) -> DragOutcome {
        self.state = DragState::Idle;

        let Some(over) = over else {
            return DragOutcome::NoTarget;
        };
        let source = match resolve_container(store, active) {
            Some(ContainerId::Column(status)) if store.contains(active) => status,
            _ => return DragOutcome::Unresolved,
        };
        let target = match resolve_container(store, over) {
            Some(ContainerId::Column(status)) => status,
            Some(ContainerId::DeleteArea) => {
                store.remove(active);
                return DragOutcome::Deleted(ItemId::new(active));
            }
            None => return DragOutcome::Unresolved,
        };

        // Container targets have no position of their own, so only item targets reorder
        let reordered = active != over && store.reorder(active, over);
        let status = (source != target && store.update_status(active, target)).then_some(target);

        if reordered || status.is_some() {
            DragOutcome::Moved { reordered, status }
        } else {
            DragOutcome::Unchanged
        }
    }
}

/// Next drop target for a keyboard drag
///
/// Up/Down walk the items of the current column, with the column itself
/// after its last item. Left/Right jump to the neighbouring column, entering
/// at its first item; right of the last column is the delete area.
pub fn keyboard_target(store: &ItemStore, from: &str, dir: KeyDirection) -> Option<String> {
    let containers = Containers::derive(store);
    let entry = |status: Status| {
        containers
            .column(status)
            .first()
            .map(|item| item.id.to_string())
            .unwrap_or_else(|| status.as_str().to_string())
    };
    let sideways = |status: Status, dir: KeyDirection| match dir {
        KeyDirection::Left => status.adjacent(-1).map(entry),
        KeyDirection::Right => Some(status.adjacent(1).map(entry).unwrap_or_else(|| DELETE_AREA_ID.to_string())),
        KeyDirection::Up | KeyDirection::Down => None,
    };

    match from.parse::<ContainerId>() {
        Ok(ContainerId::DeleteArea) => match dir {
            KeyDirection::Left => Some(entry(Status::Done)),
            _ => None,
        },
        Ok(ContainerId::Column(status)) => match dir {
            KeyDirection::Up => containers.column(status).last().map(|item| item.id.to_string()),
            KeyDirection::Down => None,
            _ => sideways(status, dir),
        },
        Err(()) => {
            let status = containers.container_of(from)?;
            let column = containers.column(status);
            let idx = column.iter().position(|item| item.id.as_str() == from)?;
            match dir {
                KeyDirection::Up => idx.checked_sub(1).map(|i| column[i].id.to_string()),
                KeyDirection::Down => Some(
                    column
                        .get(idx + 1)
                        .map(|item| item.id.to_string())
                        .unwrap_or_else(|| status.as_str().to_string()),
                ),
                _ => sideways(status, dir),
            }
        }
    }
}
