//! Item Store
//!
//! The single ordered sequence of items backing every column.
//! Mutations report whether anything changed so callers persist only real edits.

use serde::{Deserialize, Serialize};

use crate::models::{Item, ItemId, Status};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Starter list shown before anything has been saved
    pub fn seed() -> Self {
        let seed = [
            ("1", "buy milk", Status::ToDo),
            ("2", "wash bike", Status::InProgress),
            ("3", "do the budget", Status::Done),
            ("4", "call jane", Status::ToDo),
        ];
        Self::from_items(
            seed.into_iter()
                .map(|(id, text, status)| Item { id: ItemId::new(id), text: text.to_string(), status })
                .collect(),
        )
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id.as_str() == id)
    }

    /// Append a new to-do item, returning its id
    pub fn add(&mut self, text: impl Into<String>) -> ItemId {
        let item = Item::new(text);
        let id = item.id.clone();
        tracing::debug!("[STORE] add {}", id);
        self.items.push(item);
        id
    }

    /// Add typed input: trimmed, and ignored when blank
    pub fn add_text(&mut self, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.add(text))
    }

    /// Delete by id; `false` if there was no such item
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id.as_str() != id);
        let removed = self.items.len() != before;
        if removed {
            tracing::debug!("[STORE] remove {}", id);
        }
        removed
    }

    /// Rewrite an item's status in place
    pub fn update_status(&mut self, id: &str, status: Status) -> bool {
        match self.items.iter_mut().find(|item| item.id.as_str() == id) {
            Some(item) if item.status != status => {
                tracing::debug!("[STORE] status {} {} -> {}", id, item.status.as_str(), status.as_str());
                item.status = status;
                true
            }
            _ => false,
        }
    }

    /// Move `id` to sit immediately before `before_id`
    ///
    /// Returns `false` when either id is unknown, when they are the same
    /// item, or when `id` already sits right before `before_id`.
    pub fn reorder(&mut self, id: &str, before_id: &str) -> bool {
        if id == before_id {
            return false;
        }
        let (Some(from), Some(target)) = (self.position(id), self.position(before_id)) else {
            return false;
        };
        if from + 1 == target {
            return false;
        }
        let item = self.items.remove(from);
        let to = if from < target { target - 1 } else { target };
        self.items.insert(to, item);
        tracing::debug!("[STORE] reorder {} before {} ({} -> {})", id, before_id, from, to);
        true
    }
}
