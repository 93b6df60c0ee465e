//! Board Models
//!
//! Items, statuses and drop-container identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of the delete drop target
pub const DELETE_AREA_ID: &str = "delete-area";

/// Opaque item identifier
///
/// Serialized as a string. Numeric ids (as written by older saves) are
/// accepted on load and kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Uint(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Int(n) => Self(n.to_string()),
            RawId::Uint(n) => Self(n.to_string()),
        })
    }
}

/// Item status, one column per value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "to-do")]
    ToDo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl Status {
    /// Column order, left to right
    pub const ALL: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::ToDo => "to-do",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Status::ToDo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Neighbouring column (`step` of -1 is left, 1 is right)
    pub fn adjacent(self, step: isize) -> Option<Self> {
        let idx = Self::ALL.iter().position(|s| *s == self)? as isize + step;
        usize::try_from(idx).ok().and_then(|i| Self::ALL.get(i).copied())
    }
}

/// To-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub status: Status,
}

impl Item {
    /// New item with a fresh id, in the to-do column
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            text: text.into(),
            status: Status::ToDo,
        }
    }
}

/// Drop container: a status column or the delete area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Column(Status),
    DeleteArea,
}

impl ContainerId {
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerId::Column(status) => status.as_str(),
            ContainerId::DeleteArea => DELETE_AREA_ID,
        }
    }
}

impl FromStr for ContainerId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == DELETE_AREA_ID {
            return Ok(ContainerId::DeleteArea);
        }
        Status::parse(s).map(ContainerId::Column).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"in-progress\"");
        let parsed: Status = serde_json::from_str("\"to-do\"").unwrap();
        assert_eq!(parsed, Status::ToDo);
        assert!(serde_json::from_str::<Status>("\"blocked\"").is_err());
    }

    #[test]
    fn test_item_id_accepts_numbers() {
        let item: Item = serde_json::from_str(r#"{"id":1,"text":"buy milk","status":"to-do"}"#).unwrap();
        assert_eq!(item.id, ItemId::new("1"));
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"id":"1","text":"buy milk","status":"to-do"}"#
        );
    }

    #[test]
    fn test_new_item_defaults() {
        let a = Item::new("call jane");
        let b = Item::new("call jane");
        assert_eq!(a.status, Status::ToDo);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_container_ids() {
        for status in Status::ALL {
            let id = ContainerId::Column(status);
            assert_eq!(id.as_str().parse::<ContainerId>(), Ok(id));
        }
        assert_eq!("delete-area".parse::<ContainerId>(), Ok(ContainerId::DeleteArea));
        assert!("backlog".parse::<ContainerId>().is_err());
    }

    #[test]
    fn test_adjacent_columns() {
        assert_eq!(Status::ToDo.adjacent(1), Some(Status::InProgress));
        assert_eq!(Status::Done.adjacent(-1), Some(Status::InProgress));
        assert_eq!(Status::ToDo.adjacent(-1), None);
        assert_eq!(Status::Done.adjacent(1), None);
    }
}
