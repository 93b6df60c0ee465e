//! Container Index
//!
//! Per-status views over the item store. Derived on demand, never stored.

use crate::item_store::ItemStore;
use crate::models::{Item, Status};

/// Items partitioned by status, each in backing order
#[derive(Debug, Default)]
pub struct Containers<'a> {
    to_do: Vec<&'a Item>,
    in_progress: Vec<&'a Item>,
    done: Vec<&'a Item>,
}

impl<'a> Containers<'a> {
    pub fn derive(store: &'a ItemStore) -> Self {
        let mut containers = Self::default();
        for item in store.items() {
            containers.bucket_mut(item.status).push(item);
        }
        containers
    }

    fn bucket_mut(&mut self, status: Status) -> &mut Vec<&'a Item> {
        match status {
            Status::ToDo => &mut self.to_do,
            Status::InProgress => &mut self.in_progress,
            Status::Done => &mut self.done,
        }
    }

    pub fn column(&self, status: Status) -> &[&'a Item] {
        match status {
            Status::ToDo => &self.to_do,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }

    /// Status column holding the item with this id
    pub fn container_of(&self, id: &str) -> Option<Status> {
        Status::ALL
            .into_iter()
            .find(|status| self.column(*status).iter().any(|item| item.id.as_str() == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;
    use proptest::prelude::*;

    fn make_item(id: &str, status: Status) -> Item {
        Item {
            id: ItemId::new(id),
            text: format!("Item {}", id),
            status,
        }
    }

    fn column_ids<'a>(containers: &Containers<'a>, status: Status) -> Vec<&'a str> {
        containers.column(status).iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_partition_preserves_order() {
        let store = ItemStore::from_items(vec![
            make_item("1", Status::ToDo),
            make_item("2", Status::InProgress),
            make_item("3", Status::Done),
            make_item("4", Status::ToDo),
            make_item("5", Status::Done),
        ]);
        let containers = Containers::derive(&store);

        assert_eq!(column_ids(&containers, Status::ToDo), vec!["1", "4"]);
        assert_eq!(column_ids(&containers, Status::InProgress), vec!["2"]);
        assert_eq!(column_ids(&containers, Status::Done), vec!["3", "5"]);
    }

    #[test]
    fn test_container_of() {
        let store = ItemStore::from_items(vec![make_item("1", Status::ToDo), make_item("2", Status::Done)]);
        let containers = Containers::derive(&store);

        assert_eq!(containers.container_of("2"), Some(Status::Done));
        assert_eq!(containers.container_of("nope"), None);
    }

    #[test]
    fn test_empty_store() {
        let store = ItemStore::new();
        let containers = Containers::derive(&store);
        for status in Status::ALL {
            assert!(containers.column(status).is_empty());
        }
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add,
        Remove(usize),
        UpdateStatus(usize, Status),
        Reorder(usize, usize),
    }

    fn status_strategy() -> impl Strategy<Value = Status> {
        prop_oneof![Just(Status::ToDo), Just(Status::InProgress), Just(Status::Done)]
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Add),
            (0usize..16).prop_map(Op::Remove),
            (0usize..16, status_strategy()).prop_map(|(i, s)| Op::UpdateStatus(i, s)),
            (0usize..16, 0usize..16).prop_map(|(a, b)| Op::Reorder(a, b)),
        ]
    }

    fn id_at(store: &ItemStore, idx: usize) -> String {
        if store.is_empty() {
            return "missing".to_string();
        }
        store.items()[idx % store.len()].id.to_string()
    }

    proptest! {
        /// Union of the columns is exactly the store, in order, without duplicates
        #[test]
        fn columns_partition_the_store(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut store = ItemStore::seed();
            for (n, op) in ops.into_iter().enumerate() {
                match op {
                    Op::Add => { store.add(format!("item {}", n)); }
                    Op::Remove(i) => { let id = id_at(&store, i); store.remove(&id); }
                    Op::UpdateStatus(i, s) => { let id = id_at(&store, i); store.update_status(&id, s); }
                    Op::Reorder(a, b) => {
                        let (a, b) = (id_at(&store, a), id_at(&store, b));
                        store.reorder(&a, &b);
                    }
                }
            }

            let containers = Containers::derive(&store);
            let total: usize = Status::ALL.iter().map(|s| containers.column(*s).len()).sum();
            prop_assert_eq!(total, store.len());

            for status in Status::ALL {
                let expected: Vec<&Item> = store.items().iter().filter(|i| i.status == status).collect();
                prop_assert_eq!(containers.column(status), expected.as_slice());
            }
            for item in store.items() {
                prop_assert_eq!(containers.container_of(item.id.as_str()), Some(item.status));
            }
        }
    }
}
