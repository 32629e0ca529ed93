use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering},
};

use parking_lot::RwLock;

/// In-process table keyed by a sequential id. Iteration follows id order,
/// which stands in for storage order.
#[derive(Debug)]
pub struct MemoryTable<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<T: Clone> MemoryTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next id and stores the row built from it.
    pub fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = build(id);
        self.rows.write().insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.read().get(&id).cloned()
    }

    pub fn list_where(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect()
    }

    /// Rebuilds an existing row in place. `None` when the id is unknown.
    pub fn replace_with(&self, id: i64, build: impl FnOnce(&T) -> T) -> Option<T> {
        let mut rows = self.rows.write();
        let slot = rows.get_mut(&id)?;
        *slot = build(slot);
        Some(slot.clone())
    }

    pub fn remove(&self, id: i64) -> bool {
        self.rows.write().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
