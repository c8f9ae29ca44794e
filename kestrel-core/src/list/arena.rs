//! Slot arena holding the cells of one list
//!
//! Removed slots are threaded onto an intrusive free list and reused by
//! later inserts, so keys of live cells never move.

use alloc::vec::Vec;

use super::cell::{Cell, CellKey};

#[derive(Debug)]
enum Slot<T> {
    Occupied(Cell<T>),
    Vacant { next_free: Option<CellKey> },
}

/// Cell storage with stable keys
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<CellKey>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Store a cell, reusing a vacant slot when one exists
    pub(crate) fn insert(&mut self, cell: Cell<T>) -> CellKey {
        self.len += 1;

        if let Some(key) = self.free_head {
            let slot = &mut self.slots[key.index()];
            self.free_head = match slot {
                Slot::Vacant { next_free } => *next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            };
            *slot = Slot::Occupied(cell);
            key
        } else {
            let key = CellKey::new(self.slots.len());
            self.slots.push(Slot::Occupied(cell));
            key
        }
    }

    /// Take a cell out of the arena, vacating its slot
    pub(crate) fn remove(&mut self, key: CellKey) -> Option<Cell<T>> {
        let slot = self.slots.get_mut(key.index())?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }

        let taken = core::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(key);
        self.len -= 1;

        match taken {
            Slot::Occupied(cell) => Some(cell),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get(&self, key: CellKey) -> Option<&Cell<T>> {
        match self.slots.get(key.index())? {
            Slot::Occupied(cell) => Some(cell),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, key: CellKey) -> Option<&mut Cell<T>> {
        match self.slots.get_mut(key.index())? {
            Slot::Occupied(cell) => Some(cell),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drop every cell and forget all keys
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::new();
        let a = arena.insert(Cell::new(10));
        let b = arena.insert(Cell::new(20));

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).map(|c| *c.value()), Some(10));
        assert_eq!(arena.get(b).map(|c| *c.value()), Some(20));
    }

    #[test]
    fn test_remove_vacates_slot() {
        let mut arena = Arena::new();
        let a = arena.insert(Cell::new(1));

        assert_eq!(arena.remove(a).map(Cell::into_value), Some(1));
        assert_eq!(arena.len(), 0);
        assert!(arena.get(a).is_none());
        assert!(arena.remove(a).is_none());
    }

    #[test]
    fn test_vacant_slots_are_reused() {
        let mut arena = Arena::with_capacity(4);
        let a = arena.insert(Cell::new(1));
        let b = arena.insert(Cell::new(2));
        let c = arena.insert(Cell::new(3));

        arena.remove(a);
        arena.remove(c);

        // Last freed slot is handed out first
        assert_eq!(arena.insert(Cell::new(4)), c);
        assert_eq!(arena.insert(Cell::new(5)), a);
        assert_eq!(arena.get(b).map(|c| *c.value()), Some(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_get_mut_and_clear() {
        let mut arena = Arena::new();
        let a = arena.insert(Cell::new(1));

        if let Some(cell) = arena.get_mut(a) {
            cell.set_value(9);
        }
        assert_eq!(arena.get(a).map(|c| *c.value()), Some(9));

        arena.clear();
        assert_eq!(arena.len(), 0);
        assert!(arena.get(a).is_none());
    }

    #[test]
    fn test_out_of_range_key() {
        let arena: Arena<u8> = Arena::new();
        assert!(arena.get(CellKey::new(3)).is_none());
    }
}
