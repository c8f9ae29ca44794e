//! Ordered container: positional insertion, lookup and removal

use super::arena::Arena;
use super::cell::{Cell, CellKey};
use super::iter::Iter;
use super::ListError;

/// Positional doubly-linked list
///
/// Owns a chain of [`Cell`]s from `head` to `tail`. Structural invariants
/// hold after every public operation:
///
/// - walking `next` from the head visits exactly [`count`](Self::count)
///   cells and ends at the tail
/// - every non-head cell's `prev` names the cell whose `next` names it
/// - `head` and `tail` are both `None` iff the list is empty
pub struct List<T> {
    pub(super) cells: Arena<T>,
    pub(super) head: Option<CellKey>,
    pub(super) tail: Option<CellKey>,
    pub(super) count: usize,
    pub(super) sorted: bool,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Create an empty, unsorted list
    pub const fn new() -> Self {
        Self {
            cells: Arena::new(),
            head: None,
            tail: None,
            count: 0,
            sorted: false,
        }
    }

    /// Create an empty list with room for `capacity` cells
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Arena::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Number of elements
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of elements (alias of [`count`](Self::count))
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if the list is known to be in non-decreasing order
    ///
    /// Only [`merge_sort`](Self::merge_sort) sets this; any mutation clears it.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Key of the first cell
    pub fn head_key(&self) -> Option<CellKey> {
        self.head
    }

    /// Key of the last cell
    pub fn tail_key(&self) -> Option<CellKey> {
        self.tail
    }

    /// Borrow a cell by key
    pub fn cell(&self, key: CellKey) -> Option<&Cell<T>> {
        self.cells.get(key)
    }

    /// Mutably borrow a cell by key
    ///
    /// The value may be replaced through the returned cell, so the sorted
    /// flag is cleared.
    pub fn cell_mut(&mut self, key: CellKey) -> Option<&mut Cell<T>> {
        let cell = self.cells.get_mut(key)?;
        self.sorted = false;
        Some(cell)
    }

    /// Insert `value` after the tail
    ///
    /// Returns the new count.
    pub fn append(&mut self, value: T) -> usize {
        self.sorted = false;

        let key = self.cells.insert(Cell::new(value));
        match self.tail {
            Some(tail) => {
                self.set_next(tail, Some(key));
                self.set_prev(key, Some(tail));
            }
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.count += 1;

        self.count
    }

    /// Insert `value` before the head
    ///
    /// Returns the new position of the value, always `1`.
    pub fn prepend(&mut self, value: T) -> usize {
        self.sorted = false;

        let key = self.cells.insert(Cell::new(value));
        match self.head {
            Some(head) => {
                self.set_prev(head, Some(key));
                self.set_next(key, Some(head));
            }
            None => self.tail = Some(key),
        }
        self.head = Some(key);
        self.count += 1;

        1
    }

    /// Insert `value` so that it ends up at 1-based `pos`
    ///
    /// Accepts `1..=count + 1`; `1` prepends and `count + 1` appends.
    /// Returns `pos` on success.
    pub fn insert(&mut self, value: T, pos: usize) -> Result<usize, ListError> {
        if pos < 1 || pos > self.count + 1 {
            return Err(ListError::InvalidPosition);
        }

        if pos == 1 {
            return Ok(self.prepend(value));
        }
        if pos == self.count + 1 {
            self.append(value);
            return Ok(pos);
        }

        // 1 < pos <= count: the new cell goes between two existing cells
        let after = self.lookup(pos - 1).ok_or(ListError::InvalidPosition)?;
        let before = self
            .cells
            .get(after)
            .and_then(Cell::next)
            .ok_or(ListError::InvalidPosition)?;

        self.sorted = false;

        let key = self.cells.insert(Cell::new(value));
        self.set_prev(key, Some(after));
        self.set_next(key, Some(before));
        self.set_next(after, Some(key));
        self.set_prev(before, Some(key));
        self.count += 1;

        Ok(pos)
    }

    /// Key of the cell at 1-based `pos`
    ///
    /// Walks from whichever end is closer, so at most `count / 2` links are
    /// followed. Returns `None` outside `1..=count`.
    pub fn lookup(&self, pos: usize) -> Option<CellKey> {
        if pos < 1 || pos > self.count {
            return None;
        }

        if pos > self.count / 2 {
            let mut key = self.tail?;
            for _ in pos..self.count {
                key = self.cells.get(key)?.prev?;
            }
            Some(key)
        } else {
            let mut key = self.head?;
            for _ in 1..pos {
                key = self.cells.get(key)?.next?;
            }
            Some(key)
        }
    }

    /// Borrow the value at 1-based `pos`
    pub fn value_at(&self, pos: usize) -> Result<&T, ListError> {
        self.lookup(pos)
            .and_then(|key| self.cells.get(key))
            .map(Cell::value)
            .ok_or(ListError::InvalidPosition)
    }

    /// Borrow the value at 0-based `index`
    ///
    /// Out of range yields `None` rather than a default value.
    pub fn get(&self, index: usize) -> Option<&T> {
        let pos = index.checked_add(1)?;
        self.value_at(pos).ok()
    }

    /// First value
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|key| self.cells.get(key)).map(Cell::value)
    }

    /// Last value
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|key| self.cells.get(key)).map(Cell::value)
    }

    /// Remove the head cell
    ///
    /// Returns the new count; an empty list is left untouched and reports `0`.
    pub fn remove_first(&mut self) -> usize {
        if let Some(head) = self.head {
            self.unlink(head);
        }
        self.count
    }

    /// Remove the tail cell
    ///
    /// Returns the new count; an empty list is left untouched and reports `0`.
    pub fn remove_last(&mut self) -> usize {
        if let Some(tail) = self.tail {
            self.unlink(tail);
        }
        self.count
    }

    /// Remove the cell at 1-based `pos`
    ///
    /// Returns the new count.
    pub fn remove_at(&mut self, pos: usize) -> Result<usize, ListError> {
        if pos < 1 || pos > self.count {
            return Err(ListError::InvalidPosition);
        }

        if pos == 1 {
            return Ok(self.remove_first());
        }
        if pos == self.count {
            return Ok(self.remove_last());
        }

        let key = self.lookup(pos).ok_or(ListError::InvalidPosition)?;
        self.unlink(key);
        Ok(self.count)
    }

    /// Remove and return the first value
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Remove and return the last value
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Drop every element
    pub fn clear(&mut self) {
        self.cells.clear();
        self.head = None;
        self.tail = None;
        self.count = 0;
        self.sorted = false;
    }

    /// Reverse element order in place
    ///
    /// Relinks cells rather than moving values. Lists of zero or one
    /// element are left untouched.
    pub fn reverse(&mut self) {
        if self.count <= 1 {
            return;
        }

        let mut cursor = self.head;
        while let Some(key) = cursor {
            let Some(cell) = self.cells.get_mut(key) else {
                break;
            };
            core::mem::swap(&mut cell.next, &mut cell.prev);
            // The old forward link now sits in `prev`
            cursor = cell.prev;
        }
        core::mem::swap(&mut self.head, &mut self.tail);

        self.sorted = false;
    }

    /// Copy the elements at 1-based positions `begin..=end` into a new list
    ///
    /// Fails when `begin < 1`, `end > count` or `begin > end`. The source
    /// list is not modified.
    pub fn subset(&self, begin: usize, end: usize) -> Result<List<T>, ListError>
    where
        T: Clone,
    {
        if begin < 1 || end > self.count || begin > end {
            return Err(ListError::InvalidPosition);
        }

        let front = self.lookup(begin).ok_or(ListError::InvalidPosition)?;
        let back = self.lookup(end).ok_or(ListError::InvalidPosition)?;

        let mut out = List::with_capacity(end - begin + 1);
        for value in Iter::range(self, front, back, end - begin + 1) {
            out.append(value.clone());
        }
        Ok(out)
    }

    /// New list holding this list's elements followed by `other`'s
    ///
    /// The result is unsorted regardless of the inputs.
    pub fn concat(&self, other: &List<T>) -> List<T>
    where
        T: Clone,
    {
        let mut out = List::with_capacity(self.count + other.count);
        for value in self.iter().chain(other.iter()) {
            out.append(value.clone());
        }
        out
    }

    /// Detach a cell from the chain and hand back its value
    fn unlink(&mut self, key: CellKey) -> Option<T> {
        let cell = self.cells.remove(key)?;

        match cell.prev {
            Some(prev) => self.set_next(prev, cell.next),
            None => self.head = cell.next,
        }
        match cell.next {
            Some(next) => self.set_prev(next, cell.prev),
            None => self.tail = cell.prev,
        }

        self.count -= 1;
        self.sorted = false;

        Some(cell.into_value())
    }

    fn set_next(&mut self, key: CellKey, next: Option<CellKey>) {
        if let Some(cell) = self.cells.get_mut(key) {
            cell.next = next;
        }
    }

    fn set_prev(&mut self, key: CellKey, prev: Option<CellKey>) {
        if let Some(cell) = self.cells.get_mut(key) {
            cell.prev = prev;
        }
    }

    /// Walk the chain and panic if any structural invariant is broken
    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        assert_eq!(self.head.is_none(), self.count == 0);
        assert_eq!(self.tail.is_none(), self.count == 0);
        assert_eq!(self.cells.len(), self.count);
        if self.count == 1 {
            assert_eq!(self.head, self.tail);
        }

        let mut visited = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let cell = self.cells.get(key).expect("dangling link");
            assert_eq!(cell.prev, prev, "broken back-link at step {}", visited);
            visited += 1;
            assert!(visited <= self.count, "chain longer than count");
            prev = Some(key);
            cursor = cell.next;
        }

        assert_eq!(visited, self.count);
        assert_eq!(prev, self.tail);
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep copy in the same order, keeping the sorted flag
    fn clone(&self) -> Self {
        let mut out = self.concat(&List::new());
        out.sorted = self.sorted;
        out
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for List<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
