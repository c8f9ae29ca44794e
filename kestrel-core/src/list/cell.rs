//! Element cell and its arena key

/// Handle to a cell inside one list
///
/// A key stays valid until the cell it names is removed. Keys are only
/// meaningful for the list that returned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CellKey(usize);

impl CellKey {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A single list element
///
/// Owns exactly one value plus the links to its neighbours. Links are
/// traversal references only; the list owns every cell through its arena.
#[derive(Debug, Clone)]
pub struct Cell<T> {
    value: T,
    pub(crate) next: Option<CellKey>,
    pub(crate) prev: Option<CellKey>,
}

impl<T> Cell<T> {
    /// Create an unlinked cell holding `value`
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }

    /// Borrow the stored value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Copy of the stored value
    pub fn value_cloned(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Replace the stored value in place
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Consume the cell, returning its value
    pub fn into_value(self) -> T {
        self.value
    }

    /// Key of the following cell, `None` at the tail
    pub fn next(&self) -> Option<CellKey> {
        self.next
    }

    /// Key of the preceding cell, `None` at the head
    pub fn prev(&self) -> Option<CellKey> {
        self.prev
    }
}
