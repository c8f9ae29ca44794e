//! Iterators over list values

use super::cell::CellKey;
use super::container::List;

/// Borrowing iterator, head to tail
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<CellKey>,
    back: Option<CellKey>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Iterate `len` cells starting at `front` and ending at `back`
    pub(super) fn range(list: &'a List<T>, front: CellKey, back: CellKey, len: usize) -> Self {
        Self {
            list,
            front: Some(front),
            back: Some(back),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let cell = self.list.cells.get(self.front?)?;
        self.front = cell.next();
        self.remaining -= 1;
        Some(cell.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let cell = self.list.cells.get(self.back?)?;
        self.back = cell.prev();
        self.remaining -= 1;
        Some(cell.value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator, head to tail
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.count(), Some(self.list.count()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> List<T> {
    /// Iterate over values, head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.count,
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    /// Appends each value; the sorted flag is cleared
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}
