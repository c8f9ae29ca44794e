//! Merge sort and sorted merge

use super::container::List;

impl<T: Ord + Clone> List<T> {
    /// Sort in place, non-decreasing and stable
    ///
    /// Splits at the midpoint into two copied halves, sorts each
    /// recursively, then writes the merged values back over this list's
    /// cells in order. Cells keep their keys; values move between them.
    /// Does nothing if the list is already known to be sorted.
    pub fn merge_sort(&mut self) {
        if self.sorted {
            return;
        }
        if self.count < 2 {
            self.sorted = true;
            return;
        }

        let mid = self.count / 2;
        let (Ok(mut left), Ok(mut right)) = (self.subset(1, mid), self.subset(mid + 1, self.count))
        else {
            return;
        };
        left.merge_sort();
        right.merge_sort();

        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();

        let mut cursor = self.head;
        while let Some(key) = cursor {
            // Ties go left so equal values keep their input order
            let take_left = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => l <= r,
                (Some(_), None) => true,
                (None, _) => false,
            };
            let next = if take_left { left.next() } else { right.next() };
            let (Some(value), Some(cell)) = (next, self.cells.get_mut(key)) else {
                break;
            };
            cell.set_value(value);
            cursor = cell.next();
        }

        self.sorted = true;
    }

    /// Move every element of `other` into this list, then sort
    ///
    /// `other` is left empty.
    pub fn merge_with(&mut self, other: &mut List<T>) {
        while let Some(value) = other.pop_front() {
            self.append(value);
        }
        other.clear();
        self.merge_sort();
    }
}
