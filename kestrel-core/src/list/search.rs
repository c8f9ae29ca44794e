//! Linear and binary search returning 1-based positions

use core::cmp::Ordering;

use super::container::List;
use super::ListError;

impl<T> List<T> {
    /// Position of the first element equal to `value`
    ///
    /// Scans head to tail; works on unsorted lists.
    pub fn linear_search(&self, value: &T) -> Result<usize, ListError>
    where
        T: PartialEq,
    {
        self.iter()
            .position(|v| v == value)
            .map(|index| index + 1)
            .ok_or(ListError::NotFound)
    }

    /// Position of some element equal to `value`, by binary search
    ///
    /// Without `force`, a list not known to be sorted is refused with
    /// [`ListError::SearchRefused`]. With `force`, the list is sorted first.
    /// When duplicates exist any matching position may be returned.
    pub fn binary_search(&mut self, value: &T, force: bool) -> Result<usize, ListError>
    where
        T: Ord + Clone,
    {
        if !self.sorted && !force {
            return Err(ListError::SearchRefused);
        }
        if self.count == 0 {
            return Err(ListError::NotFound);
        }

        self.merge_sort();

        let mut low = 1;
        let mut high = self.count;
        while low <= high {
            let mid = low + (high - low) / 2;
            let probe = self.value_at(mid).map_err(|_| ListError::NotFound)?;

            match probe.cmp(value) {
                Ordering::Equal => return Ok(mid),
                // mid >= 1, so high may reach 0 and end the loop
                Ordering::Greater => high = mid - 1,
                Ordering::Less => low = mid + 1,
            }
        }

        Err(ListError::NotFound)
    }
}
