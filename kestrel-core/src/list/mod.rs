//! Positional doubly-linked list
//!
//! A small ordered container used as scratch storage, e.g. to buffer ADC
//! samples before reducing them. Cells live in an arena owned by the list
//! and are addressed by stable [`CellKey`]s instead of pointers: forward
//! and backward links are plain keys, and releasing the list drops every
//! cell exactly once.
//!
//! # Positions
//!
//! All positional operations are 1-based: position `1` is the head and
//! position [`List::count`] is the tail. The one exception is
//! [`List::get`], which takes a 0-based index like a slice.
//!
//! # Sorted flag
//!
//! ```text
//!            merge_sort()
//! Unsorted ───────────────► Sorted
//!    ▲                        │
//!    └────────────────────────┘
//!   append / prepend / insert / remove_* / reverse / cell_mut
//! ```
//!
//! [`List::binary_search`] refuses to run on an unsorted list unless the
//! caller forces it, in which case the list is sorted first.
//!
//! # Example
//!
//! ```
//! use kestrel_core::list::List;
//!
//! let mut list = List::new();
//! for v in [5, 3, 1, 4, 2] {
//!     list.append(v);
//! }
//!
//! list.merge_sort();
//! assert_eq!(list.binary_search(&3, false), Ok(3));
//! let middle = list.subset(2, 4).unwrap();
//! assert_eq!(middle, [2, 3, 4].into_iter().collect::<List<_>>());
//! ```

mod arena;
mod cell;
mod container;
mod iter;
mod search;
mod sort;

pub use cell::{Cell, CellKey};
pub use container::List;
pub use iter::{IntoIter, Iter};

/// Errors returned by list operations
///
/// Every failing operation returns before touching the list, so a list is
/// never left half-modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ListError {
    /// Position outside the range accepted by the operation
    InvalidPosition,
    /// Search finished without a matching element
    NotFound,
    /// Binary search on a list not known to be sorted
    SearchRefused,
}

impl core::fmt::Display for ListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ListError::InvalidPosition => write!(f, "position out of range"),
            ListError::NotFound => write!(f, "value not found"),
            ListError::SearchRefused => write!(f, "list is not sorted"),
        }
    }
}
