//! Order statistics over integer sequences: min/max, k-th distinct
//! smallest/largest, inclusive range extraction and ceiling/floor lookup.
//!
//! Every operation borrows the caller's slice, never mutates it and returns
//! a value that already occurs in it.
#![cfg_attr(feature = "nightly", feature(core_intrinsics))]
pub mod bound;
pub mod config;
pub mod error;
pub mod extremum;
pub mod index;
pub mod range;
pub mod select;

pub use bound::{ceiling, floor};
pub use config::{DistinctStrategy, SelectConfig};
pub use error::{Error, ErrorKind, Result};
pub use extremum::{max, min};
pub use index::OrderIndex;
pub use range::range;
pub use select::{kmax, kmax_with, kmin, kmin_with};

/// Sorted values in 0-indexed Eytzinger (breadth-first) layout.
///
/// Node `k` has children `2k + 1` and `2k + 2`, so the top levels of the
/// implicit tree share cache lines and every search is a root-to-leaf walk.
#[derive(Debug)]
pub struct EytzingerTree<T> {
    data: Vec<T>,
}

impl<T: Ord + Copy + Default> EytzingerTree<T> {
    pub fn new(sorted: &[T]) -> Self {
        debug_assert!(sorted.is_sorted());
        let mut data = vec![T::default(); sorted.len()];
        let mut index = 0;
        Self::build(&mut data, 0, sorted, &mut index);
        Self { data }
    }

    /// Converts sorted slice into 0-indexed Eytzinger layout
    fn build(data: &mut [T], k: usize, sorted: &[T], index: &mut usize) {
        if k >= data.len() {
            return;
        }

        // Left subtree
        Self::build(data, 2 * k + 1, sorted, index);

        // Current node
        data[k] = sorted[*index];
        *index += 1;

        // Right subtree
        Self::build(data, 2 * k + 2, sorted, index);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_ref(&self) -> &[T] {
        &self.data
    }

    /// Position of `target` in the layout, if present.
    pub fn search(&self, target: T) -> Option<usize> {
        let n = self.data.len();
        let mut i = 0;

        while i < n {
            if target < self.data[i] {
                i = 2 * i + 1; // go left
            } else if target > self.data[i] {
                i = 2 * i + 2; // go right
            } else {
                return Some(i); // found it
            }
        }

        None
    }

    /// Smallest stored value `>= key`.
    pub fn ceiling(&self, key: T) -> Option<T> {
        let n = self.data.len();
        let mut i = 0;
        let mut candidate = None;

        while i < n {
            if self.data[i] >= key {
                // Qualifies; a smaller one can only be on the left.
                candidate = Some(self.data[i]);
                i = 2 * i + 1;
            } else {
                i = 2 * i + 2;
            }
        }

        candidate
    }

    /// Largest stored value `<= key`.
    pub fn floor(&self, key: T) -> Option<T> {
        let n = self.data.len();
        let mut i = 0;
        let mut candidate = None;

        while i < n {
            if self.data[i] <= key {
                candidate = Some(self.data[i]);
                i = 2 * i + 2;
            } else {
                i = 2 * i + 1;
            }
        }

        candidate
    }

    pub fn ceiling_branchless(&self, key: T) -> Option<T> {
        let n = self.data.len();
        let mut i = 0;
        let mut candidate = n; // Invalid index means "not found"

        while i < n {
            let ge = (self.data[i] >= key) as usize;
            candidate = ge * i + (1 - ge) * candidate;

            // Left when the node qualifies, right otherwise.
            i = 2 * i + 2 - ge;
        }

        if candidate < n { Some(self.data[candidate]) } else { None }
    }

    pub fn floor_branchless(&self, key: T) -> Option<T> {
        let n = self.data.len();
        let mut i = 0;
        let mut candidate = n;

        while i < n {
            let le = (self.data[i] <= key) as usize;
            candidate = le * i + (1 - le) * candidate;
            i = 2 * i + 1 + le;
        }

        if candidate < n { Some(self.data[candidate]) } else { None }
    }

    #[cfg(feature = "nightly")]
    pub fn ceiling_prefetch(&self, key: T) -> Option<T> {
        let n = self.data.len();
        let mut i = 0;
        let mut candidate = n;

        while i < n {
            // Prefetch both children
            let left = 2 * i + 1;
            let right = 2 * i + 2;

            if left < n {
                unsafe {
                    std::intrinsics::prefetch_read_data::<T, 3>(self.data.as_ptr().add(left));
                }
            }
            if right < n {
                unsafe {
                    std::intrinsics::prefetch_read_data::<T, 3>(self.data.as_ptr().add(right));
                }
            }

            let ge = (self.data[i] >= key) as usize;
            candidate = ge * i + (1 - ge) * candidate;
            i = 2 * i + 2 - ge;
        }

        if candidate < n { Some(self.data[candidate]) } else { None }
    }
}
