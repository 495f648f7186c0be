//! Precomputed view of a sequence for repeated order-statistic queries.
use log::trace;

use crate::EytzingerTree;
use crate::error::{Result, invalid_arg, verify_non_empty};
use crate::select::{sorted_distinct, verify_distinct_rank, verify_rank};

/// Distinct values of a sequence, sorted once and laid out for search.
///
/// Built from a borrowed slice and owned by the caller; the source sequence
/// is not retained. Rank queries are O(1) and bound queries O(log u), where u
/// is the number of distinct values. Every answer, including each failure,
/// matches the corresponding free function on the source sequence.
#[derive(Debug)]
pub struct OrderIndex {
    /// Ascending distinct values.
    distinct: Vec<i32>,
    tree: EytzingerTree<i32>,
    /// Element count of the source sequence, duplicates included.
    len: usize,
}

impl OrderIndex {
    pub fn new(a: &[i32]) -> Result<Self> {
        verify_non_empty(a)?;
        let distinct = sorted_distinct(a);
        let tree = EytzingerTree::new(&distinct);
        trace!(
            "built order index: {} values, {} distinct",
            a.len(),
            distinct.len()
        );
        Ok(Self {
            distinct,
            tree,
            len: a.len(),
        })
    }

    /// Element count of the source sequence, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: an index is never built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn distinct_count(&self) -> usize {
        self.distinct.len()
    }

    pub fn min(&self) -> i32 {
        self.distinct[0]
    }

    pub fn max(&self) -> i32 {
        self.distinct[self.distinct.len() - 1]
    }

    pub fn kmin(&self, k: usize) -> Result<i32> {
        self.verify_k(k)?;
        Ok(self.distinct[k - 1])
    }

    pub fn kmax(&self, k: usize) -> Result<i32> {
        self.verify_k(k)?;
        Ok(self.distinct[self.distinct.len() - k])
    }

    pub fn ceiling(&self, key: i32) -> Result<i32> {
        match self.tree.ceiling_branchless(key) {
            Some(v) => Ok(v),
            None => invalid_arg("key", "no value in a is >= key"),
        }
    }

    pub fn floor(&self, key: i32) -> Result<i32> {
        match self.tree.floor_branchless(key) {
            Some(v) => Ok(v),
            None => invalid_arg("key", "no value in a is <= key"),
        }
    }

    fn verify_k(&self, k: usize) -> Result<()> {
        verify_rank(k, self.len)?;
        verify_distinct_rank(k, self.distinct.len())
    }
}
