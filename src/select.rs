//! K-th distinct order statistics.
//!
//! Ranks count distinct values only: in `[5, 1, 5, 2]` the distinct values are
//! `1, 2, 5`, so the 2nd smallest is `2` and the 3rd is `5`. A sequence of
//! all-equal values has exactly one rank.
//!
//! Two strategies are available through [`SelectConfig`]. Both answer every
//! query identically; they differ only in cost.
use std::collections::HashSet;

use log::trace;

use crate::config::{DistinctStrategy, SelectConfig};
use crate::error::{Result, invalid_arg, verify_non_empty};

/// Selects the k-th smallest distinct value of `a` (1-based).
///
/// Fails if `a` is empty, if `k < 1` or `k > a.len()`, or if `a` holds fewer
/// than `k` distinct values.
pub fn kmin(a: &[i32], k: usize) -> Result<i32> {
    kmin_with(a, k, &SelectConfig::default())
}

/// Selects the k-th largest distinct value of `a` (1-based).
///
/// Fails under the same conditions as [`kmin`].
pub fn kmax(a: &[i32], k: usize) -> Result<i32> {
    kmax_with(a, k, &SelectConfig::default())
}

pub fn kmin_with(a: &[i32], k: usize, config: &SelectConfig) -> Result<i32> {
    select_rank(a, k, Side::Min, config)
}

pub fn kmax_with(a: &[i32], k: usize, config: &SelectConfig) -> Result<i32> {
    select_rank(a, k, Side::Max, config)
}

#[derive(Copy, Clone, Debug)]
enum Side {
    Min,
    Max,
}

impl Side {
    /// 0-based position of rank `k` in an ascending list of `distinct` values.
    fn position(self, k: usize, distinct: usize) -> usize {
        match self {
            Side::Min => k - 1,
            Side::Max => distinct - k,
        }
    }
}

fn select_rank(a: &[i32], k: usize, side: Side, config: &SelectConfig) -> Result<i32> {
    verify_non_empty(a)?;
    verify_rank(k, a.len())?;

    trace!(
        "select {:?} k={} over {} values using {:?}",
        side,
        k,
        a.len(),
        config.strategy
    );

    match config.strategy {
        DistinctStrategy::SortDedup => {
            let distinct = sorted_distinct(a);
            verify_distinct_rank(k, distinct.len())?;
            Ok(distinct[side.position(k, distinct.len())])
        }
        DistinctStrategy::QuickSelect => {
            let mut distinct = unordered_distinct(a);
            verify_distinct_rank(k, distinct.len())?;
            let target = side.position(k, distinct.len());
            let right = distinct.len() - 1;
            Ok(QuickSelect::select(&mut distinct, 0, right, target))
        }
    }
}

pub(crate) fn verify_rank(k: usize, len: usize) -> Result<()> {
    crate::verify_arg!(k, (1..=len).contains(&k));
    Ok(())
}

pub(crate) fn verify_distinct_rank(k: usize, distinct: usize) -> Result<()> {
    if k > distinct {
        return invalid_arg("k", "k exceeds the number of distinct values");
    }
    Ok(())
}

/// Ascending distinct values of `a`, computed on a private sorted copy.
pub(crate) fn sorted_distinct(a: &[i32]) -> Vec<i32> {
    let mut sorted = a.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

/// Distinct values of `a` in first-seen order.
fn unordered_distinct(a: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(a.len());
    a.iter().copied().filter(|v| seen.insert(*v)).collect()
}

/// Quickselect is a selection algorithm to find the kth smallest element in an unordered list.
///
/// It runs in O(N) on average. Inputs here are already deduplicated, so the
/// strict `<` in the partition never has to deal with runs of equal keys.
struct QuickSelect {}

impl QuickSelect {
    /// Lomuto partition scheme as used in quicksort.
    fn partition<T: Ord>(data: &mut [T], left: usize, right: usize, pivot: usize) -> usize {
        if data.is_empty() || left >= right {
            return left;
        }
        // Move pivot to the end.
        data.swap(pivot, right);
        let mut store = left;

        for i in left..right {
            if data[i] < data[right] {
                data.swap(store, i);
                store += 1;
            }
        }

        // Move pivot to its final place.
        data.swap(right, store);

        store
    }

    /// Returns the element that would sit at index `k` if `data[left..=right]` were sorted.
    fn select<T: Ord + Copy>(data: &mut [T], left: usize, right: usize, k: usize) -> T {
        debug_assert!(left <= k && k <= right);
        let mut left = left;
        let mut right = right;
        loop {
            if left == right {
                return data[left];
            }

            let pivot = Self::partition(data, left, right, left + (right - left) / 2);

            if k == pivot {
                return data[k];
            } else if k < pivot {
                right = pivot - 1;
            } else {
                left = pivot + 1;
            }
        }
    }
}
