//! Nearest-bound lookup over an unsorted sequence.
//!
//! Both lookups are a single linear scan and need no sorted copy. For many
//! lookups against the same sequence, build an [`OrderIndex`](crate::OrderIndex)
//! once instead.

use crate::error::{Result, invalid_arg, verify_non_empty};

/// Returns the smallest value of `a` that is greater than or equal to `key`.
///
/// `key` need not occur in `a`; when it does, it is its own ceiling. Fails if
/// `a` is empty or every value is below `key`.
pub fn ceiling(a: &[i32], key: i32) -> Result<i32> {
    verify_non_empty(a)?;
    let mut best: Option<i32> = None;
    for &v in a {
        if v >= key && best.is_none_or(|b| v < b) {
            best = Some(v);
        }
    }
    match best {
        Some(v) => Ok(v),
        None => invalid_arg("key", "no value in a is >= key"),
    }
}

/// Returns the largest value of `a` that is less than or equal to `key`.
///
/// Fails if `a` is empty or every value is above `key`.
pub fn floor(a: &[i32], key: i32) -> Result<i32> {
    verify_non_empty(a)?;
    let mut best: Option<i32> = None;
    for &v in a {
        if v <= key && best.is_none_or(|b| v > b) {
            best = Some(v);
        }
    }
    match best {
        Some(v) => Ok(v),
        None => invalid_arg("key", "no value in a is <= key"),
    }
}
