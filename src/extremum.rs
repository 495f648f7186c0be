//! Minimum and maximum by a single linear scan.

use crate::error::{Result, verify_non_empty};

/// Selects the minimum value of `a`. Fails if `a` is empty.
pub fn min(a: &[i32]) -> Result<i32> {
    verify_non_empty(a)?;
    let mut min = a[0];
    for &v in &a[1..] {
        if v < min {
            min = v;
        }
    }
    Ok(min)
}

/// Selects the maximum value of `a`. Fails if `a` is empty.
pub fn max(a: &[i32]) -> Result<i32> {
    verify_non_empty(a)?;
    let mut max = a[0];
    for &v in &a[1..] {
        if v > max {
            max = v;
        }
    }
    Ok(max)
}
