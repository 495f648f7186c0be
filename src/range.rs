use crate::error::{Result, verify_non_empty};

/// Returns every value of `a` in the inclusive range `[low, high]`, in input
/// order and with duplicates kept.
///
/// `low` and `high` need not occur in `a`. No qualifying value (including any
/// `low > high`) yields an empty vector rather than an error; only an empty
/// `a` is rejected. The result is allocated for exactly the number of matches.
pub fn range(a: &[i32], low: i32, high: i32) -> Result<Vec<i32>> {
    verify_non_empty(a)?;

    let in_range = |v: &&i32| low <= **v && **v <= high;
    let count = a.iter().filter(in_range).count();
    let mut out = Vec::with_capacity(count);
    out.extend(a.iter().filter(in_range).copied());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_keeps_order_and_duplicates() {
        let a = [5, 1, 5, 2, 9, 2];
        assert_eq!(range(&a, 2, 5).unwrap(), vec![5, 5, 2, 2]);
        assert_eq!(a, [5, 1, 5, 2, 9, 2]);
    }

    #[test]
    fn test_bounds_not_in_sequence() {
        let a = [10, 20, 30, 40];
        assert_eq!(range(&a, 15, 35).unwrap(), vec![20, 30]);
        assert_eq!(range(&a, i32::MIN, i32::MAX).unwrap(), a.to_vec());
    }

    #[test]
    fn test_no_match_is_empty() {
        let a = [1, 2, 3];
        assert!(range(&a, 4, 8).unwrap().is_empty());
        assert!(range(&a, -8, 0).unwrap().is_empty());
    }

    #[test]
    fn test_inverted_bounds_is_empty() {
        assert!(range(&[1, 2, 3], 3, 1).unwrap().is_empty());
    }

    #[test]
    fn test_single_point_range() {
        assert_eq!(range(&[4, 1, 4, 4], 4, 4).unwrap(), vec![4, 4, 4]);
    }

    #[test]
    fn test_empty_input() {
        assert!(range(&[], 0, 10).unwrap_err().is_invalid_arg());
    }

    #[test]
    fn test_random_sub_multiset_and_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let len = rng.random_range(1..48usize);
            let a: Vec<i32> = (0..len).map(|_| rng.random_range(-10..10)).collect();
            let low = rng.random_range(-12..12);
            let high = rng.random_range(-12..12);

            let out = range(&a, low, high).unwrap();
            assert!(out.iter().all(|&v| low <= v && v <= high));
            for v in low..=high {
                let expected = a.iter().filter(|&&x| x == v).count();
                let actual = out.iter().filter(|&&x| x == v).count();
                assert_eq!(expected, actual, "count of {v} in {a:?}");
            }

            if !out.is_empty() {
                assert_eq!(range(&out, low, high).unwrap(), out);
            }
        }
    }
}
