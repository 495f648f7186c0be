/// How k-th distinct selection suppresses duplicates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DistinctStrategy {
    /// Sort a private copy and compress runs of equal values. O(n log n).
    #[default]
    SortDedup,
    /// Collect distinct values through a hash set, then quickselect the
    /// requested rank. O(n) on average.
    QuickSelect,
}

/// Options for [`kmin_with`](crate::kmin_with) and [`kmax_with`](crate::kmax_with).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectConfig {
    pub strategy: DistinctStrategy,
}

impl SelectConfig {
    /// Config using [`DistinctStrategy::SortDedup`].
    pub fn new() -> Self {
        Self {
            strategy: DistinctStrategy::SortDedup,
        }
    }

    /// Config using the given duplicate-suppression strategy.
    pub fn with_strategy(strategy: DistinctStrategy) -> Self {
        let mut c = Self::new();
        c.strategy = strategy;
        c
    }
}
