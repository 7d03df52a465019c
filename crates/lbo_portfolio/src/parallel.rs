//! Rayon-based parallelisation utilities.
//!
//! Deals are independent, so the per-deal pipeline maps cleanly onto
//! `par_iter`. Rayon's indexed collect keeps output in input order.

use lbo_core::config::ParallelSettings;
use rayon::prelude::*;

/// Parallel map preserving input order.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `mapper` - Function to apply to each item
pub fn parallel_map<T, R, F>(items: &[T], mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(mapper).collect()
}

/// Maps in parallel when `settings` allow it for this many items,
/// sequentially otherwise. Output order always matches input order.
pub fn maybe_parallel_map<T, R, F>(items: &[T], settings: &ParallelSettings, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if settings.should_parallelize(items.len()) {
        parallel_map(items, mapper)
    } else {
        items.iter().map(mapper).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map() {
        let items: Vec<i32> = (0..100).collect();
        let doubled: Vec<i32> = parallel_map(&items, |&x| x * 2);

        assert_eq!(doubled.len(), 100);
        assert_eq!(doubled[50], 100);
    }

    #[test]
    fn test_maybe_parallel_map_preserves_order() {
        let items: Vec<usize> = (0..1_000).collect();
        let settings = ParallelSettings {
            enabled: true,
            parallel_threshold: 10,
        };
        let mapped = maybe_parallel_map(&items, &settings, |&x| x + 1);
        assert!(mapped.iter().enumerate().all(|(i, &x)| x == i + 1));
    }

    #[test]
    fn test_maybe_parallel_map_sequential_below_threshold() {
        let items = vec![3, 1, 2];
        let mapped = maybe_parallel_map(&items, &ParallelSettings::default(), |&x| x * 10);
        assert_eq!(mapped, vec![30, 10, 20]);
    }
}
