//! Projecting every element of a collection into a new collection.

use crate::logging::trace;

/// Apply `projection` to each element in a single pass.
///
/// The result always has the same length as `items`, and
/// `map(items, f)[i] == f(&items[i])`.
pub fn map<T, U, F>(items: &[T], projection: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    trace!(len = items.len(), "map");
    items.iter().map(projection).collect()
}

/// Like [`map`], but the projection may fail.
///
/// The first error is returned as-is and no later element is visited.
pub fn try_map<T, U, E, F>(items: &[T], projection: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    trace!(len = items.len(), "try_map");
    items.iter().map(projection).collect()
}

/// Project only the elements that satisfy `predicate`.
///
/// This is the `if ... push(f(x))` loop collapsed into one pass. The
/// projection never runs on rejected elements.
pub fn filter_map<T, U, P, F>(items: &[T], mut predicate: P, mut projection: F) -> Vec<U>
where
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> U,
{
    trace!(len = items.len(), "filter_map");
    items
        .iter()
        .filter_map(|item| predicate(item).then(|| projection(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_times_five() {
        assert_eq!(map(&[1, 2, 3], |x| x * 5), vec![5, 10, 15]);
    }

    #[test]
    fn test_map_changes_type() {
        let lens = map(&["a", "bb", "ccc"], |s| s.len());
        assert_eq!(lens, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_map_fail_fast() {
        let mut calls = 0;
        let result = try_map(&["1", "x", "3"], |s| {
            calls += 1;
            s.parse::<i32>()
        });
        assert!(result.is_err());
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_try_map_ok() {
        let parsed = try_map(&["1", "2"], |s| s.parse::<i32>());
        assert_eq!(parsed, Ok(vec![1, 2]));
    }

    #[test]
    fn test_filter_map_skips_projection_on_rejected() {
        let mut projected = Vec::new();
        let out = filter_map(
            &[1, 2, 3, 4],
            |n| n % 2 == 0,
            |n| {
                projected.push(*n);
                n * 10
            },
        );
        assert_eq!(out, vec![20, 40]);
        assert_eq!(projected, vec![2, 4]);
    }
}
