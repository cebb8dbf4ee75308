//! Selecting elements of a collection with a predicate.

use crate::logging::trace;

/// Keep the elements for which `predicate` returns `true`, in input order.
///
/// Replaces the accumulation loop:
///
/// ```
/// # use collection_closures::{filter, Record, Zombie};
/// # let zombies = vec![Zombie::brainless("A").unwrap(), Zombie::intact("B").unwrap()];
/// let mut brainless = Vec::new();
/// for zombie in &zombies {
///     if zombie.is_brainless() {
///         brainless.push(zombie.clone());
///     }
/// }
///
/// assert_eq!(filter(&zombies, |z| z.is_brainless()), brainless);
/// ```
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    trace!(len = items.len(), "filter");
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Like [`filter`], but the predicate may fail.
///
/// The first error is returned as-is and no later element is visited.
pub fn try_filter<T, E, P>(items: &[T], mut predicate: P) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    trace!(len = items.len(), "try_filter");
    let mut selected = Vec::new();
    for item in items {
        if predicate(item)? {
            selected.push(item.clone());
        }
    }
    Ok(selected)
}

/// Keep the elements for which `predicate` returns `false`.
pub fn reject<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(items, |item| !predicate(item))
}

/// Split into `(matching, rest)`, each keeping input order.
pub fn partition<T, P>(items: &[T], mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    trace!(len = items.len(), "partition");
    items.iter().cloned().partition(|item| predicate(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_order() {
        let evens = filter(&[5, 2, 8, 1, 4], |n| n % 2 == 0);
        assert_eq!(evens, vec![2, 8, 4]);
    }

    #[test]
    fn test_filter_empty() {
        let empty: [u8; 0] = [];
        assert!(filter(&empty, |_| true).is_empty());
    }

    #[test]
    fn test_try_filter_stops_at_first_error() {
        let mut visited = Vec::new();
        let result = try_filter(&[1, 2, 3, 4], |n| {
            visited.push(*n);
            if *n == 3 { Err(format!("bad {n}")) } else { Ok(*n > 1) }
        });
        assert_eq!(result, Err("bad 3".to_string()));
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_filter_ok() {
        let result: Result<Vec<i32>, ()> = try_filter(&[1, 2, 3], |n| Ok(*n != 2));
        assert_eq!(result, Ok(vec![1, 3]));
    }

    #[test]
    fn test_reject_and_partition() {
        let items = ["ash", "bub", "cleo"];
        assert_eq!(reject(&items, |s| s.len() == 3), vec!["cleo"]);

        let (short, long) = partition(&items, |s| s.len() == 3);
        assert_eq!(short, vec!["ash", "bub"]);
        assert_eq!(long, vec!["cleo"]);
    }
}
