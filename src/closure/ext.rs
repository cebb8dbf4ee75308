//! Method-call form of the closure methods.

use super::{filter, filter_map, fold, map, partition, reject, try_filter, try_map};

/// Closure methods callable directly on slices, vectors and arrays.
///
/// ```
/// use collection_closures::{ClosureMethods, Record, Zombie};
///
/// let zombies = vec![Zombie::brainless("A").unwrap(), Zombie::intact("B").unwrap()];
/// let names = zombies.project(|z| z.name().to_string());
/// assert_eq!(names, vec!["A", "B"]);
/// ```
pub trait ClosureMethods<T> {
    /// See [`filter`](super::filter).
    fn select<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`try_filter`](super::try_filter).
    fn try_select<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>;

    /// See [`reject`](super::reject).
    fn reject<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`partition`](super::partition).
    fn partition_by<P>(&self, predicate: P) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`map`](super::map).
    fn project<U, F>(&self, projection: F) -> Vec<U>
    where
        F: FnMut(&T) -> U;

    /// See [`try_map`](super::try_map).
    fn try_project<U, E, F>(&self, projection: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>;

    /// See [`filter_map`](super::filter_map).
    fn select_project<U, P, F>(&self, predicate: P, projection: F) -> Vec<U>
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&T) -> U;

    /// See [`fold`](super::fold).
    fn inject<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A;
}

impl<T> ClosureMethods<T> for [T] {
    fn select<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter(self, predicate)
    }

    fn try_select<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>,
    {
        try_filter(self, predicate)
    }

    fn reject<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        reject(self, predicate)
    }

    fn partition_by<P>(&self, predicate: P) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        partition(self, predicate)
    }

    fn project<U, F>(&self, projection: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        map(self, projection)
    }

    fn try_project<U, E, F>(&self, projection: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        try_map(self, projection)
    }

    fn select_project<U, P, F>(&self, predicate: P, projection: F) -> Vec<U>
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&T) -> U,
    {
        filter_map(self, predicate, projection)
    }

    fn inject<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        fold(self, init, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_on_vec_and_array() {
        let v = vec![3, 1, 4, 1, 5];
        assert_eq!(v.select(|n| *n > 2), vec![3, 4, 5]);
        assert_eq!(v.reject(|n| *n > 2), vec![1, 1]);
        assert_eq!(v.inject(0, |acc, n| acc + n), 14);

        let arr = [1, 2, 3];
        assert_eq!(arr.project(|x| x * 5), vec![5, 10, 15]);
        assert_eq!(arr.select_project(|x| *x != 2, |x| x * 2), vec![2, 6]);
        assert_eq!(arr.partition_by(|x| *x < 2), (vec![1], vec![2, 3]));
    }

    #[test]
    fn test_try_methods() {
        let words = ["1", "2", "x"];
        assert!(words.try_project(|s| s.parse::<u32>()).is_err());
        let small: Result<Vec<&str>, String> = words.try_select(|s| {
            if s.is_empty() { Err("empty".to_string()) } else { Ok(*s != "x") }
        });
        assert_eq!(small, Ok(vec!["1", "2"]));
    }
}
