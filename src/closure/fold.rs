//! Folding a collection into a single value ("inject").

use crate::logging::trace;

/// Thread an accumulator through every element, left to right.
pub fn fold<T, A, F>(items: &[T], init: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    trace!(len = items.len(), "fold");
    items.iter().fold(init, f)
}

/// Like [`fold`], but the step may fail; the first error is returned as-is.
pub fn try_fold<T, A, E, F>(items: &[T], init: A, mut f: F) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    trace!(len = items.len(), "try_fold");
    let mut acc = init;
    for item in items {
        acc = f(acc, item)?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_sum() {
        assert_eq!(fold(&[1, 2, 3, 4], 0, |acc, n| acc + n), 10);
    }

    #[test]
    fn test_fold_is_left_to_right() {
        let joined = fold(&["a", "b", "c"], String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_try_fold_overflow() {
        let result = try_fold(&[200u8, 50, 10], 0u8, |acc, n| acc.checked_add(*n).ok_or(*n));
        assert_eq!(result, Err(10));

        let ok: Result<u8, u8> = try_fold(&[1u8, 2], 0u8, |acc, n| acc.checked_add(*n).ok_or(*n));
        assert_eq!(ok, Ok(3));
    }
}
