//! Collection closure methods.
//!
//! Each function here replaces a hand-written accumulation loop (create an
//! empty vector, walk the input, push what you want) with a single call that
//! takes a closure. All of them:
//!
//! - visit the input once, front to back, and never mutate it;
//! - return a freshly owned collection that does not borrow from the input;
//! - propagate a failing closure's error unchanged (the `try_` variants).
//!
//! [`ClosureMethods`] exposes the same operations as methods on slices.

mod ext;
mod fold;
mod map;
mod select;

pub use ext::ClosureMethods;
pub use fold::{fold, try_fold};
pub use map::{filter_map, map, try_map};
pub use select::{filter, partition, reject, try_filter};
