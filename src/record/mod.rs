//! Records processed by the collection closure methods.
//!
//! The closure methods themselves are generic over any element type. The
//! [`Record`] trait names the two attributes the examples in this crate
//! rely on, and [`Zombie`] is the concrete record they use.

mod error;
mod zombie;

pub use error::ParseZombieError;
pub use zombie::{Zombie, parse_horde};

/// An opaque record exposing a name and a brainless predicate.
pub trait Record {
    /// Display name of the record.
    fn name(&self) -> &str;

    /// Whether the record is brainless.
    fn is_brainless(&self) -> bool;
}

impl<R: Record + ?Sized> Record for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_brainless(&self) -> bool {
        (**self).is_brainless()
    }
}
