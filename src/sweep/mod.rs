//! Bounded filter-and-transform over a collection with a per-run report.
//!
//! A [`Sweep`] is the closure-method version of a loop that checks each
//! element, transforms the ones it wants, counts the rest, and either bails
//! on the first failure or notes it and keeps going.

mod config;
mod operation;

#[cfg(feature = "config")]
pub use config::ConfigError;
pub use config::SweepConfig;
pub use operation::{Sweep, SweepReport};
