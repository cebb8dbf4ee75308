//! Collection closure methods: replacing accumulation loops with `select`, `map` and friends.
//!
//! A common loop shape creates an empty collection, walks another one, and
//! pushes whatever passes a test or whatever a computation yields. This
//! library provides that shape as single calls taking a closure.
//!
//! # Quick Start
//!
//! ```
//! use collection_closures::prelude::*;
//!
//! let zombies = parse_horde("A:brainless, B:intact")?;
//!
//! // Filter: keep the brainless ones
//! let brainless = filter(&zombies, |z| z.is_brainless());
//! assert_eq!(brainless, vec![Zombie::brainless("A")?]);
//!
//! // Map: one result per element, same order
//! let names = zombies.project(|z| z.name().to_string());
//! assert_eq!(names, vec!["A", "B"]);
//!
//! assert_eq!(map(&[1, 2, 3], |x| x * 5), vec![5, 10, 15]);
//! # Ok::<(), collection_closures::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`closure`] - Filter, map, fold and their fallible forms, plus [`ClosureMethods`]
//! - [`record`] - The [`Record`] trait and the [`Zombie`] record
//! - [`sweep`] - Bounded filter-and-transform with a [`SweepReport`]
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `serde` - Serialize/Deserialize for [`Zombie`] and [`SweepConfig`]
//! - `config` - Parse [`SweepConfig`] from TOML text
//! - `full` - Enable all features

pub mod closure;
mod logging;
pub mod prelude;
pub mod record;
pub mod sweep;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export the closure methods at crate root for convenience
pub use closure::{
    ClosureMethods, filter, filter_map, fold, map, partition, reject, try_filter, try_fold,
    try_map,
};

pub use record::{ParseZombieError, Record, Zombie, parse_horde};

#[cfg(feature = "config")]
pub use sweep::ConfigError;
pub use sweep::{Sweep, SweepConfig, SweepReport};
