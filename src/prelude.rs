//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```
//! use collection_closures::prelude::*;
//!
//! let horde = parse_horde("A:brainless, B")?;
//! let brainless = horde.select(|z| z.is_brainless());
//! assert_eq!(brainless.len(), 1);
//! # Ok::<(), collection_closures::Error>(())
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Closure methods
pub use crate::closure::{
    ClosureMethods, filter, filter_map, fold, map, partition, reject, try_filter, try_fold,
    try_map,
};

// Records
pub use crate::record::{ParseZombieError, Record, Zombie, parse_horde};

// Sweeps
#[cfg(feature = "config")]
pub use crate::sweep::ConfigError;
pub use crate::sweep::{Sweep, SweepConfig, SweepReport};
