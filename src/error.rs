//! Unified error type for the collection-closures library.
//!
//! Errors raised by caller-supplied closures are never wrapped here; the
//! closure methods hand them back unchanged. This type covers the errors the
//! library itself produces.

use thiserror::Error;

use crate::record::ParseZombieError;
#[cfg(feature = "config")]
use crate::sweep::ConfigError;

/// Unified error type for library-produced failures.
///
/// # Example
///
/// ```
/// use collection_closures::{ClosureMethods, Record, Result, parse_horde};
///
/// fn brainless_names(input: &str) -> Result<Vec<String>> {
///     let horde = parse_horde(input)?;
///     Ok(horde.select_project(|z| z.is_brainless(), |z| z.name().to_string()))
/// }
///
/// assert_eq!(brainless_names("A:brainless, B").unwrap(), vec!["A"]);
/// assert!(brainless_names("A:sleepy").unwrap_err().is_record());
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A record could not be built or parsed.
    #[error(transparent)]
    Record(#[from] ParseZombieError),

    /// Sweep configuration could not be parsed.
    #[cfg(feature = "config")]
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a record error.
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns `true` if this is a configuration error.
    #[cfg(feature = "config")]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
