//! Error types for building and parsing records.

use thiserror::Error;

/// Errors that can occur while constructing or parsing a [`Zombie`](super::Zombie).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseZombieError {
    /// The name was empty or only whitespace.
    #[error("Zombie name must not be empty")]
    EmptyName,

    /// The state after the `:` was neither `brainless` nor `intact`.
    #[error("Unknown zombie state '{state}' (expected 'brainless' or 'intact')")]
    UnknownState { state: String },

    /// An entry in a horde list failed to parse.
    #[error("Invalid horde entry {position}: {source}")]
    Entry {
        position: usize,
        #[source]
        source: Box<ParseZombieError>,
    },
}
