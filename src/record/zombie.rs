//! The zombie record used throughout the examples.

use std::fmt;
use std::str::FromStr;

use super::Record;
use super::error::ParseZombieError;

const BRAINLESS: &str = "brainless";
const INTACT: &str = "intact";

/// A named zombie that either still has its brain or does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ZombieFields")
)]
pub struct Zombie {
    name: String,
    brainless: bool,
}

/// Unvalidated wire shape of a [`Zombie`]; deserialization goes through [`Zombie::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ZombieFields {
    name: String,
    brainless: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<ZombieFields> for Zombie {
    type Error = ParseZombieError;

    fn try_from(fields: ZombieFields) -> Result<Self, Self::Error> {
        Self::new(fields.name, fields.brainless)
    }
}

impl Zombie {
    /// Create a zombie. The name is trimmed and must not be empty.
    pub fn new(name: impl Into<String>, brainless: bool) -> Result<Self, ParseZombieError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ParseZombieError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_string(),
            brainless,
        })
    }

    /// Create a zombie that has lost its brain.
    pub fn brainless(name: impl Into<String>) -> Result<Self, ParseZombieError> {
        Self::new(name, true)
    }

    /// Create a zombie whose brain is still in place.
    pub fn intact(name: impl Into<String>) -> Result<Self, ParseZombieError> {
        Self::new(name, false)
    }
}

impl Record for Zombie {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_brainless(&self) -> bool {
        self.brainless
    }
}

impl fmt::Display for Zombie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.brainless { BRAINLESS } else { INTACT };
        write!(f, "{}:{}", self.name, state)
    }
}

/// Parse from `"name"`, `"name:brainless"` or `"name:intact"`.
///
/// The state is matched case-insensitively. The last `:` separates the
/// state, so names may themselves contain colons as long as a state is given.
impl FromStr for Zombie {
    type Err = ParseZombieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, state)) = s.rsplit_once(':') else {
            return Self::intact(s);
        };

        let state = state.trim();
        if state.eq_ignore_ascii_case(BRAINLESS) {
            Self::brainless(name)
        } else if state.eq_ignore_ascii_case(INTACT) {
            Self::intact(name)
        } else {
            Err(ParseZombieError::UnknownState {
                state: state.to_string(),
            })
        }
    }
}

/// Parse a comma-separated list of zombie literals, keeping their order.
///
/// Blank entries are skipped. The first malformed entry fails the whole
/// parse; `position` in the error is its zero-based index in the list.
pub fn parse_horde(s: &str) -> Result<Vec<Zombie>, ParseZombieError> {
    s.split(',')
        .enumerate()
        .filter(|(_, entry)| !entry.trim().is_empty())
        .map(|(position, entry)| {
            entry.parse().map_err(|e| ParseZombieError::Entry {
                position,
                source: Box::new(e),
            })
        })
        .collect()
}
