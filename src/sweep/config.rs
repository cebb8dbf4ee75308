//! Sweep configuration.

#[cfg(feature = "config")]
use thiserror::Error;

/// Settings for a [`Sweep`](super::Sweep).
///
/// With the `config` feature this can be read from TOML text:
///
/// ```toml
/// limit = 100
/// fail_fast = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct SweepConfig {
    /// Maximum number of elements to visit. `None` visits all of them.
    pub limit: Option<usize>,
    /// Stop at the first closure error instead of recording it.
    pub fail_fast: bool,
}

impl SweepConfig {
    /// Unlimited sweep that stops at the first error.
    pub const fn new() -> Self {
        Self {
            limit: None,
            fail_fast: true,
        }
    }

    /// Parse configuration from a TOML string. Missing keys take their defaults.
    #[cfg(feature = "config")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error.
#[cfg(feature = "config")]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML parse error.
    #[error("Failed to parse sweep config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = SweepConfig::default();
        assert_eq!(config.limit, None);
        assert!(config.fail_fast);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_parse_config() {
        let config = SweepConfig::from_toml_str("limit = 10\nfail_fast = false\n").unwrap();
        assert_eq!(config.limit, Some(10));
        assert!(!config.fail_fast);

        let partial = SweepConfig::from_toml_str("limit = 3").unwrap();
        assert_eq!(partial.limit, Some(3));
        assert!(partial.fail_fast);

        assert_eq!(SweepConfig::from_toml_str("").unwrap(), SweepConfig::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_parse_config_rejects_unknown_keys() {
        assert!(SweepConfig::from_toml_str("limt = 10").is_err());
        assert!(SweepConfig::from_toml_str("limit = \"ten\"").is_err());
    }
}
