/*!
Dispatcher configuration.

This module provides the options a front end can adjust without touching
the cipher implementations.
*/

use crate::core::constants::DEFAULT_MONOALPHABETIC_KEY;
use crate::core::crypto::types::key::Permutation;
use crate::core::error::{Result, ValidationError};

/// Configuration for a [`Dispatcher`](crate::dispatch::Dispatcher)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherConfig {
    /// Key used by the monoalphabetic cipher when the request has none
    pub default_monoalphabetic_key: String,
    /// Trim surrounding whitespace from the raw key
    pub trim_key: bool,
    /// Trim surrounding whitespace from the text. Off by default, since
    /// rail fence ciphertext may begin or end with spaces.
    pub trim_text: bool,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            default_monoalphabetic_key: DEFAULT_MONOALPHABETIC_KEY.to_string(),
            trim_key: true,
            trim_text: false,
        }
    }
}

impl CipherConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different fallback key for the monoalphabetic cipher
    pub fn with_default_monoalphabetic_key(mut self, key: impl Into<String>) -> Self {
        self.default_monoalphabetic_key = key.into();
        self
    }

    /// Enable or disable trimming of the raw key
    pub fn with_trim_key(mut self, trim_key: bool) -> Self {
        self.trim_key = trim_key;
        self
    }

    /// Enable or disable trimming of the text
    pub fn with_trim_text(mut self, trim_text: bool) -> Self {
        self.trim_text = trim_text;
        self
    }

    /// Parsed fallback monoalphabetic key
    pub fn default_permutation(&self) -> Result<Permutation> {
        Permutation::parse(&self.default_monoalphabetic_key)
            .ok_or(ValidationError::InvalidMonoalphabeticKey)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.default_permutation().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CipherConfig::new();
        assert!(config.validate().is_ok());
        assert!(config.trim_key);
        assert!(!config.trim_text);
    }

    #[test]
    fn test_builder() {
        let config = CipherConfig::new()
            .with_default_monoalphabetic_key("ZYXWVUTSRQPONMLKJIHGFEDCBA")
            .with_trim_key(false)
            .with_trim_text(true);
        assert!(!config.trim_key);
        assert!(config.trim_text);
        assert_eq!(
            config.default_permutation().unwrap().to_key_string(),
            "ZYXWVUTSRQPONMLKJIHGFEDCBA"
        );
    }

    #[test]
    fn test_invalid_default_key() {
        let config = CipherConfig::new().with_default_monoalphabetic_key("ABC");
        assert_eq!(config.validate(), Err(ValidationError::InvalidMonoalphabeticKey));
    }
}
