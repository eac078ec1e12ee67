/*!
Cipher requests as received from a front end.
*/

use crate::core::crypto::types::algorithms::Action;
use crate::core::error::Result;

/// One invocation of the dispatcher: four plain inputs, parsed lazily
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    /// Encrypt or decrypt
    pub action: Action,
    /// Algorithm identifier or alias, resolved through the registry
    pub algorithm_id: String,
    /// Key exactly as the user typed it
    pub raw_key: String,
    /// Text to transform
    pub text: String,
}

impl CipherRequest {
    /// Create a new request
    pub fn new(
        action: Action,
        algorithm_id: impl Into<String>,
        raw_key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            action,
            algorithm_id: algorithm_id.into(),
            raw_key: raw_key.into(),
            text: text.into(),
        }
    }

    /// Create a request from four raw strings, parsing the action
    pub fn from_raw(action: &str, algorithm_id: &str, raw_key: &str, text: &str) -> Result<Self> {
        Ok(Self::new(action.parse()?, algorithm_id, raw_key, text))
    }

    /// Same request with the opposite action
    pub fn inverted(&self) -> Self {
        let action = match self.action {
            Action::Encrypt => Action::Decrypt,
            Action::Decrypt => Action::Encrypt,
        };
        Self {
            action,
            ..self.clone()
        }
    }
}
