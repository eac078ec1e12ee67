/*!
Serialization support for cipher requests.

This module provides serializable request and response envelopes so a
front end can submit work as JSON. It's only built when the
`serde-support` feature is enabled.
*/

use crate::{
    core::crypto::types::algorithms::Action,
    dispatch::{CipherRequest, Dispatcher},
    core::error::Result,
};
use serde::{Deserialize, Serialize};

/// Serializable version of Action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerdeAction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl From<Action> for SerdeAction {
    fn from(action: Action) -> Self {
        match action {
            Action::Encrypt => SerdeAction::Encrypt,
            Action::Decrypt => SerdeAction::Decrypt,
        }
    }
}

impl From<SerdeAction> for Action {
    fn from(action: SerdeAction) -> Self {
        match action {
            SerdeAction::Encrypt => Action::Encrypt,
            SerdeAction::Decrypt => Action::Decrypt,
        }
    }
}

/// Serializable version of CipherRequest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeCipherRequest {
    /// Encrypt or decrypt
    pub action: SerdeAction,
    /// Algorithm identifier or alias
    pub algorithm: String,
    /// Raw key; may be omitted for the monoalphabetic cipher
    #[serde(default)]
    pub key: String,
    /// Text to transform
    pub text: String,
}

impl From<CipherRequest> for SerdeCipherRequest {
    fn from(request: CipherRequest) -> Self {
        Self {
            action: request.action.into(),
            algorithm: request.algorithm_id,
            key: request.raw_key,
            text: request.text,
        }
    }
}

impl From<SerdeCipherRequest> for CipherRequest {
    fn from(request: SerdeCipherRequest) -> Self {
        CipherRequest::new(request.action.into(), request.algorithm, request.key, request.text)
    }
}

/// Outcome of a request: exactly one of `output` and `error` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeCipherResponse {
    /// Transformed text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Validation message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<String>> for SerdeCipherResponse {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(output) => Self {
                output: Some(output),
                error: None,
            },
            Err(e) => Self {
                output: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Run a serialized request through a dispatcher
pub fn process_request(dispatcher: &Dispatcher, request: SerdeCipherRequest) -> SerdeCipherResponse {
    dispatcher.execute(&request.into()).into()
}

/// Serializes a value to JSON
#[cfg(feature = "serde_json")]
pub fn serialize_to_json<T: Serialize>(value: &T) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Deserializes a value from JSON
#[cfg(feature = "serde_json")]
pub fn deserialize_from_json<T: for<'de> Deserialize<'de>>(json: &str) -> std::result::Result<T, serde_json::Error> {
    serde_json::from_str(json)
}
