/*!
Request dispatch.

The dispatcher is the only place raw user input is read. It checks the
text and key, parses the key for the selected algorithm, and runs the
matching transform. Validation always finishes before any text is
transformed.
*/

pub mod keys;
pub mod request;

pub use keys::parse_key;
pub use request::CipherRequest;

use crate::core::crypto::algorithms::create_cipher;
use crate::core::crypto::config::CipherConfig;
use crate::core::crypto::registry;
use crate::core::crypto::traits::ClassicalCipher;
use crate::core::crypto::types::algorithms::{Action, Algorithm};
use crate::core::error::{Result, ValidationError};

/// Validates requests and routes them to the selected cipher
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: CipherConfig,
}

impl Dispatcher {
    /// Create a dispatcher with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher with a specific configuration
    pub fn with_config(config: CipherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Validate the inputs and run `action` with the selected algorithm
    pub fn dispatch(&self, action: Action, algorithm_id: &str, raw_key: &str, text: &str) -> Result<String> {
        let raw_key = if self.config.trim_key { raw_key.trim() } else { raw_key };
        let text = if self.config.trim_text { text.trim() } else { text };

        log::debug!(
            "Dispatching {} with algorithm {:?} ({} chars)",
            action,
            algorithm_id,
            text.chars().count()
        );

        let result = self.validate(algorithm_id, raw_key, text).and_then(|algorithm| {
            let key = parse_key(algorithm, raw_key, &self.config)?;
            let cipher = create_cipher(algorithm, key)?;
            Ok(match action {
                Action::Encrypt => cipher.encrypt(text),
                Action::Decrypt => cipher.decrypt(text),
            })
        });

        if let Err(e) = &result {
            log::debug!("Rejected {} request for {:?}: {:?}", action, algorithm_id, e);
        }
        result
    }

    /// Run a prepared request
    pub fn execute(&self, request: &CipherRequest) -> Result<String> {
        self.dispatch(
            request.action,
            &request.algorithm_id,
            &request.raw_key,
            &request.text,
        )
    }

    fn validate(&self, algorithm_id: &str, raw_key: &str, text: &str) -> Result<Algorithm> {
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let algorithm = registry::get_algorithm(algorithm_id);
        let key_optional = algorithm.is_some_and(|a| !a.requires_key());
        if raw_key.is_empty() && !key_optional {
            return Err(ValidationError::EmptyKey);
        }

        algorithm.ok_or_else(|| ValidationError::UnknownAlgorithm(algorithm_id.to_string()))
    }
}

/// Dispatch with the default configuration
pub fn dispatch(action: Action, algorithm_id: &str, raw_key: &str, text: &str) -> Result<String> {
    Dispatcher::new().dispatch(action, algorithm_id, raw_key, text)
}

/// Format a dispatch result for display: the text itself, or `Error: <message>`
pub fn render(result: Result<String>) -> String {
    match result {
        Ok(output) => output,
        Err(e) => format!("Error: {}", e),
    }
}

/// Process four raw strings the way a form-based front end submits them.
///
/// Form fields are trimmed, so text that is only whitespace counts as empty.
pub fn process_text(action: &str, algorithm_id: &str, raw_key: &str, text: &str) -> String {
    let dispatcher = Dispatcher {
        config: CipherConfig::new().with_trim_text(true),
    };
    render(
        CipherRequest::from_raw(action, algorithm_id, raw_key, text)
            .and_then(|request| dispatcher.execute(&request)),
    )
}
