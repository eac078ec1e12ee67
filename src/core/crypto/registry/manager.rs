/*!
Registry manager for cipher algorithms.

This module maps algorithm identifiers, including a few common aliases,
to [`Algorithm`] values. The table is built once and never mutated.
*/

use std::collections::HashMap;
use once_cell::sync::Lazy;

use crate::core::crypto::types::algorithms::Algorithm;

/// Registry of supported cipher algorithms
pub struct CipherRegistry {
    /// Identifier and alias lookup
    algorithms: HashMap<&'static str, Algorithm>,
}

impl CipherRegistry {
    /// Create a new registry with every algorithm and its aliases
    fn new() -> Self {
        let mut registry = Self {
            algorithms: HashMap::new(),
        };

        for algorithm in Algorithm::ALL {
            registry.register(algorithm.id(), algorithm);
        }

        registry.register("mono", Algorithm::Monoalphabetic);
        registry.register("vigenère", Algorithm::Vigenere);
        registry.register("railfence", Algorithm::RailFence);
        registry.register("rail-fence", Algorithm::RailFence);
        registry.register("columnar", Algorithm::Transposition);

        registry
    }

    fn register(&mut self, name: &'static str, algorithm: Algorithm) {
        self.algorithms.insert(name, algorithm);
    }

    /// Look up an algorithm by identifier or alias, ignoring case and surrounding whitespace
    pub fn get(&self, name: &str) -> Option<Algorithm> {
        self.algorithms.get(name.trim().to_lowercase().as_str()).copied()
    }

    /// Canonical identifiers, in presentation order
    pub fn list(&self) -> Vec<&'static str> {
        Algorithm::ALL.iter().map(Algorithm::id).collect()
    }

    /// Every accepted name, canonical identifiers and aliases alike, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.algorithms.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

// Global registry instance
static REGISTRY: Lazy<CipherRegistry> = Lazy::new(CipherRegistry::new);

// Public API

/// Get a reference to the global registry
pub fn get_registry() -> &'static CipherRegistry {
    &REGISTRY
}

/// Get an algorithm by identifier or alias
pub fn get_algorithm(name: &str) -> Option<Algorithm> {
    get_registry().get(name)
}

/// List the canonical identifiers of all algorithms
pub fn list_algorithms() -> Vec<&'static str> {
    get_registry().list()
}
