/*!
Cipher components.

This module provides the cipher algorithms, the key material they consume,
and the registry and configuration used to select and drive them.
*/

// Cipher implementations
pub mod algorithms;

// Cipher interface
pub mod traits;

// Algorithm, action and key types
pub mod types;

// Config
pub mod config;

// Registry for algorithm lookup
pub mod registry;

// Random key generation
pub mod keygen;

pub use algorithms::create_cipher;
pub use config::CipherConfig;
pub use registry::{get_algorithm, get_registry, list_algorithms};
pub use traits::ClassicalCipher;
pub use types::{Action, AffineKey, Algorithm, KeyMaterial, Permutation};
