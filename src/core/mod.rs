//! Core components of the cipher library.
//!
//! This module contains the shared character utilities, the cipher
//! algorithms and their key types, constants and error handling.

// Export cipher functionality
pub mod crypto;

// Character classification shared by the ciphers
pub mod alphabet;

// Alphabets, default keys and bounds
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Result, ValidationError};
pub use self::crypto::{Action, Algorithm, ClassicalCipher, KeyMaterial};
