/*!
Registry for cipher algorithms.

This module provides a central lookup so front ends can select an
algorithm by name at runtime.
*/

pub mod manager;

// Re-export registry manager functions
pub use manager::{CipherRegistry, get_algorithm, get_registry, list_algorithms};
