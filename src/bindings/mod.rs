//! Foreign language bindings for the cipher library.
//!
//! This module provides interfaces to use the ciphers from JavaScript and
//! TypeScript via WebAssembly.

// WebAssembly bindings for browser
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use wasm::bindings::*;
