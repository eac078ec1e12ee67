/*!
Type definitions for the cipher subsystem.
*/

pub mod algorithms;
pub mod key;

pub use algorithms::{Action, Algorithm};
pub use key::{AffineKey, KeyMaterial, Permutation};
