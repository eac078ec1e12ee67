/*!
Core traits for cipher operations.
*/

pub mod cipher;

pub use cipher::ClassicalCipher;
