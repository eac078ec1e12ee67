/*!
Transposition ciphers: characters are reordered, never replaced.
*/

pub mod columnar;
pub mod rail_fence;

pub use columnar::ColumnarCipher;
pub use rail_fence::RailFenceCipher;
