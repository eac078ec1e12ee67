/*!
Ciphers that transform groups of letters together.
*/

pub mod playfair;

pub use playfair::{PlayfairCipher, PlayfairGrid};
