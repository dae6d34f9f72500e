//! Encryption and padding trait definitions.

mod encryption;
mod padding;

pub use encryption::{Decryptor, EncryptingKeypair, RandomizedDecryptor, RandomizedEncryptor};
pub use padding::Padding;
