//! Block padding schemes.

use alloc::vec::Vec;

use crate::errors::Result;

/// Padding scheme used to align data to a cipher's block size.
pub trait Padding {
    /// Pad `buf` up to a block boundary.
    ///
    /// The result never shares storage with `buf`.
    fn pad(&self, buf: &[u8]) -> Vec<u8>;

    /// Strip the padding from `buf`.
    ///
    /// The result is a prefix of `buf`.
    fn unpad<'a>(&self, buf: &'a [u8]) -> Result<&'a [u8]>;
}

impl<P: Padding + ?Sized> Padding for &P {
    fn pad(&self, buf: &[u8]) -> Vec<u8> {
        (**self).pad(buf)
    }

    fn unpad<'a>(&self, buf: &'a [u8]) -> Result<&'a [u8]> {
        (**self).unpad(buf)
    }
}
