//! PKCS#7 padding as described in [RFC2315 § 10.3].
//!
//! Every padded buffer ends in `k` bytes of value `k`, where
//! `1 <= k <= block_size`. Input that is already block aligned gets a whole
//! extra block, so the padding is always present and self-describing.
//!
//! PKCS#5 ([RFC2898 § 6.1.1]) is the same scheme with an 8-byte block and is
//! available as [`Pkcs7Padding::pkcs5`].
//!
//! [RFC2315 § 10.3]: https://datatracker.ietf.org/doc/html/rfc2315#section-10.3
//! [RFC2898 § 6.1.1]: https://datatracker.ietf.org/doc/html/rfc2898#section-6.1.1

use alloc::vec::Vec;
use subtle::{Choice, ConstantTimeEq};

use crate::errors::{Error, Result};
use crate::traits::Padding;

/// Block size fixed by PKCS#5.
pub const PKCS5_BLOCK_SIZE: usize = 8;

/// PKCS#7 padding for a fixed block size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pkcs7Padding {
    block_size: u8,
}

impl Pkcs7Padding {
    /// Create padding for blocks of `block_size` bytes.
    ///
    /// The padding length is stored in a single byte, so `block_size` must be
    /// in `1..=255`.
    pub fn new(block_size: usize) -> Result<Self> {
        match u8::try_from(block_size) {
            Ok(block_size) if block_size > 0 => Ok(Self { block_size }),
            _ => Err(Error::InvalidBlockSize(block_size)),
        }
    }

    /// PKCS#5 padding, i.e. PKCS#7 over 8-byte blocks.
    pub const fn pkcs5() -> Self {
        Self {
            block_size: PKCS5_BLOCK_SIZE as u8,
        }
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size as usize
    }

    /// Validates the trailing padding of `buf` and returns its length.
    ///
    /// A trailing zero claims no padding and leaves `buf` as is.
    fn padding_len(&self, buf: &[u8]) -> Result<usize> {
        let value = *buf.last().ok_or(Error::Padding)?;
        let padding_len = value as usize;
        if padding_len > buf.len() {
            return Err(Error::Padding);
        }

        // The whole tail is compared even after a mismatch.
        let valid = buf[buf.len() - padding_len..]
            .iter()
            .fold(Choice::from(1), |valid, b| valid & b.ct_eq(&value));
        if !bool::from(valid) {
            return Err(Error::Padding);
        }

        Ok(padding_len)
    }
}

impl Padding for Pkcs7Padding {
    fn pad(&self, buf: &[u8]) -> Vec<u8> {
        let block_size = self.block_size();
        let padding_len = block_size - buf.len() % block_size;

        let mut out = Vec::with_capacity(buf.len() + padding_len);
        out.extend_from_slice(buf);
        out.resize(buf.len() + padding_len, padding_len as u8);
        out
    }

    fn unpad<'a>(&self, buf: &'a [u8]) -> Result<&'a [u8]> {
        let padding_len = self.padding_len(buf)?;
        Ok(&buf[..buf.len() - padding_len])
    }
}
