#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Supported algorithms
//!
//! - [PKCS#7 padding](#pkcs7-padding) for any block size in `1..=255`,
//!   including PKCS#5
//! - [AES-CBC](#aes-cbc) with pluggable padding
//! - [AES-CFB, AES-OFB and AES-CTR](#aes-keystream-modes)
//! - [Chunked PKCS#1 v1.5 encryption](#chunked-pkcs1-v15-encryption) of
//!   messages of any length
//!
//! # Usage
//!
//! ## PKCS#7 padding
//!
//! ```
//! use crypt::{traits::Padding, Pkcs7Padding};
//!
//! let padding = Pkcs7Padding::new(5)?;
//! let padded = padding.pad(&[1, 2, 3]);
//! assert_eq!(padded, [1, 2, 3, 2, 2]);
//! assert_eq!(padding.unpad(&padded)?, [1, 2, 3]);
//! # Ok::<(), crypt::Error>(())
//! ```
//!
//! ## AES-CBC
//!
//! ```
//! use crypt::{AesCbcDecryptor, AesCbcEncryptor, Pkcs7Padding};
//!
//! let key = b"11112222333344445555666677778888";
//! let iv = b"1234567812345678";
//! let padding = Pkcs7Padding::new(16)?;
//!
//! let encryptor = AesCbcEncryptor::new(key, iv, padding)?;
//! let ciphertext = encryptor.encrypt(b"hello world")?;
//! assert_eq!(ciphertext.len(), 16);
//!
//! let decryptor = AesCbcDecryptor::new(key, iv, padding)?;
//! assert_eq!(decryptor.decrypt(&ciphertext)?, b"hello world");
//! # Ok::<(), crypt::Error>(())
//! ```
//!
//! ## AES keystream modes
//!
//! ```
//! use crypt::AesStream;
//!
//! let key = [0x42; 24];
//! let iv = [0x24; 16];
//!
//! let ctr = AesStream::ctr(&key, &iv)?;
//! let ciphertext = ctr.crypt(b"no padding needed");
//! assert_eq!(ciphertext.len(), 17);
//! assert_eq!(ctr.crypt(&ciphertext), b"no padding needed");
//! # Ok::<(), crypt::Error>(())
//! ```
//!
//! ## Chunked PKCS#1 v1.5 encryption
//!
//! ```
//! # #[cfg(feature = "getrandom")]
//! # {
//! use crypt::pkcs1v15::DecryptingKey;
//! use crypt::traits::{Decryptor, EncryptingKeypair, RandomizedEncryptor};
//! use crypt::rand_core::OsRng;
//!
//! let private_key = DecryptingKey::new(&mut OsRng, 1024, 65537).expect("failed to generate a key");
//! let public_key = private_key.encrypting_key();
//!
//! // Encrypt
//! let data = [7u8; 250];
//! let enc_data = public_key.encrypt_with_rng(&mut OsRng, &data).expect("failed to encrypt");
//! assert_eq!(enc_data.len(), 3 * public_key.size());
//!
//! // Decrypt
//! let dec_data = private_key.decrypt(&enc_data).expect("failed to decrypt");
//! assert_eq!(&data[..], &dec_data[..]);
//! # }
//! ```
//!
//! ## Key encoding
//!
//! [`DecryptingKey`] and [`EncryptingKey`] implement the `pkcs8` crate's
//! encoding traits and, through its blanket impls, the `pkcs1` ones:
//!
//! - [`pkcs1::DecodeRsaPrivateKey`] / [`pkcs1::EncodeRsaPrivateKey`]
//! - [`pkcs1::DecodeRsaPublicKey`] / [`pkcs1::EncodeRsaPublicKey`]
//! - [`pkcs8::DecodePrivateKey`] / [`pkcs8::EncodePrivateKey`]
//! - [`pkcs8::DecodePublicKey`] / [`pkcs8::EncodePublicKey`]
//!
//! ```
//! # #[cfg(all(feature = "pem", feature = "std"))]
//! # {
//! use crypt::pkcs1v15::EncryptingKey;
//! use crypt::pkcs8::DecodePublicKey;
//!
//! let pem = "-----BEGIN PUBLIC KEY-----
//! MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAtsQsUV8QpqrygsY+2+JC
//! Q6Fw8/omM71IM2N/R8pPbzbgOl0p78MZGsgPOQ2HSznjD0FPzsH8oO2B5Uftws04
//! LHb2HJAYlz25+lN5cqfHAfa3fgmC38FfwBkn7l582UtPWZ/wcBOnyCgb3yLcvJrX
//! yrt8QxHJgvWO23ITrUVYszImbXQ67YGS0YhMrbixRzmo2tpm3JcIBtnHrEUMsT0N
//! fFdfsZhTT8YbxBvA8FdODgEwx7u/vf3J9qbi4+Kv8cvqyJuleIRSjVXPsIMnoejI
//! n04APPKIjpMyQdnWlby7rNyQtE4+CV+jcFjqJbE/Xilcvqxt6DirjFCvYeKYl1uH
//! LwIDAQAB
//! -----END PUBLIC KEY-----";
//!
//! let public_key = EncryptingKey::from_public_key_pem(pem).expect("failed to decode");
//! assert_eq!(public_key.size(), 256);
//! assert_eq!(public_key.max_segment_len(), 245);
//! # }
//! ```
//!
//! [`DecryptingKey`]: crate::pkcs1v15::DecryptingKey
//! [`EncryptingKey`]: crate::pkcs1v15::EncryptingKey

#[cfg(doctest)]
pub struct ReadmeDoctests;

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;
pub use rsa;

pub mod errors;
pub mod padding;
pub mod pkcs1v15;
pub mod symmetric;
pub mod traits;

mod encoding;

pub use pkcs1;
pub use pkcs8;

pub use crate::{
    errors::{Error, Result},
    padding::Pkcs7Padding,
    pkcs1v15::{DecryptingKey, EncryptingKey},
    symmetric::{AesCbcDecryptor, AesCbcEncryptor, AesStream, StreamMode},
};
