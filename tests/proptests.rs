//! Property-based tests.

use crypt::{
    pkcs1v15::DecryptingKey,
    traits::{Decryptor, EncryptingKeypair, Padding, RandomizedEncryptor},
    AesCbcDecryptor, AesCbcEncryptor, AesStream, Pkcs7Padding,
};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

prop_compose! {
    // WARNING: do *NOT* copy and paste this code. It's insecure and optimized for test speed.
    fn private_key()(seed in any::<[u8; 32]>()) -> DecryptingKey {
        let mut rng = ChaCha8Rng::from_seed(seed);
        DecryptingKey::new(&mut rng, 512, 65537).unwrap()
    }
}

prop_compose! {
    fn aes_key()(size in prop::sample::select(vec![16usize, 24, 32]), seed in any::<[u8; 32]>()) -> Vec<u8> {
        seed[..size].to_vec()
    }
}

proptest! {
    #[test]
    fn pkcs7_roundtrip(block_size in 1usize..=255, msg in any::<Vec<u8>>()) {
        let padding = Pkcs7Padding::new(block_size).unwrap();
        let padded = padding.pad(&msg);

        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert!(padded.len() - msg.len() >= 1);
        prop_assert!(padded.len() - msg.len() <= block_size);
        prop_assert_eq!(padding.unpad(&padded).unwrap(), &msg[..]);
    }

    #[test]
    fn cbc_roundtrip(key in aes_key(), iv in any::<[u8; 16]>(), msg in any::<Vec<u8>>()) {
        let padding = Pkcs7Padding::new(16).unwrap();
        let ciphertext = AesCbcEncryptor::new(&key, &iv, padding).unwrap().encrypt(&msg).unwrap();
        let decryptor = AesCbcDecryptor::new(&key, &iv, padding).unwrap();
        prop_assert_eq!(decryptor.decrypt(&ciphertext).unwrap(), msg);
    }

    #[test]
    fn ctr_roundtrip(key in aes_key(), iv in any::<[u8; 16]>(), msg in any::<Vec<u8>>()) {
        let stream = AesStream::ctr(&key, &iv).unwrap();
        let ciphertext = stream.crypt(&msg);
        prop_assert_eq!(ciphertext.len(), msg.len());
        prop_assert_eq!(stream.crypt(&ciphertext), msg);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn pkcs1v15_roundtrip(private_key in private_key(), msg in prop::collection::vec(any::<u8>(), 0..400)) {
        let mut rng = ChaCha8Rng::from_seed([0; 32]);
        let public_key = private_key.encrypting_key();

        let ciphertext = public_key.encrypt_with_rng(&mut rng, &msg).unwrap();
        prop_assert_eq!(Some(ciphertext.len()), public_key.ciphertext_len(msg.len()));
        prop_assert_eq!(private_key.decrypt(&ciphertext).unwrap(), msg);
    }
}
