//! Property-based tests for the Rijndael mode layer

use proptest::prelude::*;
use rijndael_block::{BlockLen, Mode, Rijndael, RijndaelBlock};

fn legal_size() -> impl Strategy<Value = usize> {
    prop::sample::select(vec![16usize, 24, 32])
}

fn key_for(size: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), size..=size)
}

/// Zero padding as the mode layer applies it
fn zero_padded(msg: &[u8], block_size: usize) -> Vec<u8> {
    let mut padded = msg.to_vec();
    let rem = padded.len() % block_size;
    if rem != 0 {
        padded.resize(padded.len() + block_size - rem, 0);
    }
    padded
}

proptest! {
    #[test]
    fn single_block_roundtrip(
        key_size in legal_size(),
        block_size in legal_size(),
        seed in any::<u64>()
    ) {
        use rand::{Rng, SeedableRng};
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);

        let mut key = vec![0u8; key_size];
        rng.fill(&mut key[..]);
        let mut block = vec![0u8; block_size];
        rng.fill(&mut block[..]);
        let original = block.clone();

        let engine = Rijndael::new(&key).unwrap();
        engine.encrypt_block(&mut block).unwrap();
        engine.decrypt_block(&mut block).unwrap();

        prop_assert_eq!(block, original);
    }

    #[test]
    fn ecb_roundtrip_is_the_padded_message(
        key_size in legal_size(),
        block_size in legal_size(),
        msg in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let key = vec![0x5Au8; 32];
        let cipher = RijndaelBlock::new(&key[..key_size], Mode::Ecb).unwrap();

        let ciphertext = cipher.encrypt(&msg, BlockLen::Bytes(block_size), None).unwrap();
        prop_assert_eq!(ciphertext.len() % block_size, 0);

        let decrypted = cipher.decrypt(&ciphertext, BlockLen::Bytes(block_size), None).unwrap();
        prop_assert_eq!(decrypted, zero_padded(&msg, block_size));
    }

    #[test]
    fn cbc_roundtrip_is_the_padded_message(
        key in key_for(32),
        block_size in legal_size(),
        msg in prop::collection::vec(any::<u8>(), 0..200),
        iv_seed in any::<u64>()
    ) {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(iv_seed);
        let iv = RijndaelBlock::generate_iv(&mut rng, BlockLen::Bytes(block_size)).unwrap();

        let cipher = RijndaelBlock::new(&key, Mode::Cbc).unwrap();
        let ciphertext = cipher.encrypt(&msg, BlockLen::Bytes(block_size), Some(&iv)).unwrap();
        let decrypted = cipher.decrypt(&ciphertext, BlockLen::Bytes(block_size), Some(&iv)).unwrap();

        prop_assert_eq!(decrypted, zero_padded(&msg, block_size));
    }

    #[test]
    fn cbc_repeated_blocks_do_not_repeat(
        key in key_for(16),
        block in prop::collection::vec(any::<u8>(), 16..=16)
    ) {
        // Two identical plaintext blocks chain to distinct ciphertext blocks
        let iv = vec![0u8; 16];
        let mut msg = block.clone();
        msg.extend_from_slice(&block);

        let cipher = RijndaelBlock::new(&key, Mode::Cbc).unwrap();
        let ciphertext = cipher.encrypt(&msg, BlockLen::Bytes(16), Some(&iv)).unwrap();

        prop_assert_ne!(&ciphertext[..16], &ciphertext[16..32]);
    }
}
