use super::*;
use crate::error::Error;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// (key, plaintext, ciphertext) hex triples. The 128-bit-block entries are
/// published NIST vectors (FIPS-197 appendix C and the all-zero pair); the
/// 192/256-bit-block entries pin the generalized row-shift and key-schedule
/// paths.
const KNOWN_ANSWERS: &[(&str, &str, &str)] = &[
    // 128-bit key, 128-bit block
    (
        "00000000000000000000000000000000",
        "00000000000000000000000000000000",
        "66e94bd4ef8a2c3b884cfa59ca342b2e",
    ),
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    // 192-bit key, 128-bit block
    (
        "000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000",
        "aae06992acbf52a3e8f4a96ec9300bd7",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "00112233445566778899aabbccddeeff",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    // 256-bit key, 128-bit block
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000",
        "dc95c078a2408989ad48a21492842087",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "00112233445566778899aabbccddeeff",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
    // 256-bit key, 192-bit block
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "000000000000000000000000000000000000000000000000",
        "17004e806faef168fc9cd56f98f070982075c70c8132b945",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "00112233445566778899aabbccddeeff1021324354657687",
        "65d851df8d04b5cbb510935fdd1eb17b33efb8cb255ee712",
    ),
    // 256-bit key, 256-bit block
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "c6227e7740b7e53b5cb77865278eab0726f62366d9aabad908936123a1fc8af3",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "00112233445566778899aabbccddeeff102132435465768798a9bacbdcedfe0f",
        "288fa9d23d00d9dc0a39b33fa92867c6488b5e0f18a6f74c072078ec815462e6",
    ),
    // 128-bit key, 192-bit block
    (
        "000102030405060708090a0b0c0d0e0f",
        "030a11181f262d343b424950575e656c737a81888f969da4",
        "e277c855f6a908fd2b026a8c0bc0dd2740e6785fdb996b24",
    ),
    // 128-bit key, 256-bit block
    (
        "000102030405060708090a0b0c0d0e0f",
        "030a11181f262d343b424950575e656c737a81888f969da4abb2b9c0c7ced5dc",
        "f312a165e0398d45a9ac7fb6502c04ad80d70e103c90ce3a5882c1e19b80561f",
    ),
    // 192-bit key, 192-bit block
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "030a11181f262d343b424950575e656c737a81888f969da4",
        "92f9099475fa2a5f1dc3806a92dc2957c38c08e3cb071a9a",
    ),
    // 192-bit key, 256-bit block
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "030a11181f262d343b424950575e656c737a81888f969da4abb2b9c0c7ced5dc",
        "6f9cf98ad54d442ef978e18e9007b6f16ac76430e1b69ed112dbe2aea64ce2cf",
    ),
];

#[test]
fn known_answer_encrypt() {
    for (key, plain, cipher) in KNOWN_ANSWERS {
        let key = hex::decode(key).unwrap();
        let mut block = hex::decode(plain).unwrap();
        let expected = hex::decode(cipher).unwrap();

        let engine = Rijndael::new(&key).unwrap();
        engine.encrypt_block(&mut block).unwrap();

        assert_eq!(block, expected, "encrypt mismatch for key {:?}", key.len());
    }
}

#[test]
fn known_answer_decrypt() {
    for (key, plain, cipher) in KNOWN_ANSWERS {
        let key = hex::decode(key).unwrap();
        let mut block = hex::decode(cipher).unwrap();
        let expected = hex::decode(plain).unwrap();

        let engine = Rijndael::new(&key).unwrap();
        engine.decrypt_block(&mut block).unwrap();

        assert_eq!(block, expected, "decrypt mismatch for key {:?}", key.len());
    }
}

#[test]
fn roundtrip_all_size_combinations() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for key_size in [16usize, 24, 32] {
        for block_size in [16usize, 24, 32] {
            let mut key = vec![0u8; key_size];
            rng.fill(&mut key[..]);
            let engine = Rijndael::new(&key).unwrap();

            for _ in 0..50 {
                let mut block = vec![0u8; block_size];
                rng.fill(&mut block[..]);
                let original = block.clone();

                engine.encrypt_block(&mut block).unwrap();
                assert_ne!(block, original);
                engine.decrypt_block(&mut block).unwrap();
                assert_eq!(block, original);
            }
        }
    }
}

#[test]
fn rejects_bad_key_sizes() {
    for size in [0usize, 15, 17, 33, 48] {
        let key = vec![0u8; size];
        assert_eq!(Rijndael::new(&key).unwrap_err(), Error::KeySize { actual: size });
    }
}

#[test]
fn rejects_bad_block_sizes() {
    let engine = Rijndael::new(&[0u8; 16]).unwrap();
    for size in [0usize, 8, 15, 20, 31, 33] {
        let mut block = vec![0u8; size];
        assert_eq!(
            engine.encrypt_block(&mut block).unwrap_err(),
            Error::BlockSize { actual: size }
        );
        assert_eq!(
            engine.decrypt_block(&mut block).unwrap_err(),
            Error::BlockSize { actual: size }
        );
    }
}

#[test]
fn round_counts_match_the_rijndael_table() {
    assert_eq!(rounds(16, 16), 10);
    assert_eq!(rounds(16, 24), 12);
    assert_eq!(rounds(16, 32), 14);
    assert_eq!(rounds(24, 16), 12);
    assert_eq!(rounds(24, 24), 12);
    assert_eq!(rounds(24, 32), 14);
    assert_eq!(rounds(32, 16), 14);
    assert_eq!(rounds(32, 24), 14);
    assert_eq!(rounds(32, 32), 14);
}

#[test]
fn expanded_key_starts_with_the_key() {
    let key: Vec<u8> = (0u8..24).collect();
    let engine = Rijndael::new(&key).unwrap();
    let schedule = engine.expand_key(32);
    assert_eq!(&schedule.bytes[..24], &key[..]);
    assert_eq!(schedule.len, (14 + 1) * 32);
}

#[test]
fn generate_key_respects_size() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for (size, expected) in [
        (KeySize::Bits128, 16),
        (KeySize::Bits192, 24),
        (KeySize::Bits256, 32),
    ] {
        let key = Rijndael::generate_key(&mut rng, size);
        assert_eq!(key.len(), expected);
        assert!(Rijndael::new(&key).is_ok());
    }
}

#[test]
fn debug_output_omits_the_key() {
    let engine = Rijndael::new(&[0xA7u8; 24]).unwrap();
    assert_eq!(format!("{:?}", engine), "Rijndael { key_size: 24 }");
}
