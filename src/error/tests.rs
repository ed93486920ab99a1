use super::*;

#[test]
fn display_key_size() {
    let err = Error::KeySize { actual: 15 };
    assert_eq!(err.to_string(), "unsupported key size: 120 bit");
}

#[test]
fn display_block_size() {
    let err = Error::BlockSize { actual: 20 };
    assert_eq!(err.to_string(), "unsupported block size: 160 bit");
}

#[test]
fn display_missing_iv() {
    let err = Error::MissingIv { mode: "cbc" };
    assert_eq!(err.to_string(), "IV is required for mode cbc");
}

#[test]
fn validate_accepts_legal_sizes() {
    for size in [16, 24, 32] {
        assert!(validate::key_size(size).is_ok());
        assert!(validate::block_size(size).is_ok());
    }
}

#[test]
fn validate_rejects_boundary_sizes() {
    for size in [0, 15, 17, 23, 25, 31, 33, 64] {
        assert_eq!(validate::key_size(size), Err(Error::KeySize { actual: size }));
        assert_eq!(
            validate::block_size(size),
            Err(Error::BlockSize { actual: size })
        );
    }
}

#[test]
fn validate_iv_rules() {
    assert_eq!(
        validate::iv(None, 16, "cbc"),
        Err(Error::MissingIv { mode: "cbc" })
    );
    assert_eq!(
        validate::iv(Some(&[0u8; 12]), 16, "cbc"),
        Err(Error::IvSize {
            expected: 16,
            actual: 12
        })
    );
    assert!(validate::iv(Some(&[0u8; 16]), 16, "cbc").is_ok());
}

#[test]
fn validate_ciphertext_len() {
    assert!(validate::ciphertext_len(48, 24).is_ok());
    assert_eq!(
        validate::ciphertext_len(40, 24),
        Err(Error::CiphertextLength {
            block_size: 24,
            actual: 40
        })
    );
}
