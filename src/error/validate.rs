//! Validation utilities shared by the cipher engine and the mode layer

use super::{Error, Result};

/// The three legal key/block lengths in bytes
pub const SIZES: [usize; 3] = [16, 24, 32];

/// Validate a key length
#[inline(always)]
pub fn key_size(actual: usize) -> Result<()> {
    if !SIZES.contains(&actual) {
        return Err(Error::KeySize { actual });
    }
    Ok(())
}

/// Validate a block length
#[inline(always)]
pub fn block_size(actual: usize) -> Result<()> {
    if !SIZES.contains(&actual) {
        return Err(Error::BlockSize { actual });
    }
    Ok(())
}

/// Validate an initialization vector against the resolved block size
///
/// `mode` names the mode of operation for the `MissingIv` message. Returns
/// the checked IV so callers can bind it without re-matching the option.
#[inline(always)]
pub fn iv<'a>(iv: Option<&'a [u8]>, block_size: usize, mode: &'static str) -> Result<&'a [u8]> {
    match iv {
        None => Err(Error::MissingIv { mode }),
        Some(iv) if iv.len() != block_size => Err(Error::IvSize {
            expected: block_size,
            actual: iv.len(),
        }),
        Some(iv) => Ok(iv),
    }
}

/// Validate that a ciphertext splits evenly into blocks
#[inline(always)]
pub fn ciphertext_len(actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::CiphertextLength { block_size, actual });
    }
    Ok(())
}
