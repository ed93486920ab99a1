//! Error handling for the Rijndael engine and mode layer
//!
//! Every failure in this crate is an input-validation failure raised before
//! any output is produced; once inputs pass validation, table lookups and
//! field arithmetic are total and cannot fail.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// The error type for Rijndael operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key length is not 16, 24 or 32 bytes
    KeySize {
        /// Rejected key length in bytes
        actual: usize,
    },

    /// Block length is not 16, 24 or 32 bytes
    BlockSize {
        /// Rejected block length in bytes
        actual: usize,
    },

    /// Mode name is not a recognized mode of operation
    #[cfg(feature = "alloc")]
    Mode {
        /// Rejected mode name
        name: String,
    },

    /// Mode requires an initialization vector but none was supplied
    MissingIv {
        /// Mode that required the IV
        mode: &'static str,
    },

    /// Initialization vector length does not match the block size
    IvSize {
        /// Expected IV length in bytes (the block size)
        expected: usize,
        /// Actual IV length in bytes
        actual: usize,
    },

    /// Ciphertext length is not a multiple of the block size
    CiphertextLength {
        /// Block size in bytes
        block_size: usize,
        /// Actual ciphertext length in bytes
        actual: usize,
    },
}

/// Result type for Rijndael operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeySize { actual } => {
                write!(f, "unsupported key size: {} bit", actual * 8)
            }
            Error::BlockSize { actual } => {
                write!(f, "unsupported block size: {} bit", actual * 8)
            }
            #[cfg(feature = "alloc")]
            Error::Mode { name } => {
                write!(f, "unsupported mode: {}", name)
            }
            Error::MissingIv { mode } => {
                write!(f, "IV is required for mode {}", mode)
            }
            Error::IvSize { expected, actual } => {
                write!(
                    f,
                    "IV size should match the block size ({} bit): got {} bit",
                    expected * 8,
                    actual * 8
                )
            }
            Error::CiphertextLength { block_size, actual } => {
                write!(
                    f,
                    "ciphertext length should be a multiple of {} bit: got {} bytes",
                    block_size * 8,
                    actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
