//! Generalized Rijndael block cipher with ECB and CBC modes of operation
//!
//! This crate implements the full Rijndael design: unlike AES, which fixes
//! the block size at 128 bits, every combination of 128/192/256-bit keys and
//! 128/192/256-bit blocks is supported. On top of the single-block engine a
//! mode layer provides whole-message ECB and CBC with zero padding.
//!
//! # Security Notes
//!
//! The engine is table-driven and deliberately **not** constant-time; do not
//! use it where timing side channels matter. Key material and expanded key
//! schedules are zeroized on drop.
//!
//! # Example
//!
//! ```
//! use rijndael_block::{BlockLen, Mode, RijndaelBlock};
//!
//! let key = [0x42u8; 32];
//! let iv = [0x24u8; 32];
//! let cipher = RijndaelBlock::new(&key, Mode::Cbc).unwrap();
//!
//! let ciphertext = cipher
//!     .encrypt(b"attack at dawn", BlockLen::Bytes(32), Some(&iv))
//!     .unwrap();
//! let decrypted = cipher
//!     .decrypt(&ciphertext, BlockLen::Bytes(32), Some(&iv))
//!     .unwrap();
//!
//! // Zero padding is never stripped on decrypt.
//! assert_eq!(&decrypted[..14], b"attack at dawn");
//! assert!(decrypted[14..].iter().all(|&b| b == 0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Precomputed lookup tables (S-box, row shifts, GF(2^8) multiples)
pub mod tables;

// Single-block cipher engine
pub mod cipher;
pub use cipher::{KeySize, Rijndael};

// Modes of operation
#[cfg(feature = "alloc")]
pub mod modes;
#[cfg(feature = "alloc")]
pub use modes::{BlockLen, Mode, RijndaelBlock};
