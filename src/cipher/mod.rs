//! Generalized Rijndael single-block cipher engine
//!
//! Implements the Rijndael design over every combination of 128/192/256-bit
//! keys and 128/192/256-bit blocks. The engine owns an immutable key and
//! exposes in-place `encrypt_block`/`decrypt_block`; the expanded key
//! schedule is recomputed per call and wiped afterwards, so an engine holds
//! no state between calls and can be shared freely across threads.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};
#[cfg(feature = "alloc")]
use zeroize::Zeroizing;

use crate::error::{validate, Result};
use crate::tables::{self, INV_SBOX, MUL11, MUL13, MUL14, MUL2, MUL3, MUL9, RCON, SBOX};

/// Largest supported block length in bytes
pub const BLOCK_MAX: usize = 32;

/// Largest round count (reached whenever a key or block is 256 bits)
const MAX_ROUNDS: usize = 14;

/// Capacity of an expanded key schedule: `(rounds + 1) * block_size` maximized
const SCHEDULE_MAX: usize = (MAX_ROUNDS + 1) * BLOCK_MAX;

/// Round counts indexed by `[block_size][key_size]` over {16, 24, 32} bytes
const ROUNDS: [[usize; 3]; 3] = [
    [10, 12, 14], // 128-bit block
    [12, 12, 14], // 192-bit block
    [14, 14, 14], // 256-bit block
];

/// Maps 16/24/32 to table index 0/1/2; sizes are validated before this runs
#[inline(always)]
fn size_index(size: usize) -> usize {
    size / 8 - 2
}

/// Round count for a validated (block size, key size) pair
#[inline(always)]
pub(crate) fn rounds(block_size: usize, key_size: usize) -> usize {
    ROUNDS[size_index(block_size)][size_index(key_size)]
}

/// The three legal Rijndael key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit (16-byte) key
    Bits128,
    /// 192-bit (24-byte) key
    Bits192,
    /// 256-bit (32-byte) key
    Bits256,
}

impl KeySize {
    /// Key length in bytes
    pub const fn bytes(self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits192 => 24,
            KeySize::Bits256 => 32,
        }
    }

    /// Key length in bits
    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }
}

/// Expanded key schedule in a fixed-capacity buffer, wiped on drop
#[derive(Zeroize, ZeroizeOnDrop)]
struct KeySchedule {
    bytes: [u8; SCHEDULE_MAX],
    len: usize,
}

impl KeySchedule {
    /// The `block_size` schedule bytes for one round
    #[inline(always)]
    fn round_key(&self, round: usize, block_size: usize) -> &[u8] {
        debug_assert!((round + 1) * block_size <= self.len);
        &self.bytes[round * block_size..(round + 1) * block_size]
    }
}

/// Generalized Rijndael block cipher keyed with a 128/192/256-bit key
///
/// Unlike AES, the block size is chosen per call (by the length of the block
/// passed in) rather than fixed by the algorithm; the round count depends on
/// both sizes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rijndael {
    key: [u8; BLOCK_MAX],
    key_size: usize,
}

// Key material never reaches debug output
impl core::fmt::Debug for Rijndael {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rijndael")
            .field("key_size", &self.key_size)
            .finish()
    }
}

impl Rijndael {
    /// Creates an engine from a 16-, 24- or 32-byte key
    ///
    /// Returns [`Error::KeySize`](crate::Error::KeySize) for any other length.
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::key_size(key.len())?;
        let mut buf = [0u8; BLOCK_MAX];
        buf[..key.len()].copy_from_slice(key);
        Ok(Self {
            key: buf,
            key_size: key.len(),
        })
    }

    /// Key length in bytes
    pub fn key_size(&self) -> usize {
        self.key_size
    }

    /// Generates a uniformly random key of the given size
    #[cfg(feature = "alloc")]
    pub fn generate_key<R: RngCore + CryptoRng>(rng: &mut R, size: KeySize) -> Zeroizing<Vec<u8>> {
        let mut key = Zeroizing::new(Vec::new());
        key.resize(size.bytes(), 0u8);
        rng.fill_bytes(&mut key);
        key
    }

    /// Expands the key for the given block size
    ///
    /// Produces `(rounds + 1) * block_size` bytes: the key verbatim, then one
    /// 4-byte word at a time. At each `key_size` boundary the key-schedule
    /// core runs (rotate left one byte, substitute, XOR the next round
    /// constant into the first byte); 256-bit keys additionally substitute
    /// the word halfway through each key-sized chunk. Every word is then the
    /// XOR of `temp` with the word `key_size` bytes earlier.
    fn expand_key(&self, block_size: usize) -> KeySchedule {
        let key_size = self.key_size;
        let len = (rounds(block_size, key_size) + 1) * block_size;

        let mut ek = [0u8; SCHEDULE_MAX];
        ek[..key_size].copy_from_slice(&self.key[..key_size]);

        let mut rcon = 0;
        let mut i = key_size;
        while i < len {
            let mut temp = [ek[i - 4], ek[i - 3], ek[i - 2], ek[i - 1]];

            if i % key_size == 0 {
                temp = [
                    SBOX[temp[1] as usize] ^ RCON[rcon],
                    SBOX[temp[2] as usize],
                    SBOX[temp[3] as usize],
                    SBOX[temp[0] as usize],
                ];
                rcon += 1;
            } else if key_size == 32 && i % key_size == 16 {
                // Extra substitution pass unique to 256-bit keys
                for b in temp.iter_mut() {
                    *b = SBOX[*b as usize];
                }
            }

            for j in 0..4 {
                ek[i + j] = ek[i - key_size + j] ^ temp[j];
            }
            i += 4;
        }

        KeySchedule { bytes: ek, len }
    }

    /// Encrypts one block in place
    ///
    /// The block length selects the block size and must be 16, 24 or 32
    /// bytes; anything else is [`Error::BlockSize`](crate::Error::BlockSize).
    pub fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_size(block.len())?;

        let bs = block.len();
        let rounds = rounds(bs, self.key_size);
        let schedule = self.expand_key(bs);

        Self::add_round_key(block, schedule.round_key(0, bs));

        for round in 1..rounds {
            Self::sub_bytes(block);
            Self::shift_rows(block);
            Self::mix_columns(block);
            Self::add_round_key(block, schedule.round_key(round, bs));
        }

        // Final round skips MixColumns
        Self::sub_bytes(block);
        Self::shift_rows(block);
        Self::add_round_key(block, schedule.round_key(rounds, bs));

        Ok(())
    }

    /// Decrypts one block in place
    ///
    /// The exact algebraic inverse of [`encrypt_block`](Self::encrypt_block),
    /// applied in reverse order.
    pub fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_size(block.len())?;

        let bs = block.len();
        let rounds = rounds(bs, self.key_size);
        let schedule = self.expand_key(bs);

        Self::add_round_key(block, schedule.round_key(rounds, bs));
        Self::inv_shift_rows(block);
        Self::inv_sub_bytes(block);

        for round in (1..rounds).rev() {
            Self::add_round_key(block, schedule.round_key(round, bs));
            Self::inv_mix_columns(block);
            Self::inv_shift_rows(block);
            Self::inv_sub_bytes(block);
        }

        Self::add_round_key(block, schedule.round_key(0, bs));

        Ok(())
    }

    /// AddRoundKey: XOR one round's schedule bytes into the state
    #[inline(always)]
    fn add_round_key(state: &mut [u8], round_key: &[u8]) {
        for (b, k) in state.iter_mut().zip(round_key) {
            *b ^= k;
        }
    }

    /// SubBytes: substitute every state byte through the S-box
    fn sub_bytes(state: &mut [u8]) {
        for b in state.iter_mut() {
            *b = SBOX[*b as usize];
        }
    }

    /// Inverse SubBytes
    fn inv_sub_bytes(state: &mut [u8]) {
        for b in state.iter_mut() {
            *b = INV_SBOX[*b as usize];
        }
    }

    /// ShiftRows: permute the state with the row-shift table for its size
    fn shift_rows(state: &mut [u8]) {
        let mut tmp = [0u8; BLOCK_MAX];
        let n = state.len();
        tmp[..n].copy_from_slice(state);
        let shift = tables::row_shift(n);
        for i in 0..n {
            state[i] = tmp[shift[i]];
        }
    }

    /// Inverse ShiftRows
    fn inv_shift_rows(state: &mut [u8]) {
        let mut tmp = [0u8; BLOCK_MAX];
        let n = state.len();
        tmp[..n].copy_from_slice(state);
        let shift = tables::inv_row_shift(n);
        for i in 0..n {
            state[i] = tmp[shift[i]];
        }
    }

    /// MixColumns: per 4-byte column, rows of {2,3,1,1} cycled per position
    fn mix_columns(state: &mut [u8]) {
        for col in state.chunks_exact_mut(4) {
            let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
            col[0] = MUL2[a0 as usize] ^ MUL3[a1 as usize] ^ a2 ^ a3;
            col[1] = a0 ^ MUL2[a1 as usize] ^ MUL3[a2 as usize] ^ a3;
            col[2] = a0 ^ a1 ^ MUL2[a2 as usize] ^ MUL3[a3 as usize];
            col[3] = MUL3[a0 as usize] ^ a1 ^ a2 ^ MUL2[a3 as usize];
        }
    }

    /// Inverse MixColumns: rows of {14,11,13,9} cycled per position
    fn inv_mix_columns(state: &mut [u8]) {
        for col in state.chunks_exact_mut(4) {
            let (b0, b1, b2, b3) = (col[0], col[1], col[2], col[3]);
            col[0] = MUL14[b0 as usize] ^ MUL11[b1 as usize] ^ MUL13[b2 as usize] ^ MUL9[b3 as usize];
            col[1] = MUL9[b0 as usize] ^ MUL14[b1 as usize] ^ MUL11[b2 as usize] ^ MUL13[b3 as usize];
            col[2] = MUL13[b0 as usize] ^ MUL9[b1 as usize] ^ MUL14[b2 as usize] ^ MUL11[b3 as usize];
            col[3] = MUL11[b0 as usize] ^ MUL13[b1 as usize] ^ MUL9[b2 as usize] ^ MUL14[b3 as usize];
        }
    }
}

#[cfg(test)]
mod tests;
