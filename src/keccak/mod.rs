//! Keccak-256 hash function.
//!
//! Implements the Keccak-f[1600] permutation and the sponge construction
//! for the pre-standardization Keccak-256 parameterization: 1088-bit rate,
//! 512-bit capacity, 0x01 padding domain byte, 32-byte digest. This is the
//! variant used for Ethereum-style digests and differs from NIST SHA3-256
//! only in the padding byte (NIST uses 0x06).

mod permute;
mod sponge;

pub use permute::{permute, permute_with_trace, State};
pub use sponge::{keccak256, Keccak256};

/// Number of 64-bit lanes in the Keccak-f[1600] state (5x5 grid).
pub const LANES: usize = 25;

/// Number of permutation rounds.
pub const ROUNDS: usize = 24;

/// Sponge rate in bytes (1088 bits).
pub const RATE_BYTES: usize = 136;

/// Sponge capacity in bytes (512 bits). Never directly exposed; provides
/// the security margin.
pub const CAPACITY_BYTES: usize = 64;

/// Digest length in bytes.
pub const DIGEST_BYTES: usize = 32;

/// Round constants, one per round, XORed into lane (0,0) by the iota step.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Left-rotation amounts for the rho step, indexed `[x][y]`.
pub const ROTATION_OFFSETS: [[u32; 5]; 5] = [
    [0, 36, 3, 41, 18],
    [1, 44, 10, 45, 2],
    [62, 6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39, 8, 14],
];
