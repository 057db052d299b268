//! Keccak-256 sponge construction.
//!
//! Absorbs an arbitrary-length byte message in 136-byte blocks, applies the
//! domain-separated multi-rate padding, and squeezes the digest. The hasher
//! streams: full blocks are absorbed straight from the input slice, only a
//! partial trailing block is buffered, so unbounded inputs never need to be
//! materialized.

use super::{permute, State, DIGEST_BYTES, LANES, RATE_BYTES};

/// Incremental Keccak-256 hasher.
///
/// Each hasher owns a private state array for the duration of one
/// computation; nothing is shared across invocations.
#[derive(Debug, Clone)]
pub struct Keccak256 {
    /// The 25-lane sponge state.
    state: State,
    /// Buffer holding a partial input block.
    buffer: [u8; RATE_BYTES],
    /// Number of message bytes currently buffered (always < RATE_BYTES).
    buffer_len: usize,
}

impl Keccak256 {
    /// Create a hasher with a zeroed state.
    pub fn new() -> Self {
        Self {
            state: [0; LANES],
            buffer: [0; RATE_BYTES],
            buffer_len: 0,
        }
    }

    /// Absorb message bytes. May be called any number of times; the result
    /// is identical to hashing the concatenation in one call.
    pub fn update(&mut self, input: &[u8]) {
        let mut offset = 0;

        // Top up a partially filled buffer first.
        if self.buffer_len > 0 {
            let take = (RATE_BYTES - self.buffer_len).min(input.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&input[..take]);
            self.buffer_len += take;
            offset = take;

            if self.buffer_len == RATE_BYTES {
                let block = self.buffer;
                self.absorb_block(&block);
                self.buffer_len = 0;
            }
        }

        // Absorb full blocks directly from the input.
        while offset + RATE_BYTES <= input.len() {
            let mut block = [0u8; RATE_BYTES];
            block.copy_from_slice(&input[offset..offset + RATE_BYTES]);
            self.absorb_block(&block);
            offset += RATE_BYTES;
        }

        // Buffer the remainder.
        let remaining = input.len() - offset;
        if remaining > 0 {
            self.buffer[..remaining].copy_from_slice(&input[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Finalize and return the 32-byte digest.
    pub fn finalize(self) -> [u8; DIGEST_BYTES] {
        let mut digest = [0u8; DIGEST_BYTES];
        self.finalize_into(&mut digest);
        digest
    }

    /// Finalize, squeezing `out.len()` bytes of output.
    ///
    /// Keccak-256 proper only ever needs the first 32 bytes (one squeeze of
    /// the 136-byte rate covers it), but the multi-squeeze loop is kept so
    /// longer outputs work too.
    pub fn finalize_into(mut self, out: &mut [u8]) {
        // Multi-rate padding with the 0x01 domain byte. Both markers are
        // XORed, so a 135-byte remainder collapses them into a single 0x81
        // byte, and an exact-multiple message pads a whole extra block.
        let mut block = [0u8; RATE_BYTES];
        block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        block[self.buffer_len] ^= 0x01;
        block[RATE_BYTES - 1] ^= 0x80;
        self.absorb_block(&block);

        let mut offset = 0;
        while offset < out.len() {
            let take = (out.len() - offset).min(RATE_BYTES);
            for (i, chunk) in out[offset..offset + take].chunks_mut(8).enumerate() {
                let lane = self.state[i].to_le_bytes();
                chunk.copy_from_slice(&lane[..chunk.len()]);
            }
            offset += take;
            if offset < out.len() {
                permute(&mut self.state);
            }
        }
    }

    /// XOR a full rate-sized block into the state and permute.
    ///
    /// Only the first 17 lanes (the rate portion) are touched; the capacity
    /// lanes are never exposed to input.
    fn absorb_block(&mut self, block: &[u8; RATE_BYTES]) {
        for (lane, chunk) in self.state.iter_mut().zip(block.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(word);
        }
        permute(&mut self.state);
    }
}

impl Default for Keccak256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the Keccak-256 digest of a message in one call.
pub fn keccak256(input: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut hasher = Keccak256::new();
    hasher.update(input);
    hasher.finalize()
}
