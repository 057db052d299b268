//! Keccak-f[1600] permutation.
//!
//! The permutation applies 24 rounds, each performing four steps in fixed
//! order:
//! 1. theta - column parity mixing
//! 2. rho and pi (fused) - lane rotation and relocation
//! 3. chi - the only non-linear step
//! 4. iota - round constant injection into lane (0,0)
//!
//! All lane arithmetic is wrapping unsigned 64-bit; native `u64` operations
//! give exactly that.

use super::{LANES, ROTATION_OFFSETS, ROUNDS, ROUND_CONSTANTS};

/// The 1600-bit sponge state: 25 lanes, lane (x, y) at index `x + 5*y`.
pub type State = [u64; LANES];

/// Theta step: XOR every lane with the parity of two neighboring columns.
fn theta(state: &mut State) {
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }

    let mut d = [0u64; 5];
    for (x, mix) in d.iter_mut().enumerate() {
        *mix = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
    }

    for (i, lane) in state.iter_mut().enumerate() {
        *lane ^= d[i % 5];
    }
}

/// Fused rho and pi steps: rotate each lane by its fixed offset and move it
/// to grid position (y, 2x+3y).
///
/// Every output position reads a distinct input position, so this writes
/// into a fresh buffer rather than mutating in place.
fn rho_pi(state: &State) -> State {
    let mut b = [0u64; LANES];
    for x in 0..5 {
        for y in 0..5 {
            b[y + 5 * ((2 * x + 3 * y) % 5)] = state[x + 5 * y].rotate_left(ROTATION_OFFSETS[x][y]);
        }
    }
    b
}

/// Chi step: `state[x,y] = b[x,y] ^ (!b[x+1,y] & b[x+2,y])`, row-wise.
fn chi(state: &mut State, b: &State) {
    for y in 0..5 {
        let row = 5 * y;
        for x in 0..5 {
            state[x + row] = b[x + row] ^ (!b[(x + 1) % 5 + row] & b[(x + 2) % 5 + row]);
        }
    }
}

/// One full round.
fn round(state: &mut State, rc: u64) {
    theta(state);
    let b = rho_pi(state);
    chi(state, &b);
    // iota
    state[0] ^= rc;
}

/// Complete Keccak-f[1600] permutation: 24 rounds, in place.
pub fn permute(state: &mut State) {
    for &rc in ROUND_CONSTANTS.iter() {
        round(state, rc);
    }
}

/// Permutation with per-round trace output for divergence localization.
///
/// Returns (final_state, round_states) where each entry holds the state
/// after that round.
pub fn permute_with_trace(state: &State) -> (State, Vec<State>) {
    let mut st = *state;
    let mut traces = Vec::with_capacity(ROUNDS);

    for &rc in ROUND_CONSTANTS.iter() {
        round(&mut st, rc);
        traces.push(st);
    }

    (st, traces)
}
