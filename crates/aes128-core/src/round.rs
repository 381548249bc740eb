//! AES round transformations over the row-major [`State`].

use crate::gf::gmul;
use crate::state::State;
use crate::tables::sbox;

/// Coefficients of the MixColumns matrix; output byte `j` of a group uses row `j`.
const MIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for row in state.0.iter_mut() {
        for byte in row.iter_mut() {
            *byte = sbox(*byte);
        }
    }
}

/// Performs ShiftRows in place: column `c` is rotated up across the rows by `c`.
#[inline]
pub fn shift_rows(state: &mut State) {
    let before = *state;
    for r in 0..4 {
        for c in 1..4 {
            state[r][c] = before[(r + c) % 4][c];
        }
    }
}

fn mix_group(group: &[u8; 4]) -> [u8; 4] {
    let mut out = [0u8; 4];
    for (dst, coeffs) in out.iter_mut().zip(MIX.iter()) {
        *dst = group
            .iter()
            .zip(coeffs.iter())
            .fold(0, |acc, (&byte, &coeff)| acc ^ gmul(byte, coeff));
    }
    out
}

/// MixColumns over all four 4-byte groups, producing a fresh state.
///
/// Each output byte reads the whole group, so the input is left untouched
/// and the result is built separately.
#[inline]
pub fn mix_columns(state: &State) -> State {
    let mut mixed = State::default();
    for (dst, src) in mixed.0.iter_mut().zip(state.0.iter()) {
        *dst = mix_group(src);
    }
    mixed
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    state.xor_in_place(round_key);
}
