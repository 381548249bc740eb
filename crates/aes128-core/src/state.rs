//! Block and state representation helpers.

use core::fmt;
use core::ops::{Index, IndexMut};

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// One 4-byte key-schedule word.
pub type Word = [u8; 4];

/// 4×4 byte matrix loaded row-major from a block: `state[r][c] == block[4 * r + c]`.
///
/// Each row holds four consecutive input bytes, so a row here is what FIPS-197
/// calls a column. Every round transformation is written against this layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State(pub [[u8; 4]; 4]);

impl State {
    /// Loads a block in row-major order.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (row, chunk) in rows.iter_mut().zip(block.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Self(rows)
    }

    /// Builds a state whose rows are four consecutive key-schedule words.
    pub fn from_words(words: &[Word; 4]) -> Self {
        Self(*words)
    }

    /// Reads the state back in the order it was loaded.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (chunk, row) in block.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(row);
        }
        block
    }

    /// XORs `rhs` into `self`, element by element.
    #[inline]
    pub fn xor_in_place(&mut self, rhs: &State) {
        for (dst, src) in self.0.iter_mut().zip(rhs.0.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d ^= *s;
            }
        }
    }
}

impl Index<usize> for State {
    type Output = [u8; 4];

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl IndexMut<usize> for State {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

/// Renders the matrix as four lines of hex bytes.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:02x} {:02x} {:02x} {:02x}",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: Block = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];

    #[test]
    fn loads_row_major() {
        let state = State::from_block(&BLOCK);
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(state[r][c], BLOCK[4 * r + c]);
            }
        }
        assert_eq!(state.to_block(), BLOCK);
    }

    #[test]
    fn xor_with_self_clears() {
        let mut state = State::from_block(&BLOCK);
        let copy = state;
        state.xor_in_place(&copy);
        assert_eq!(state, State::default());
    }

    #[test]
    fn display_is_four_hex_rows() {
        let state = State::from_block(&BLOCK);
        assert_eq!(
            state.to_string(),
            "00 01 02 03\n04 05 06 07\n08 09 0a 0b\n0c 0d 0e 0f"
        );
    }
}
