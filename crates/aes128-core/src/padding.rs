//! Final-block padding.
//!
//! The last chunk of a stream (possibly empty) is filled up to 16 bytes with
//! `p = 16 - len` copies of the byte `p`, so between 1 and 16 bytes are always
//! added. A block-aligned input therefore gains one whole block of `0x10`.

use crate::state::Block;

/// Block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// Pads a final chunk of at most 15 bytes to a full block.
///
/// Returns `None` for a chunk of 16 bytes or more; only a short chunk ends
/// the stream and gets padded.
pub fn pad_block(chunk: &[u8]) -> Option<Block> {
    if chunk.len() >= BLOCK_LEN {
        return None;
    }
    let pad = (BLOCK_LEN - chunk.len()) as u8;
    let mut block = [pad; BLOCK_LEN];
    block[..chunk.len()].copy_from_slice(chunk);
    Some(block)
}

/// Ciphertext length for `input_len` plaintext bytes: `16 * (input_len / 16 + 1)`.
pub const fn padded_len(input_len: u64) -> u64 {
    (input_len / BLOCK_LEN as u64 + 1) * BLOCK_LEN as u64
}

/// Number of blocks the driver emits for `input_len` plaintext bytes.
pub const fn block_count(input_len: u64) -> u64 {
    input_len / BLOCK_LEN as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_chunk_is_a_block_of_sixteens() {
        assert_eq!(pad_block(&[]), Some([16u8; 16]));
    }

    #[test]
    fn single_trailing_byte_gets_fifteen_fifteens() {
        let block = pad_block(&[0xaa]).unwrap();
        assert_eq!(block[0], 0xaa);
        assert!(block[1..].iter().all(|&b| b == 15));
    }

    #[test]
    fn fifteen_bytes_get_a_single_one() {
        let chunk = [9u8; 15];
        let block = pad_block(&chunk).unwrap();
        assert_eq!(&block[..15], &chunk);
        assert_eq!(block[15], 1);
    }

    #[test]
    fn full_or_longer_chunk_is_not_padded() {
        assert_eq!(pad_block(&[0u8; 16]), None);
        assert_eq!(pad_block(&[7u8; 40]), None);
    }

    #[test]
    fn padded_lengths() {
        assert_eq!(padded_len(0), 16);
        assert_eq!(padded_len(15), 16);
        assert_eq!(padded_len(16), 32);
        assert_eq!(padded_len(17), 32);
        assert_eq!(block_count(32), 3);
    }

    proptest! {
        #[test]
        fn padding_value_encodes_its_length(chunk in prop::collection::vec(any::<u8>(), 0..16)) {
            let block = pad_block(&chunk).unwrap();
            let pad = block[15] as usize;
            prop_assert_eq!(pad, BLOCK_LEN - chunk.len());
            prop_assert_eq!(&block[..chunk.len()], &chunk[..]);
            prop_assert!(block[chunk.len()..].iter().all(|&b| b as usize == pad));
        }
    }
}
