//! Block driver: splits a byte stream into 16-byte blocks, pads the last one
//! and encrypts every block independently with the engine's round keys.

use std::io::{self, ErrorKind, Read, Write};

use crate::cipher::{encrypt_state, Aes128};
use crate::error::Result;
use crate::observer::{NoopObserver, Observer};
use crate::padding::{block_count, pad_block, padded_len, BLOCK_LEN};
use crate::state::{Block, State};

/// Tracks the integer completion percentage of a stream of known length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    done: u64,
    total: u64,
}

impl Progress {
    /// Progress over the blocks produced for `input_len` plaintext bytes.
    pub fn new(input_len: u64) -> Self {
        Self {
            done: 0,
            total: block_count(input_len),
        }
    }

    /// Total number of blocks expected.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Records one more block and returns `floor(100 * done / total)`, capped at 100.
    pub fn advance(&mut self) -> u8 {
        self.done += 1;
        let percent = self.done.saturating_mul(100) / self.total;
        percent.min(100) as u8
    }
}

/// Reads until `buf` is full or the source is exhausted.
fn read_chunk<R: Read + ?Sized>(reader: &mut R, buf: &mut Block) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

impl Aes128 {
    /// Encrypts `input` into `output`, returning the number of bytes written.
    ///
    /// Output is always `16 * (n / 16 + 1)` bytes for `n` input bytes.
    pub fn encrypt_stream<R: Read, W: Write>(&self, input: R, output: W) -> Result<u64> {
        self.encrypt_stream_observed(input, output, None, &mut NoopObserver)
    }

    /// Like [`Aes128::encrypt_stream`], reporting each loaded block to
    /// `observer`. Progress is only reported when `input_len` is known.
    ///
    /// On error, blocks already written stay in `output`.
    pub fn encrypt_stream_observed<R, W, O>(
        &self,
        mut input: R,
        mut output: W,
        input_len: Option<u64>,
        observer: &mut O,
    ) -> Result<u64>
    where
        R: Read,
        W: Write,
        O: Observer + ?Sized,
    {
        let mut progress = input_len.map(Progress::new);
        let mut index = 0u64;
        let mut written = 0u64;

        loop {
            let mut chunk = [0u8; BLOCK_LEN];
            let filled = read_chunk(&mut input, &mut chunk)?;
            let (block, last) = match pad_block(&chunk[..filled]) {
                Some(padded) => (padded, true),
                None => (chunk, false),
            };

            let state = State::from_block(&block);
            observer.block_loaded(index, &state);
            let encrypted = encrypt_state(state, self.round_keys(), index, observer);
            output.write_all(&encrypted.to_block())?;
            written += BLOCK_LEN as u64;
            log::trace!("block {index} encrypted ({filled} plaintext bytes)");

            if let Some(progress) = progress.as_mut() {
                observer.progress(progress.advance());
            }
            index += 1;

            if last {
                break;
            }
        }

        output.flush()?;
        log::debug!("encrypted {index} blocks, {written} bytes written");
        Ok(written)
    }

    /// Encrypts an in-memory buffer with the same blocking and padding as
    /// [`Aes128::encrypt_stream`].
    pub fn encrypt_vec(&self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(padded_len(data.len() as u64) as usize);
        let mut chunks = data.chunks_exact(BLOCK_LEN);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            out.extend_from_slice(&self.encrypt_block(&block));
        }
        if let Some(last) = pad_block(chunks.remainder()) {
            out.extend_from_slice(&self.encrypt_block(&last));
        }
        out
    }
}
