//! AES-128 block cipher engine.
//!
//! This crate provides:
//! - Static GF(2^8) tables and table-driven field multiplication.
//! - The AES-128 key schedule, expanded once per engine.
//! - The four round transformations and the ten-round encryption schedule.
//! - A block driver that pads the final block and encrypts every block of a
//!   stream independently.
//!
//! The state is a 4×4 byte matrix loaded row-major from each block; see
//! [`State`]. Only encryption is implemented. There is no chaining mode, no
//! authentication and no attempt at constant-time execution.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod gf;
mod key;
mod observer;
mod padding;
mod round;
mod schedule;
mod state;
mod stream;
mod tables;

pub use crate::cipher::{encrypt_block, Aes128};
pub use crate::error::{Error, Result};
pub use crate::gf::gmul;
pub use crate::key::{Aes128Key, RoundKeys};
pub use crate::observer::{NoopObserver, Observer};
pub use crate::padding::{block_count, pad_block, padded_len, BLOCK_LEN};
pub use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
pub use crate::schedule::{expand_key, KeySchedule, ROUND_KEYS, WORDS};
pub use crate::state::{Block, State, Word};
pub use crate::stream::Progress;
pub use crate::tables::{sbox, ANTILOG, LOG, RCON, SBOX};
