//! Key types for AES-128.

use core::str::FromStr;

use crate::error::{Error, Result};
use crate::schedule::KeySchedule;
use crate::state::{Block, State};

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aes128Key(pub [u8; 16]);

impl Aes128Key {
    /// Parses a comma-separated list of 16 decimal byte values, e.g.
    /// `"0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15"`.
    pub fn parse(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        if fields.len() != 16 {
            return Err(Error::InvalidKeyLength { len: fields.len() });
        }

        let mut bytes = [0u8; 16];
        for (index, (dst, field)) in bytes.iter_mut().zip(&fields).enumerate() {
            *dst = field.parse::<u8>().map_err(|_| Error::InvalidKeyByte {
                index,
                value: (*field).to_owned(),
            })?;
        }
        Ok(Self(bytes))
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The master key laid out as a state matrix.
    pub fn to_state(&self) -> State {
        State::from_block(&self.0)
    }
}

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: value.len() })?;
        Ok(Self(bytes))
    }
}

impl FromStr for Aes128Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Expanded round keys for AES-128, one state matrix per round (0..=10).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundKeys(pub [State; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &State {
        &self.0[round]
    }

    /// Round keys as flat blocks, in round order.
    pub fn to_blocks(&self) -> [Block; 11] {
        self.0.map(|state| state.to_block())
    }
}

impl From<&KeySchedule> for RoundKeys {
    fn from(schedule: &KeySchedule) -> Self {
        Self(core::array::from_fn(|round| schedule.round_key(round)))
    }
}
