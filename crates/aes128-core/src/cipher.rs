//! AES-128 block encryption and the engine that owns an expanded key.

use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys};
use crate::observer::{NoopObserver, Observer};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::KeySchedule;
use crate::state::{Block, State};

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    encrypt_state(State::from_block(block), round_keys, 0, &mut NoopObserver).to_block()
}

/// Runs the ten-round schedule on a loaded state. `index` is only passed
/// through to the observer.
pub(crate) fn encrypt_state<O: Observer + ?Sized>(
    mut state: State,
    round_keys: &RoundKeys,
    index: u64,
    observer: &mut O,
) -> State {
    add_round_key(&mut state, round_keys.get(0));
    observer.whitened(index, &state);

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        state = mix_columns(&state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

/// AES-128 engine bound to one master key.
///
/// Round keys are derived once at construction and only read afterwards, so
/// an engine can be cloned or shared between threads freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Builds an engine from a 16-byte key.
    pub fn new(key: &Aes128Key) -> Self {
        Self::with_observer(key, &mut NoopObserver)
    }

    /// Builds an engine, reporting the master key and each round key to `observer`.
    pub fn with_observer<O: Observer + ?Sized>(key: &Aes128Key, observer: &mut O) -> Self {
        let schedule = KeySchedule::expand_observed(key, observer);
        Self {
            round_keys: schedule.round_keys(),
        }
    }

    /// Parses a comma-separated decimal key and builds an engine from it.
    pub fn from_key_str(key: &str) -> Result<Self> {
        Ok(Self::new(&Aes128Key::parse(key)?))
    }

    /// The expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }
}
