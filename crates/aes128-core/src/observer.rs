//! Inspection hooks for key expansion and the block driver.

use crate::state::State;

/// Receives intermediate matrices and progress while the engine works.
///
/// Every method defaults to doing nothing. Implementations only observe;
/// nothing they do can change the ciphertext.
pub trait Observer {
    /// The master key, right after it has been loaded.
    fn master_key(&mut self, _key: &State) {}

    /// Round key `round` (1..=10), once its four words have been derived.
    fn round_key(&mut self, _round: usize, _key: &State) {}

    /// Plaintext block `index` after loading and padding.
    fn block_loaded(&mut self, _index: u64, _state: &State) {}

    /// Block `index` after the initial round-key XOR.
    fn whitened(&mut self, _index: u64, _state: &State) {}

    /// Integer percentage of blocks processed so far, reported once per block.
    fn progress(&mut self, _percent: u8) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn master_key(&mut self, key: &State) {
        (**self).master_key(key);
    }

    fn round_key(&mut self, round: usize, key: &State) {
        (**self).round_key(round, key);
    }

    fn block_loaded(&mut self, index: u64, state: &State) {
        (**self).block_loaded(index, state);
    }

    fn whitened(&mut self, index: u64, state: &State) {
        (**self).whitened(index, state);
    }

    fn progress(&mut self, percent: u8) {
        (**self).progress(percent);
    }
}
