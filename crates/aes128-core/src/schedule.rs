//! AES-128 key expansion.
//!
//! The 16-byte master key becomes 44 four-byte words. Words are appended to
//! an index-addressed arena and never touched again; word `i` only reads
//! words `i - 1` and `i - 4`.

use crate::key::{Aes128Key, RoundKeys};
use crate::observer::{NoopObserver, Observer};
use crate::state::{State, Word};
use crate::tables::{sbox, RCON};

/// Number of words produced for AES-128 (11 round keys of 4 words).
pub const WORDS: usize = 44;

/// Number of round keys, including the initial whitening key.
pub const ROUND_KEYS: usize = 11;

/// The full expanded word list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySchedule {
    words: Vec<Word>,
}

impl KeySchedule {
    /// Expands `key` into 44 words.
    pub fn expand(key: &Aes128Key) -> Self {
        Self::expand_observed(key, &mut NoopObserver)
    }

    /// Expands `key`, reporting the master key and every completed round key.
    pub fn expand_observed<O: Observer + ?Sized>(key: &Aes128Key, observer: &mut O) -> Self {
        let mut words: Vec<Word> = Vec::with_capacity(WORDS);
        for chunk in key.as_bytes().chunks_exact(4) {
            words.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        observer.master_key(&key.to_state());

        for i in 4..WORDS {
            let word = if i % 4 == 0 {
                new_round_word(&words[i - 1], &words[i - 4], RCON[i / 4 - 1])
            } else {
                xor_words(&words[i - 1], &words[i - 4])
            };
            words.push(word);

            if i % 4 == 3 {
                let round = i / 4;
                observer.round_key(round, &State::from_words(&group(&words, round)));
            }
        }

        log::debug!("expanded key schedule: {} words", words.len());
        Self { words }
    }

    /// All 44 words in derivation order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word `index` (0..44).
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// Round key `round` (0..=10): words `4 * round .. 4 * round + 4` as rows.
    pub fn round_key(&self, round: usize) -> State {
        State::from_words(&group(&self.words, round))
    }

    /// Collects all eleven round keys.
    pub fn round_keys(&self) -> RoundKeys {
        RoundKeys::from(self)
    }
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    KeySchedule::expand(key).round_keys()
}

fn group(words: &[Word], round: usize) -> [Word; 4] {
    let base = round * 4;
    [
        words[base],
        words[base + 1],
        words[base + 2],
        words[base + 3],
    ]
}

/// First word of a round key: rotate, substitute, add the round constant.
fn new_round_word(prev: &Word, back4: &Word, rcon: u8) -> Word {
    let rotated = rot_word(prev);
    let mut word = sub_word(&rotated);
    word[0] ^= rcon;
    xor_words(&word, back4)
}

fn rot_word(word: &Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

fn sub_word(word: &Word) -> Word {
    word.map(sbox)
}

fn xor_words(a: &Word, b: &Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS-197 Appendix A.1.
    const FIPS_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[derive(Default)]
    struct Recorder {
        master: Option<State>,
        rounds: Vec<(usize, State)>,
    }

    impl Observer for Recorder {
        fn master_key(&mut self, key: &State) {
            self.master = Some(*key);
        }

        fn round_key(&mut self, round: usize, key: &State) {
            self.rounds.push((round, *key));
        }
    }

    #[test]
    fn produces_44_words() {
        let schedule = KeySchedule::expand(&Aes128Key::from(FIPS_KEY));
        assert_eq!(schedule.words().len(), WORDS);
    }

    #[test]
    fn first_four_words_are_the_key() {
        let schedule = KeySchedule::expand(&Aes128Key::from(FIPS_KEY));
        for i in 0..4 {
            assert_eq!(schedule.word(i)[..], FIPS_KEY[4 * i..4 * i + 4]);
        }
    }

    #[test]
    fn matches_fips_197_expansion() {
        let schedule = KeySchedule::expand(&Aes128Key::from(FIPS_KEY));
        assert_eq!(*schedule.word(4), [0xa0, 0xfa, 0xfe, 0x17]);
        assert_eq!(*schedule.word(5), [0x88, 0x54, 0x2c, 0xb1]);
        assert_eq!(*schedule.word(40), [0xd0, 0x14, 0xf9, 0xa8]);
        assert_eq!(*schedule.word(43), [0xb6, 0x63, 0x0c, 0xa6]);
    }

    #[test]
    fn zero_key_last_round_key() {
        let round_keys = expand_key(&Aes128Key::from([0u8; 16]));
        assert_eq!(
            round_keys.get(10).to_block(),
            [
                0xb4, 0xef, 0x5b, 0xcb, 0x3e, 0x92, 0xe2, 0x11, 0x23, 0xe9, 0x51, 0xcf, 0x6f, 0x8f,
                0x18, 0x8e
            ]
        );
    }

    #[test]
    fn round_keys_group_words_as_rows() {
        let schedule = KeySchedule::expand(&Aes128Key::from(FIPS_KEY));
        let round_keys = schedule.round_keys();
        for round in 0..ROUND_KEYS {
            for row in 0..4 {
                assert_eq!(round_keys.get(round)[row], *schedule.word(4 * round + row));
            }
        }
    }

    #[test]
    fn observer_sees_master_and_each_round_once() {
        let key = Aes128Key::from(FIPS_KEY);
        let mut recorder = Recorder::default();
        let schedule = KeySchedule::expand_observed(&key, &mut recorder);

        assert_eq!(recorder.master, Some(key.to_state()));
        let rounds: Vec<usize> = recorder.rounds.iter().map(|(r, _)| *r).collect();
        assert_eq!(rounds, (1..ROUND_KEYS).collect::<Vec<_>>());
        for (round, state) in &recorder.rounds {
            assert_eq!(*state, schedule.round_key(*round));
        }
        assert_eq!(schedule, KeySchedule::expand(&key));
    }
}
