//! Threefish-512, the tweakable block cipher underneath Skein-512.
use crate::defs::{block_from_words, words_from_block, Block, ChainingValue, BLOCK_LEN, STATE_WORDS};
use crate::error::Error;

use super::tweak::Tweak;

const ROUNDS: usize = 72;
const ROUNDS_PER_INJECTION: usize = 4;
const INJECTIONS: usize = ROUNDS / ROUNDS_PER_INJECTION;
const KEY_SCHEDULE_PARITY: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Rotation amounts of the four mixes, for each of the eight rounds between two
/// injections of the same parity.
const ROTATIONS: [[u32; 4]; 8] = [
    [46, 36, 19, 37],
    [33, 27, 14, 42],
    [17, 49, 36, 39],
    [44, 9, 54, 56],
    [39, 30, 34, 24],
    [13, 50, 10, 17],
    [25, 29, 39, 43],
    [8, 35, 56, 22],
];

/// Word pairs fed to the four mixes, per round modulo 4.
const PERMUTATIONS: [[usize; 8]; 4] = [
    [0, 1, 2, 3, 4, 5, 6, 7],
    [2, 1, 4, 7, 6, 5, 0, 3],
    [4, 1, 6, 3, 0, 5, 2, 7],
    [6, 1, 0, 7, 2, 5, 4, 3],
];

/// Extended key and tweak words; rebuilt for every block.
struct KeySchedule {
    key: [u64; STATE_WORDS + 1],
    tweak: [u64; 3],
}

impl KeySchedule {
    fn new(key: &ChainingValue, tweak_low: u64, tweak_high: u64) -> Self {
        let mut ks = [0u64; STATE_WORDS + 1];
        ks[..STATE_WORDS].copy_from_slice(key);
        ks[STATE_WORDS] = key.iter().fold(KEY_SCHEDULE_PARITY, |acc, k| acc ^ k);
        KeySchedule {
            key: ks,
            tweak: [tweak_low, tweak_high, tweak_low ^ tweak_high],
        }
    }

    fn subkey_word(&self, s: usize, i: usize) -> u64 {
        let mut word = self.key[(s + i) % (STATE_WORDS + 1)];
        match i {
            5 => word = word.wrapping_add(self.tweak[s % 3]),
            6 => word = word.wrapping_add(self.tweak[(s + 1) % 3]),
            7 => word = word.wrapping_add(s as u64),
            _ => (),
        }
        word
    }

    fn inject(&self, x: &mut [u64; STATE_WORDS], s: usize) {
        for (i, w) in x.iter_mut().enumerate() {
            *w = w.wrapping_add(self.subkey_word(s, i));
        }
    }

    fn eject(&self, x: &mut [u64; STATE_WORDS], s: usize) {
        for (i, w) in x.iter_mut().enumerate() {
            *w = w.wrapping_sub(self.subkey_word(s, i));
        }
    }
}

fn rotations_for(round: usize) -> &'static [u32; 4] {
    &ROTATIONS[round % ROTATIONS.len()]
}

fn mix_round(x: &mut [u64; STATE_WORDS], round: usize) {
    let perm = &PERMUTATIONS[round % ROUNDS_PER_INJECTION];
    for (pair, rot) in perm.chunks(2).zip(rotations_for(round).iter()) {
        let (a, b) = (pair[0], pair[1]);
        x[a] = x[a].wrapping_add(x[b]);
        x[b] = x[b].rotate_left(*rot) ^ x[a];
    }
}

fn unmix_round(x: &mut [u64; STATE_WORDS], round: usize) {
    let perm = &PERMUTATIONS[round % ROUNDS_PER_INJECTION];
    for (pair, rot) in perm.chunks(2).zip(rotations_for(round).iter()) {
        let (a, b) = (pair[0], pair[1]);
        x[b] = (x[b] ^ x[a]).rotate_right(*rot);
        x[a] = x[a].wrapping_sub(x[b]);
    }
}

/// Encrypt eight plaintext words.
pub fn encrypt_words(
    key: &ChainingValue,
    tweak_low: u64,
    tweak_high: u64,
    plaintext: &[u64; STATE_WORDS],
) -> [u64; STATE_WORDS] {
    let ks = KeySchedule::new(key, tweak_low, tweak_high);
    let mut x = *plaintext;
    ks.inject(&mut x, 0);
    for s in 1..=INJECTIONS {
        for round in (s - 1) * ROUNDS_PER_INJECTION..s * ROUNDS_PER_INJECTION {
            mix_round(&mut x, round);
        }
        ks.inject(&mut x, s);
    }
    x
}

/// Inverse of [`encrypt_words`].
pub fn decrypt_words(
    key: &ChainingValue,
    tweak_low: u64,
    tweak_high: u64,
    ciphertext: &[u64; STATE_WORDS],
) -> [u64; STATE_WORDS] {
    let ks = KeySchedule::new(key, tweak_low, tweak_high);
    let mut x = *ciphertext;
    for s in (1..=INJECTIONS).rev() {
        ks.eject(&mut x, s);
        for round in ((s - 1) * ROUNDS_PER_INJECTION..s * ROUNDS_PER_INJECTION).rev() {
            unmix_round(&mut x, round);
        }
    }
    ks.eject(&mut x, 0);
    x
}

/// Encrypt one 64 byte block (little-endian words in and out).
pub fn encrypt_block(key: &ChainingValue, tweak_low: u64, tweak_high: u64, plaintext: &Block) -> Block {
    let words = encrypt_words(key, tweak_low, tweak_high, &words_from_block(plaintext));
    block_from_words(&words)
}

/// Decrypt one 64 byte block.
pub fn decrypt_block(key: &ChainingValue, tweak_low: u64, tweak_high: u64, ciphertext: &Block) -> Block {
    let words = decrypt_words(key, tweak_low, tweak_high, &words_from_block(ciphertext));
    block_from_words(&words)
}

/// Threefish-512 with a byte key; checks all buffer sizes.
#[derive(Debug, Clone)]
pub struct Threefish512 {
    key: ChainingValue,
}

enum Mode {
    Enc,
    Dec,
}

impl Threefish512 {
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        if key.len() != BLOCK_LEN {
            return Err(Error::SizeMismatch(format!(
                "Wrong key len for Threefish512: {}",
                key.len()
            )));
        }
        let mut raw = [0u8; BLOCK_LEN];
        raw.copy_from_slice(key);
        Ok(Threefish512 {
            key: words_from_block(&raw),
        })
    }

    /// Encrypt `data` in place.
    pub fn encrypt(&self, tweak: &[u8], data: &mut [u8]) -> Result<(), Error> {
        self.apply(tweak, data, Mode::Enc)
    }

    /// Decrypt `data` in place.
    pub fn decrypt(&self, tweak: &[u8], data: &mut [u8]) -> Result<(), Error> {
        self.apply(tweak, data, Mode::Dec)
    }

    fn apply(&self, tweak: &[u8], data: &mut [u8], mode: Mode) -> Result<(), Error> {
        let tweak = Tweak::from_bytes(tweak)?;
        if data.len() != BLOCK_LEN {
            return Err(Error::SizeMismatch(format!(
                "Wrong data len for Threefish512: {}",
                data.len()
            )));
        }
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(data);
        let out = match mode {
            Mode::Enc => encrypt_block(&self.key, tweak.low(), tweak.high(), &block),
            Mode::Dec => decrypt_block(&self.key, tweak.low(), tweak.high(), &block),
        };
        data.copy_from_slice(&out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_word() {
        let ks = KeySchedule::new(&[0; STATE_WORDS], 3, 5);
        assert_eq!(ks.key[8], KEY_SCHEDULE_PARITY);
        assert_eq!(ks.tweak, [3, 5, 6]);

        let key = [1, 2, 4, 8, 16, 32, 64, 128];
        let ks = KeySchedule::new(&key, 0, 0);
        assert_eq!(ks.key[8], 255 ^ KEY_SCHEDULE_PARITY);
    }

    #[test]
    fn subkey_counter_on_last_word() {
        let ks = KeySchedule::new(&[0; STATE_WORDS], 0, 0);
        assert_eq!(ks.subkey_word(18, 7), 18);
        assert_eq!(ks.subkey_word(1, 0), 0);
        // (1 + 7) % 9 == 8 selects the parity word
        assert_eq!(ks.subkey_word(1, 7), KEY_SCHEDULE_PARITY + 1);
    }

    #[test]
    // Threefish-512 reference vector: all-zero key, tweak and plaintext
    fn zero_vector() {
        let expected = hex::decode("b1a2bbc6ef6025bc40eb3822161f36e375d1bb0aee3186fbd19e47c5d479947b7bc2f8586e35f0cff7e7f03084b0b7b1f1ab3961a580a3e97eb41ea14a6d7bbe").unwrap();
        let ct = encrypt_block(&[0; STATE_WORDS], 0, 0, &[0; BLOCK_LEN]);
        assert_eq!(ct.to_vec(), expected);
        assert_eq!(decrypt_block(&[0; STATE_WORDS], 0, 0, &ct), [0; BLOCK_LEN]);
    }

    #[test]
    fn identity() {
        let key: Vec<u8> = (0x10..0x50).collect();
        let tweak: Vec<u8> = (0x00..0x10).collect();
        let tf = Threefish512::new(&key).unwrap();
        let mut data: Vec<u8> = (0xC0..=0xFF).rev().collect();
        let plaintext = data.clone();

        tf.encrypt(&tweak, &mut data).unwrap();
        assert_ne!(data, plaintext);
        tf.decrypt(&tweak, &mut data).unwrap();
        assert_eq!(data, plaintext);
    }

    #[test]
    fn size_checks() {
        assert!(Threefish512::new(&[0; 63]).is_err());
        let tf = Threefish512::new(&[0; 64]).unwrap();
        let mut short = [0u8; 32];
        match tf.encrypt(&[0; 16], &mut short) {
            Err(Error::SizeMismatch(_)) => (),
            r => panic!("Expected size mismatch, got {:?}", r),
        }
        let mut block = [0u8; 64];
        assert!(tf.encrypt(&[0; 8], &mut block).is_err());
        assert_eq!(block, [0; 64]);
    }
}
