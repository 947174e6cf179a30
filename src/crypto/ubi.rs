//! Unique Block Iteration: chains an arbitrary byte string through Threefish-512 with
//! feed-forward, tracking position and flags in the tweak.
use crate::defs::{words_from_block, Block, ChainingValue, BLOCK_LEN, STATE_WORDS};

use super::threefish::encrypt_words;
use super::tweak::Tweak;

/// One UBI invocation in progress.
#[derive(Debug, Clone)]
pub struct Ubi {
    state: ChainingValue,
    tweak: Tweak,
}

impl Ubi {
    /// Start a UBI invocation keyed by `key`; sets the first flag on `tweak`.
    pub fn new(key: &ChainingValue, mut tweak: Tweak) -> Self {
        tweak.set_first(true);
        Ubi { state: *key, tweak }
    }

    /// Tweak of the most recently processed block (or the initial tweak).
    pub fn tweak(&self) -> &Tweak {
        &self.tweak
    }

    /// Compress `block`, of which the first `byte_count` bytes are message bytes.
    /// Padding bytes beyond `byte_count` are expected to be zero.
    pub fn process_block(&mut self, block: &Block, byte_count: usize, last: bool) {
        self.process_block_with(block, byte_count, last, &mut |_: &Tweak| {})
    }

    fn process_block_with(
        &mut self,
        block: &Block,
        byte_count: usize,
        last: bool,
        on_block: &mut dyn FnMut(&Tweak),
    ) {
        self.tweak.advance(byte_count as u64);
        self.tweak.set_final(last);
        on_block(&self.tweak);
        let plain = words_from_block(block);
        let cipher = encrypt_words(&self.state, self.tweak.low(), self.tweak.high(), &plain);
        for i in 0..STATE_WORDS {
            self.state[i] = cipher[i] ^ plain[i];
        }
        self.tweak.set_first(false);
    }

    pub fn finish(self) -> ChainingValue {
        self.state
    }
}

/// Run UBI over `input`, calling `on_block` with each block's tweak before it is encrypted.
pub fn chain_with<F>(key: &ChainingValue, tweak: Tweak, input: &[u8], mut on_block: F) -> ChainingValue
where
    F: FnMut(&Tweak),
{
    let mut ubi = Ubi::new(key, tweak);
    let mut rest = input;
    let mut block = [0u8; BLOCK_LEN];

    // the final block takes the last 1..=64 bytes, so only chunks followed by more input go here
    while rest.len() > BLOCK_LEN {
        block.copy_from_slice(&rest[..BLOCK_LEN]);
        ubi.process_block_with(&block, BLOCK_LEN, false, &mut on_block);
        rest = &rest[BLOCK_LEN..];
    }

    block = [0u8; BLOCK_LEN];
    block[..rest.len()].copy_from_slice(rest);
    ubi.process_block_with(&block, rest.len(), true, &mut on_block);
    ubi.finish()
}

/// Run UBI over `input` starting from the given raw tweak words.
pub fn chain(key: &ChainingValue, tweak_low: u64, tweak_high: u64, input: &[u8]) -> ChainingValue {
    chain_with(key, Tweak::from_words(tweak_low, tweak_high), input, |_| {})
}
