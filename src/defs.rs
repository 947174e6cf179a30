//! Various definitions and helper functions

use byteorder::{ByteOrder, LittleEndian};

/// Number of 64 bit words in the Skein-512 state
pub const STATE_WORDS: usize = 8;
/// Bytes per Threefish-512 block
pub const BLOCK_LEN: usize = 64;
/// Bytes per Threefish tweak
pub const TWEAK_LEN: usize = 16;
/// Bytes of a Skein-512-512 digest
pub const DIGEST_LEN: usize = 64;

pub type ChainingValue = [u64; STATE_WORDS];
pub type Block = [u8; BLOCK_LEN];
pub type Digest = [u8; DIGEST_LEN];

/// Decode a block as little-endian words
///
/// # Examples
/// ```
/// # use skein::defs::words_from_block;
/// let mut block = [0u8; 64];
/// block[0] = 42;
/// block[15] = 128;
/// let words = words_from_block(&block);
/// assert_eq!(words[0], 42);
/// assert_eq!(words[1], 1u64 << 63);
/// ```
pub fn words_from_block(block: &Block) -> ChainingValue {
    let mut words = [0u64; STATE_WORDS];
    LittleEndian::read_u64_into(block, &mut words);
    words
}

/// Encode words as little-endian block
pub fn block_from_words(words: &ChainingValue) -> Block {
    let mut block = [0u8; BLOCK_LEN];
    LittleEndian::write_u64_into(words, &mut block);
    block
}

pub fn skein_version() -> &'static str {
    option_env!("CARGO_PKG_VERSION").unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_order_is_little_endian() {
        let mut words = [0u64; STATE_WORDS];
        words[7] = 0x0102030405060708;
        let block = block_from_words(&words);
        assert_eq!(&block[56..], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(words_from_block(&block), words);
    }
}
