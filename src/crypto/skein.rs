//! Skein-512-512: message absorption and output transform on top of UBI.
use byteorder::{ByteOrder, LittleEndian};

use crate::defs::{block_from_words, Block, ChainingValue, Digest, BLOCK_LEN, STATE_WORDS};

use super::tweak::{BlockType, Tweak};
use super::ubi::chain_with;

/// "SHA3" in little-endian, schema version 1 in the upper half
pub const SCHEMA_VERSION: u64 = 0x0000_0001_3341_4853;
pub const OUTPUT_BITS: u64 = 512;

/// Chaining value after the configuration block for 512 bit output.
pub const IV: ChainingValue = [
    0x4903_ADFF_749C_51CE,
    0x0D95_DE39_9746_DF03,
    0x8FD1_9341_27C7_9BCE,
    0x9A25_5629_FF35_2CB1,
    0x5DB6_2599_DF6C_A7B0,
    0xEABE_394C_A9D5_C3F4,
    0x9911_12C7_1A75_B523,
    0xAE18_A40B_660F_CC33,
];

const CONFIG_LEN: usize = 32;

/// Compute the chaining value for `output_bits` from the configuration block
/// (sequential hashing, no tree parameters).
pub fn derive_iv(output_bits: u64) -> ChainingValue {
    let mut config = [0u8; CONFIG_LEN];
    LittleEndian::write_u64(&mut config[0..8], SCHEMA_VERSION);
    LittleEndian::write_u64(&mut config[8..16], output_bits);
    chain_with(&[0; STATE_WORDS], Tweak::new(BlockType::Config), &config, |_| {})
}

/// Output block number `index` for the chaining value `state`.
pub fn output_block(state: &ChainingValue, index: u64) -> Block {
    let mut counter = [0u8; 8];
    LittleEndian::write_u64(&mut counter, index);
    let words = chain_with(state, Tweak::new(BlockType::Output), &counter, |_| {});
    block_from_words(&words)
}

/// Concatenation of the first `block_count` output blocks.
pub fn expand_output(state: &ChainingValue, block_count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(block_count * BLOCK_LEN);
    for index in 0..block_count {
        out.extend_from_slice(&output_block(state, index as u64));
    }
    out
}

/// Skein-512-512 digest of `input`.
pub fn digest(input: &[u8]) -> Digest {
    let state = chain_with(&IV, Tweak::new(BlockType::Message), input, |_| {});
    output_block(&state, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ubi::chain;

    #[test]
    fn literal_iv_matches_config_block() {
        assert_eq!(derive_iv(OUTPUT_BITS), IV);
        assert_ne!(derive_iv(256), IV);
    }

    #[test]
    fn empty_message() {
        let expected = hex::decode("bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af41fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a").unwrap();
        assert_eq!(digest(b"").to_vec(), expected);
    }

    #[test]
    fn digest_is_first_output_block() {
        let state = chain(&IV, 0, (BlockType::Message.code() as u64) << 56, b"abc");
        let out = expand_output(&state, 3);
        assert_eq!(out.len(), 3 * BLOCK_LEN);
        assert_eq!(&out[..BLOCK_LEN], &digest(b"abc")[..]);
        assert_eq!(&out[BLOCK_LEN..2 * BLOCK_LEN], &output_block(&state, 1)[..]);
        assert_ne!(&out[..BLOCK_LEN], &out[BLOCK_LEN..2 * BLOCK_LEN]);
        assert!(expand_output(&state, 0).is_empty());
    }
}
