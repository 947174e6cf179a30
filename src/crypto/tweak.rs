//! The 128 bit Skein tweak: 96 bit position, 6 bit block type, first and final flag.
use byteorder::{ByteOrder, LittleEndian};
use std::convert::TryFrom;

use crate::defs::TWEAK_LEN;
use crate::error::Error;

const POSITION_HIGH_MASK: u64 = 0xFFFF_FFFF;
const POSITION_MASK: u128 = (1 << 96) - 1;
const TYPE_SHIFT: u32 = 56;
const TYPE_MASK: u64 = 0x3F;
const FIRST_FLAG: u64 = 1 << 62;
const FINAL_FLAG: u64 = 1 << 63;

/// Block type codes of UBI invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Key,
    Config,
    Personalization,
    PublicKey,
    KeyIdentifier,
    Nonce,
    Message,
    Output,
}

impl BlockType {
    pub fn code(self) -> u8 {
        match self {
            BlockType::Key => 0,
            BlockType::Config => 4,
            BlockType::Personalization => 8,
            BlockType::PublicKey => 12,
            BlockType::KeyIdentifier => 16,
            BlockType::Nonce => 20,
            BlockType::Message => 48,
            BlockType::Output => 63,
        }
    }
}

impl TryFrom<u8> for BlockType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BlockType::Key),
            4 => Ok(BlockType::Config),
            8 => Ok(BlockType::Personalization),
            12 => Ok(BlockType::PublicKey),
            16 => Ok(BlockType::KeyIdentifier),
            20 => Ok(BlockType::Nonce),
            48 => Ok(BlockType::Message),
            63 => Ok(BlockType::Output),
            _ => Err(Error::InputError(format!("Unknown block type code: {}", code))),
        }
    }
}

/// Raw tweak words as consumed by Threefish, with typed access to the Skein fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tweak {
    low: u64,
    high: u64,
}

impl Tweak {
    /// Tweak at position 0 with no flags set.
    pub fn new(block_type: BlockType) -> Self {
        Tweak {
            low: 0,
            high: (block_type.code() as u64) << TYPE_SHIFT,
        }
    }

    pub fn from_words(low: u64, high: u64) -> Self {
        Tweak { low, high }
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    /// Number of bytes processed up to and including the current block.
    pub fn position(&self) -> u128 {
        self.low as u128 | ((self.high & POSITION_HIGH_MASK) as u128) << 64
    }

    /// Advance the 96 bit position by `bytes`, carrying into the high word.
    pub fn advance(&mut self, bytes: u64) {
        let pos = (self.position() + bytes as u128) & POSITION_MASK;
        self.low = pos as u64;
        self.high = (self.high & !POSITION_HIGH_MASK) | (pos >> 64) as u64;
    }

    pub fn block_type_code(&self) -> u8 {
        ((self.high >> TYPE_SHIFT) & TYPE_MASK) as u8
    }

    pub fn block_type(&self) -> Result<BlockType, Error> {
        BlockType::try_from(self.block_type_code())
    }

    pub fn is_first(&self) -> bool {
        self.high & FIRST_FLAG != 0
    }

    pub fn set_first(&mut self, first: bool) {
        if first {
            self.high |= FIRST_FLAG;
        } else {
            self.high &= !FIRST_FLAG;
        }
    }

    pub fn is_final(&self) -> bool {
        self.high & FINAL_FLAG != 0
    }

    pub fn set_final(&mut self, last: bool) {
        if last {
            self.high |= FINAL_FLAG;
        } else {
            self.high &= !FINAL_FLAG;
        }
    }

    /// Little-endian serialization (low word first).
    pub fn to_bytes(&self) -> [u8; TWEAK_LEN] {
        let mut bytes = [0u8; TWEAK_LEN];
        LittleEndian::write_u64_into(&[self.low, self.high], &mut bytes);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != TWEAK_LEN {
            return Err(Error::SizeMismatch(format!(
                "Wrong tweak len for Threefish512: {}",
                bytes.len()
            )));
        }
        Ok(Tweak {
            low: LittleEndian::read_u64(&bytes[0..8]),
            high: LittleEndian::read_u64(&bytes[8..16]),
        })
    }
}
