//! Skein-512-512 hash function and the Threefish-512 tweakable block cipher.
pub mod cfg;
pub mod checksum;
pub mod crypto;
pub mod defs;
pub mod error;
pub mod log_cfg;

pub use crypto::{digest, Skein512};
