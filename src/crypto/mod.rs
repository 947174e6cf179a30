//! Threefish-512 and Skein-512-512
pub mod hasher;
pub mod skein;
pub mod threefish;
pub mod tweak;
pub mod ubi;

pub use hasher::Skein512;
pub use skein::{digest, expand_output};
pub use threefish::encrypt_block;
pub use ubi::chain;
