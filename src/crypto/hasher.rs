//! Incremental Skein-512-512.
//!
//! Input is buffered in 64 byte blocks. A full block is only compressed once more input
//! arrives, so the block compressed by [`Skein512::finalize`] is always the one carrying
//! the final flag, exactly as in the one-shot [`digest`](super::skein::digest).
use log::*;
use std::io;

use crate::defs::{Block, Digest, BLOCK_LEN};

use super::skein::{output_block, IV};
use super::tweak::{BlockType, Tweak};
use super::ubi::Ubi;

#[derive(Debug, Clone)]
pub struct Skein512 {
    ubi: Ubi,
    buffer: Block,
    buffer_len: usize,
}

impl Skein512 {
    pub fn new() -> Self {
        Skein512 {
            ubi: Ubi::new(&IV, Tweak::new(BlockType::Message)),
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
        }
    }

    /// Absorb `data`.
    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;
        while !data.is_empty() {
            if self.buffer_len == BLOCK_LEN {
                self.ubi.process_block(&self.buffer, BLOCK_LEN, false);
                self.buffer_len = 0;
            }
            let n = std::cmp::min(BLOCK_LEN - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + n].copy_from_slice(&data[..n]);
            self.buffer_len += n;
            data = &data[n..];
        }
    }

    pub fn chain_update(mut self, data: &[u8]) -> Self {
        self.update(data);
        self
    }

    /// Number of message bytes absorbed so far.
    pub fn len(&self) -> u128 {
        self.ubi.tweak().position() + self.buffer_len as u128
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compress the buffered tail as final block and run the output transform.
    pub fn finalize(self) -> Digest {
        let Skein512 {
            mut ubi,
            mut buffer,
            buffer_len,
        } = self;
        for b in buffer[buffer_len..].iter_mut() {
            *b = 0;
        }
        ubi.process_block(&buffer, buffer_len, true);
        trace!("Finalized Skein-512 over {} bytes", ubi.tweak().position());
        output_block(&ubi.finish(), 0)
    }

    /// Finalize and start over with a fresh state.
    pub fn finalize_reset(&mut self) -> Digest {
        std::mem::take(self).finalize()
    }

    pub fn reset(&mut self) {
        *self = Skein512::new();
    }
}

impl Default for Skein512 {
    fn default() -> Self {
        Skein512::new()
    }
}

impl io::Write for Skein512 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
