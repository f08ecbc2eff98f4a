//! Block-packed backing storage.
//!
//! Bytes are assembled into 4-byte `u32` blocks on load and disassembled on
//! every access by shifting and masking: byte `k` of a block occupies bits
//! `8*k .. 8*k+8`. Observable behavior is a plain byte-addressable memory;
//! the packing mirrors the word-organized layout of the hardware model.

use crate::common::constants::{BLOCK_SIZE, NUM_BLOCKS, STORE_SIZE};

/// Bits per byte lane within a block.
const LANE_BITS: u32 = 8;

/// A 256-byte store packed as 64 four-byte blocks.
#[derive(Debug, Clone)]
pub struct BlockStore {
    blocks: [u32; NUM_BLOCKS],
}

impl Default for BlockStore {
    fn default() -> Self {
        Self {
            blocks: [0; NUM_BLOCKS],
        }
    }
}

impl BlockStore {
    /// Assembles a store from an ordered byte image.
    ///
    /// Trailing bytes not covered by the image remain zero. Callers are
    /// responsible for rejecting oversized images (the loader does); any
    /// bytes beyond the capacity are ignored here.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut store = Self::default();
        for (addr, &byte) in bytes.iter().take(STORE_SIZE).enumerate() {
            store.write_byte(addr as u8, byte);
        }
        store
    }

    /// Reads the byte at `addr`.
    pub fn read_byte(&self, addr: u8) -> u8 {
        let block = self.blocks[usize::from(addr) / BLOCK_SIZE];
        let lane = u32::from(addr) % BLOCK_SIZE as u32;
        (block >> (lane * LANE_BITS)) as u8
    }

    /// Writes the byte at `addr`, leaving the other lanes of the block
    /// untouched.
    pub fn write_byte(&mut self, addr: u8, value: u8) {
        let index = usize::from(addr) / BLOCK_SIZE;
        let lane = u32::from(addr) % BLOCK_SIZE as u32;
        let mask = 0xFFu32 << (lane * LANE_BITS);
        self.blocks[index] = (self.blocks[index] & !mask) | (u32::from(value) << (lane * LANE_BITS));
    }

    /// Disassembles the store back into address-ordered bytes.
    pub fn to_bytes(&self) -> [u8; STORE_SIZE] {
        let mut out = [0u8; STORE_SIZE];
        for (addr, slot) in out.iter_mut().enumerate() {
            *slot = self.read_byte(addr as u8);
        }
        out
    }
}
