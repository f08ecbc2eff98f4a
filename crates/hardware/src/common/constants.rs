//! Global system constants.
//!
//! The machine geometry is fixed by the ISA: 16-bit instruction words, an
//! 8-bit datapath, 16 registers, and two 256-byte stores organized as
//! 4-byte blocks.

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 16;

/// Capacity of each store (instruction and data) in bytes.
///
/// Addresses are 8 bits wide, so every byte address wraps naturally within
/// this capacity.
pub const STORE_SIZE: usize = 256;

/// Bytes per internal store block.
pub const BLOCK_SIZE: usize = 4;

/// Number of blocks per store.
pub const NUM_BLOCKS: usize = STORE_SIZE / BLOCK_SIZE;

/// Size of one instruction word in bytes.
pub const INSTRUCTION_BYTES: u8 = 2;

/// Bit mask for a 4-bit register index field.
pub const REG_INDEX_MASK: u16 = 0xF;

/// Bit mask for a byte-sized field.
pub const BYTE_MASK: u16 = 0xFF;
