//! Pipeline latch entry types.
//!
//! One entry struct per stage boundary, carrying exactly the fields the
//! downstream stage needs. Each boundary in the [`Cpu`](crate::core::Cpu)
//! is an `Option<Entry>`: `None` is an empty latch, `Some` an occupied one,
//! making "stalled but empty" states unrepresentable.

use crate::isa::Instruction;

/// IF/ID boundary: a fetched but not yet decoded instruction word.
#[derive(Debug, Clone, Copy)]
pub struct FetchEntry {
    /// The raw 16-bit instruction word.
    pub word: u16,
    /// Address the word was fetched from.
    pub pc: u8,
}

/// ID/EX boundary: a decoded instruction with latched operands.
///
/// The operand meaning follows the opcode class: register values for ALU
/// ops, base register value and immediate offset for load/store, condition
/// value and displacement for branches, the raw displacement for jumps.
#[derive(Debug, Clone, Copy)]
pub struct IssueEntry {
    /// Decoded instruction record.
    pub inst: Instruction,
    /// First operand byte.
    pub a: u8,
    /// Second operand byte.
    pub b: u8,
    /// Address the instruction was fetched from.
    pub pc: u8,
    /// Fetch PC captured at issue; control transfers resolve their target
    /// against this value.
    pub link_pc: u8,
}

/// EX/MEM boundary: ALU result (or computed address / branch target).
#[derive(Debug, Clone, Copy)]
pub struct ExecEntry {
    /// Decoded instruction record.
    pub inst: Instruction,
    /// ALU output: result byte, memory address, or resolved target PC.
    pub alu: u8,
    /// Address the instruction was fetched from.
    pub pc: u8,
}

/// MEM/WB boundary: memory result ready to commit.
#[derive(Debug, Clone, Copy)]
pub struct MemoryEntry {
    /// Decoded instruction record.
    pub inst: Instruction,
    /// ALU output carried through for register-writing ops.
    pub alu: u8,
    /// Byte loaded from the data store (loads only).
    pub load: u8,
    /// Address the instruction was fetched from.
    pub pc: u8,
}
