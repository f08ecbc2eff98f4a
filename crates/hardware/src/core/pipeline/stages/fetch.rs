//! Instruction Fetch (IF) stage.
//!
//! Fetches one 16-bit word per cycle from the instruction store at the
//! current program counter and deposits it in the IF/ID latch. Fetch is
//! suppressed after a halt has been decoded and while a control transfer is
//! draining toward resolution; a full IF/ID latch wedges fetch without
//! advancing the PC.

use tracing::trace;

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::latches::FetchEntry;

/// Executes the fetch stage for one cycle.
pub fn fetch_stage(cpu: &mut Cpu) {
    if !cpu.fetch_enabled || cpu.branch_pending {
        return;
    }
    if cpu.if_id.is_some() {
        return;
    }

    let word = cpu.imem.fetch_word(cpu.pc);
    trace!(pc = cpu.pc, word = %format_args!("{word:#06x}"), "IF");

    cpu.if_id = Some(FetchEntry { word, pc: cpu.pc });
    cpu.pc = cpu.pc.wrapping_add(INSTRUCTION_BYTES);
}
