//! Control-transfer tests.
//!
//! A decoded jump or branch suppresses fetch and decode for the two cycles
//! it takes to reach resolution at the memory stage. There the computed
//! target is compared against the fetch PC: equal means the (suppressed)
//! fetch stream is already correct and the stall is simply released;
//! different means a full flush and a redirected fetch.

use crate::common::{beqz, boot, halt, inc, jmp, run_to_halt, sub};

#[test]
fn jump_to_the_fall_through_address_does_not_flush() {
    // JMP +0 targets the very address fetch already reached; the
    // instruction behind it must still execute.
    let sim = run_to_halt(
        &[jmp(0), inc(5), halt()],
        &[],
        &[0u8; 16],
    );
    assert_eq!(sim.register_image()[5], 1, "fall-through inc must run");
    assert_eq!(sim.stats().inst_control, 1);
    assert_eq!(sim.stats().stalls_control, 2);
}

#[test]
fn jump_with_a_differing_target_flushes_and_redirects() {
    // JMP +2 skips over the inc at address 2 to the halt at address 6.
    let sim = run_to_halt(
        &[jmp(2), inc(5), halt(), halt()],
        &[],
        &[0u8; 16],
    );
    assert_eq!(sim.register_image()[5], 0, "skipped inc must not run");
    assert_eq!(sim.stats().inst_control, 1);
    assert_eq!(sim.stats().inst_arith, 0);
    assert_eq!(sim.stats().stalls_control, 2);
}

#[test]
fn flush_clears_every_latch_and_redirects_fetch() {
    let words = [jmp(2), inc(5), halt(), halt()];
    let mut sim = boot(&words, &[], &[0u8; 16]);

    // Cycles 1-3: fetch, decode (control stall asserted), execute.
    sim.step();
    sim.step();
    assert!(sim.cpu.branch_pending, "stall asserted at decode");
    assert_eq!(sim.cpu.pc, 2, "fetch held at the fall-through address");
    sim.step();

    // Cycle 4: memory resolves target 6 != fetch PC 2, so flush and redirect;
    // fetch restarts from the target in the same cycle.
    sim.step();
    assert!(!sim.cpu.branch_pending);
    assert!(sim.cpu.id_ex.is_none());
    assert!(sim.cpu.ex_mem.is_none());
    let fetched = sim.cpu.if_id.expect("fetch resumed at the target");
    assert_eq!(fetched.pc, 6);
    assert_eq!(sim.cpu.pc, 8);

    sim.run().unwrap();
    assert_eq!(sim.register_image()[5], 0);
}

#[test]
fn untaken_branch_releases_the_stall_without_flushing() {
    // r1 nonzero: BEQZ falls through to the inc.
    let sim = run_to_halt(
        &[beqz(1, 2), inc(5), halt(), halt()],
        &[],
        &[0, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    );
    assert_eq!(sim.register_image()[5], 1, "untaken branch falls through");
    assert_eq!(sim.stats().inst_control, 1);
    assert_eq!(sim.stats().stalls_control, 2);
}

#[test]
fn taken_branch_flushes_and_resumes_at_the_target() {
    // r1 zero: BEQZ +3 targets byte address 2 + 6 = 8.
    let words = [beqz(1, 3), inc(5), halt(), halt(), halt()];
    let sim = run_to_halt(&words, &[], &[0u8; 16]);
    assert_eq!(sim.register_image()[5], 0, "skipped inc must not run");
    assert_eq!(sim.stats().stalls_control, 2);
    assert_eq!(sim.stats().inst_control, 1);
    assert_eq!(sim.stats().inst_halt, 1);
    // Fetch, decode, execute, resolve+refetch, then the halt drains.
    assert_eq!(sim.stats().cycles, 8);
}

#[test]
fn nothing_after_a_halt_enters_the_pipeline() {
    let words = [halt(), inc(5), inc(6)];
    let sim = run_to_halt(&words, &[], &[0u8; 16]);
    assert_eq!(sim.register_image()[5], 0);
    assert_eq!(sim.register_image()[6], 0);
    assert_eq!(sim.stats().total_instructions(), 1);
    assert_eq!(sim.stats().inst_halt, 1);
    // One instruction draining through all five stages.
    assert_eq!(sim.stats().cycles, 5);
}

#[test]
fn backward_jump_builds_a_countdown_loop() {
    // loop: BEQZ r1, exit; SUB r1 = r1 - r14; JMP loop
    // The backward jump target always differs from the fetch PC, so every
    // iteration flushes; the exit branch flushes into the halt.
    let words = [
        beqz(1, 2),   // +0: exit to byte address 6 when r1 == 0
        sub(1, 1, 14), // +2
        jmp(125),     // +4: 6 + 250 wraps to byte address 0
        halt(),       // +6
    ];
    let mut regs = [0u8; 16];
    regs[1] = 3;
    regs[14] = 1;
    let sim = run_to_halt(&words, &[], &regs);

    assert_eq!(sim.register_image()[1], 0);
    assert_eq!(sim.stats().inst_arith, 3, "three decrements");
    // Four branch evaluations plus three back-jumps.
    assert_eq!(sim.stats().inst_control, 7);
    assert_eq!(sim.stats().stalls_control, 14);
    assert_eq!(sim.stats().inst_halt, 1);
}
