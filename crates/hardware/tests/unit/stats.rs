//! Statistics arithmetic and report formatting.

use pipe8_core::SimStats;
use pipe8_core::isa::InstrClass;
use pretty_assertions::assert_eq;

fn sample_stats() -> SimStats {
    SimStats {
        cycles: 24,
        inst_arith: 3,
        inst_logic: 2,
        inst_data: 2,
        inst_control: 1,
        inst_halt: 1,
        stalls_data: 3,
        stalls_control: 2,
    }
}

#[test]
fn totals_aggregate_all_classes() {
    let stats = sample_stats();
    assert_eq!(stats.total_instructions(), 9);
    assert_eq!(stats.total_stalls(), 5);
}

#[test]
fn record_routes_each_class_to_its_counter() {
    let mut stats = SimStats::default();
    stats.record(InstrClass::Arithmetic);
    stats.record(InstrClass::Arithmetic);
    stats.record(InstrClass::Logical);
    stats.record(InstrClass::Data);
    stats.record(InstrClass::Control);
    stats.record(InstrClass::Halt);
    assert_eq!(stats.inst_arith, 2);
    assert_eq!(stats.inst_logic, 1);
    assert_eq!(stats.inst_data, 1);
    assert_eq!(stats.inst_control, 1);
    assert_eq!(stats.inst_halt, 1);
    assert_eq!(stats.total_instructions(), 6);
}

#[test]
fn cpi_divides_cycles_by_instructions() {
    let mut stats = sample_stats();
    stats.cycles = 27;
    assert_eq!(stats.cpi(), 3.0);
}

#[test]
fn cpi_is_unguarded_for_zero_instructions() {
    let stats = SimStats {
        cycles: 10,
        ..SimStats::default()
    };
    assert!(stats.cpi().is_infinite());
    assert!(SimStats::default().cpi().is_nan());
}

#[test]
fn report_uses_the_classic_fixed_column_layout() {
    let expected = "\
Total number of instructions executed: 9
Number of instructions in each class
Arithmetic instructions              : 3
Logical instructions                 : 2
Data instructions                    : 2
Control instructions                 : 1
Halt instructions                    : 1
Cycles Per Instruction               : 2.6666666666666665
Total number of stalls               : 5
Data stalls (RAW)                    : 3
Control stalls                       : 2
";
    assert_eq!(sample_stats().render_report(), expected);
}

#[test]
fn stats_serialize_to_json() {
    let json = serde_json::to_value(sample_stats()).unwrap();
    assert_eq!(json["cycles"], 24);
    assert_eq!(json["inst_arith"], 3);
    assert_eq!(json["stalls_control"], 2);
}
