//! Pipeline simulator CLI.
//!
//! Loads the three initial images (instruction store, data store, register
//! file), runs the pipeline to halt, and writes the two output artifacts:
//! the final data-memory image (one lowercase hex byte per line, in address
//! order) and the textual statistics report. Exit status is nonzero if an
//! initial image cannot be opened or parsed; simulation never starts in
//! that case.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pipe8_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pipe8",
    version,
    about = "Cycle-accurate five-stage pipeline simulator",
    long_about = "Runs a program image through the five-stage pipeline, tracking RAW and \
control hazards cycle by cycle, then writes the final data-memory image and an \
execution statistics report.\n\nImages are whitespace-separated hex byte tokens.\n\n\
Examples:\n  pipe8\n  pipe8 -p prog.txt -d data.txt -r regs.txt --trace\n  pipe8 --max-cycles 100000 --stats-json stats.json"
)]
struct Cli {
    /// Instruction store image.
    #[arg(short = 'p', long, default_value = "ICache.txt")]
    program: PathBuf,

    /// Data store image.
    #[arg(short = 'd', long, default_value = "DCache.txt")]
    data: PathBuf,

    /// Register file image.
    #[arg(short = 'r', long, default_value = "RF.txt")]
    regs: PathBuf,

    /// Output path for the final data-memory image.
    #[arg(long, default_value = "DCache_output.txt")]
    mem_out: PathBuf,

    /// Output path for the statistics report.
    #[arg(long, default_value = "stats_output.txt")]
    stats_out: PathBuf,

    /// Also write the statistics as JSON.
    #[arg(long)]
    stats_json: Option<PathBuf>,

    /// Emit per-stage trace events to stderr.
    #[arg(long)]
    trace: bool,

    /// Abort if the program has not halted after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let config = Config {
        trace: cli.trace,
        max_cycles: cli.max_cycles,
    };

    let mut sim =
        match Simulator::from_image_files(&cli.program, &cli.data, &cli.regs, config) {
            Ok(sim) => sim,
            Err(e) => {
                eprintln!("[!] FATAL: {e}");
                process::exit(1);
            }
        };

    let run_result = sim.run();

    write_outputs(&cli, &sim);

    if let Err(e) = run_result {
        eprintln!("[!] {e}");
        process::exit(1);
    }
}

/// Writes the memory dump, the stats report, and the optional JSON stats.
fn write_outputs(cli: &Cli, sim: &Simulator) {
    let mut dump = String::new();
    for byte in sim.memory_image() {
        let _ = writeln!(dump, "{byte:02x}");
    }
    write_or_die(&cli.mem_out, &dump);

    write_or_die(&cli.stats_out, &sim.stats().render_report());

    if let Some(path) = &cli.stats_json {
        match serde_json::to_string_pretty(sim.stats()) {
            Ok(json) => write_or_die(path, &json),
            Err(e) => {
                eprintln!("[!] FATAL: cannot serialize statistics: {e}");
                process::exit(1);
            }
        }
    }
}

fn write_or_die(path: &Path, contents: &str) {
    if let Err(e) = fs::write(path, contents) {
        eprintln!("[!] FATAL: cannot write '{}': {e}", path.display());
        process::exit(1);
    }
}
