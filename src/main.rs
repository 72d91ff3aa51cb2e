//! `u-cpusched` entry point.
//!
//! Reads a process file (or generates a random workload), runs the
//! selected policies, and prints each report to stdout.

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use std::error::Error;
use std::fs;
use std::io::Write;

use u_cpusched::config::{Config, OutputFormat};
use u_cpusched::input::parse_processes;
use u_cpusched::workload::WorkloadGenerator;
use u_cpusched::{report, simulate, Algorithm, Process, ScheduleResult};

/// Writes records from this crate's modules to stderr.
struct StderrLogger;

const LOG_TARGET: &str = "u_cpusched";

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with(LOG_TARGET)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(
                stderr,
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn load_processes(config: &Config) -> Result<Vec<Process>, Box<dyn Error>> {
    match (&config.input, config.random) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Ok(parse_processes(&text)?)
        }
        (None, Some(count)) => Ok(WorkloadGenerator::new(config.seed)
            .with_process_count(count)
            .generate()),
        (None, None) => Err("no input file given (use --random N for a generated workload)".into()),
    }
}

fn print_text(runs: &[(Algorithm, ScheduleResult)]) {
    let headed = runs.len() > 1;
    for (i, (algorithm, result)) in runs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        if headed {
            println!("=== {algorithm} ===");
        }
        print!("{}", report::render(result));
    }
}

fn print_json(runs: &[(Algorithm, ScheduleResult)]) -> Result<(), Box<dyn Error>> {
    let body = match runs {
        [(_, result)] => serde_json::to_value(result)?,
        _ => {
            let mut map = serde_json::Map::new();
            for (algorithm, result) in runs {
                map.insert(algorithm.name().to_string(), serde_json::to_value(result)?);
            }
            serde_json::Value::Object(map)
        }
    };
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let algorithms = config.algorithms()?;
    let processes = load_processes(config)?;
    log::info!("loaded {} processes", processes.len());

    let runs = algorithms
        .into_iter()
        .map(|algorithm| simulate(&processes, algorithm).map(|result| (algorithm, result)))
        .collect::<Result<Vec<_>, _>>()?;

    match config.format {
        OutputFormat::Text => print_text(&runs),
        OutputFormat::Json => print_json(&runs)?,
    }
    Ok(())
}

fn main() {
    let config = Config::parse();
    init_logger(config.log_level());

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
