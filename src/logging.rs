//! File logging for conversion sessions
//!
//! Stdout carries the prompt and the converted strand, so log records only ever go
//! to a timestamped file under `~/.dnaconv/logs`.

use std::error::Error;
use std::path::PathBuf;
use chrono::Utc;
use env_logger::{Builder, Target};
use log::{debug, error, info, warn};

use crate::prompt::{PromptOutcome, RunMode};
use crate::sequence::{dna_to_mrna, ValidBases};

pub const LOG_LEVEL_VAR: &str = "DNACONV_LOG_LEVEL";

pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dnaconv")
        .join("logs")
}

/// Send log records to a new `session_<timestamp>.log` and return its path
pub fn init_logging() -> Result<PathBuf, Box<dyn Error>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("session_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} {:<5} {}:{} {}",
                Utc::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or("dnaconv"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;

    debug!("Logging to {log_file:?}");
    Ok(log_file)
}

/// Translate `DNACONV_LOG_LEVEL` into a `RUST_LOG` filter scoped to this crate
pub fn set_log_level() {
    let requested = std::env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string());

    let level = log_filter(&requested).unwrap_or_else(|| {
        eprintln!("Invalid {LOG_LEVEL_VAR} '{requested}', defaulting to 'info'");
        "info"
    });

    std::env::set_var("RUST_LOG", format!("dnaconv={level}"));
}

fn log_filter(level: &str) -> Option<&'static str> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Valid bases that the mRNA pairing table cannot transcribe
pub fn unpairable_bases(valid_bases: &ValidBases) -> Vec<char> {
    valid_bases.iter().filter(|&base| dna_to_mrna(base).is_none()).collect()
}

pub fn log_session_start(mode: RunMode, valid_bases: &ValidBases) {
    info!("dnaconv {} started at {}", env!("CARGO_PKG_VERSION"), Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    info!("Mode: {mode}, valid bases: [{valid_bases}]");
    debug!("{} on {}/{} with {} CPU cores",
        std::env::current_dir().unwrap_or_default().display(),
        std::env::consts::OS,
        std::env::consts::ARCH,
        num_cpus::get());

    if valid_bases.is_empty() {
        warn!("Valid base set is empty, every sequence will be rejected");
    }

    let unpairable = unpairable_bases(valid_bases);
    if !unpairable.is_empty() {
        let unpairable: String = unpairable.into_iter().collect();
        warn!("mRNA conversion fails on retained bases [{unpairable}]");
    }
}

pub fn log_session_end(outcome: &PromptOutcome) {
    match outcome {
        PromptOutcome::EmptySequence => warn!("Session ended without a sequence"),
        PromptOutcome::InvalidConversion(keyword) => warn!("Session ended on conversion type '{keyword}'"),
        PromptOutcome::Converted(Ok(strand)) => info!("Session produced a {}-base strand", strand.chars().count()),
        PromptOutcome::Converted(Err(e)) => info!("Session produced no strand: {e}"),
    }
    info!("Finished at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Report a setup failure on stderr, and to the log if one is running
pub fn report_setup_failure(stage: &str, err: &dyn Error) {
    error!("{stage} failed: {err}");
    eprintln!("[{}] {stage} failed: {err}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}
