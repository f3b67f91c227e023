use std::error::Error;
use std::io;
use clap::Parser;

use dnaconv::logging::{init_logging, log_session_end, log_session_start, report_setup_failure, set_log_level};
use dnaconv::prompt::{respond, run_prompt, RunMode};
use dnaconv::sequence::{ValidBases, DEFAULT_VALID_BASES};

#[derive(Parser)]
#[command(author, version, about = "Convert a DNA strand to RNA or mRNA", long_about = None)]
struct Args {
    /// Characters kept from the input sequence (case-insensitive)
    #[arg(long, default_value = DEFAULT_VALID_BASES)]
    valid_bases: String,

    /// DNA sequence; skips the interactive prompts together with --conversion
    #[arg(long, requires = "conversion")]
    sequence: Option<String>,

    /// Conversion type: rna or mrna
    #[arg(long, requires = "sequence")]
    conversion: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    human_panic::setup_panic!();

    let args = Args::parse();

    set_log_level();
    if let Err(e) = init_logging() {
        report_setup_failure("logging setup", &*e);
    }

    let valid_bases = ValidBases::new(&args.valid_bases);
    let mut stdout = io::stdout().lock();

    let outcome = match (args.sequence, args.conversion) {
        (Some(sequence), Some(conversion)) => {
            log_session_start(RunMode::OneShot, &valid_bases);
            respond(&mut stdout, &sequence, &conversion, &valid_bases)?
        }
        _ => {
            log_session_start(RunMode::Interactive, &valid_bases);
            run_prompt(&mut io::stdin().lock(), &mut stdout, &valid_bases)?
        }
    };

    log_session_end(&outcome);
    Ok(())
}
