//! Interactive prompt that gathers a sequence and conversion type

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::error::ConversionError;
use crate::sequence::{convert, Conversion, ValidBases};

pub const SEQUENCE_PROMPT: &str = "> Enter a strand of DNA: ";
pub const CONVERSION_PROMPT: &str = "> Pick a conversion type — RNA / mRNA (case-insensitive): ";
pub const EMPTY_SEQUENCE_MESSAGE: &str = "A non-empty DNA argument is required for the conversion.";

/// Where the answers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Both answers are read from the prompts.
    Interactive,
    /// Both answers were given on the command line.
    OneShot,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Interactive => write!(f, "interactive"),
            RunMode::OneShot => write!(f, "one-shot"),
        }
    }
}

/// How a single prompt session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    EmptySequence,
    InvalidConversion(String),
    Converted(Result<String, ConversionError>),
}

/// Prompt for a sequence and a conversion type, then print the converted strand.
pub fn run_prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    valid_bases: &ValidBases,
) -> io::Result<PromptOutcome> {
    let sequence = ask(input, output, SEQUENCE_PROMPT)?;
    if sequence.is_empty() {
        writeln!(output, "{EMPTY_SEQUENCE_MESSAGE}")?;
        warn!("Empty sequence entered");
        return Ok(PromptOutcome::EmptySequence);
    }

    let conversion = ask(input, output, CONVERSION_PROMPT)?;
    respond(output, &sequence, &conversion, valid_bases)
}

/// Validate already-gathered answers, convert, and print the result line.
pub fn respond<W: Write>(
    output: &mut W,
    sequence: &str,
    conversion: &str,
    valid_bases: &ValidBases,
) -> io::Result<PromptOutcome> {
    if sequence.is_empty() {
        writeln!(output, "{EMPTY_SEQUENCE_MESSAGE}")?;
        warn!("Empty sequence given");
        return Ok(PromptOutcome::EmptySequence);
    }

    let conversion = match conversion.parse::<Conversion>() {
        Ok(conversion) => conversion,
        Err(e) => {
            writeln!(output, "{e}")?;
            warn!("Rejected conversion type: {e}");
            return Ok(PromptOutcome::InvalidConversion(e.0));
        }
    };

    info!("Converting {} characters to {conversion}", sequence.chars().count());
    let result = convert(sequence, conversion, valid_bases);
    match &result {
        Ok(strand) => writeln!(output, "Converted Strand: '{strand}'.")?,
        Err(e @ ConversionError::NoValidBases { .. }) => {
            info!("{e}");
            writeln!(output, "Converted Strand: '{e}'.")?
        }
        Err(e) => {
            warn!("Conversion failed: {e}");
            writeln!(output, "Conversion failed: {e}")?
        }
    }

    Ok(PromptOutcome::Converted(result))
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(stdin: &str) -> (PromptOutcome, String) {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run_prompt(&mut input, &mut output, &ValidBases::default()).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_rna_session() {
        let (outcome, printed) = session("ATCG\nRNA\n");
        assert_eq!(outcome, PromptOutcome::Converted(Ok("aucg".to_string())));
        assert_eq!(
            printed,
            format!("{SEQUENCE_PROMPT}{CONVERSION_PROMPT}Converted Strand: 'aucg'.\n")
        );
    }

    #[test]
    fn test_mrna_session_with_crlf() {
        let (outcome, printed) = session("ATCG\r\n  mRNA \r\n");
        assert_eq!(outcome, PromptOutcome::Converted(Ok("uagc".to_string())));
        assert!(printed.ends_with("Converted Strand: 'uagc'.\n"));
    }

    #[test]
    fn test_empty_sequence_stops_before_conversion_prompt() {
        let (outcome, printed) = session("\nrna\n");
        assert_eq!(outcome, PromptOutcome::EmptySequence);
        assert_eq!(printed, format!("{SEQUENCE_PROMPT}{EMPTY_SEQUENCE_MESSAGE}\n"));
    }

    #[test]
    fn test_end_of_input_counts_as_empty() {
        let (outcome, _) = session("");
        assert_eq!(outcome, PromptOutcome::EmptySequence);
    }

    #[test]
    fn test_invalid_conversion_type() {
        let (outcome, printed) = session("ATCG\n Protein \n");
        assert_eq!(outcome, PromptOutcome::InvalidConversion("protein".to_string()));
        assert!(printed.ends_with(
            "'protein' is not a valid conversion type. Please use either RNA or mRNA.\n"
        ));
    }

    #[test]
    fn test_no_valid_bases_is_printed_as_strand() {
        let (outcome, printed) = session("XYZ\nrna\n");
        assert!(matches!(
            outcome,
            PromptOutcome::Converted(Err(ConversionError::NoValidBases { .. }))
        ));
        assert!(printed.ends_with(
            "Converted Strand: ''xyz' has no valid bases. Please try again.'.\n"
        ));
    }

    #[test]
    fn test_whitespace_sequence_reaches_converter() {
        let (outcome, printed) = session("   \nrna\n");
        assert_eq!(
            outcome,
            PromptOutcome::Converted(Err(ConversionError::NoValidBases {
                sequence: String::new()
            }))
        );
        assert!(printed.ends_with("Converted Strand: ''' has no valid bases. Please try again.'.\n"));
    }

    fn answer(sequence: &str, conversion: &str) -> (PromptOutcome, String) {
        let mut output = Vec::new();
        let outcome = respond(&mut output, sequence, conversion, &ValidBases::default()).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_respond_rejects_empty_sequence() {
        let (outcome, printed) = answer("", "rna");
        assert_eq!(outcome, PromptOutcome::EmptySequence);
        assert_eq!(printed, format!("{EMPTY_SEQUENCE_MESSAGE}\n"));
    }

    #[test]
    fn test_respond_rejects_invalid_conversion() {
        let (outcome, printed) = answer("atcg", "dna");
        assert_eq!(outcome, PromptOutcome::InvalidConversion("dna".to_string()));
        assert_eq!(
            printed,
            "'dna' is not a valid conversion type. Please use either RNA or mRNA.\n"
        );
    }

    #[test]
    fn test_respond_converts_without_prompting() {
        let (outcome, printed) = answer("AtCg", " MRNA ");
        assert_eq!(outcome, PromptOutcome::Converted(Ok("uagc".to_string())));
        assert_eq!(printed, "Converted Strand: 'uagc'.\n");
    }

    #[test]
    fn test_run_mode_names() {
        assert_eq!(RunMode::Interactive.to_string(), "interactive");
        assert_eq!(RunMode::OneShot.to_string(), "one-shot");
    }

    #[test]
    fn test_unmapped_base_is_reported() {
        let mut output = Vec::new();
        let outcome = respond(&mut output, "acgn", "mrna", &ValidBases::new("acgtn")).unwrap();
        assert_eq!(
            outcome,
            PromptOutcome::Converted(Err(ConversionError::UnmappedBase { base: 'n' }))
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Conversion failed: base 'n' has no mRNA transcription\n"
        );
    }
}
