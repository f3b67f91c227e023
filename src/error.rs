//! Error types for sequence conversion

use thiserror::Error;

/// Failure modes of a DNA to RNA/mRNA conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Nothing in the normalized input survived filtering.
    #[error("'{sequence}' has no valid bases. Please try again.")]
    NoValidBases { sequence: String },

    /// A retained base has no entry in the transcription table.
    #[error("base '{base}' has no mRNA transcription")]
    UnmappedBase { base: char },

    #[error(transparent)]
    InvalidConversion(#[from] InvalidConversion),
}

/// Conversion keyword other than `rna` or `mrna`, already trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid conversion type. Please use either RNA or mRNA.")]
pub struct InvalidConversion(pub String);

pub type Result<T> = std::result::Result<T, ConversionError>;
