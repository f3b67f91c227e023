//! DNA to RNA/mRNA conversion

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{ConversionError, InvalidConversion, Result};
use crate::sequence::table::dna_to_mrna;

/// Bases retained when no custom set is given.
pub const DEFAULT_VALID_BASES: &str = "atcg";

/// Trim surrounding whitespace and lowercase.
///
/// The ASCII separators `\x1c`..=`\x1f` are stripped along with whitespace.
pub fn normalize(text: &str) -> String {
    text.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .to_lowercase()
}

/// Which strand to produce from the DNA input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Direct transcription, thymine replaced with uracil.
    Rna,
    /// Complementary strand via the pairing table.
    Mrna,
}

impl FromStr for Conversion {
    type Err = InvalidConversion;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let keyword = normalize(s);
        match keyword.as_str() {
            "rna" => Ok(Conversion::Rna),
            "mrna" => Ok(Conversion::Mrna),
            _ => Err(InvalidConversion(keyword)),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Rna => write!(f, "rna"),
            Conversion::Mrna => write!(f, "mrna"),
        }
    }
}

/// Case-insensitive allow-list of bases kept during filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBases(BTreeSet<char>);

impl ValidBases {
    pub fn new(bases: &str) -> ValidBases {
        ValidBases(normalize(bases).chars().collect())
    }

    pub fn contains(&self, base: char) -> bool {
        self.0.contains(&base)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl Default for ValidBases {
    fn default() -> Self {
        ValidBases::new(DEFAULT_VALID_BASES)
    }
}

impl From<&str> for ValidBases {
    fn from(bases: &str) -> Self {
        ValidBases::new(bases)
    }
}

impl fmt::Display for ValidBases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|base| write!(f, "{base}"))
    }
}

/// Keep only the characters of `sequence` found in `valid_bases`, in order.
pub fn filter_bases(sequence: &str, valid_bases: &ValidBases) -> String {
    sequence.chars().filter(|&c| valid_bases.contains(c)).collect()
}

/// Convert a DNA sequence to RNA or mRNA.
///
/// The sequence is trimmed and lowercased, then stripped of anything not in
/// `valid_bases`. An empty filtered sequence yields
/// [`ConversionError::NoValidBases`] carrying the normalized input. In mRNA mode a
/// retained base outside the pairing table yields [`ConversionError::UnmappedBase`].
pub fn convert(sequence: &str, conversion: Conversion, valid_bases: &ValidBases) -> Result<String> {
    let normalized = normalize(sequence);
    let filtered = filter_bases(&normalized, valid_bases);

    trace!(
        "Filtered {} of {} characters against [{}]",
        normalized.chars().count() - filtered.chars().count(),
        normalized.chars().count(),
        valid_bases
    );

    if filtered.is_empty() {
        debug!("No valid bases in '{normalized}'");
        return Err(ConversionError::NoValidBases { sequence: normalized });
    }

    let strand = match conversion {
        Conversion::Mrna => filtered
            .chars()
            .map(|base| dna_to_mrna(base).ok_or(ConversionError::UnmappedBase { base }))
            .collect::<Result<String>>()?,
        Conversion::Rna => filtered.replace('t', "u"),
    };

    debug!("Converted {} bases to {conversion}", strand.chars().count());
    Ok(strand)
}
