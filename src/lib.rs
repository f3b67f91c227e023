//! dnaconv - DNA to RNA/mRNA converter
//!
//! Converts a DNA strand into either its direct RNA transcript (thymine replaced
//! with uracil) or its complementary mRNA strand. Input is case-insensitive and
//! characters outside the valid base set are dropped.

pub mod error;
pub mod logging;
pub mod prompt;
pub mod sequence;

pub use error::{ConversionError, InvalidConversion};
pub use prompt::{run_prompt, PromptOutcome};
pub use sequence::{convert, Conversion, ValidBases};
