use serde::Serialize;

use crate::alphabet::Alphabet;

/// Outcome of checking a nucleotide sequence against an alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Validation {
    Valid,
    /// Length is not a whole number of codons
    InvalidLength { length: usize },
    /// First symbol found outside the alphabet (0-based position)
    InvalidSymbol { symbol: char, position: usize },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

impl std::fmt::Display for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Validation::Valid => write!(f, "valid"),
            Validation::InvalidLength { length } => {
                write!(f, "number of bases ({}) is not a multiple of 3", length)
            }
            Validation::InvalidSymbol { symbol, position } => {
                write!(f, "'{}' at position {} is not a valid base", symbol, position)
            }
        }
    }
}

/// Check that `sequence` is codon-aligned and made only of `alphabet` symbols.
/// Stops at the first foreign symbol.
pub fn validate(sequence: &str, alphabet: Alphabet) -> Validation {
    let length = sequence.chars().count();
    if length % 3 != 0 {
        return Validation::InvalidLength { length };
    }

    match sequence
        .chars()
        .enumerate()
        .find(|(_, c)| !alphabet.contains(*c))
    {
        Some((position, symbol)) => Validation::InvalidSymbol { symbol, position },
        None => Validation::Valid,
    }
}

pub fn is_valid(sequence: &str, alphabet: Alphabet) -> bool {
    validate(sequence, alphabet).is_valid()
}
