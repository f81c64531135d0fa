use std::str::FromStr;

use serde::Serialize;

use crate::error::StrandError;

const DNA_BASES: [char; 4] = ['A', 'T', 'C', 'G'];
const RNA_BASES: [char; 4] = ['A', 'U', 'C', 'G'];

const DNA_STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];
const RNA_STOP_CODONS: [&str; 3] = ["UAA", "UAG", "UGA"];

/// Nucleotide alphabet a sequence is declared to conform to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    Dna,
    Rna,
}

impl Alphabet {
    /// The four bases, in A, T|U, C, G order
    pub fn bases(&self) -> &'static [char; 4] {
        match self {
            Alphabet::Dna => &DNA_BASES,
            Alphabet::Rna => &RNA_BASES,
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.bases().contains(&symbol)
    }

    /// Stop codons written in this alphabet
    pub fn stop_codons(&self) -> &'static [&'static str; 3] {
        match self {
            Alphabet::Dna => &DNA_STOP_CODONS,
            Alphabet::Rna => &RNA_STOP_CODONS,
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Dna => write!(f, "DNA"),
            Alphabet::Rna => write!(f, "RNA"),
        }
    }
}

impl FromStr for Alphabet {
    type Err = StrandError;

    /// Accepts the English and French selectors ("DNA"/"ADN", "RNA"/"ARN")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DNA" | "ADN" => Ok(Alphabet::Dna),
            "RNA" | "ARN" => Ok(Alphabet::Rna),
            _ => Err(StrandError::InvalidAlphabetSelector(s.to_string())),
        }
    }
}
