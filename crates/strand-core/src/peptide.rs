use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::amino_acid::AminoAcid;
use crate::error::StrandError;

pub const STOP_MARKER: &str = "STOP";
pub const SEPARATOR: char = '-';

/// One emitted translation token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeptideToken {
    Residue(AminoAcid),
    Stop,
}

impl std::fmt::Display for PeptideToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeptideToken::Residue(aa) => write!(f, "{}", aa),
            PeptideToken::Stop => f.write_str(STOP_MARKER),
        }
    }
}

/// Serialized as its text form ("Met", "STOP")
impl Serialize for PeptideToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered translation output. A `Stop` token, when present, is the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Peptide {
    tokens: Vec<PeptideToken>,
}

impl Peptide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token. Nothing may follow a stop token, so pushes after one are ignored.
    pub fn push(&mut self, token: PeptideToken) {
        if !self.is_terminated() {
            self.tokens.push(token);
        }
    }

    pub fn tokens(&self) -> &[PeptideToken] {
        &self.tokens
    }

    /// Amino acids only, the trailing stop excluded
    pub fn residues(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            PeptideToken::Residue(aa) => Some(*aa),
            PeptideToken::Stop => None,
        })
    }

    /// Whether translation ended on a stop codon rather than running out of input
    pub fn is_terminated(&self) -> bool {
        self.tokens.last() == Some(&PeptideToken::Stop)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// One-letter rendering of the residues ("MAG")
    pub fn to_one_letter(&self) -> String {
        self.residues().map(|aa| aa.one_letter()).collect()
    }
}

impl FromIterator<PeptideToken> for Peptide {
    fn from_iter<I: IntoIterator<Item = PeptideToken>>(iter: I) -> Self {
        let mut peptide = Peptide::new();
        for token in iter {
            peptide.push(token);
        }
        peptide
    }
}

/// "Met-Ala-Gly-STOP"
impl std::fmt::Display for Peptide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl FromStr for Peptide {
    type Err = StrandError;

    /// Parse the `-`-joined three-letter form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Peptide::new());
        }

        let mut peptide = Peptide::new();
        for code in s.split(SEPARATOR) {
            if peptide.is_terminated() {
                return Err(StrandError::UnknownResidue(code.to_string()));
            }
            let token = if code == STOP_MARKER {
                PeptideToken::Stop
            } else {
                AminoAcid::from_three_letter(code)
                    .map(PeptideToken::Residue)
                    .ok_or_else(|| StrandError::UnknownResidue(code.to_string()))?
            };
            peptide.push(token);
        }
        Ok(peptide)
    }
}
