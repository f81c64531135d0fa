use std::str::Chars;

use crate::codon::{CodonLabel, GeneticCode};
use crate::error::StrandError;
use crate::peptide::{Peptide, PeptideToken};

/// Transcribe DNA to RNA: every T becomes U, everything else is kept as is
pub fn transcribe(dna: &str) -> String {
    dna.chars()
        .map(|base| if base == 'T' { 'U' } else { base })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Done,
}

/// Lazy codon-by-codon translation of an RNA sequence.
///
/// Yields one token per codon until a stop codon (yielded as `Stop`), an
/// unknown codon (yielded as an error), or the end of the input. A trailing
/// partial codon is ignored.
pub struct Translation<'a> {
    bases: Chars<'a>,
    code: &'static GeneticCode,
    state: State,
}

impl<'a> Translation<'a> {
    pub fn new(rna: &'a str) -> Self {
        Self {
            bases: rna.chars(),
            code: GeneticCode::standard(),
            state: State::Scanning,
        }
    }

    fn next_codon(&mut self) -> Option<String> {
        let codon: String = self.bases.by_ref().take(3).collect();
        (codon.chars().count() == 3).then_some(codon)
    }
}

impl Iterator for Translation<'_> {
    type Item = Result<PeptideToken, StrandError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Done {
            return None;
        }

        let Some(codon) = self.next_codon() else {
            self.state = State::Done;
            return None;
        };

        match self.code.lookup(&codon) {
            Some(CodonLabel::Residue(aa)) => Some(Ok(PeptideToken::Residue(aa))),
            Some(CodonLabel::Stop) => {
                self.state = State::Done;
                Some(Ok(PeptideToken::Stop))
            }
            None => {
                self.state = State::Done;
                Some(Err(StrandError::UnknownCodon(codon)))
            }
        }
    }
}

/// Translate an RNA sequence into a peptide, stopping at the first stop codon
pub fn translate(rna: &str) -> Result<Peptide, StrandError> {
    Translation::new(rna).collect()
}
