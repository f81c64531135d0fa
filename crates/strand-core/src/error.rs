use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrandError {
    #[error("Invalid alphabet selector: {0} (expected DNA or RNA)")]
    InvalidAlphabetSelector(String),
    #[error("Unknown codon: '{0}'")]
    UnknownCodon(String),
    #[error("Unknown amino acid code: '{0}'")]
    UnknownResidue(String),
    #[error("Peptide sequence contains no amino acids")]
    EmptySequence,
    #[error("Fragment of {requested} bases is too short to hold a stop codon")]
    FragmentTooShort { requested: usize },
}
