pub mod alphabet;
pub mod amino_acid;
pub mod codon;
pub mod error;
pub mod generate;
pub mod operations;
pub mod peptide;
pub mod stats;
pub mod validate;

pub use alphabet::Alphabet;
pub use amino_acid::{AminoAcid, AminoAcidInfo};
pub use error::StrandError;
pub use operations::{transcribe, translate};
pub use peptide::{Peptide, PeptideToken};
pub use validate::{validate, Validation};
