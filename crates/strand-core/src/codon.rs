use std::collections::HashMap;
use std::sync::OnceLock;

use crate::amino_acid::AminoAcid;

/// What a codon encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodonLabel {
    Residue(AminoAcid),
    Stop,
}

impl CodonLabel {
    pub fn is_stop(&self) -> bool {
        matches!(self, CodonLabel::Stop)
    }
}

use AminoAcid::*;
use CodonLabel::{Residue as R, Stop};

#[rustfmt::skip]
const STANDARD_CODONS: [(&str, CodonLabel); 64] = [
    ("UUU", R(Phenylalanine)), ("UUC", R(Phenylalanine)), ("UUA", R(Leucine)), ("UUG", R(Leucine)),
    ("CUU", R(Leucine)), ("CUC", R(Leucine)), ("CUA", R(Leucine)), ("CUG", R(Leucine)),
    ("AUU", R(Isoleucine)), ("AUC", R(Isoleucine)), ("AUA", R(Isoleucine)), ("AUG", R(Methionine)),
    ("GUU", R(Valine)), ("GUC", R(Valine)), ("GUA", R(Valine)), ("GUG", R(Valine)),
    ("UCU", R(Serine)), ("UCC", R(Serine)), ("UCA", R(Serine)), ("UCG", R(Serine)),
    ("CCU", R(Proline)), ("CCC", R(Proline)), ("CCA", R(Proline)), ("CCG", R(Proline)),
    ("ACU", R(Threonine)), ("ACC", R(Threonine)), ("ACA", R(Threonine)), ("ACG", R(Threonine)),
    ("GCU", R(Alanine)), ("GCC", R(Alanine)), ("GCA", R(Alanine)), ("GCG", R(Alanine)),
    ("UAU", R(Tyrosine)), ("UAC", R(Tyrosine)), ("UAA", Stop), ("UAG", Stop),
    ("CAU", R(Histidine)), ("CAC", R(Histidine)), ("CAA", R(Glutamine)), ("CAG", R(Glutamine)),
    ("AAU", R(Asparagine)), ("AAC", R(Asparagine)), ("AAA", R(Lysine)), ("AAG", R(Lysine)),
    ("GAU", R(Aspartate)), ("GAC", R(Aspartate)), ("GAA", R(Glutamate)), ("GAG", R(Glutamate)),
    ("UGU", R(Cysteine)), ("UGC", R(Cysteine)), ("UGA", Stop), ("UGG", R(Tryptophan)),
    ("CGU", R(Arginine)), ("CGC", R(Arginine)), ("CGA", R(Arginine)), ("CGG", R(Arginine)),
    ("AGU", R(Serine)), ("AGC", R(Serine)), ("AGA", R(Arginine)), ("AGG", R(Arginine)),
    ("GGU", R(Glycine)), ("GGC", R(Glycine)), ("GGA", R(Glycine)), ("GGG", R(Glycine)),
];

/// The standard genetic code over RNA codons
pub struct GeneticCode {
    table: HashMap<&'static str, CodonLabel>,
}

impl GeneticCode {
    /// Standard genetic code (NCBI table 1), built once per process
    pub fn standard() -> &'static GeneticCode {
        static STANDARD: OnceLock<GeneticCode> = OnceLock::new();
        STANDARD.get_or_init(|| GeneticCode {
            table: STANDARD_CODONS.iter().copied().collect(),
        })
    }

    /// Look up a single RNA codon; `None` if it is not one of the 64 entries
    pub fn lookup(&self, codon: &str) -> Option<CodonLabel> {
        self.table.get(codon).copied()
    }

    pub fn is_stop_codon(&self, codon: &str) -> bool {
        self.lookup(codon).is_some_and(|label| label.is_stop())
    }

    pub fn stop_codons(&self) -> Vec<&'static str> {
        self.codons_for(CodonLabel::Stop)
    }

    /// All codons mapping to `label`, in table order
    pub fn codons_for(&self, label: CodonLabel) -> Vec<&'static str> {
        STANDARD_CODONS
            .iter()
            .filter(|(_, l)| *l == label)
            .map(|(codon, _)| *codon)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
