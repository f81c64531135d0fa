use std::collections::BTreeMap;

use serde::Serialize;

use crate::alphabet::Alphabet;
use crate::error::StrandError;
use crate::peptide::Peptide;
use crate::validate::{validate, Validation};

/// Occurrences of each alphabet base in `sequence` (zero for absent bases)
pub fn base_composition(sequence: &str, alphabet: Alphabet) -> BTreeMap<char, usize> {
    let mut counts: BTreeMap<char, usize> = alphabet.bases().iter().map(|&b| (b, 0)).collect();
    for symbol in sequence.chars() {
        if let Some(count) = counts.get_mut(&symbol) {
            *count += 1;
        }
    }
    counts
}

/// Calculate GC content as a fraction (0.0 to 1.0)
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc_count = seq.chars().filter(|c| matches!(c, 'G' | 'C')).count();
    gc_count as f64 / seq.chars().count() as f64
}

/// Count of each amino acid present, keyed by three-letter code
pub fn residue_count(peptide: &Peptide) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for aa in peptide.residues() {
        *counts.entry(aa.three_letter()).or_insert(0) += 1;
    }
    counts
}

/// Number of amino acids, the stop marker excluded
pub fn amino_acid_count(peptide: &Peptide) -> usize {
    peptide.residues().count()
}

/// Percentage (0-100) of amino acids with a polar side chain
pub fn polarity_percentage(peptide: &Peptide) -> Result<f64, StrandError> {
    let (total, polar) = peptide
        .residues()
        .fold((0usize, 0usize), |(total, polar), aa| {
            (total + 1, polar + usize::from(aa.is_polar()))
        });
    if total == 0 {
        return Err(StrandError::EmptySequence);
    }
    Ok(polar as f64 / total as f64 * 100.0)
}

/// Summary of a nucleotide sequence for the reporting layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NucleotideReport {
    pub alphabet: Alphabet,
    pub length: usize,
    pub codons: usize,
    pub validation: Validation,
    pub composition: BTreeMap<char, usize>,
    pub gc_content: f64,
}

impl NucleotideReport {
    pub fn new(sequence: &str, alphabet: Alphabet) -> Self {
        let length = sequence.chars().count();
        Self {
            alphabet,
            length,
            codons: length / 3,
            validation: validate(sequence, alphabet),
            composition: base_composition(sequence, alphabet),
            gc_content: gc_content(sequence),
        }
    }
}

/// Summary of a translated peptide for the reporting layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeptideReport {
    pub sequence: String,
    pub terminated: bool,
    pub amino_acids: usize,
    /// `None` when the peptide has no amino acids
    pub polarity_percentage: Option<f64>,
    pub residues: BTreeMap<&'static str, usize>,
}

impl PeptideReport {
    pub fn new(peptide: &Peptide) -> Self {
        Self {
            sequence: peptide.to_string(),
            terminated: peptide.is_terminated(),
            amino_acids: amino_acid_count(peptide),
            polarity_percentage: polarity_percentage(peptide).ok(),
            residues: residue_count(peptide),
        }
    }
}
