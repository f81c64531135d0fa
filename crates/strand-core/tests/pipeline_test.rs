use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use strand_core::generate::generate_fragment;
use strand_core::stats::{amino_acid_count, polarity_percentage, residue_count};
use strand_core::{transcribe, translate, validate, Alphabet, PeptideToken, Validation};

#[test]
fn test_generated_dna_translates_to_a_stop() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let dna = generate_fragment(90, Alphabet::Dna, &mut rng).unwrap();
        assert_eq!(validate(&dna, Alphabet::Dna), Validation::Valid);

        let rna = transcribe(&dna);
        assert_eq!(validate(&rna, Alphabet::Rna), Validation::Valid);

        let peptide = translate(&rna).expect("canonical codons only");
        assert_eq!(peptide.tokens().last(), Some(&PeptideToken::Stop));
        assert!(peptide.len() <= 30);
    }
}

#[test]
fn test_transcribed_sequence_has_no_thymine() {
    let mut rng = StdRng::seed_from_u64(3);
    let dna = generate_fragment(300, Alphabet::Dna, &mut rng).unwrap();
    let rna = transcribe(&dna);
    assert!(!rna.contains('T'));
    assert_eq!(rna.len(), dna.len());
    assert_eq!(dna.matches('T').count(), rna.matches('U').count());
}

#[test]
fn test_statistics_over_worked_example() {
    let peptide = translate("AUGGCUGGAUAA").unwrap();
    assert_eq!(peptide.to_string(), "Met-Ala-Gly-STOP");
    assert_eq!(amino_acid_count(&peptide), 3);
    assert_eq!(polarity_percentage(&peptide).unwrap(), 0.0);

    let counts = residue_count(&peptide);
    assert_eq!(counts.values().sum::<usize>(), 3);
}
