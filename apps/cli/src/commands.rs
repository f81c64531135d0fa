use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use strand_core::generate::generate_fragment;
use strand_core::stats::{NucleotideReport, PeptideReport};
use strand_core::{transcribe, translate, validate, Alphabet, Validation};
use strand_formats::{read_fragment_file, write_fragment_file, TripletLayout};

use crate::cli::Command;
use crate::config::PipelineConfig;
use crate::report;

pub fn dispatch(command: Command, json: bool) -> Result<()> {
    match command {
        Command::Generate {
            bases,
            alphabet,
            output,
            seed,
            layout,
        } => {
            let fragment = generate(bases, alphabet, seed)?;
            write(&output, &fragment, &TripletLayout::from(&layout))?;
            eprintln!("Wrote {} bases to {}", fragment.len(), output.display());
            Ok(())
        }
        Command::Inspect {
            input,
            alphabet,
            layout,
        } => {
            let fragment = read(&input, layout.separator)?;
            let report = NucleotideReport::new(&fragment, alphabet);
            emit_nucleotide(&report, json)?;
            check(report.validation, alphabet, &input)
        }
        Command::Transcribe {
            input,
            output,
            layout,
        } => {
            let dna = read(&input, layout.separator)?;
            ensure_valid(&dna, Alphabet::Dna, &input)?;
            write(&output, &transcribe(&dna), &TripletLayout::from(&layout))
        }
        Command::Translate { input, layout } => {
            let rna = read(&input, layout.separator)?;
            ensure_valid(&rna, Alphabet::Rna, &input)?;
            let peptide = translate(&rna)?;
            emit_peptide(&PeptideReport::new(&peptide), json)
        }
        Command::Pipeline(args) => run_pipeline(&PipelineConfig::from(args), json),
    }
}

/// Generate a DNA fragment, store it, read it back, check it, transcribe it,
/// store the RNA and report on the translated peptide
pub fn run_pipeline(config: &PipelineConfig, json: bool) -> Result<()> {
    let Some(bases) = config.bases() else {
        bail!("{} codons is more than a fragment can hold", config.codons);
    };
    let fragment = generate(bases, Alphabet::Dna, config.seed)?;
    write(&config.dna_output, &fragment, &config.layout)?;

    let dna = read(&config.dna_output, config.layout.separator)?;
    ensure_valid(&dna, Alphabet::Dna, &config.dna_output)?;
    let dna_report = NucleotideReport::new(&dna, Alphabet::Dna);

    let rna = transcribe(&dna);
    write(&config.rna_output, &rna, &config.layout)?;

    let peptide = translate(&rna)?;
    let peptide_report = PeptideReport::new(&peptide);

    if json {
        report::print_json(&report::PipelineReport {
            dna: &dna_report,
            peptide: &peptide_report,
        })
    } else {
        report::print_nucleotide(&dna_report)?;
        report::print_peptide(&peptide_report)
    }
}

fn generate(bases: usize, alphabet: Alphabet, seed: Option<u64>) -> Result<String> {
    let fragment = match seed {
        Some(seed) => generate_fragment(bases, alphabet, &mut StdRng::seed_from_u64(seed))?,
        None => generate_fragment(bases, alphabet, &mut rand::rng())?,
    };
    Ok(fragment)
}

fn read(path: &Path, separator: char) -> Result<String> {
    read_fragment_file(path, separator)
        .with_context(|| format!("Failed to read fragment from {}", path.display()))
}

fn write(path: &Path, fragment: &str, layout: &TripletLayout) -> Result<()> {
    write_fragment_file(path, fragment, layout)
        .with_context(|| format!("Failed to write fragment to {}", path.display()))
}

fn ensure_valid(fragment: &str, alphabet: Alphabet, path: &Path) -> Result<()> {
    check(validate(fragment, alphabet), alphabet, path)
}

fn check(validation: Validation, alphabet: Alphabet, path: &Path) -> Result<()> {
    if !validation.is_valid() {
        bail!("{} is not a valid {} fragment: {}", path.display(), alphabet, validation);
    }
    Ok(())
}

fn emit_nucleotide(report: &NucleotideReport, json: bool) -> Result<()> {
    if json {
        report::print_json(report)
    } else {
        report::print_nucleotide(report)
    }
}

fn emit_peptide(report: &PeptideReport, json: bool) -> Result<()> {
    if json {
        report::print_json(report)
    } else {
        report::print_peptide(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cli::LayoutOptions;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("strand-cli-{}-{}", std::process::id(), name))
    }

    fn layout() -> LayoutOptions {
        LayoutOptions {
            codons_per_line: 15,
            separator: ' ',
        }
    }

    fn fixture(name: &str, fragment: &str) -> std::path::PathBuf {
        let path = temp_path(name);
        write_fragment_file(&path, fragment, &TripletLayout::default()).unwrap();
        path
    }

    fn inspect(path: &Path, alphabet: Alphabet) -> Result<()> {
        dispatch(
            Command::Inspect {
                input: path.to_path_buf(),
                alphabet,
                layout: layout(),
            },
            true,
        )
    }

    fn transcribe_file(input: &Path, output: &Path) -> Result<()> {
        dispatch(
            Command::Transcribe {
                input: input.to_path_buf(),
                output: output.to_path_buf(),
                layout: layout(),
            },
            false,
        )
    }

    #[test]
    fn test_pipeline_writes_both_files() {
        let config = PipelineConfig {
            codons: 40,
            dna_output: temp_path("dna.txt"),
            rna_output: temp_path("rna.txt"),
            seed: Some(11),
            ..PipelineConfig::default()
        };
        run_pipeline(&config, true).unwrap();

        let dna = read_fragment_file(&config.dna_output, ' ').unwrap();
        let rna = read_fragment_file(&config.rna_output, ' ').unwrap();
        std::fs::remove_file(&config.dna_output).unwrap();
        std::fs::remove_file(&config.rna_output).unwrap();

        assert_eq!(dna.len(), 120);
        assert_eq!(rna, transcribe(&dna));
        assert!(validate(&rna, Alphabet::Rna).is_valid());
    }

    #[test]
    fn test_translate_rejects_dna_file() {
        let path = temp_path("not-rna.txt");
        write_fragment_file(&path, "ATGTAA", &TripletLayout::default()).unwrap();
        let result = dispatch(
            Command::Translate {
                input: path.clone(),
                layout: layout(),
            },
            false,
        );
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_seeded_generation() {
        let a = generate(30, Alphabet::Dna, Some(5)).unwrap();
        let b = generate(30, Alphabet::Dna, Some(5)).unwrap();
        assert_eq!(a, b);
        assert!(generate(1, Alphabet::Dna, None).is_err());
    }

    #[test]
    fn test_pipeline_rejects_overflowing_codon_count() {
        let config = PipelineConfig {
            codons: usize::MAX / 3 + 1,
            dna_output: temp_path("overflow-dna.txt"),
            rna_output: temp_path("overflow-rna.txt"),
            ..PipelineConfig::default()
        };
        let err = run_pipeline(&config, false).unwrap_err();
        assert!(err.to_string().contains("codons"));
        assert!(!config.dna_output.exists());
    }

    #[test]
    fn test_inspect_valid_file() {
        let path = fixture("inspect-valid.txt", "ATGGCTTAA");
        let result = inspect(&path, Alphabet::Dna);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn test_inspect_rejects_invalid_dna() {
        let foreign = fixture("inspect-foreign.txt", "ATGXCTTAA");
        let misaligned = fixture("inspect-misaligned.txt", "ATGGC");
        let rna = fixture("inspect-rna.txt", "AUGUAA");

        let results = [
            inspect(&foreign, Alphabet::Dna),
            inspect(&misaligned, Alphabet::Dna),
            inspect(&rna, Alphabet::Dna),
        ];
        for path in [&foreign, &misaligned, &rna] {
            std::fs::remove_file(path).unwrap();
        }

        for result in results {
            let err = result.unwrap_err();
            assert!(err.to_string().contains("is not a valid DNA fragment"), "{err}");
        }
    }

    #[test]
    fn test_transcribe_writes_rna() {
        let input = fixture("transcribe-in.txt", "ATGTTTGGATGA");
        let output = temp_path("transcribe-out.txt");
        transcribe_file(&input, &output).unwrap();

        let rna = read_fragment_file(&output, ' ').unwrap();
        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
        assert_eq!(rna, transcribe("ATGTTTGGATGA"));
        assert_eq!(rna, "AUGUUUGGAUGA");
    }

    #[test]
    fn test_transcribe_rejects_non_dna() {
        for (name, fragment) in [("transcribe-rna.txt", "AUGUAA"), ("transcribe-x.txt", "ATGNNN")] {
            let input = fixture(name, fragment);
            let output = temp_path(&format!("{name}.out"));
            let result = transcribe_file(&input, &output);
            std::fs::remove_file(&input).unwrap();

            assert!(result.is_err(), "{fragment} was transcribed");
            assert!(!output.exists());
        }
    }

    #[test]
    fn test_generate_writes_valid_fragment() {
        for alphabet in [Alphabet::Dna, Alphabet::Rna] {
            let output = temp_path(&format!("generate-{alphabet}.txt"));
            dispatch(
                Command::Generate {
                    bases: 31,
                    alphabet,
                    output: output.clone(),
                    seed: Some(21),
                    layout: layout(),
                },
                false,
            )
            .unwrap();

            let fragment = read_fragment_file(&output, ' ').unwrap();
            std::fs::remove_file(&output).unwrap();

            assert_eq!(fragment.len(), 30);
            assert!(validate(&fragment, alphabet).is_valid());
            assert!(alphabet.stop_codons().contains(&&fragment[27..]));
        }
    }
}
