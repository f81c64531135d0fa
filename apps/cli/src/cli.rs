use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use strand_core::Alphabet;

#[derive(Parser)]
#[command(
    name = "strand",
    about = "Generate, validate, transcribe and translate synthetic nucleotide fragments",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Print reports as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a random fragment ending in a stop codon
    Generate {
        /// Number of bases (rounded down to a multiple of 3)
        #[arg(short, long, default_value_t = 15000)]
        bases: usize,

        /// DNA or RNA
        #[arg(short, long, default_value = "DNA")]
        alphabet: Alphabet,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Seed for reproducible fragments
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        layout: LayoutOptions,
    },

    /// Validate a fragment file and print base statistics
    Inspect {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// DNA or RNA
        #[arg(short, long, default_value = "DNA")]
        alphabet: Alphabet,

        #[command(flatten)]
        layout: LayoutOptions,
    },

    /// Transcribe a DNA fragment file into an RNA fragment file
    Transcribe {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutOptions,
    },

    /// Translate an RNA fragment file and print peptide statistics
    Translate {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutOptions,
    },

    /// Generate, store, validate, transcribe and translate in one run
    Pipeline(PipelineArgs),
}

/// Codon-triplet file layout
#[derive(Args)]
#[command(next_help_heading = "File Layout")]
pub struct LayoutOptions {
    #[arg(long, value_name = "N", default_value_t = 15)]
    pub codons_per_line: usize,

    #[arg(long, value_name = "CHAR", default_value_t = ' ')]
    pub separator: char,
}

#[derive(Args)]
pub struct PipelineArgs {
    /// Number of codons to generate
    #[arg(short, long, default_value_t = 5000)]
    pub codons: usize,

    #[arg(long, value_name = "FILE", default_value = "sequence.txt")]
    pub dna_output: PathBuf,

    #[arg(long, value_name = "FILE", default_value = "sequence_arn.txt")]
    pub rna_output: PathBuf,

    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub layout: LayoutOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
