use std::path::PathBuf;

use strand_formats::TripletLayout;

use crate::cli::{LayoutOptions, PipelineArgs};

impl From<&LayoutOptions> for TripletLayout {
    fn from(opts: &LayoutOptions) -> Self {
        Self {
            codons_per_line: opts.codons_per_line,
            separator: opts.separator,
        }
    }
}

/// Settings for a full generate → translate run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub codons: usize,
    pub dna_output: PathBuf,
    pub rna_output: PathBuf,
    pub seed: Option<u64>,
    pub layout: TripletLayout,
}

impl PipelineConfig {
    /// Fragment length in bases; `None` if it does not fit in a `usize`
    pub fn bases(&self) -> Option<usize> {
        self.codons.checked_mul(3)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            codons: 5000,
            dna_output: PathBuf::from("sequence.txt"),
            rna_output: PathBuf::from("sequence_arn.txt"),
            seed: None,
            layout: TripletLayout::default(),
        }
    }
}

impl From<PipelineArgs> for PipelineConfig {
    fn from(args: PipelineArgs) -> Self {
        Self {
            codons: args.codons,
            layout: TripletLayout::from(&args.layout),
            dna_output: args.dna_output,
            rna_output: args.rna_output,
            seed: args.seed,
        }
    }
}
