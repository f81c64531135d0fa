pub mod triplet;

use std::path::Path;

use thiserror::Error;

pub use triplet::TripletLayout;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a codon-triplet file into a bare fragment string
pub fn read_fragment_file(path: impl AsRef<Path>, separator: char) -> Result<String, ParseError> {
    let content = std::fs::read_to_string(path)?;
    triplet::parse(&content, separator)
}

/// Write a fragment to `path` as a codon-triplet file
pub fn write_fragment_file(
    path: impl AsRef<Path>,
    fragment: &str,
    layout: &TripletLayout,
) -> Result<(), ParseError> {
    let content = triplet::serialize(fragment, layout)?;
    std::fs::write(path, content)?;
    Ok(())
}
