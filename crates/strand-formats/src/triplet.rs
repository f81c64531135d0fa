//! Flat text layout for nucleotide fragments: codons followed by a separator,
//! a fixed number of codons per line.

use nom::bytes::complete::{take_till1, take_while};
use nom::combinator::all_consuming;
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::IResult;

use crate::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripletLayout {
    pub codons_per_line: usize,
    pub separator: char,
}

impl Default for TripletLayout {
    fn default() -> Self {
        Self {
            codons_per_line: 15,
            separator: ' ',
        }
    }
}

fn is_gap(separator: char) -> impl Fn(char) -> bool + Copy {
    move |c| c == separator || c == '\n' || c == '\r'
}

fn tokens(input: &str, separator: char) -> IResult<&str, Vec<&str>> {
    let gap = is_gap(separator);
    all_consuming(preceded(
        take_while(gap),
        many0(terminated(take_till1(gap), take_while(gap))),
    ))(input)
}

/// Parse a triplet file, dropping separators and line breaks.
/// Symbols are not checked against any alphabet.
pub fn parse(input: &str, separator: char) -> Result<String, ParseError> {
    let (_, parts) = tokens(input, separator)
        .map_err(|e| ParseError::InvalidFormat(format!("codon layout: {}", e)))?;
    Ok(parts.concat())
}

/// Serialize a fragment: every complete codon followed by the separator,
/// a newline after each `codons_per_line` codons
pub fn serialize(fragment: &str, layout: &TripletLayout) -> Result<String, ParseError> {
    if layout.codons_per_line == 0 {
        return Err(ParseError::InvalidLayout(
            "codons per line must be at least 1".to_string(),
        ));
    }

    let bases: Vec<char> = fragment.chars().collect();
    let mut out = String::with_capacity(bases.len() + bases.len() / 3 + 1);

    for (n, codon) in bases.chunks_exact(3).enumerate() {
        out.extend(codon);
        out.push(layout.separator);
        if (n + 1) % layout.codons_per_line == 0 {
            out.push('\n');
        }
    }

    Ok(out)
}
