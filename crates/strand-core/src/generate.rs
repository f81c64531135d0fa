use rand::Rng;

use crate::alphabet::Alphabet;
use crate::error::StrandError;

/// Generate a random fragment of `nbases` bases (rounded down to a whole
/// number of codons) whose last codon is a stop codon.
///
/// Bases and the stop codon are drawn uniformly; the stop codon is written in
/// the alphabet's own form (TAA/TAG/TGA or UAA/UAG/UGA).
pub fn generate_fragment<R: Rng + ?Sized>(
    nbases: usize,
    alphabet: Alphabet,
    rng: &mut R,
) -> Result<String, StrandError> {
    let length = nbases - nbases % 3;
    if length < 3 {
        return Err(StrandError::FragmentTooShort { requested: nbases });
    }

    let bases = alphabet.bases();
    let mut fragment = String::with_capacity(length);
    for _ in 0..length - 3 {
        fragment.push(bases[rng.random_range(0..bases.len())]);
    }

    let stops = alphabet.stop_codons();
    fragment.push_str(stops[rng.random_range(0..stops.len())]);

    Ok(fragment)
}
