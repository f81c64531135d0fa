use serde::Serialize;

/// The 20 standard amino acids, serialized by their three-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AminoAcid {
    #[serde(rename = "Ala")]
    Alanine,
    #[serde(rename = "Arg")]
    Arginine,
    #[serde(rename = "Asn")]
    Asparagine,
    #[serde(rename = "Asp")]
    Aspartate,
    #[serde(rename = "Cys")]
    Cysteine,
    #[serde(rename = "Glu")]
    Glutamate,
    #[serde(rename = "Gln")]
    Glutamine,
    #[serde(rename = "Gly")]
    Glycine,
    #[serde(rename = "His")]
    Histidine,
    #[serde(rename = "Ile")]
    Isoleucine,
    #[serde(rename = "Leu")]
    Leucine,
    #[serde(rename = "Lys")]
    Lysine,
    #[serde(rename = "Met")]
    Methionine,
    #[serde(rename = "Phe")]
    Phenylalanine,
    #[serde(rename = "Pro")]
    Proline,
    #[serde(rename = "Ser")]
    Serine,
    #[serde(rename = "Thr")]
    Threonine,
    #[serde(rename = "Trp")]
    Tryptophan,
    #[serde(rename = "Tyr")]
    Tyrosine,
    #[serde(rename = "Val")]
    Valine,
}

/// Physico-chemical record for one amino acid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AminoAcidInfo {
    pub name: &'static str,
    pub one_letter: char,
    pub three_letter: &'static str,
    /// g/mol
    pub molar_mass: f64,
    pub isoelectric_point: f64,
    pub polar: bool,
}

const fn info(
    name: &'static str,
    one_letter: char,
    three_letter: &'static str,
    molar_mass: f64,
    isoelectric_point: f64,
    polar: bool,
) -> AminoAcidInfo {
    AminoAcidInfo {
        name,
        one_letter,
        three_letter,
        molar_mass,
        isoelectric_point,
        polar,
    }
}

// Indexed by `AminoAcid as usize`; keep in declaration order.
const CATALOG: [AminoAcidInfo; 20] = [
    info("Alanine", 'A', "Ala", 89.09404, 6.00, false),
    info("Arginine", 'R', "Arg", 174.20274, 10.76, true),
    info("Asparagine", 'N', "Asn", 132.11904, 5.41, true),
    info("Aspartate", 'D', "Asp", 133.10384, 2.77, true),
    info("Cysteine", 'C', "Cys", 121.15404, 5.07, false),
    info("Glutamate", 'E', "Glu", 147.13074, 3.22, true),
    info("Glutamine", 'Q', "Gln", 146.14594, 5.65, true),
    info("Glycine", 'G', "Gly", 75.06714, 5.97, false),
    info("Histidine", 'H', "His", 155.15634, 7.59, true),
    info("Isoleucine", 'I', "Ile", 131.17464, 6.02, false),
    info("Leucine", 'L', "Leu", 131.17464, 5.98, false),
    info("Lysine", 'K', "Lys", 146.18934, 9.74, true),
    info("Methionine", 'M', "Met", 149.20784, 5.74, false),
    info("Phenylalanine", 'F', "Phe", 165.19184, 5.48, false),
    info("Proline", 'P', "Pro", 115.13194, 6.30, false),
    info("Serine", 'S', "Ser", 105.09344, 5.68, true),
    info("Threonine", 'T', "Thr", 119.12034, 5.60, true),
    info("Tryptophan", 'W', "Trp", 204.22844, 5.89, false),
    info("Tyrosine", 'Y', "Tyr", 181.19124, 5.66, true),
    info("Valine", 'V', "Val", 117.14784, 5.96, false),
];

impl AminoAcid {
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Arginine,
        AminoAcid::Asparagine,
        AminoAcid::Aspartate,
        AminoAcid::Cysteine,
        AminoAcid::Glutamate,
        AminoAcid::Glutamine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Leucine,
        AminoAcid::Lysine,
        AminoAcid::Methionine,
        AminoAcid::Phenylalanine,
        AminoAcid::Proline,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
        AminoAcid::Valine,
    ];

    pub fn info(&self) -> &'static AminoAcidInfo {
        &CATALOG[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn one_letter(&self) -> char {
        self.info().one_letter
    }

    pub fn three_letter(&self) -> &'static str {
        self.info().three_letter
    }

    pub fn is_polar(&self) -> bool {
        self.info().polar
    }

    /// Look up by full name ("Alanine"), case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|aa| aa.name().eq_ignore_ascii_case(name))
    }

    pub fn from_three_letter(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|aa| aa.three_letter() == code)
    }

    pub fn from_one_letter(code: char) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|aa| aa.one_letter() == code)
    }
}

impl std::fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.three_letter())
    }
}
