use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use strand_core::stats::{NucleotideReport, PeptideReport};

#[derive(Serialize)]
pub struct PipelineReport<'a> {
    pub dna: &'a NucleotideReport,
    pub peptide: &'a PeptideReport,
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_nucleotide<W: Write>(out: &mut W, report: &NucleotideReport) -> Result<()> {
    writeln!(
        out,
        "{} fragment: {} bases, {} codons",
        report.alphabet, report.length, report.codons
    )?;
    writeln!(out, "  validation : {}", report.validation)?;
    for (base, count) in &report.composition {
        writeln!(out, "  {}          : {}", base, count)?;
    }
    writeln!(out, "  GC content : {:.2} %", report.gc_content * 100.0)?;
    Ok(())
}

pub fn write_peptide<W: Write>(out: &mut W, report: &PeptideReport) -> Result<()> {
    writeln!(out, "Peptide: {}", report.sequence)?;
    if !report.terminated {
        writeln!(out, "  (no stop codon before end of input)")?;
    }
    writeln!(out, "  amino acids : {}", report.amino_acids)?;
    match report.polarity_percentage {
        Some(pct) => writeln!(out, "  polar       : {:.2} %", pct)?,
        None => writeln!(out, "  polar       : n/a")?,
    }
    for (code, count) in &report.residues {
        writeln!(out, "  {}         : {}", code, count)?;
    }
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    write_json(&mut io::stdout().lock(), value)
}

pub fn print_nucleotide(report: &NucleotideReport) -> Result<()> {
    write_nucleotide(&mut io::stdout().lock(), report)
}

pub fn print_peptide(report: &PeptideReport) -> Result<()> {
    write_peptide(&mut io::stdout().lock(), report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_core::{translate, Alphabet};

    #[test]
    fn test_peptide_json() {
        let report = PeptideReport::new(&translate("AUGAAAUAA").unwrap());
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["sequence"], "Met-Lys-STOP");
        assert_eq!(value["terminated"], true);
        assert_eq!(value["amino_acids"], 2);
        assert_eq!(value["polarity_percentage"], 50.0);
        assert_eq!(value["residues"]["Lys"], 1);
    }

    #[test]
    fn test_empty_peptide_json_has_null_polarity() {
        let report = PeptideReport::new(&translate("UGA").unwrap());
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["polarity_percentage"].is_null());
    }

    #[test]
    fn test_nucleotide_json() {
        let report = NucleotideReport::new("AATTCCGGG", Alphabet::Dna);
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["alphabet"], "dna");
        assert_eq!(value["validation"]["status"], "valid");
        assert_eq!(value["composition"]["G"], 3);
        assert_eq!(value["composition"]["T"], 2);
    }

    #[test]
    fn test_pipeline_json_nests_both_reports() {
        let dna = NucleotideReport::new("ATGTAA", Alphabet::Dna);
        let peptide = PeptideReport::new(&translate("AUGUAA").unwrap());
        let mut out = Vec::new();
        write_json(&mut out, &PipelineReport { dna: &dna, peptide: &peptide }).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["dna"]["codons"], 2);
        assert_eq!(value["peptide"]["sequence"], "Met-STOP");
    }

    #[test]
    fn test_text_report() {
        let report = PeptideReport::new(&translate("AUGAAA").unwrap());
        let mut out = Vec::new();
        write_peptide(&mut out, &report).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Peptide: Met-Lys\n"));
        assert!(text.contains("no stop codon"));
    }
}
