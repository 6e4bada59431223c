//! The analysis orchestrator: normalizes, validates, and routes a sequence
//! through the nucleotide or protein pipeline, producing one of the two
//! report shapes. All computation is pure and synchronous; validation runs
//! before anything else, so a failure never leaves a partial result.

use crate::error::AnalysisResult;
use crate::io::detect::infer_seq_type;
use crate::seq::{normalize, DnaSeq, OrfRecord, ProteinSeq, RawRecord, RnaSeq, SeqType, MIN_ORF_LEN};

use serde::Serialize;
use std::collections::BTreeMap;

/// Analysis of a DNA or RNA sequence. `orfs` is present for DNA only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NucleotideReport {
    pub sequence_type: SeqType,
    pub sequence_length: usize,
    pub gc_content: String,
    pub nucleotide_counts: BTreeMap<char, usize>,
    pub protein_sequence: Option<String>,
    pub orfs: Option<Vec<OrfRecord>>,
}

/// Analysis of a protein sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProteinReport {
    pub sequence_type: SeqType,
    pub sequence_length: usize,
    pub molecular_weight: String,
    pub amino_acid_counts: BTreeMap<char, usize>,
    pub isoelectric_point: String,
}

/// The two result shapes, tagged by the `sequence_type` field inside each.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Nucleotide(NucleotideReport),
    Protein(ProteinReport),
}

impl AnalysisReport {
    pub fn sequence_type(&self) -> SeqType {
        match self {
            AnalysisReport::Nucleotide(r) => r.sequence_type,
            AnalysisReport::Protein(r) => r.sequence_type,
        }
    }
}

/// Two-decimal rendering, nearest with ties resolved on the binary value
/// (Rust's default float formatting, matching the original behavior).
fn two_decimals(x: f64) -> String {
    format!("{x:.2}")
}

pub fn analyze_dna(sequence: &str) -> AnalysisResult<NucleotideReport> {
    let seq = DnaSeq::new(normalize(sequence).into_bytes())?;
    Ok(NucleotideReport {
        sequence_type: SeqType::Dna,
        sequence_length: seq.len(),
        gc_content: two_decimals(seq.gc_content() * 100.0),
        nucleotide_counts: seq.base_counts(),
        protein_sequence: Some(seq.translate()),
        orfs: Some(seq.find_orfs(MIN_ORF_LEN)),
    })
}

pub fn analyze_rna(sequence: &str) -> AnalysisResult<NucleotideReport> {
    let seq = RnaSeq::new(normalize(sequence).into_bytes())?;
    Ok(NucleotideReport {
        sequence_type: SeqType::Rna,
        sequence_length: seq.len(),
        gc_content: two_decimals(seq.gc_content() * 100.0),
        nucleotide_counts: seq.base_counts(),
        protein_sequence: Some(seq.translate()),
        orfs: None,
    })
}

pub fn analyze_protein(sequence: &str) -> AnalysisResult<ProteinReport> {
    let seq = ProteinSeq::new(normalize(sequence).into_bytes())?;
    Ok(ProteinReport {
        sequence_type: SeqType::Protein,
        sequence_length: seq.len(),
        molecular_weight: two_decimals(seq.molecular_weight()),
        amino_acid_counts: seq.residue_counts(),
        isoelectric_point: two_decimals(seq.isoelectric_point()),
    })
}

/// Route on the declared or inferred type.
pub fn analyze(sequence: &str, seq_type: SeqType) -> AnalysisResult<AnalysisReport> {
    match seq_type {
        SeqType::Dna => analyze_dna(sequence).map(AnalysisReport::Nucleotide),
        SeqType::Rna => analyze_rna(sequence).map(AnalysisReport::Nucleotide),
        SeqType::Protein => analyze_protein(sequence).map(AnalysisReport::Protein),
    }
}

/// Analyze every record of a parsed file, inferring each record's type. Runs
/// in parallel with the `parallel` feature; fails on the first bad record.
pub fn analyze_batch(records: &[RawRecord]) -> AnalysisResult<Vec<AnalysisReport>> {
    par_try_map!(records, |record: &RawRecord| {
        let normalized = normalize(record.seq());
        let seq_type = infer_seq_type(normalized.as_bytes());
        analyze(record.seq(), seq_type)
    })
}
