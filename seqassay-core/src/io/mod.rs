pub mod detect;
pub mod fasta;
pub mod genbank;

use crate::error::{AnalysisError, AnalysisResult};
use crate::seq::record::RawRecord;
use crate::seq::{normalize, SeqType};

/// Supported sequence-file formats, selected by filename extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Fasta,
    GenBank,
}

impl FileFormat {
    pub fn from_filename(filename: &str) -> AnalysisResult<Self> {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".fasta") || lower.ends_with(".fa") {
            Ok(FileFormat::Fasta)
        } else if lower.ends_with(".gb") || lower.ends_with(".gbk") {
            Ok(FileFormat::GenBank)
        } else {
            Err(AnalysisError::UnsupportedFormat {
                filename: filename.to_string(),
            })
        }
    }
}

/// Parse file content into raw records according to `format`.
pub fn read_records(data: &[u8], format: FileFormat) -> AnalysisResult<Vec<RawRecord>> {
    // Reject non-UTF-8 up front so the caller sees an encoding error rather
    // than a format error from a garbled parse.
    std::str::from_utf8(data)?;
    match format {
        FileFormat::Fasta => fasta::read_fasta_records_from_bytes(data),
        FileFormat::GenBank => genbank::read_genbank_records_from_bytes(data),
    }
}

/// The file-ingestion entry point: pick the format from the filename, parse,
/// and return the first record's raw sequence text along with the inferred
/// sequence type. The caller still runs the full analysis (which validates)
/// on the returned text.
pub fn extract_first_sequence(data: &[u8], filename: &str) -> AnalysisResult<(String, SeqType)> {
    let format = FileFormat::from_filename(filename)?;
    let records = read_records(data, format)?;
    let first = records.into_iter().next().ok_or(AnalysisError::NoRecords)?;
    let seq_type = detect::infer_seq_type(normalize(first.seq()).as_bytes());
    Ok((first.seq, seq_type))
}
