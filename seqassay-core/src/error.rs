use crate::seq::SeqType;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The sequence contains a character outside the strict alphabet of the
    /// declared type. The only error the analysis engine itself produces.
    #[error("invalid {seq_type} sequence: character '{ch}' at position {pos}")]
    InvalidAlphabet {
        seq_type: SeqType,
        ch: char,
        pos: usize,
    },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("genbank format error at line {line}: {msg}")]
    GenBankFormat { msg: &'static str, line: usize },

    #[error("unsupported file format: {filename}")]
    UnsupportedFormat { filename: String },

    #[error("file contains no sequence records")]
    NoRecords,

    #[error("file is not valid utf-8")]
    NonUtf8(#[from] std::str::Utf8Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl AnalysisError {
    /// Whether this is the core alphabet-rejection error, as opposed to a
    /// file-layer failure. Callers route the two classes to different
    /// user-facing taxonomies.
    pub fn is_alphabet_error(&self) -> bool {
        matches!(self, AnalysisError::InvalidAlphabet { .. })
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
