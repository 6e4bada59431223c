#[macro_use]
mod par;

pub mod alphabets;
pub mod analysis;
pub mod error;
pub mod io;
pub mod seq;

pub use analysis::{analyze, analyze_dna, analyze_protein, analyze_rna, AnalysisReport};
pub use error::{AnalysisError, AnalysisResult};
pub use seq::SeqType;
