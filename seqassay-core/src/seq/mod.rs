pub mod dna;
pub mod orf;
pub mod protein;
pub mod record;
pub mod rna;
pub mod translate;

pub use dna::DnaSeq;
pub use orf::{OrfRecord, MIN_ORF_LEN};
pub use protein::ProteinSeq;
pub use record::RawRecord;
pub use rna::RnaSeq;

use serde::Serialize;
use std::fmt;

/// The three sequence kinds the engine analyzes. Selects which pipeline runs
/// and tags the resulting report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SeqType {
    #[serde(rename = "DNA")]
    Dna,
    #[serde(rename = "RNA")]
    Rna,
    Protein,
}

impl fmt::Display for SeqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqType::Dna => f.write_str("DNA"),
            SeqType::Rna => f.write_str("RNA"),
            SeqType::Protein => f.write_str("Protein"),
        }
    }
}

/// Strip space, tab, carriage-return, and newline characters and uppercase
/// what remains. Total and idempotent; runs before any validation or
/// analysis. Anything else (other control characters, unicode whitespace)
/// stays put and is left to alphabet validation to reject.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_strips_and_uppercases() {
        assert_eq!(normalize(" at\tgc\r\nAT "), "ATGCAT");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("acgt"), "ACGT");
    }

    #[test]
    fn seq_type_display() {
        assert_eq!(SeqType::Dna.to_string(), "DNA");
        assert_eq!(SeqType::Rna.to_string(), "RNA");
        assert_eq!(SeqType::Protein.to_string(), "Protein");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_output_has_no_whitespace(s in ".*") {
            let out = normalize(&s);
            prop_assert!(!out.chars().any(|c| matches!(c, ' ' | '\t' | '\r' | '\n')));
        }
    }
}
