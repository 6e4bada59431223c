use crate::alphabets::rna;
use crate::error::{AnalysisError, AnalysisResult};
use crate::seq::dna::{count_single_byte, gc_fraction};
use crate::seq::{translate, SeqType};

use std::collections::BTreeMap;

/// A validated RNA sequence: uppercase A/U/G/C only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RnaSeq {
    bytes: Vec<u8>,
}

impl RnaSeq {
    pub fn new(bytes: Vec<u8>) -> AnalysisResult<Self> {
        if let Some((pos, b)) = rna::alphabet().find_invalid(&bytes) {
            return Err(AnalysisError::InvalidAlphabet {
                seq_type: SeqType::Rna,
                ch: b as char,
                pos,
            });
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Counts of all four bases, zero counts included.
    pub fn base_counts(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for &base in b"AUGC" {
            counts.insert(base as char, count_single_byte(&self.bytes, base));
        }
        counts
    }

    /// GC fraction in [0, 1]; 0 for the empty sequence.
    pub fn gc_content(&self) -> f64 {
        gc_fraction(&self.bytes)
    }

    /// Full-length frame-0 translation, U read as T, stops included as `*`.
    pub fn translate(&self) -> String {
        translate::translate(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_thymine() {
        let err = RnaSeq::new(b"ACGT".to_vec()).unwrap_err();
        match err {
            AnalysisError::InvalidAlphabet { seq_type, ch, pos } => {
                assert_eq!(seq_type, SeqType::Rna);
                assert_eq!(ch, 'T');
                assert_eq!(pos, 3);
            }
            other => panic!("expected InvalidAlphabet, got {other:?}"),
        }
    }

    #[test]
    fn base_counts() {
        let s = RnaSeq::new(b"AUGCAU".to_vec()).unwrap();
        let counts = s.base_counts();
        assert_eq!(counts[&'A'], 2);
        assert_eq!(counts[&'U'], 2);
        assert_eq!(counts[&'G'], 1);
        assert_eq!(counts[&'C'], 1);
    }

    #[test]
    fn translate_matches_dna_equivalent() {
        let s = RnaSeq::new(b"AUGGCCUAA".to_vec()).unwrap();
        assert_eq!(s.translate(), "MA*");
    }

    #[test]
    fn gc_content_half() {
        let s = RnaSeq::new(b"AUGC".to_vec()).unwrap();
        assert_eq!(s.gc_content(), 0.5);
    }
}
