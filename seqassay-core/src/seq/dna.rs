use crate::alphabets::dna;
use crate::error::{AnalysisError, AnalysisResult};
use crate::seq::orf::{self, OrfRecord};
use crate::seq::{translate, SeqType};

use memchr::memchr_iter;
use std::collections::BTreeMap;

/// A validated DNA sequence: uppercase A/T/G/C only, no whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    /// Validate against the strict DNA alphabet. Input must already be
    /// normalized (see [`crate::seq::normalize`]).
    pub fn new(bytes: Vec<u8>) -> AnalysisResult<Self> {
        if let Some((pos, b)) = dna::alphabet().find_invalid(&bytes) {
            return Err(AnalysisError::InvalidAlphabet {
                seq_type: SeqType::Dna,
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
        for &base in b"ATGC" {
            counts.insert(base as char, count_single_byte(&self.bytes, base));
        }
        counts
    }

    /// GC fraction in [0, 1]; 0 for the empty sequence.
    pub fn gc_content(&self) -> f64 {
        gc_fraction(&self.bytes)
    }

    /// Full-length frame-0 translation, stop codons included as `*`.
    pub fn translate(&self) -> String {
        translate::translate(&self.bytes)
    }

    /// Three-frame forward ORF scan; see [`orf::find_orfs`].
    pub fn find_orfs(&self, min_len: usize) -> Vec<OrfRecord> {
        orf::find_orfs(&self.bytes, min_len)
    }
}

#[inline]
pub(crate) fn count_single_byte(hay: &[u8], b: u8) -> usize {
    memchr_iter(b, hay).count()
}

pub(crate) fn gc_fraction(bytes: &[u8]) -> f64 {
    if bytes.is_empty() {
        return 0.0;
    }
    let gc = count_single_byte(bytes, b'G') + count_single_byte(bytes, b'C');
    gc as f64 / bytes.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_invalid_characters() {
        let err = DnaSeq::new(b"ACGU".to_vec()).unwrap_err();
        match err {
            AnalysisError::InvalidAlphabet { seq_type, ch, pos } => {
                assert_eq!(seq_type, SeqType::Dna);
                assert_eq!(ch, 'U');
                assert_eq!(pos, 3);
            }
            other => panic!("expected InvalidAlphabet, got {other:?}"),
        }
        assert!(DnaSeq::new(b"acgt".to_vec()).is_err());
        assert!(DnaSeq::new(b"ACGTN".to_vec()).is_err());
    }

    #[test]
    fn base_counts_include_zeros() {
        let s = DnaSeq::new(b"AAAA".to_vec()).unwrap();
        let counts = s.base_counts();
        assert_eq!(counts[&'A'], 4);
        assert_eq!(counts[&'T'], 0);
        assert_eq!(counts[&'G'], 0);
        assert_eq!(counts[&'C'], 0);
    }

    #[test]
    fn gc_fraction_bounds() {
        assert_eq!(DnaSeq::new(b"GCGCGC".to_vec()).unwrap().gc_content(), 1.0);
        assert_eq!(DnaSeq::new(b"ATATAT".to_vec()).unwrap().gc_content(), 0.0);
        assert_eq!(DnaSeq::new(b"ATGC".to_vec()).unwrap().gc_content(), 0.5);
        assert_eq!(DnaSeq::new(Vec::new()).unwrap().gc_content(), 0.0);
    }

    #[test]
    fn translate_full_length() {
        let s = DnaSeq::new(b"ATGTAAATG".to_vec()).unwrap();
        assert_eq!(s.translate(), "M*M");
    }

    proptest! {
        #[test]
        fn counts_sum_to_length(
            bytes in prop::collection::vec(
                prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
                0..300,
            )
        ) {
            let s = DnaSeq::new(bytes).unwrap();
            let total: usize = s.base_counts().values().sum();
            prop_assert_eq!(total, s.len());
        }
    }
}
