//! Open-reading-frame detection over the three forward reading frames.

use serde::Serialize;

/// Minimum ORF length in nucleotides, inclusive of the stop codon.
pub const MIN_ORF_LEN: usize = 100;

const START_CODON: &[u8; 3] = b"ATG";
const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// A codon-aligned span from a start codon to the first in-frame stop codon.
/// `start` is inclusive, `end` exclusive; `end - start` is a multiple of 3.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrfRecord {
    pub start: usize,
    pub end: usize,
    pub sequence: String,
}

/// Scan all three forward frames for ATG..stop pairs of at least `min_len`
/// nucleotides.
///
/// Each start codon triggers its own forward scan, which always ends at the
/// first in-frame stop whether or not the span meets the length threshold.
/// Overlapping ORFs sharing a stop are all reported; the outer scan keeps
/// advancing codon by codon regardless of what the inner scan consumed.
/// Results are ordered frame 0, then 1, then 2, increasing start within a
/// frame. Forward strand only. Worst case is O(n^2) when starts are frequent
/// and stops absent; callers bound the whole analysis with a deadline.
pub fn find_orfs(seq: &[u8], min_len: usize) -> Vec<OrfRecord> {
    let mut orfs = Vec::new();
    if seq.len() < 3 {
        return orfs;
    }

    for frame in 0..3 {
        let mut i = frame;
        while i + 3 <= seq.len() {
            if &seq[i..i + 3] == START_CODON {
                let mut j = i + 3;
                while j + 3 <= seq.len() {
                    let codon = &seq[j..j + 3];
                    if STOP_CODONS.iter().any(|&stop| codon == stop) {
                        let end = j + 3;
                        if end - i >= min_len {
                            orfs.push(OrfRecord {
                                start: i,
                                end,
                                sequence: String::from_utf8_lossy(&seq[i..end]).into_owned(),
                            });
                        }
                        break;
                    }
                    j += 3;
                }
            }
            i += 3;
        }
    }

    orfs
}
