//! Sequence-type inference for the file-ingestion path.
//!
//! Rules (deterministic, in priority order):
//! - Contains any protein-only character (EFILPQZ) → Protein
//! - Contains U → RNA
//! - Otherwise → DNA (the safe default: A/G/C alone cannot disambiguate)

use crate::seq::SeqType;

/// Characters that signal a protein sequence: they never appear in an
/// upper-cased DNA/RNA alphabet. Z is not a valid residue but still a
/// protein signal; inference is a heuristic, not validation, and callers
/// must construct the typed sequence (which validates) before analysis.
const PROTEIN_ONLY: &[u8] = b"EFILPQZ";

/// Infer the sequence type from normalized (uppercase, whitespace-free)
/// bytes. Total: every input maps to exactly one type.
pub fn infer_seq_type(bytes: &[u8]) -> SeqType {
    let mut has_u = false;

    for &b in bytes {
        if PROTEIN_ONLY.contains(&b) {
            return SeqType::Protein;
        }
        if b == b'U' {
            has_u = true;
        }
    }

    if has_u {
        SeqType::Rna
    } else {
        SeqType::Dna
    }
}
