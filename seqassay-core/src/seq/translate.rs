//! Frame-0 codon translation with the standard genetic code (NCBI table 1).

use std::sync::LazyLock;

/// Codon index = (base1 << 4) | (base2 << 2) | base3 with A=0, C=1, G=2,
/// T/U=3. Stop codons are `*`.
const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    map[b'A' as usize] = 0;
    map[b'C' as usize] = 1;
    map[b'G' as usize] = 2;
    map[b'T' as usize] = 3;
    map[b'U' as usize] = 3;
    map
});

/// Translate a nucleotide sequence from offset 0, consuming complete codons.
/// Trailing 1-2 bases are dropped; stop codons emit `*` and translation
/// continues, so the output length is always `len / 3`.
pub fn translate(bytes: &[u8]) -> String {
    let mut out = Vec::with_capacity(bytes.len() / 3);
    for codon in bytes.chunks_exact(3) {
        let i1 = BASE_INDEX[codon[0] as usize];
        let i2 = BASE_INDEX[codon[1] as usize];
        let i3 = BASE_INDEX[codon[2] as usize];
        let aa = if i1 < 4 && i2 < 4 && i3 < 4 {
            let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
            CODON_TABLE[idx]
        } else {
            b'X'
        };
        out.push(aa);
    }
    // The codon table and fallback emit ASCII only.
    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn translate_basic() {
        assert_eq!(translate(b"ATGGCC"), "MA");
        assert_eq!(translate(b"AUGGCC"), "MA");
    }

    #[test]
    fn trailing_bases_dropped() {
        assert_eq!(translate(b"ATGGC"), "M");
        assert_eq!(translate(b"AT"), "");
        assert_eq!(translate(b""), "");
    }

    #[test]
    fn stops_do_not_terminate() {
        // TAA, TAG, TGA all emit '*' and translation continues
        assert_eq!(translate(b"ATGTAAATG"), "M*M");
        assert_eq!(translate(b"TAGTGA"), "**");
    }

    #[test]
    fn u_and_t_are_equivalent() {
        assert_eq!(translate(b"TTTTGG"), translate(b"UUUUGG"));
    }

    proptest! {
        #[test]
        fn output_length_is_floor_len_over_3(
            s in prop::collection::vec(
                prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
                0..200,
            )
        ) {
            prop_assert_eq!(translate(&s).len(), s.len() / 3);
        }
    }
}
