use crate::alphabets::protein;
use crate::error::{AnalysisError, AnalysisResult};
use crate::seq::SeqType;

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A validated protein sequence: the 20 standard one-letter codes, uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
    pub fn new(bytes: Vec<u8>) -> AnalysisResult<Self> {
        if let Some((pos, b)) = protein::alphabet().find_invalid(&bytes) {
            return Err(AnalysisError::InvalidAlphabet {
                seq_type: SeqType::Protein,
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

    fn aa_counts_20(&self) -> [u32; 20] {
        let mut counts = [0u32; 20];
        for &b in &self.bytes {
            let idx = AA20_INDEX[b as usize];
            if idx >= 0 {
                counts[idx as usize] += 1;
            }
        }
        counts
    }

    /// Per-residue counts; residues that never occur are omitted.
    pub fn residue_counts(&self) -> BTreeMap<char, usize> {
        let counts = self.aa_counts_20();
        let mut out = BTreeMap::new();
        for (i, &c) in counts.iter().enumerate() {
            if c > 0 {
                out.insert(AA20[i] as char, c as usize);
            }
        }
        out
    }

    /// Average molecular weight: sum of residue masses plus one water mass
    /// for the peptide-bond condensation. 0 for the empty sequence.
    pub fn molecular_weight(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let counts = self.aa_counts_20();
        let residues: f64 = counts
            .iter()
            .zip(AA20_MASS_AVG.iter())
            .map(|(&c, &mass)| c as f64 * mass)
            .sum();
        residues + WATER_MASS
    }

    /// Net charge at the given pH from the Henderson-Hasselbalch fractional
    /// charge of each ionizable group (termini plus D/E/C/Y/H/K/R side
    /// chains).
    pub fn net_charge(&self, ph: f64) -> f64 {
        let counts = self.aa_counts_20();
        let mut total = basic_charge(ph, PKA_NTERM) + acidic_charge(ph, PKA_CTERM);

        total += counts[idx('R')] as f64 * basic_charge(ph, PKA_R);
        total += counts[idx('K')] as f64 * basic_charge(ph, PKA_K);
        total += counts[idx('H')] as f64 * basic_charge(ph, PKA_H);
        total += counts[idx('D')] as f64 * acidic_charge(ph, PKA_D);
        total += counts[idx('E')] as f64 * acidic_charge(ph, PKA_E);
        total += counts[idx('C')] as f64 * acidic_charge(ph, PKA_C);
        total += counts[idx('Y')] as f64 * acidic_charge(ph, PKA_Y);

        total
    }

    /// Isoelectric point: bisection over pH in [0, 14]. Net charge is
    /// monotonically decreasing in pH, so 60 halvings pin the root well below
    /// any rendered precision.
    pub fn isoelectric_point(&self) -> f64 {
        let mut low = 0.0f64;
        let mut high = 14.0f64;
        for _ in 0..60 {
            let mid = (low + high) / 2.0;
            if self.net_charge(mid) > 0.0 {
                low = mid;
            } else {
                high = mid;
            }
        }
        (low + high) / 2.0
    }
}

const AA20: [u8; 20] = *b"ARNDCEQGHILKMFPSTWYV";

static AA20_INDEX: LazyLock<[i8; 256]> = LazyLock::new(|| {
    let mut map = [-1i8; 256];
    for (idx, &b) in AA20.iter().enumerate() {
        map[b as usize] = idx as i8;
    }
    map
});

/// Average residue masses (monomer minus water), indexed like `AA20`.
const AA20_MASS_AVG: [f64; 20] = [
    71.0788,  // A
    156.1875, // R
    114.1038, // N
    115.0886, // D
    103.1388, // C
    129.1155, // E
    128.1307, // Q
    57.0519,  // G
    137.1411, // H
    113.1594, // I
    113.1594, // L
    128.1741, // K
    131.1926, // M
    147.1766, // F
    97.1167,  // P
    87.0782,  // S
    101.1051, // T
    186.2132, // W
    163.1760, // Y
    99.1326,  // V
];

const WATER_MASS: f64 = 18.01528;

// Fixed pKa constants for the ionizable groups.
const PKA_NTERM: f64 = 9.69;
const PKA_CTERM: f64 = 2.34;
const PKA_C: f64 = 8.33;
const PKA_D: f64 = 3.86;
const PKA_E: f64 = 4.25;
const PKA_H: f64 = 6.00;
const PKA_K: f64 = 10.53;
const PKA_R: f64 = 12.48;
const PKA_Y: f64 = 10.07;

#[inline]
fn basic_charge(ph: f64, pka: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf(ph - pka))
}

#[inline]
fn acidic_charge(ph: f64, pka: f64) -> f64 {
    -1.0 / (1.0 + 10f64.powf(pka - ph))
}

#[inline]
fn idx(aa: char) -> usize {
    AA20_INDEX[aa as usize] as usize
}
