use super::{AnalyzerError, PhysicochemicalAnalyzer, PhysicochemicalSummary};
use crate::core::residues::AminoAcid;
use crate::core::sequence::CleanedSequence;

const WATER_MASS: f64 = 18.01528;

// Average free amino-acid masses in daltons, indexed by `AminoAcid::index`.
#[rustfmt::skip]
const RESIDUE_MASSES: [f64; 20] = [
    89.0932,  // A
    121.1582, // C
    133.1027, // D
    147.1293, // E
    165.1891, // F
    75.0666,  // G
    155.1546, // H
    131.1729, // I
    146.1876, // K
    131.1729, // L
    149.2113, // M
    132.1179, // N
    115.1305, // P
    146.1445, // Q
    174.201,  // R
    105.0926, // S
    119.1192, // T
    117.1463, // V
    204.2252, // W
    181.1885, // Y
];

// Guruprasad dipeptide instability weight values, DIWV[first][second].
#[rustfmt::skip]
const DIWV: [[f64; 20]; 20] = [
    //         A       C       D       E       F       G       H       I       K       L       M       N       P       Q       R       S       T       V       W       Y
    /* A */ [   1.0,  44.94,  -7.49,    1.0,    1.0,    1.0,  -7.49,    1.0,    1.0,    1.0,    1.0,    1.0,  20.26,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0],
    /* C */ [   1.0,    1.0,  20.26,    1.0,    1.0,    1.0,   33.6,    1.0,    1.0,  20.26,   33.6,    1.0,  20.26,  -6.54,    1.0,    1.0,   33.6,  -6.54,  24.68,    1.0],
    /* D */ [   1.0,    1.0,    1.0,    1.0,  -6.54,    1.0,    1.0,    1.0,  -7.49,    1.0,    1.0,    1.0,    1.0,    1.0,  -6.54,  20.26, -14.03,    1.0,    1.0,    1.0],
    /* E */ [   1.0,  44.94,  20.26,   33.6,    1.0,    1.0,  -6.54,  20.26,    1.0,    1.0,    1.0,    1.0,  20.26,  20.26,    1.0,  20.26,    1.0,    1.0, -14.03,    1.0],
    /* F */ [   1.0,    1.0,  13.34,    1.0,    1.0,    1.0,    1.0,    1.0, -14.03,    1.0,    1.0,    1.0,  20.26,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0, 33.601],
    /* G */ [ -7.49,    1.0,    1.0,  -6.54,    1.0,  13.34,    1.0,  -7.49,  -7.49,    1.0,    1.0,  -7.49,    1.0,    1.0,    1.0,    1.0,  -7.49,    1.0,  13.34,  -7.49],
    /* H */ [   1.0,    1.0,    1.0,    1.0,  -9.37,  -9.37,    1.0,  44.94,  24.68,    1.0,    1.0,  24.68,  -1.88,    1.0,    1.0,    1.0,  -6.54,    1.0,  -1.88,  44.94],
    /* I */ [   1.0,    1.0,    1.0,  44.94,    1.0,    1.0,  13.34,    1.0,  -7.49,  20.26,    1.0,    1.0,  -1.88,    1.0,    1.0,    1.0,    1.0,  -7.49,    1.0,    1.0],
    /* K */ [   1.0,    1.0,    1.0,    1.0,    1.0,  -7.49,    1.0,  -7.49,    1.0,  -7.49,   33.6,    1.0,  -6.54,  24.64,   33.6,    1.0,    1.0,  -7.49,    1.0,    1.0],
    /* L */ [   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,  -7.49,    1.0,    1.0,    1.0,  20.26,   33.6,  20.26,    1.0,    1.0,    1.0,  24.68,    1.0],
    /* M */ [ 13.34,    1.0,    1.0,    1.0,    1.0,    1.0,  58.28,    1.0,    1.0,    1.0,  -1.88,    1.0,  44.94,  -6.54,  -6.54,  44.94,  -1.88,    1.0,    1.0,  24.68],
    /* N */ [   1.0,  -1.88,    1.0,    1.0, -14.03, -14.03,    1.0,  44.94,  24.68,    1.0,    1.0,    1.0,  -1.88,  -6.54,    1.0,    1.0,  -7.49,    1.0,  -9.37,    1.0],
    /* P */ [ 20.26,  -6.54,  -6.54,  18.38,  20.26,    1.0,    1.0,    1.0,    1.0,    1.0,  -6.54,    1.0,  20.26,  20.26,  -6.54,  20.26,    1.0,  20.26,  -1.88,    1.0],
    /* Q */ [   1.0,  -6.54,  20.26,  20.26,  -6.54,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,  20.26,  20.26,    1.0,  44.94,    1.0,  -6.54,    1.0,  -6.54],
    /* R */ [   1.0,    1.0,    1.0,    1.0,    1.0,  -7.49,  20.26,    1.0,    1.0,    1.0,    1.0,  13.34,  20.26,  20.26,  58.28,  44.94,    1.0,    1.0,  58.28,  -6.54],
    /* S */ [   1.0,   33.6,    1.0,  20.26,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,  44.94,  20.26,  20.26,  20.26,    1.0,    1.0,    1.0,    1.0],
    /* T */ [   1.0,    1.0,    1.0,  20.26,  13.34,  -7.49,    1.0,    1.0,    1.0,    1.0,    1.0, -14.03,    1.0,  -6.54,    1.0,    1.0,    1.0,    1.0, -14.03,    1.0],
    /* V */ [   1.0,    1.0, -14.03,    1.0,    1.0,  -7.49,    1.0,    1.0,  -1.88,    1.0,    1.0,    1.0,  20.26,    1.0,    1.0,    1.0,  -7.49,    1.0,    1.0,  -6.54],
    /* W */ [-14.03,    1.0,    1.0,    1.0,    1.0,  -9.37,  24.68,    1.0,    1.0,  13.34,  24.68,  13.34,    1.0,    1.0,    1.0,    1.0, -14.03,  -7.49,    1.0,    1.0],
    /* Y */ [ 24.68,    1.0,  24.68,  -6.54,    1.0,  -7.49,  13.34,    1.0,    1.0,    1.0,  44.94,    1.0,  13.34,    1.0, -15.91,    1.0,  -7.49,    1.0,  -9.37,  13.34],
];

/// ProtParam-style sequence statistics computed from built-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtParamAnalyzer;

impl ProtParamAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn residues(sequence: &CleanedSequence) -> Result<Vec<AminoAcid>, AnalyzerError> {
        if sequence.is_empty() {
            return Err(AnalyzerError::EmptySequence);
        }
        sequence
            .codes()
            .map(|code| AminoAcid::from_code(code).ok_or(AnalyzerError::UnsupportedResidue(code)))
            .collect()
    }

    /// Average molecular weight of the chain, accounting for peptide-bond water loss.
    pub fn molecular_weight(residues: &[AminoAcid]) -> f64 {
        if residues.is_empty() {
            return 0.0;
        }
        let free_mass: f64 = residues.iter().map(|aa| RESIDUE_MASSES[aa.index()]).sum();
        free_mass - (residues.len() as f64 - 1.0) * WATER_MASS
    }

    /// Fraction of aromatic residues (F, W, Y).
    pub fn aromaticity(residues: &[AminoAcid]) -> f64 {
        if residues.is_empty() {
            return 0.0;
        }
        let aromatic = residues
            .iter()
            .filter(|aa| {
                matches!(
                    aa,
                    AminoAcid::Phenylalanine | AminoAcid::Tryptophan | AminoAcid::Tyrosine
                )
            })
            .count();
        aromatic as f64 / residues.len() as f64
    }

    /// Guruprasad instability index; values above 40 suggest an unstable protein.
    pub fn instability_index(residues: &[AminoAcid]) -> f64 {
        if residues.is_empty() {
            return 0.0;
        }
        let score: f64 = residues
            .windows(2)
            .map(|pair| DIWV[pair[0].index()][pair[1].index()])
            .sum();
        10.0 / residues.len() as f64 * score
    }
}

impl PhysicochemicalAnalyzer for ProtParamAnalyzer {
    fn analyze(&self, sequence: &CleanedSequence) -> Result<PhysicochemicalSummary, AnalyzerError> {
        let residues = Self::residues(sequence)?;
        Ok(PhysicochemicalSummary {
            instability_index: Self::instability_index(&residues),
            aromaticity: Self::aromaticity(&residues),
            molecular_weight: Self::molecular_weight(&residues),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::clean;

    const TOLERANCE: f64 = 1e-6;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    const GFP: &str = "MSKGEELFTGVVPILVELDGDVNGHKFSVSGEGEGDATYGKLTLKFICTTGKLPVPWPTLVTTFSYGVQCFSRYPDHMKQHDFFKSAMPEGYVQERTIFFKDDGNYKTRAEVKFEGDTLVNRIELKGIDFKEDGNILGHKLEYNYNSHNVYIMADKQKNGIKVNFKIRHNIEDGSVQLADHYQQNTPIGDGPVLLPDNHYLSTQSALSKDPNEKRDHMVLLEFVTAAGITHGMDELYK";

    #[test]
    fn homopolymer_of_alanine_has_known_statistics() {
        let summary = ProtParamAnalyzer.analyze(&clean("AAAAA")).unwrap();
        assert!(f64_approx_equal(summary.molecular_weight, 5.0 * 89.0932 - 4.0 * WATER_MASS));
        assert!(f64_approx_equal(summary.instability_index, 8.0));
        assert_eq!(summary.aromaticity, 0.0);
    }

    #[test]
    fn aromaticity_counts_phenylalanine_tryptophan_and_tyrosine() {
        let summary = ProtParamAnalyzer.analyze(&clean("FWYAA")).unwrap();
        assert!(f64_approx_equal(summary.aromaticity, 0.6));
    }

    #[test]
    fn instability_index_uses_ordered_dipeptides() {
        let forward = ProtParamAnalyzer::instability_index(&[AminoAcid::Alanine, AminoAcid::Cysteine]);
        let reverse = ProtParamAnalyzer::instability_index(&[AminoAcid::Cysteine, AminoAcid::Alanine]);
        assert!(f64_approx_equal(forward, 10.0 / 2.0 * 44.94));
        assert!(f64_approx_equal(reverse, 10.0 / 2.0 * 1.0));
    }

    #[test]
    fn green_fluorescent_protein_weighs_about_27_kilodaltons() {
        let summary = ProtParamAnalyzer.analyze(&clean(GFP)).unwrap();
        assert!(summary.molecular_weight > 26_500.0 && summary.molecular_weight < 27_200.0);
        assert!(summary.aromaticity > 0.0 && summary.aromaticity < 0.2);
        assert!(summary.instability_index.is_finite());
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = ProtParamAnalyzer.analyze(&clean("")).unwrap_err();
        assert!(matches!(err, AnalyzerError::EmptySequence));
    }

    #[test]
    fn non_canonical_residue_is_rejected() {
        let err = ProtParamAnalyzer.analyze(&clean("ACDXE")).unwrap_err();
        assert!(matches!(err, AnalyzerError::UnsupportedResidue('X')));
    }
}
