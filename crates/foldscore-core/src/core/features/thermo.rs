use super::round_to;
use crate::core::residues::tables;
use crate::core::sequence::CleanedSequence;
use serde::Serialize;

pub const NEUTRAL_THERMOSTABILITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermostabilityIndicators {
    pub thermostability_score: f64,
    pub cysteine_content: f64,
    pub potential_disulfide_bonds: usize,
}

impl Default for ThermostabilityIndicators {
    fn default() -> Self {
        Self {
            thermostability_score: NEUTRAL_THERMOSTABILITY,
            cysteine_content: 0.0,
            potential_disulfide_bonds: 0,
        }
    }
}

pub fn thermostability_indicators(sequence: &CleanedSequence) -> ThermostabilityIndicators {
    let stable: f64 = sequence.codes().map(tables::thermostable_affinity).sum();
    let labile: f64 = sequence.codes().map(tables::thermolabile_affinity).sum();
    let total = stable + labile;
    let thermostability_score = if total > 0.0 {
        round_to(stable / total, 3)
    } else {
        NEUTRAL_THERMOSTABILITY
    };

    let length = sequence.len();
    let cysteines = sequence.count('C');
    let cysteine_content = if length > 0 {
        round_to(cysteines as f64 / length as f64 * 100.0, 2)
    } else {
        0.0
    };

    ThermostabilityIndicators {
        thermostability_score,
        cysteine_content,
        potential_disulfide_bonds: cysteines / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::clean;

    #[test]
    fn residues_absent_from_both_tables_are_balanced() {
        let indicators = thermostability_indicators(&clean("AAAAA"));
        assert_eq!(indicators.thermostability_score, 0.5);
        assert_eq!(indicators.cysteine_content, 0.0);
        assert_eq!(indicators.potential_disulfide_bonds, 0);
    }

    #[test]
    fn cysteine_rich_sequences_lean_thermostable() {
        // stable = 2 * 5 = 10, labile = 1 * 5 = 5
        let indicators = thermostability_indicators(&clean("CCCCC"));
        assert_eq!(indicators.thermostability_score, 0.667);
        assert_eq!(indicators.cysteine_content, 100.0);
        assert_eq!(indicators.potential_disulfide_bonds, 2);
    }

    #[test]
    fn thermolabile_residues_lower_the_score() {
        // stable = 5, labile = 4
        let acidic = thermostability_indicators(&clean("EEEEE"));
        assert_eq!(acidic.thermostability_score, 0.556);

        // stable = 1.5 + 1, labile = 1 + 0.5
        let mixed = thermostability_indicators(&clean("WG"));
        assert_eq!(mixed.thermostability_score, 0.625);
    }

    #[test]
    fn disulfide_bonds_use_integer_division() {
        let indicators = thermostability_indicators(&clean("CACAC"));
        assert_eq!(indicators.potential_disulfide_bonds, 1);
        assert_eq!(indicators.cysteine_content, 60.0);
    }

    #[test]
    fn empty_sequence_is_neutral() {
        assert_eq!(
            thermostability_indicators(&clean("")),
            ThermostabilityIndicators::default()
        );
    }
}
