use super::round_to;
use crate::core::residues::categories::{HELIX_FAVORING, SHEET_FAVORING, TURN_FAVORING};
use crate::core::residues::tables;
use crate::core::sequence::CleanedSequence;
use phf::Set;
use serde::Serialize;

pub const NEUTRAL_DISORDER: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SecondaryStructureTendency {
    pub helix_tendency: f64,
    pub sheet_tendency: f64,
    pub turn_tendency: f64,
}

fn percentage_in(sequence: &CleanedSequence, set: &Set<char>) -> f64 {
    let total = sequence.len();
    if total == 0 {
        return 0.0;
    }
    let count = sequence.codes().filter(|c| set.contains(c)).count();
    round_to(count as f64 / total as f64 * 100.0, 2)
}

/// Percentages of helix-, sheet- and turn-favoring residues, each independent.
pub fn secondary_structure_tendency(sequence: &CleanedSequence) -> SecondaryStructureTendency {
    SecondaryStructureTendency {
        helix_tendency: percentage_in(sequence, &HELIX_FAVORING),
        sheet_tendency: percentage_in(sequence, &SHEET_FAVORING),
        turn_tendency: percentage_in(sequence, &TURN_FAVORING),
    }
}

/// Share of disorder-promoting weight among disorder- and order-promoting weight.
pub fn disorder_tendency(sequence: &CleanedSequence) -> f64 {
    let disorder: f64 = sequence.codes().map(tables::disorder_affinity).sum();
    let order: f64 = sequence.codes().map(tables::order_affinity).sum();
    let total = disorder + order;
    if total > 0.0 {
        round_to(disorder / total, 3)
    } else {
        NEUTRAL_DISORDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::clean;

    #[test]
    fn tendencies_are_independent_percentages() {
        let tendency = secondary_structure_tendency(&clean("AEVPG"));
        assert_eq!(tendency.helix_tendency, 40.0);
        assert_eq!(tendency.sheet_tendency, 20.0);
        assert_eq!(tendency.turn_tendency, 40.0);
    }

    #[test]
    fn residues_outside_all_sets_contribute_nothing() {
        let tendency = secondary_structure_tendency(&clean("CCHHR"));
        assert_eq!(tendency, SecondaryStructureTendency::default());
    }

    #[test]
    fn empty_sequence_has_zero_tendencies() {
        assert_eq!(
            secondary_structure_tendency(&clean("")),
            SecondaryStructureTendency::default()
        );
    }

    #[test]
    fn disorder_tendency_is_weighted_ratio() {
        // P: 0.8 disorder, C: 0.8 order.
        assert_eq!(disorder_tendency(&clean("PC")), 0.5);
        assert_eq!(disorder_tendency(&clean("PPPPP")), 1.0);
        assert_eq!(disorder_tendency(&clean("WWWWW")), 0.0);
        // G 0.6 vs V 0.5
        assert_eq!(disorder_tendency(&clean("GV")), 0.545);
    }

    #[test]
    fn disorder_tendency_defaults_to_neutral_without_weighted_residues() {
        assert_eq!(disorder_tendency(&clean("")), NEUTRAL_DISORDER);
        assert_eq!(disorder_tendency(&clean("AAAKK")), NEUTRAL_DISORDER);
    }
}
