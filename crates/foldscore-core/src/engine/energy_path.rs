use super::noise::NoiseSource;
use crate::core::residues::tables;
use crate::core::sequence::CleanedSequence;
use serde::Serialize;
use tracing::{debug, instrument};

/// Only the leading residues of a sequence contribute to the path.
pub const MAX_PATH_POSITIONS: usize = 100;
pub const STABLE_ENERGY_THRESHOLD: f64 = -0.5;
pub const HYDROPHOBIC_ENERGY_FACTOR: f64 = -0.5;
pub const LOCAL_STRUCTURE_AMPLITUDE: f64 = 0.2;
pub const LOCAL_STRUCTURE_FREQUENCY: f64 = 0.3;
pub const ENERGY_NOISE_AMPLITUDE: f64 = 0.1;

/// Synthetic per-position folding energy curve with its stable positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnergyPath {
    pub energies: Vec<f64>,
    /// Zero-based positions whose energy falls below [`STABLE_ENERGY_THRESHOLD`].
    pub stable_positions: Vec<usize>,
}

impl EnergyPath {
    pub fn from_energies(energies: Vec<f64>) -> Self {
        let stable_positions = energies
            .iter()
            .enumerate()
            .filter(|(_, e)| **e < STABLE_ENERGY_THRESHOLD)
            .map(|(i, _)| i)
            .collect();
        Self {
            energies,
            stable_positions,
        }
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.energies.iter().copied().enumerate()
    }

    pub fn stable_points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.stable_positions
            .iter()
            .map(move |&i| (i, self.energies[i]))
    }
}

/// Deterministic part of the energy at `position` for a residue of hydropathy `h`.
pub fn baseline_energy(position: usize, hydrophobicity: f64) -> f64 {
    HYDROPHOBIC_ENERGY_FACTOR * hydrophobicity
        + LOCAL_STRUCTURE_AMPLITUDE * (LOCAL_STRUCTURE_FREQUENCY * position as f64).sin()
}

#[instrument(level = "debug", skip_all, fields(length = sequence.len()))]
pub fn synthesize(sequence: &CleanedSequence, noise: &mut NoiseSource) -> EnergyPath {
    let energies: Vec<f64> = sequence
        .prefix(MAX_PATH_POSITIONS)
        .enumerate()
        .map(|(i, code)| {
            baseline_energy(i, tables::hydrophobicity(code))
                + noise.symmetric(ENERGY_NOISE_AMPLITUDE)
        })
        .collect();

    let path = EnergyPath::from_energies(energies);
    debug!(
        positions = path.len(),
        stable = path.stable_positions.len(),
        "Energy path synthesized."
    );
    path
}
