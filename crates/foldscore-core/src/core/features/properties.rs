use crate::core::residues::tables;
use crate::core::sequence::CleanedSequence;

fn mean_of(sequence: &CleanedSequence, scale: fn(char) -> f64, empty: f64) -> f64 {
    let length = sequence.len();
    if length == 0 {
        return empty;
    }
    sequence.codes().map(scale).sum::<f64>() / length as f64
}

/// Mean Kyte-Doolittle hydropathy.
pub fn hydrophobicity(sequence: &CleanedSequence) -> f64 {
    mean_of(sequence, tables::hydrophobicity, 0.0)
}

/// Magnitude of the net side-chain charge, normalized by length.
pub fn charge_balance(sequence: &CleanedSequence) -> f64 {
    let length = sequence.len();
    if length == 0 {
        return 0.0;
    }
    let net_charge: f64 = sequence.codes().map(tables::charge).sum();
    net_charge.abs() / length as f64
}

pub fn average_volume(sequence: &CleanedSequence) -> f64 {
    mean_of(sequence, tables::volume, 0.0)
}

pub fn flexibility(sequence: &CleanedSequence) -> f64 {
    mean_of(sequence, tables::flexibility, 0.0)
}

pub fn isoelectric_point(sequence: &CleanedSequence) -> f64 {
    mean_of(
        sequence,
        tables::isoelectric_point,
        tables::DEFAULT_ISOELECTRIC_POINT,
    )
}
