//! Per-residue property scales keyed by one-letter code.
//!
//! Every lookup function is total: codes missing from a table resolve to the
//! documented default for that scale instead of failing.

use phf::{Map, phf_map};

pub const DEFAULT_ISOELECTRIC_POINT: f64 = 6.0;
pub const DEFAULT_THERMO_WEIGHT: f64 = 1.0;

// Kyte-Doolittle hydropathy.
#[rustfmt::skip]
pub static HYDROPHOBICITY: Map<char, f64> = phf_map! {
    'A' => 1.8,  'R' => -4.5, 'N' => -3.5, 'D' => -3.5, 'C' => 2.5,
    'Q' => -3.5, 'E' => -3.5, 'G' => -0.4, 'H' => -3.2, 'I' => 4.5,
    'L' => 3.8,  'K' => -3.9, 'M' => 1.9,  'F' => 2.8,  'P' => -1.6,
    'S' => -0.8, 'T' => -0.7, 'W' => -0.9, 'Y' => -1.3, 'V' => 4.2,
};

// Net side-chain charge at physiological pH; histidine is half-protonated.
#[rustfmt::skip]
pub static CHARGE: Map<char, f64> = phf_map! {
    'R' => 1.0, 'K' => 1.0, 'D' => -1.0, 'E' => -1.0, 'H' => 0.5,
};

// Residue volume in cubic angstroms.
#[rustfmt::skip]
pub static VOLUME: Map<char, f64> = phf_map! {
    'A' => 88.6,  'R' => 173.4, 'N' => 114.1, 'D' => 111.1, 'C' => 108.5,
    'Q' => 143.8, 'E' => 138.4, 'G' => 60.1,  'H' => 153.2, 'I' => 166.7,
    'L' => 166.7, 'K' => 168.6, 'M' => 162.9, 'F' => 189.9, 'P' => 112.7,
    'S' => 89.0,  'T' => 116.1, 'W' => 227.8, 'Y' => 193.6, 'V' => 140.0,
};

#[rustfmt::skip]
pub static FLEXIBILITY: Map<char, f64> = phf_map! {
    'A' => 0.360, 'R' => 0.529, 'N' => 0.463, 'D' => 0.511, 'C' => 0.346,
    'Q' => 0.493, 'E' => 0.497, 'G' => 0.544, 'H' => 0.323, 'I' => 0.462,
    'L' => 0.365, 'K' => 0.466, 'M' => 0.295, 'F' => 0.314, 'P' => 0.509,
    'S' => 0.507, 'T' => 0.444, 'W' => 0.305, 'Y' => 0.420, 'V' => 0.386,
};

#[rustfmt::skip]
pub static ISOELECTRIC_POINT: Map<char, f64> = phf_map! {
    'A' => 6.0, 'R' => 10.8, 'N' => 5.4, 'D' => 2.8, 'C' => 5.1,
    'Q' => 5.7, 'E' => 3.2,  'G' => 6.0, 'H' => 7.6, 'I' => 6.0,
    'L' => 6.0, 'K' => 9.7,  'M' => 5.7, 'F' => 5.5, 'P' => 6.3,
    'S' => 5.7, 'T' => 5.6,  'W' => 5.9, 'Y' => 5.7, 'V' => 6.0,
};

#[rustfmt::skip]
pub static DISORDER_AFFINITY: Map<char, f64> = phf_map! {
    'P' => 0.8, 'G' => 0.6, 'S' => 0.4, 'N' => 0.4, 'Q' => 0.4,
};

#[rustfmt::skip]
pub static ORDER_AFFINITY: Map<char, f64> = phf_map! {
    'C' => 0.8, 'W' => 0.6, 'F' => 0.6, 'Y' => 0.5, 'I' => 0.5, 'L' => 0.5, 'V' => 0.5,
};

#[rustfmt::skip]
pub static THERMOSTABLE_AFFINITY: Map<char, f64> = phf_map! {
    'C' => 2.0, 'W' => 1.5, 'F' => 1.2, 'Y' => 1.1, 'I' => 1.1, 'L' => 1.1, 'V' => 1.1,
};

#[rustfmt::skip]
pub static THERMOLABILE_AFFINITY: Map<char, f64> = phf_map! {
    'G' => 0.5, 'S' => 0.7, 'N' => 0.8, 'Q' => 0.8, 'D' => 0.8, 'E' => 0.8,
};

#[inline]
fn lookup(table: &Map<char, f64>, code: char, default: f64) -> f64 {
    table.get(&code).copied().unwrap_or(default)
}

#[inline]
pub fn hydrophobicity(code: char) -> f64 {
    lookup(&HYDROPHOBICITY, code, 0.0)
}

#[inline]
pub fn charge(code: char) -> f64 {
    lookup(&CHARGE, code, 0.0)
}

#[inline]
pub fn volume(code: char) -> f64 {
    lookup(&VOLUME, code, 0.0)
}

#[inline]
pub fn flexibility(code: char) -> f64 {
    lookup(&FLEXIBILITY, code, 0.0)
}

#[inline]
pub fn isoelectric_point(code: char) -> f64 {
    lookup(&ISOELECTRIC_POINT, code, DEFAULT_ISOELECTRIC_POINT)
}

#[inline]
pub fn disorder_affinity(code: char) -> f64 {
    lookup(&DISORDER_AFFINITY, code, 0.0)
}

#[inline]
pub fn order_affinity(code: char) -> f64 {
    lookup(&ORDER_AFFINITY, code, 0.0)
}

#[inline]
pub fn thermostable_affinity(code: char) -> f64 {
    lookup(&THERMOSTABLE_AFFINITY, code, DEFAULT_THERMO_WEIGHT)
}

#[inline]
pub fn thermolabile_affinity(code: char) -> f64 {
    lookup(&THERMOLABILE_AFFINITY, code, DEFAULT_THERMO_WEIGHT)
}
