use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,       // A
    Cysteine,      // C
    AsparticAcid,  // D
    GlutamicAcid,  // E
    Phenylalanine, // F
    Glycine,       // G
    Histidine,     // H
    Isoleucine,    // I
    Lysine,        // K
    Leucine,       // L
    Methionine,    // M
    Asparagine,    // N
    Proline,       // P
    Glutamine,     // Q
    Arginine,      // R
    Serine,        // S
    Threonine,     // T
    Valine,        // V
    Tryptophan,    // W
    Tyrosine,      // Y
}

/// The canonical alphabet, in one-letter code order.
pub const CANONICAL_CODES: &str = "ACDEFGHIKLMNPQRSTVWY";

impl AminoAcid {
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Cysteine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
        AminoAcid::Phenylalanine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Lysine,
        AminoAcid::Leucine,
        AminoAcid::Methionine,
        AminoAcid::Asparagine,
        AminoAcid::Proline,
        AminoAcid::Glutamine,
        AminoAcid::Arginine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Valine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Alanine),
            'C' => Some(Self::Cysteine),
            'D' => Some(Self::AsparticAcid),
            'E' => Some(Self::GlutamicAcid),
            'F' => Some(Self::Phenylalanine),
            'G' => Some(Self::Glycine),
            'H' => Some(Self::Histidine),
            'I' => Some(Self::Isoleucine),
            'K' => Some(Self::Lysine),
            'L' => Some(Self::Leucine),
            'M' => Some(Self::Methionine),
            'N' => Some(Self::Asparagine),
            'P' => Some(Self::Proline),
            'Q' => Some(Self::Glutamine),
            'R' => Some(Self::Arginine),
            'S' => Some(Self::Serine),
            'T' => Some(Self::Threonine),
            'V' => Some(Self::Valine),
            'W' => Some(Self::Tryptophan),
            'Y' => Some(Self::Tyrosine),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
        }
    }

    /// Position of this residue in [`AminoAcid::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn code_str(&self) -> &'static str {
        let idx = self.index();
        &CANONICAL_CODES[idx..idx + 1]
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a canonical amino acid code")]
pub struct ParseAminoAcidError(String);

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c.to_ascii_uppercase())
                .ok_or_else(|| ParseAminoAcidError(s.to_string())),
            _ => Err(ParseAminoAcidError(s.to_string())),
        }
    }
}

impl Serialize for AminoAcid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code_str())
    }
}
