use phf::{Set, phf_set};
use serde::Serialize;

static POLAR: Set<char> = phf_set! { 'N', 'Q', 'S', 'T', 'Y' };
static NONPOLAR: Set<char> = phf_set! { 'A', 'G', 'I', 'L', 'M', 'F', 'P', 'W', 'V' };
static ACIDIC: Set<char> = phf_set! { 'D', 'E' };
static BASIC: Set<char> = phf_set! { 'R', 'H', 'K' };
static AROMATIC: Set<char> = phf_set! { 'F', 'W', 'Y' };
static SULFUR: Set<char> = phf_set! { 'C', 'M' };
static SMALL: Set<char> = phf_set! { 'A', 'G', 'S', 'V' };
static LARGE: Set<char> = phf_set! { 'F', 'W', 'Y' };

pub static HELIX_FAVORING: Set<char> = phf_set! { 'A', 'E', 'L', 'K', 'M', 'Q' };
pub static SHEET_FAVORING: Set<char> = phf_set! { 'V', 'I', 'T', 'Y', 'F', 'W' };
pub static TURN_FAVORING: Set<char> = phf_set! { 'P', 'G', 'N', 'D', 'S' };

/// Physicochemical residue classes. Membership overlaps, so one residue may
/// count toward several categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidueCategory {
    Polar,
    Nonpolar,
    Acidic,
    Basic,
    Aromatic,
    Sulfur,
    Small,
    Large,
}

impl ResidueCategory {
    pub const ALL: [ResidueCategory; 8] = [
        ResidueCategory::Polar,
        ResidueCategory::Nonpolar,
        ResidueCategory::Acidic,
        ResidueCategory::Basic,
        ResidueCategory::Aromatic,
        ResidueCategory::Sulfur,
        ResidueCategory::Small,
        ResidueCategory::Large,
    ];

    pub fn members(&self) -> &'static Set<char> {
        match self {
            Self::Polar => &POLAR,
            Self::Nonpolar => &NONPOLAR,
            Self::Acidic => &ACIDIC,
            Self::Basic => &BASIC,
            Self::Aromatic => &AROMATIC,
            Self::Sulfur => &SULFUR,
            Self::Small => &SMALL,
            Self::Large => &LARGE,
        }
    }

    #[inline]
    pub fn contains(&self, code: char) -> bool {
        self.members().contains(&code)
    }
}
