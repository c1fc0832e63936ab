//! # Residue Tables
//!
//! Immutable per-residue knowledge used by every stage of the analysis:
//!
//! - [`amino_acid`] - The canonical 20-letter alphabet as a typed enum
//! - [`tables`] - Numeric property scales (hydropathy, charge, volume, flexibility,
//!   isoelectric point, disorder/order and thermal affinities)
//! - [`categories`] - Overlapping residue classes and secondary-structure preference sets
//!
//! All tables are compile-time `phf` maps. They are process-wide, read-only and
//! need no initialization, so concurrent predictions share them freely.

pub mod amino_acid;
pub mod categories;
pub mod tables;

pub use amino_acid::{AminoAcid, CANONICAL_CODES};
pub use categories::ResidueCategory;
