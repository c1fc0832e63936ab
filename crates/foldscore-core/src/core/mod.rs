//! # Core Module
//!
//! Stateless building blocks of the sequence-analysis engine. Nothing in this
//! module holds mutable state or draws random numbers; every function maps an
//! input sequence to a value deterministically.
//!
//! ## Architecture
//!
//! - **Residue Knowledge** ([`residues`]) - The canonical alphabet and immutable per-residue tables
//! - **Input Handling** ([`sequence`]) - Cleaning and validation of raw sequence strings
//! - **Descriptors** ([`features`]) - Composition, property means, structure and thermal tendencies
//! - **Auxiliary Statistics** ([`analyzer`]) - Injectable whole-sequence analyzer with fallback

pub mod analyzer;
pub mod features;
pub mod residues;
pub mod sequence;
