//! # Engine Module
//!
//! The scoring and synthesis layer. Everything here operates on an already
//! normalized [`CleanedSequence`](crate::core::sequence::CleanedSequence) and the
//! read-only tables in [`core`](crate::core).
//!
//! - **Configuration** ([`config`]) - factor weights, perturbation amplitude, noise mode and plot settings
//! - **Noise** ([`noise`]) - per-call seedable source for the bounded random terms
//! - **Scoring** ([`scoring`]) - the six-factor stability score
//! - **Energy Path** ([`energy_path`]) - synthetic per-position energy curve and stable positions
//! - **Rendering** ([`plot`]) - SVG chart of the energy path
//! - **Progress** ([`progress`]) - callback-based progress reporting
//! - **Errors** ([`error`]) - engine-level error aggregation
//!
//! No module here holds global mutable state. Randomness always flows through an
//! explicit [`noise::NoiseSource`], so two concurrent predictions never interfere.

pub mod config;
pub mod energy_path;
pub mod error;
pub mod noise;
pub mod plot;
pub mod progress;
pub mod scoring;
