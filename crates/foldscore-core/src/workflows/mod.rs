//! # Workflows Module
//!
//! The public entry points of the library. Each workflow ties normalization,
//! feature extraction, scoring and energy-path synthesis together into a single
//! call.
//!
//! - **Prediction** ([`predict`]) - one raw sequence in, one [`predict::PredictionResult`] out
//! - **Batch** ([`batch`]) - many independent predictions, in parallel when the
//!   `parallel` feature is enabled, with progress reporting

pub mod batch;
pub mod predict;
