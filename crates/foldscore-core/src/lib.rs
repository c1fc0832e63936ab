//! # FoldScore Core Library
//!
//! Heuristic protein sequence analysis: a raw amino-acid sequence goes in, and a
//! record of biochemical descriptors, a composite folding stability score and a
//! synthetic folding energy path comes out.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split throughout:
//!
//! - **[`core`]: The Foundation.** Read-only residue property tables, sequence
//!   normalization and validation, the deterministic feature extractors and the
//!   injected physicochemical analyzer.
//!
//! - **[`engine`]: The Logic Core.** Configuration, the seedable noise source, the
//!   stability scorer, energy-path synthesis and SVG rendering.
//!
//! - **[`workflows`]: The Public API.** [`workflows::predict::predict`] runs the full
//!   pipeline on one sequence and never fails; [`workflows::batch::predict_batch`]
//!   runs many independent predictions with progress reporting.
//!
//! ```no_run
//! use foldscore::engine::config::PredictionConfig;
//! use foldscore::workflows::predict::Predictor;
//!
//! let predictor = Predictor::new(PredictionConfig::seeded(42));
//! let result = predictor.predict("MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ");
//! assert!(result.error.is_none());
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
