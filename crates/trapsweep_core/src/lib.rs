//! Sensitivity analysis for drug-channel binding model comparison
//!
//! This crate builds the parameter sampling grids used to compare a
//! state-dependent trapping model of hERG drug binding against a simplified
//! conductance-scaling model. It supports:
//! - Regime-aware sampling ranges anchored on a drug or on the whole population
//! - Linear or log10 spacing chosen per binding parameter
//! - Gap filling between regime blocks
//! - Scored model comparisons through an external simulation controller
//! - Sequential multi-point sweeps with NaN sentinels for divergent simulations
//!
//! The reference data (binding library and category thresholds) is built once
//! by the caller and passed by reference into every builder and evaluator.
//! Nothing here spawns threads.
//!
//! ```ignore
//! use trapsweep_core::{BindingParam, RangeBuilder, fill_gaps};
//!
//! let builder = RangeBuilder::new(&library, &thresholds);
//! let grid = builder.population_range(BindingParam::Ku, 10)?;
//! let grid = fill_gaps(&grid, 3, BindingParam::Ku)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod comparison;
pub mod error;
pub mod policy;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{DrugRangeOptions, OwnValueBlock, RangeBuilder, fill_gaps};
pub use comparison::{ComparisonEvaluator, ComparisonOutcome, EvaluationOptions, ModelComparison};
pub use error::{EvaluationError, RangeError, SimulationError, SweepError};
pub use model::{BindingLibrary, BindingParam, CandidateParameters, CategoryThresholds};
