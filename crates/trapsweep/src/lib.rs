//! Command-line front end for trapsweep_core
//!
//! Loads the reference binding library and category thresholds (bundled or
//! from a YAML file) and prints generated sampling grids as JSON. The `batch`
//! module runs comparison sweeps on a worker pool for callers that supply a
//! simulation controller.

pub mod batch;
pub mod commands;
mod logging;
pub mod reference;

pub use batch::{BatchError, SweepProgress, run_parallel};
pub use logging::init_logging;
pub use reference::{DrugRecord, ReferenceData, ReferenceError};
