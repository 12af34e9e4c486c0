//! Multi-point sensitivity sweeps over the comparison evaluator.
//!
//! A sweep varies one or more binding parameters over generated ranges while
//! the rest stay at a base candidate, and records the comparison outcome at
//! every point of the resulting grid. Points are evaluated one after another
//! on the calling thread; callers wanting a worker pool or cancellation drive
//! [`evaluate_point`] themselves.
//!
//! ```ignore
//! use trapsweep_core::sweep::{SweepAxis, SweepConfig, SweepMetric, sweep_evaluate};
//!
//! let config = SweepConfig {
//!     base,
//!     axes: vec![SweepAxis::new(BindingParam::Ku, ku_values)],
//! };
//! let results = sweep_evaluate(&evaluator, &config)?;
//! let rmse = results.metric_grid(SweepMetric::Rmse);
//! ```

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
