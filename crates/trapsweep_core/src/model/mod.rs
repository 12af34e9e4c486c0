mod library;
mod param;
mod thresholds;

pub use library::{BindingLibrary, CandidateParameters, ParameterSet};
pub use param::{BindingParam, Regime};
pub use thresholds::CategoryThresholds;
