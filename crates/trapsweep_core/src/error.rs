use crate::model::{BindingParam, Regime};

/// Errors raised while building or post-processing parameter ranges
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    #[error("unknown binding parameter: {0}")]
    UnknownParameter(String),

    #[error("drug {0:?} not found in the binding library")]
    UnknownDrug(String),

    #[error("drug {0:?} appears more than once in the binding library")]
    DuplicateDrug(String),

    #[error("binding library is empty")]
    EmptyLibrary,

    #[error("no category thresholds defined for {0}")]
    MissingThresholds(BindingParam),

    #[error("invalid thresholds for {param}: low={low}, high={high} (need finite low < high)")]
    InvalidThresholds {
        param: BindingParam,
        low: f64,
        high: f64,
    },

    #[error("{param} value {value} does not fall into any regime")]
    Unpartitioned { param: BindingParam, value: f64 },

    #[error("{group} regime of {param} has no members")]
    EmptyGroup { param: BindingParam, group: Regime },

    #[error(
        "gap filling needs at least 2 points per block, got {block_len} (category_num={category_num})"
    )]
    InsufficientBlockSize {
        block_len: usize,
        category_num: usize,
    },

    #[error("{param} population spans a single value ({value}); cannot build a uniform range")]
    InsufficientData { param: BindingParam, value: f64 },

    #[error("cannot take log10 of {param} value {value}")]
    NonPositiveLog { param: BindingParam, value: f64 },

    #[error("degenerate fill step {step} for {param}")]
    DegenerateStep { param: BindingParam, step: f64 },

    #[error("invalid point count: {0}")]
    InvalidPointCount(String),

    #[error("expected {expected} parameter values, got {actual}")]
    InvalidVectorLength { expected: usize, actual: usize },
}

/// Failure signalled by the external simulation collaborator
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Numerical integration failed (stiff or divergent ODE system)
    #[error("simulation diverged: {0}")]
    Diverged(String),

    #[error("simulation failed: {0}")]
    Failed(String),
}

/// Errors from a single model comparison
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("Hill curve fit failed: {0}")]
    HillFit(SimulationError),

    #[error("APD simulation failed: {0}")]
    Simulation(SimulationError),

    #[error("cannot derive concentration window: {0}")]
    ConcentrationWindow(String),

    #[error("APD trace mismatch: trapping has {trapping} points, conductance has {conductance}")]
    TraceMismatch { trapping: usize, conductance: usize },

    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Errors from a multi-point sweep
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SweepError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("evaluation failed at grid point {indices:?}: {source}")]
    Evaluation {
        indices: Vec<usize>,
        #[source]
        source: EvaluationError,
    },
}

pub type Result<T> = std::result::Result<T, RangeError>;
