//! Scored comparison of the trapping and conductance-scaling models.
//!
//! The numerical work (Hill-curve fitting against the channel model and APD
//! simulation with the action-potential model) is delegated to an external
//! controller implementing [`ModelComparison`]. This module derives the
//! concentration window from the fit, runs both models over it and reduces
//! the two APD traces to scalar error metrics.
//!
//! A divergent simulation does not abort the caller: the outcome carries NaN
//! metrics and NaN-filled traces so that a sweep can move on to the next point.

mod evaluator;
pub mod metrics;

pub use evaluator::{
    ComparisonEvaluator, ComparisonOutcome, DEFAULT_APD_POINTS, EvaluationOptions,
};

use serde::{Deserialize, Serialize};

use crate::error::{EvaluationError, SimulationError};
use crate::model::CandidateParameters;

/// Result of fitting a Hill curve to the channel model's concentration response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HillFit {
    /// Fitted Hill coefficients (IC50, Hill slope, ...), opaque to this crate
    pub coefficients: Vec<f64>,
    /// Drug concentrations used for the fit, ascending
    pub concentrations: Vec<f64>,
}

/// log10 concentration bounds for the APD simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationWindow {
    pub log_low: f64,
    pub log_high: f64,
}

impl ConcentrationWindow {
    /// Window from the second to the last fit concentration.
    ///
    /// The first fit concentration is skipped since it is typically the
    /// drug-free control.
    pub fn from_fit(fit: &HillFit) -> Result<Self, EvaluationError> {
        let concs = &fit.concentrations;
        if concs.len() < 2 {
            return Err(EvaluationError::ConcentrationWindow(format!(
                "need at least 2 fit concentrations, got {}",
                concs.len()
            )));
        }
        let low = concs[1];
        let high = concs[concs.len() - 1];
        for c in [low, high] {
            if !(c > 0.0 && c.is_finite()) {
                return Err(EvaluationError::ConcentrationWindow(format!(
                    "concentration {c} has no finite log10"
                )));
            }
        }
        Ok(Self {
            log_low: low.log10(),
            log_high: high.log10(),
        })
    }
}

/// APD traces of the two competing models over the concentration window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApdTraces {
    /// State-dependent trapping model
    pub trapping: Vec<f64>,
    /// Conductance-scaling model
    pub conductance: Vec<f64>,
}

/// External model-comparison controller.
///
/// Implementations wrap an ODE simulation toolkit. `params` is always in
/// native (not log-encoded) units.
pub trait ModelComparison {
    /// Channel-current (hERG) model used for the Hill-curve fit
    type ChannelModel;
    /// Action-potential model used for the APD simulation
    type ApModel;

    fn fit_hill(
        &self,
        params: &CandidateParameters,
        channel_model: &Self::ChannelModel,
    ) -> Result<HillFit, SimulationError>;

    /// Simulate APD for both models at `data_points` concentrations in `window`.
    ///
    /// Integration failures must be reported as [`SimulationError::Diverged`].
    fn simulate_apd(
        &self,
        params: &CandidateParameters,
        ap_model: &Self::ApModel,
        fit: &HillFit,
        window: ConcentrationWindow,
        data_points: usize,
    ) -> Result<ApdTraces, SimulationError>;
}
