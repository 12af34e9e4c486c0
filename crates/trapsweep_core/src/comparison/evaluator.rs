//! Single-point comparison evaluator

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EvaluationError, SimulationError};
use crate::model::CandidateParameters;

use super::metrics::{mae, rmse};
use super::{ApdTraces, ConcentrationWindow, ModelComparison};

/// Default number of concentrations at which APD is simulated
pub const DEFAULT_APD_POINTS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOptions {
    /// Candidate vectors carry Kmax, Ku and EC50 as log10 values
    pub log_transform: bool,
    /// Number of concentrations for the APD simulation
    pub apd_points: usize,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            log_transform: true,
            apd_points: DEFAULT_APD_POINTS,
        }
    }
}

/// Scalar errors and raw traces of one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub rmse: f64,
    pub mae: f64,
    pub apd_trapping: Vec<f64>,
    pub apd_conductance: Vec<f64>,
    /// APD simulation diverged and the values above are NaN sentinels
    pub diverged: bool,
}

impl ComparisonOutcome {
    pub fn from_traces(traces: ApdTraces) -> Result<Self, EvaluationError> {
        Ok(Self {
            rmse: rmse(&traces.trapping, &traces.conductance)?,
            mae: mae(&traces.trapping, &traces.conductance)?,
            apd_trapping: traces.trapping,
            apd_conductance: traces.conductance,
            diverged: false,
        })
    }

    /// NaN sentinel for a divergent simulation with `points` trace entries
    #[must_use]
    pub fn diverged(points: usize) -> Self {
        Self {
            rmse: f64::NAN,
            mae: f64::NAN,
            apd_trapping: vec![f64::NAN; points],
            apd_conductance: vec![f64::NAN; points],
            diverged: true,
        }
    }

    /// `(rmse, mae)`
    #[must_use]
    pub fn errors(&self) -> (f64, f64) {
        (self.rmse, self.mae)
    }
}

/// Evaluates candidate parameter vectors against a fixed pair of models.
///
/// Holds only references; evaluation is side-effect free apart from whatever
/// the controller does internally.
pub struct ComparisonEvaluator<'a, C: ModelComparison> {
    controller: &'a C,
    channel_model: &'a C::ChannelModel,
    ap_model: &'a C::ApModel,
    options: EvaluationOptions,
}

impl<'a, C: ModelComparison> ComparisonEvaluator<'a, C> {
    pub fn new(
        controller: &'a C,
        channel_model: &'a C::ChannelModel,
        ap_model: &'a C::ApModel,
        options: EvaluationOptions,
    ) -> Self {
        Self {
            controller,
            channel_model,
            ap_model,
            options,
        }
    }

    /// Run one comparison.
    ///
    /// Hill-fit failures propagate. A diverged APD simulation yields
    /// [`ComparisonOutcome::diverged`] instead of an error.
    pub fn evaluate(
        &self,
        candidate: &CandidateParameters,
    ) -> Result<ComparisonOutcome, EvaluationError> {
        let params = if self.options.log_transform {
            candidate.exponentiated()
        } else {
            *candidate
        };

        let fit = self
            .controller
            .fit_hill(&params, self.channel_model)
            .map_err(EvaluationError::HillFit)?;
        let window = ConcentrationWindow::from_fit(&fit)?;

        match self.controller.simulate_apd(
            &params,
            self.ap_model,
            &fit,
            window,
            self.options.apd_points,
        ) {
            Ok(traces) => ComparisonOutcome::from_traces(traces),
            Err(SimulationError::Diverged(reason)) => {
                warn!(
                    ?params,
                    reason = reason.as_str(),
                    "APD simulation diverged; substituting NaN"
                );
                Ok(ComparisonOutcome::diverged(self.options.apd_points))
            }
            Err(err) => Err(EvaluationError::Simulation(err)),
        }
    }
}
