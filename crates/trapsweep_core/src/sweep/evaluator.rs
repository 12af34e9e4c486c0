//! Sweep evaluation: scores every grid point of a [`SweepConfig`] in turn.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::comparison::{ComparisonEvaluator, ComparisonOutcome, ModelComparison};
use crate::error::SweepError;

use super::{GridIndices, SweepAxis, SweepConfig, SweepGrid};

/// Metric extracted from a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepMetric {
    Rmse,
    Mae,
}

/// Outcomes of every grid point of a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResults {
    pub axes: Vec<SweepAxis>,
    pub outcomes: SweepGrid<ComparisonOutcome>,
}

impl SweepResults {
    /// Assemble results from row-major outcomes, one per grid point
    pub fn from_outcomes(
        config: &SweepConfig,
        outcomes: Vec<ComparisonOutcome>,
    ) -> Result<Self, SweepError> {
        let outcomes = SweepGrid::from_data(config.shape(), outcomes)
            .ok_or_else(|| SweepError::Config("outcome count does not match grid".to_string()))?;
        Ok(Self {
            axes: config.axes.clone(),
            outcomes,
        })
    }

    #[must_use]
    pub fn get(&self, indices: &[usize]) -> Option<&ComparisonOutcome> {
        self.outcomes.get(indices)
    }

    /// Grid of one scalar metric; diverged points are NaN
    #[must_use]
    pub fn metric_grid(&self, metric: SweepMetric) -> SweepGrid<f64> {
        self.outcomes.map(|o| match metric {
            SweepMetric::Rmse => o.rmse,
            SweepMetric::Mae => o.mae,
        })
    }

    /// Number of points whose simulation diverged
    #[must_use]
    pub fn diverged_count(&self) -> usize {
        self.outcomes.data().iter().filter(|o| o.diverged).count()
    }
}

/// Score the candidate at one grid point, tagging failures with its indices
pub fn evaluate_point<C: ModelComparison>(
    evaluator: &ComparisonEvaluator<'_, C>,
    config: &SweepConfig,
    indices: &[usize],
) -> Result<ComparisonOutcome, SweepError> {
    evaluator
        .evaluate(&config.candidate_at(indices))
        .map_err(|source| SweepError::Evaluation {
            indices: indices.to_vec(),
            source,
        })
}

/// Evaluate the comparison at every point of the sweep grid, in row-major
/// order on the calling thread.
///
/// Diverged points are kept as NaN outcomes. The first hard evaluation error
/// stops the sweep; later points are not evaluated.
pub fn sweep_evaluate<C: ModelComparison>(
    evaluator: &ComparisonEvaluator<'_, C>,
    config: &SweepConfig,
) -> Result<SweepResults, SweepError> {
    config.validate()?;
    info!(
        points = config.total_points(),
        axes = config.axes.len(),
        "starting sweep"
    );

    let outcomes = GridIndices::new(&config.shape())
        .map(|indices| evaluate_point(evaluator, config, &indices))
        .collect::<Result<Vec<_>, _>>()?;

    let results = SweepResults::from_outcomes(config, outcomes)?;
    info!(diverged = results.diverged_count(), "sweep finished");
    Ok(results)
}
