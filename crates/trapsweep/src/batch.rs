//! Parallel sweep orchestration.
//!
//! The core scores one grid point at a time; this module fans the points of a
//! [`SweepConfig`] out over the rayon pool, reports progress and honours
//! cancellation between points.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::info;
use trapsweep_core::comparison::ComparisonOutcome;
use trapsweep_core::sweep::{GridIndices, SweepConfig, SweepResults, evaluate_point};
use trapsweep_core::{ComparisonEvaluator, ModelComparison, SweepError};

/// Shared progress counter and cancellation flag for a running sweep
#[derive(Debug, Clone, Default)]
pub struct SweepProgress {
    completed: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
    cancelled: Arc<AtomicBool>,
}

impl SweepProgress {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total: Arc::new(AtomicUsize::new(total)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    fn increment(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    fn reset(&self, total: usize) {
        self.completed.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    /// Request cancellation; points already running still finish
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[derive(Debug, PartialEq)]
pub enum BatchError {
    Cancelled,
    Sweep(SweepError),
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Cancelled => write!(f, "sweep cancelled"),
            BatchError::Sweep(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BatchError {}

impl From<SweepError> for BatchError {
    fn from(err: SweepError) -> Self {
        BatchError::Sweep(err)
    }
}

/// Evaluate every grid point on the rayon pool.
///
/// Outcomes match [`trapsweep_core::sweep::sweep_evaluate`]. When several
/// points fail, the one reported is the first in row-major order. A cancelled
/// sweep returns [`BatchError::Cancelled`] even if every point finished.
pub fn run_parallel<C>(
    evaluator: &ComparisonEvaluator<'_, C>,
    config: &SweepConfig,
    progress: Option<&SweepProgress>,
) -> Result<SweepResults, BatchError>
where
    C: ModelComparison + Sync,
    C::ChannelModel: Sync,
    C::ApModel: Sync,
{
    config.validate()?;

    let total = config.total_points();
    if let Some(p) = progress {
        p.reset(total);
    }
    info!(
        points = total,
        threads = rayon::current_num_threads(),
        "starting parallel sweep"
    );

    let points: Vec<Vec<usize>> = GridIndices::new(&config.shape()).collect();
    let results: Vec<Result<ComparisonOutcome, BatchError>> = points
        .par_iter()
        .map(|indices| {
            if progress.is_some_and(SweepProgress::is_cancelled) {
                return Err(BatchError::Cancelled);
            }
            let outcome = evaluate_point(evaluator, config, indices).map_err(BatchError::from);
            if let Some(p) = progress {
                p.increment();
            }
            outcome
        })
        .collect();

    if progress.is_some_and(SweepProgress::is_cancelled) {
        return Err(BatchError::Cancelled);
    }
    let outcomes = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    let results = SweepResults::from_outcomes(config, outcomes)?;
    info!(diverged = results.diverged_count(), "parallel sweep finished");
    Ok(results)
}
