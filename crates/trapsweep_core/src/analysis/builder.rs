//! Sampling grids anchored on the known drug population.

use tracing::debug;

use crate::error::{RangeError, Result};
use crate::model::{BindingLibrary, BindingParam, CategoryThresholds};
use crate::policy::{ParamPolicy, Scale};

use super::partition::{RegimeGroups, RegimeSpans, partition};
use super::spacing::linspace;

/// Points per region used by the drug-anchored builder
pub const DEFAULT_REGION_POINTS: usize = 10;
/// Points per region used by the population-wide builder
pub const DEFAULT_RES_POINTS: usize = 10;
/// Points used by the uniform min..max builder
pub const DEFAULT_UNIFORM_POINTS: usize = 20;

/// How often the drug's own-value neighbourhood is emitted for log-scale parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnValueBlock {
    /// Emitted once, ahead of the regime blocks
    Single,
    /// Emitted twice back to back ahead of the regime blocks.
    ///
    /// This reproduces the historical sampling grids, which concatenated the
    /// neighbourhood a second time after building the combined sequence. Linear
    /// parameters were never affected and always get a single block.
    #[default]
    Repeated,
}

/// Options for [`RangeBuilder::drug_range`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrugRangeOptions {
    pub points_per_region: usize,
    pub own_value_block: OwnValueBlock,
}

impl Default for DrugRangeOptions {
    fn default() -> Self {
        Self {
            points_per_region: DEFAULT_REGION_POINTS,
            own_value_block: OwnValueBlock::default(),
        }
    }
}

/// Builds parameter sampling ranges from a binding library and its category thresholds.
///
/// The builder only borrows the reference data; it is cheap to create per call.
#[derive(Debug, Clone, Copy)]
pub struct RangeBuilder<'a> {
    library: &'a BindingLibrary,
    thresholds: &'a CategoryThresholds,
}

impl<'a> RangeBuilder<'a> {
    #[must_use]
    pub fn new(library: &'a BindingLibrary, thresholds: &'a CategoryThresholds) -> Self {
        Self {
            library,
            thresholds,
        }
    }

    /// Population values of `param` partitioned into low/mid/high
    pub fn groups(&self, param: BindingParam) -> Result<RegimeGroups> {
        let bounds = self.thresholds.bounds(param)?;
        let population = self.library.population(param);
        let groups = partition(param, &population, bounds)?;
        debug!(
            %param,
            low = groups.low.len(),
            mid = groups.mid.len(),
            high = groups.high.len(),
            "partitioned population"
        );
        Ok(groups)
    }

    /// Sampling spans of the three regimes of `param`
    pub fn spans(&self, param: BindingParam) -> Result<RegimeSpans> {
        let policy = ParamPolicy::for_param(param);
        self.groups(param)?.spans(param, policy.low_span)
    }

    /// Grid around one drug's own value plus the low/mid/high population regimes.
    ///
    /// Blocks are emitted in order: own-value neighbourhood (+-10% of the value,
    /// taken in log10 space for log-scale parameters), low, mid, high. The output
    /// is not sorted.
    pub fn drug_range(
        &self,
        drug: &str,
        param: BindingParam,
        options: &DrugRangeOptions,
    ) -> Result<Vec<f64>> {
        let n = options.points_per_region;
        if n == 0 {
            return Err(RangeError::InvalidPointCount(
                "points per region must be at least 1".to_string(),
            ));
        }
        let policy = ParamPolicy::for_param(param);
        let own = policy
            .sample_scale
            .forward(param, self.library.value(drug, param)?)?;
        let spans = self.spans(param)?;

        let own_block = linspace(0.9 * own, 1.1 * own, n);
        let copies = own_block_copies(policy.sample_scale, options.own_value_block);

        let mut grid = Vec::with_capacity(n * (copies + 3));
        for _ in 0..copies {
            grid.extend_from_slice(&own_block);
        }
        for span in spans.in_order() {
            grid.extend(region_block(param, policy.sample_scale, span, n)?);
        }

        let grid: Vec<f64> = grid
            .into_iter()
            .map(|v| policy.sample_scale.inverse(v))
            .collect();
        debug!(%param, drug, points = grid.len(), "built drug-anchored range");
        Ok(grid)
    }

    /// Grid over the low/mid/high population regimes, `res_points` per regime
    pub fn population_range(&self, param: BindingParam, res_points: usize) -> Result<Vec<f64>> {
        if res_points == 0 {
            return Err(RangeError::InvalidPointCount(
                "res_points must be at least 1".to_string(),
            ));
        }
        let policy = ParamPolicy::for_param(param);
        let spans = self.spans(param)?;

        let mut grid = Vec::with_capacity(3 * res_points);
        for span in spans.in_order() {
            grid.extend(region_block(param, policy.sample_scale, span, res_points)?);
        }

        let grid: Vec<f64> = grid
            .into_iter()
            .map(|v| policy.sample_scale.inverse(v))
            .collect();
        debug!(%param, points = grid.len(), "built population range");
        Ok(grid)
    }

    /// `count` evenly spaced samples from the population minimum to maximum.
    ///
    /// Spacing is in log10 space for log-scale parameters. A population with a
    /// single distinct value is rejected.
    pub fn uniform_range(&self, param: BindingParam, count: usize) -> Result<Vec<f64>> {
        if count == 0 {
            return Err(RangeError::InvalidPointCount(
                "uniform range needs at least 1 point".to_string(),
            ));
        }
        let policy = ParamPolicy::for_param(param);
        let population = self.library.population(param);
        let min = population.iter().copied().fold(f64::INFINITY, f64::min);
        let max = population.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            return Err(RangeError::InsufficientData { param, value: min });
        }

        let scale = policy.sample_scale;
        let grid = linspace(scale.forward(param, min)?, scale.forward(param, max)?, count)
            .into_iter()
            .map(|v| scale.inverse(v))
            .collect();
        Ok(grid)
    }
}

/// Number of own-value blocks to emit for a parameter sampled on `scale`
fn own_block_copies(scale: Scale, block: OwnValueBlock) -> usize {
    match (scale, block) {
        (Scale::Log10, OwnValueBlock::Repeated) => 2,
        _ => 1,
    }
}

fn region_block(param: BindingParam, scale: Scale, span: (f64, f64), n: usize) -> Result<Vec<f64>> {
    let start = scale.forward(param, span.0)?;
    let stop = scale.forward(param, span.1)?;
    Ok(linspace(start, stop, n))
}
