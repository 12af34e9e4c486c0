//! Sensitivity-analysis parameter ranges.
//!
//! Builds sampling grids for a single binding parameter from the population
//! of known drugs. The population is split into low/mid/high regimes by the
//! category thresholds and each regime is sampled over its own span, so a
//! sweep covers the occupied parts of parameter space without wasting points
//! in the empty stretches between regimes.
//!
//! ```ignore
//! use trapsweep_core::analysis::{RangeBuilder, DrugRangeOptions, fill_gaps};
//! use trapsweep_core::model::BindingParam;
//!
//! let builder = RangeBuilder::new(&library, &thresholds);
//!
//! // Around one drug plus the three population regimes
//! let around = builder.drug_range("verapamil", BindingParam::Ku, &DrugRangeOptions::default())?;
//!
//! // Population regimes only, then close the gaps between regimes
//! let grid = builder.population_range(BindingParam::Kmax, 5)?;
//! let grid = fill_gaps(&grid, 3, BindingParam::Kmax)?;
//! ```

mod builder;
mod gaps;
mod partition;
mod spacing;

pub use builder::{
    DEFAULT_REGION_POINTS, DEFAULT_RES_POINTS, DEFAULT_UNIFORM_POINTS, DrugRangeOptions,
    OwnValueBlock, RangeBuilder,
};
pub use gaps::fill_gaps;
pub use partition::{RegimeGroups, RegimeSpans, partition};
pub use spacing::{MAX_FILL_POINTS, arange, linspace};
