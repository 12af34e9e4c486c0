//! Category thresholds splitting each parameter into low/mid/high regimes

use rustc_hash::FxHashMap;

use crate::error::{RangeError, Result};

use super::BindingParam;

/// Per-parameter `(low, high)` boundaries.
///
/// Low regime is `v <= low`, mid is `low < v < high`, high is `v >= high`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryThresholds {
    bounds: FxHashMap<BindingParam, (f64, f64)>,
}

impl CategoryThresholds {
    pub fn new(
        bounds: impl IntoIterator<Item = (BindingParam, (f64, f64))>,
    ) -> Result<Self> {
        let mut table = FxHashMap::default();
        for (param, (low, high)) in bounds {
            if !(low.is_finite() && high.is_finite() && low < high) {
                return Err(RangeError::InvalidThresholds { param, low, high });
            }
            table.insert(param, (low, high));
        }
        Ok(Self { bounds: table })
    }

    pub fn bounds(&self, param: BindingParam) -> Result<(f64, f64)> {
        self.bounds
            .get(&param)
            .copied()
            .ok_or(RangeError::MissingThresholds(param))
    }

    #[must_use]
    pub fn contains(&self, param: BindingParam) -> bool {
        self.bounds.contains_key(&param)
    }
}
