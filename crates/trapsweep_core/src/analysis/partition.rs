//! Regime partitioning of a parameter population and per-regime sampling spans.

use serde::Serialize;

use crate::error::{RangeError, Result};
use crate::model::{BindingParam, Regime};
use crate::policy::LowSpanRule;

/// Population values of one parameter split by regime, each group in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeGroups {
    pub low: Vec<f64>,
    pub mid: Vec<f64>,
    pub high: Vec<f64>,
}

/// `(min, max)` sampling span of each regime
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegimeSpans {
    pub low: (f64, f64),
    pub mid: (f64, f64),
    pub high: (f64, f64),
}

impl RegimeSpans {
    /// Spans in emission order: low, mid, high
    #[must_use]
    pub fn in_order(&self) -> [(f64, f64); 3] {
        [self.low, self.mid, self.high]
    }
}

/// Split `values` into `v <= low`, `low < v < high` and `v >= high`.
///
/// A value landing in none of the three (NaN) is rejected.
pub fn partition(param: BindingParam, values: &[f64], bounds: (f64, f64)) -> Result<RegimeGroups> {
    let (low, high) = bounds;
    let mut groups = RegimeGroups {
        low: Vec::new(),
        mid: Vec::new(),
        high: Vec::new(),
    };
    for &value in values {
        if value <= low {
            groups.low.push(value);
        } else if value > low && value < high {
            groups.mid.push(value);
        } else if value >= high {
            groups.high.push(value);
        } else {
            return Err(RangeError::Unpartitioned { param, value });
        }
    }
    Ok(groups)
}

impl RegimeGroups {
    /// Total number of members across all regimes
    #[must_use]
    pub fn len(&self) -> usize {
        self.low.len() + self.mid.len() + self.high.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn group(&self, regime: Regime) -> &[f64] {
        match regime {
            Regime::Low => &self.low,
            Regime::Mid => &self.mid,
            Regime::High => &self.high,
        }
    }

    /// Sampling spans for the three regimes.
    ///
    /// The mid span is the min/max of the strictly interior values. Low and high
    /// spans use min/max when the group has several members and +-10% around a
    /// lone member; a fixed low-span rule overrides the data entirely, even for
    /// an empty low group.
    pub fn spans(&self, param: BindingParam, low_rule: LowSpanRule) -> Result<RegimeSpans> {
        let mid = min_max(&self.mid).ok_or(RangeError::EmptyGroup {
            param,
            group: Regime::Mid,
        })?;
        let low = match low_rule {
            LowSpanRule::Fixed(floor, ceiling) => (floor, ceiling),
            LowSpanRule::FromData => data_span(param, Regime::Low, &self.low)?,
        };
        let high = data_span(param, Regime::High, &self.high)?;
        Ok(RegimeSpans { low, mid, high })
    }
}

fn data_span(param: BindingParam, group: Regime, values: &[f64]) -> Result<(f64, f64)> {
    match values {
        [] => Err(RangeError::EmptyGroup { param, group }),
        [only] => Ok((0.9 * only, 1.1 * only)),
        _ => min_max(values).ok_or(RangeError::EmptyGroup { param, group }),
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
