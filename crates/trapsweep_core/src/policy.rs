//! Per-parameter sampling and gap-filling policy
//!
//! Every parameter-specific rule of the range builders and the gap filler is
//! looked up here instead of being branched on inline:
//!
//! | param | sample scale | low span     | gap-fill space | fill step | midpoint pass |
//! |-------|--------------|--------------|----------------|-----------|---------------|
//! | Vhalf | linear       | from data    | linear         | max       | no            |
//! | Kmax  | log10        | fixed 1..30  | log10          | mean      | yes           |
//! | Ku    | log10        | from data    | log10          | max       | no            |
//! | N     | linear       | from data    | linear         | max       | no            |
//! | EC50  | log10        | from data    | linear         | max       | no            |

use crate::error::{RangeError, Result};
use crate::model::BindingParam;

/// Space in which sample points are spaced evenly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log10,
}

impl Scale {
    /// Map a native value into this space
    pub fn forward(self, param: BindingParam, value: f64) -> Result<f64> {
        match self {
            Scale::Linear => Ok(value),
            Scale::Log10 => checked_log10(param, value),
        }
    }

    /// Map a value from this space back to native units
    #[must_use]
    pub fn inverse(self, value: f64) -> f64 {
        match self {
            Scale::Linear => value,
            Scale::Log10 => 10f64.powf(value),
        }
    }
}

/// How the low regime's sampling span is obtained
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LowSpanRule {
    /// min/max of the low group, or +-10% around a lone member
    FromData,
    /// Fixed rate-constant floor/ceiling regardless of the data
    Fixed(f64, f64),
}

/// How the two local step sizes either side of a gap are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAggregator {
    Mean,
    Max,
}

impl StepAggregator {
    #[must_use]
    pub fn combine(self, before: f64, after: f64) -> f64 {
        match self {
            StepAggregator::Mean => (before + after) / 2.0,
            StepAggregator::Max => before.max(after),
        }
    }
}

/// Sampling and gap-filling rules for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamPolicy {
    pub sample_scale: Scale,
    pub low_span: LowSpanRule,
    pub gap_scale: Scale,
    pub gap_step: StepAggregator,
    /// Add midpoints between neighbours of the second block after gap filling.
    /// Compensates residual sparsity of the Kmax mid regime at small point counts.
    pub midpoint_pass: bool,
}

/// Kmax low regime floor and ceiling
pub const KMAX_LOW_SPAN: (f64, f64) = (1.0, 30.0);

impl ParamPolicy {
    #[must_use]
    pub fn for_param(param: BindingParam) -> Self {
        match param {
            BindingParam::Vhalf | BindingParam::N => Self {
                sample_scale: Scale::Linear,
                low_span: LowSpanRule::FromData,
                gap_scale: Scale::Linear,
                gap_step: StepAggregator::Max,
                midpoint_pass: false,
            },
            BindingParam::Kmax => Self {
                sample_scale: Scale::Log10,
                low_span: LowSpanRule::Fixed(KMAX_LOW_SPAN.0, KMAX_LOW_SPAN.1),
                gap_scale: Scale::Log10,
                gap_step: StepAggregator::Mean,
                midpoint_pass: true,
            },
            BindingParam::Ku => Self {
                sample_scale: Scale::Log10,
                low_span: LowSpanRule::FromData,
                gap_scale: Scale::Log10,
                gap_step: StepAggregator::Max,
                midpoint_pass: false,
            },
            BindingParam::Ec50 => Self {
                sample_scale: Scale::Log10,
                low_span: LowSpanRule::FromData,
                gap_scale: Scale::Linear,
                gap_step: StepAggregator::Max,
                midpoint_pass: false,
            },
        }
    }
}

/// log10 that refuses non-positive and non-finite input instead of yielding NaN/-inf
pub fn checked_log10(param: BindingParam, value: f64) -> Result<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value.log10())
    } else {
        Err(RangeError::NonPositiveLog { param, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_scale_parameters() {
        let log_params: Vec<_> = BindingParam::ALL
            .into_iter()
            .filter(|p| ParamPolicy::for_param(*p).sample_scale == Scale::Log10)
            .collect();
        assert_eq!(
            log_params,
            vec![BindingParam::Kmax, BindingParam::Ku, BindingParam::Ec50]
        );
    }

    #[test]
    fn test_ec50_gap_fills_linearly() {
        let policy = ParamPolicy::for_param(BindingParam::Ec50);
        assert_eq!(policy.sample_scale, Scale::Log10);
        assert_eq!(policy.gap_scale, Scale::Linear);
    }

    #[test]
    fn test_only_kmax_is_special() {
        for param in BindingParam::ALL {
            let policy = ParamPolicy::for_param(param);
            let is_kmax = param == BindingParam::Kmax;
            assert_eq!(policy.midpoint_pass, is_kmax);
            assert_eq!(policy.gap_step == StepAggregator::Mean, is_kmax);
            assert_eq!(matches!(policy.low_span, LowSpanRule::Fixed(..)), is_kmax);
        }
    }

    #[test]
    fn test_step_aggregators() {
        assert_eq!(StepAggregator::Mean.combine(1.0, 3.0), 2.0);
        assert_eq!(StepAggregator::Max.combine(1.0, 3.0), 3.0);
    }

    #[test]
    fn test_checked_log10() {
        assert_eq!(checked_log10(BindingParam::Ku, 100.0).unwrap(), 2.0);
        assert_eq!(
            checked_log10(BindingParam::Ku, 0.0).unwrap_err(),
            RangeError::NonPositiveLog {
                param: BindingParam::Ku,
                value: 0.0
            }
        );
        assert!(checked_log10(BindingParam::Ku, -1.0).is_err());
        assert!(checked_log10(BindingParam::Ku, f64::INFINITY).is_err());
    }
}
