//! Evenly spaced sequences with numpy-compatible endpoint semantics.

use crate::error::{RangeError, Result};
use crate::model::BindingParam;

/// Upper bound on points produced by a single [`arange`] call
pub const MAX_FILL_POINTS: usize = 100_000;

/// `n` evenly spaced values from `start` to `stop`, both inclusive.
///
/// `n == 1` yields `[start]`, `n == 0` yields an empty vector. The last value
/// is exactly `stop`.
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Values `start, start + step, ...` strictly below `stop`.
///
/// Length is `ceil((stop - start) / step)`, clamped at zero.
pub fn arange(param: BindingParam, start: f64, stop: f64, step: f64) -> Result<Vec<f64>> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(RangeError::DegenerateStep { param, step });
    }
    let span = ((stop - start) / step).ceil();
    if span <= 0.0 {
        return Ok(Vec::new());
    }
    if span > MAX_FILL_POINTS as f64 {
        return Err(RangeError::DegenerateStep { param, step });
    }
    let n = span as usize;
    Ok((0..n).map(|i| start + step * i as f64).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(-50.0, -30.0, 20);
        assert_eq!(v.len(), 20);
        assert_eq!(v[0], -50.0);
        assert_eq!(v[19], -30.0);
        for w in v.windows(2) {
            assert!((w[1] - w[0] - 20.0 / 19.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(3.0, 7.0, 2), vec![3.0, 7.0]);
    }

    #[test]
    fn test_linspace_descending() {
        assert_eq!(linspace(2.0, 0.0, 3), vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_arange_excludes_stop() {
        let v = arange(BindingParam::N, 0.0, 1.0, 0.25).unwrap();
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_arange_partial_step() {
        let v = arange(BindingParam::N, 0.0, 1.0, 0.4).unwrap();
        assert_eq!(v.len(), 3);
        assert!((v[2] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_arange_empty_when_stop_not_above_start() {
        assert!(arange(BindingParam::N, 1.0, 1.0, 0.1).unwrap().is_empty());
        assert!(arange(BindingParam::N, 2.0, 1.0, 0.1).unwrap().is_empty());
    }

    #[test]
    fn test_arange_rejects_degenerate_step() {
        assert_eq!(
            arange(BindingParam::Ku, 0.0, 1.0, 0.0).unwrap_err(),
            RangeError::DegenerateStep {
                param: BindingParam::Ku,
                step: 0.0
            }
        );
        assert!(arange(BindingParam::Ku, 0.0, 1.0, -0.5).is_err());
        assert!(arange(BindingParam::Ku, 0.0, 1.0, f64::NAN).is_err());
        assert!(arange(BindingParam::Ku, 0.0, 1.0, 1e-12).is_err());
    }
}
