//! Gap filling between adjacent regime blocks of a sorted range.

use tracing::debug;

use crate::error::{RangeError, Result};
use crate::model::BindingParam;
use crate::policy::ParamPolicy;

use super::spacing::arange;

/// Fill the discontinuities between `category_num` contiguous blocks of `range`.
///
/// The range is sorted and cut into `category_num` blocks of
/// `range.len() / category_num` points. At each block boundary the local step
/// is estimated on both sides (last step before the gap, first step after it),
/// combined by the parameter's step aggregator, and points are generated from
/// the last point of the lower block up to (excluding) the first point of the
/// upper block at that granularity. The lower endpoint is already present and
/// is not repeated.
///
/// The returned vector is the sorted input followed by the generated fill
/// points; it is not re-sorted and its length depends on the data.
pub fn fill_gaps(range: &[f64], category_num: usize, param: BindingParam) -> Result<Vec<f64>> {
    if category_num == 0 {
        return Err(RangeError::InvalidPointCount(
            "category_num must be at least 1".to_string(),
        ));
    }
    let res_points = range.len() / category_num;
    if res_points < 2 {
        return Err(RangeError::InsufficientBlockSize {
            block_len: res_points,
            category_num,
        });
    }

    let policy = ParamPolicy::for_param(param);
    let mut sorted = range.to_vec();
    sorted.sort_by(f64::total_cmp);
    let base = sorted
        .into_iter()
        .map(|v| policy.gap_scale.forward(param, v))
        .collect::<Result<Vec<f64>>>()?;

    let mut filled = base.clone();
    for block in 1..category_num {
        let boundary = res_points * block;
        let gap_start = base[boundary - 1];
        let gap_end = base[boundary];
        if gap_end <= gap_start {
            continue;
        }

        let step_before = (base[boundary - 2] - gap_start).abs();
        let step_after = (gap_end - base[boundary + 1]).abs();
        let step = policy.gap_step.combine(step_before, step_after);

        let fill = arange(param, gap_start, gap_end, step)?;
        filled.extend(fill.into_iter().skip(1));
    }

    if policy.midpoint_pass {
        let second_block = &base[res_points.min(base.len())..(2 * res_points).min(base.len())];
        filled.extend(second_block.windows(2).map(|w| (w[0] + w[1]) / 2.0));
    }

    debug!(
        %param,
        category_num,
        added = filled.len() - base.len(),
        "filled regime gaps"
    );

    Ok(filled
        .into_iter()
        .map(|v| policy.gap_scale.inverse(v))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_range_adds_nothing() {
        let range: Vec<f64> = (0..30).map(f64::from).collect();
        let filled = fill_gaps(&range, 3, BindingParam::Vhalf).unwrap();
        assert_eq!(filled, range);
    }

    #[test]
    fn test_input_is_sorted_before_filling() {
        let range = vec![3.0, 0.0, 5.0, 1.0, 2.0, 4.0];
        let filled = fill_gaps(&range, 2, BindingParam::N).unwrap();
        assert_eq!(&filled[..6], &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(filled.len(), 6);
    }

    #[test]
    fn test_linear_gap_uses_larger_step() {
        // blocks [0, 1, 2] and [10, 13, 16]; steps 1 and 3 -> fill at 3
        let range = vec![0.0, 1.0, 2.0, 10.0, 13.0, 16.0];
        let filled = fill_gaps(&range, 2, BindingParam::Vhalf).unwrap();
        assert_eq!(&filled[6..], &[5.0, 8.0]);
    }

    #[test]
    fn test_block_too_small() {
        let err = fill_gaps(&[1.0, 2.0, 3.0], 3, BindingParam::N).unwrap_err();
        assert_eq!(
            err,
            RangeError::InsufficientBlockSize {
                block_len: 1,
                category_num: 3
            }
        );
        assert!(fill_gaps(&[], 1, BindingParam::N).is_err());
    }

    #[test]
    fn test_zero_categories() {
        assert!(matches!(
            fill_gaps(&[1.0, 2.0], 0, BindingParam::N),
            Err(RangeError::InvalidPointCount(_))
        ));
    }

    #[test]
    fn test_log_space_rejects_non_positive() {
        let err = fill_gaps(&[0.0, 1.0, 2.0, 3.0], 2, BindingParam::Ku).unwrap_err();
        assert_eq!(
            err,
            RangeError::NonPositiveLog {
                param: BindingParam::Ku,
                value: 0.0
            }
        );
    }
}
