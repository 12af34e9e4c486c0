//! Error metrics between the two models' APD traces

use crate::error::EvaluationError;

fn check_lengths(trapping: &[f64], conductance: &[f64]) -> Result<(), EvaluationError> {
    if trapping.len() != conductance.len() || trapping.is_empty() {
        return Err(EvaluationError::TraceMismatch {
            trapping: trapping.len(),
            conductance: conductance.len(),
        });
    }
    Ok(())
}

/// Root-mean-square error
pub fn rmse(trapping: &[f64], conductance: &[f64]) -> Result<f64, EvaluationError> {
    check_lengths(trapping, conductance)?;
    let sum_sq: f64 = trapping
        .iter()
        .zip(conductance)
        .map(|(a, b)| (a - b).powi(2))
        .sum();
    Ok((sum_sq / trapping.len() as f64).sqrt())
}

/// Mean absolute error
pub fn mae(trapping: &[f64], conductance: &[f64]) -> Result<f64, EvaluationError> {
    check_lengths(trapping, conductance)?;
    let sum_abs: f64 = trapping
        .iter()
        .zip(conductance)
        .map(|(a, b)| (a - b).abs())
        .sum();
    Ok(sum_abs / trapping.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_traces() {
        let a = [300.0, 310.0, 320.0];
        assert_eq!(rmse(&a, &a).unwrap(), 0.0);
        assert_eq!(mae(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_known_values() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 2.0, 1.0, 4.0];
        // diffs: -1, 0, 2, 0
        assert!((rmse(&a, &b).unwrap() - (5.0f64 / 4.0).sqrt()).abs() < 1e-12);
        assert!((mae(&a, &b).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            rmse(&[1.0], &[1.0, 2.0]).unwrap_err(),
            EvaluationError::TraceMismatch {
                trapping: 1,
                conductance: 2
            }
        );
        assert!(mae(&[], &[]).is_err());
    }
}
