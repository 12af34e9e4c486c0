//! Sequential multi-point sweeps over the mock controller

use super::fixtures::*;
use crate::comparison::{ComparisonEvaluator, EvaluationOptions};
use crate::error::{EvaluationError, SimulationError, SweepError};
use crate::model::{BindingParam, CandidateParameters};
use crate::sweep::{SweepAxis, SweepConfig, SweepMetric, evaluate_point, sweep_evaluate};

fn base() -> CandidateParameters {
    CandidateParameters {
        vhalf: -80.0,
        kmax: 3.0,
        ku: -3.5,
        n: 0.9,
        ec50: 6.0,
    }
}

#[test]
fn test_two_axis_sweep() {
    let controller = MockController::new();
    let ap_model = MockApModel { base_apd: 280.0 };
    let evaluator =
        ComparisonEvaluator::new(&controller, &(), &ap_model, EvaluationOptions::default());

    let config = SweepConfig {
        base: base(),
        axes: vec![
            SweepAxis::new(BindingParam::Vhalf, vec![-90.0, -80.0, -70.0]),
            SweepAxis::new(BindingParam::N, vec![0.5, 1.5]),
        ],
    };
    let results = sweep_evaluate(&evaluator, &config).unwrap();

    assert_eq!(results.outcomes.shape(), &[3, 2]);
    assert_eq!(results.diverged_count(), 0);
    assert_eq!(controller.simulation_count(), 6);

    // the mock's error equals N, so the metric only varies along the N axis
    let mae = results.metric_grid(SweepMetric::Mae);
    for i in 0..3 {
        assert_close(*mae.get(&[i, 0]).unwrap(), 0.5);
        assert_close(*mae.get(&[i, 1]).unwrap(), 1.5);
    }
    assert_close(results.get(&[2, 1]).unwrap().rmse, 1.5);
}

#[test]
fn test_diverged_points_are_nan() {
    let controller = MockController::new();
    let ap_model = MockApModel { base_apd: 280.0 };
    let evaluator =
        ComparisonEvaluator::new(&controller, &(), &ap_model, EvaluationOptions::default());

    let config = SweepConfig {
        base: base(),
        axes: vec![
            SweepAxis::new(BindingParam::Ku, vec![-3.0, -8.0]),
            SweepAxis::new(BindingParam::Vhalf, vec![-90.0, -80.0]),
        ],
    };
    let results = sweep_evaluate(&evaluator, &config).unwrap();

    assert_eq!(results.diverged_count(), 2);
    let rmse = results.metric_grid(SweepMetric::Rmse);
    assert_close(*rmse.get(&[0, 1]).unwrap(), 0.9);
    assert!(rmse.get(&[1, 0]).unwrap().is_nan());
    assert!(rmse.get(&[1, 1]).unwrap().is_nan());
}

#[test]
fn test_single_point_matches_sweep() {
    let controller = MockController::new();
    let ap_model = MockApModel { base_apd: 280.0 };
    let evaluator =
        ComparisonEvaluator::new(&controller, &(), &ap_model, EvaluationOptions::default());

    let config = SweepConfig {
        base: base(),
        axes: vec![SweepAxis::new(BindingParam::N, vec![0.5, 0.7, 0.9])],
    };
    let point = evaluate_point(&evaluator, &config, &[1]).unwrap();
    assert_close(point.rmse, 0.7);

    let results = sweep_evaluate(&evaluator, &config).unwrap();
    assert_eq!(results.get(&[1]), Some(&point));
}

#[test]
fn test_hard_error_stops_at_first_failing_point() {
    let controller = MockController::new();
    let ap_model = MockApModel { base_apd: 280.0 };
    let evaluator =
        ComparisonEvaluator::new(&controller, &(), &ap_model, EvaluationOptions::default());

    let config = SweepConfig {
        base: base(),
        axes: vec![SweepAxis::new(
            BindingParam::Vhalf,
            vec![-80.0, 10.0, 20.0],
        )],
    };
    let err = sweep_evaluate(&evaluator, &config).unwrap_err();

    // the third point is never simulated
    assert_eq!(controller.simulation_count(), 2);
    assert_eq!(
        err,
        SweepError::Evaluation {
            indices: vec![1],
            source: EvaluationError::Simulation(SimulationError::Failed(
                "invalid protocol".to_string()
            )),
        }
    );
}

#[test]
fn test_invalid_sweep_config() {
    let controller = MockController::new();
    let ap_model = MockApModel { base_apd: 280.0 };
    let evaluator =
        ComparisonEvaluator::new(&controller, &(), &ap_model, EvaluationOptions::default());

    let duplicate = SweepConfig {
        base: base(),
        axes: vec![
            SweepAxis::new(BindingParam::N, vec![0.5]),
            SweepAxis::new(BindingParam::N, vec![0.7]),
        ],
    };
    assert!(matches!(
        sweep_evaluate(&evaluator, &duplicate),
        Err(SweepError::Config(_))
    ));

    let empty = SweepConfig {
        base: base(),
        axes: vec![SweepAxis::new(BindingParam::N, vec![])],
    };
    assert!(matches!(
        sweep_evaluate(&evaluator, &empty),
        Err(SweepError::Config(_))
    ));
}
