//! Subcommand handlers. Each returns a serializable report; printing is left
//! to the binary.

use serde::Serialize;
use tracing::info;
use trapsweep_core::analysis::{RegimeGroups, RegimeSpans};
use trapsweep_core::{
    BindingParam, DrugRangeOptions, OwnValueBlock, RangeBuilder, RangeError, fill_gaps,
};

/// Number of regime blocks in a population range
const REGIME_BLOCKS: usize = 3;

/// A generated sampling grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeReport {
    pub param: BindingParam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug: Option<String>,
    pub len: usize,
    pub values: Vec<f64>,
}

impl RangeReport {
    fn new(param: BindingParam, drug: Option<&str>, values: Vec<f64>) -> Self {
        Self {
            param,
            drug: drug.map(str::to_string),
            len: values.len(),
            values,
        }
    }
}

/// Regime partition and spans of one parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    pub param: BindingParam,
    pub thresholds: (f64, f64),
    pub groups: RegimeGroups,
    pub spans: RegimeSpans,
}

pub fn drug_range(
    builder: &RangeBuilder<'_>,
    drug: &str,
    param: BindingParam,
    points: usize,
    single_own_block: bool,
) -> Result<RangeReport, RangeError> {
    let options = DrugRangeOptions {
        points_per_region: points,
        own_value_block: if single_own_block {
            OwnValueBlock::Single
        } else {
            OwnValueBlock::Repeated
        },
    };
    let values = builder.drug_range(drug, param, &options)?;
    info!(%param, drug, points = values.len(), "drug range");
    Ok(RangeReport::new(param, Some(drug), values))
}

/// Population range, optionally gap-filled across the three regime blocks
pub fn population_range(
    builder: &RangeBuilder<'_>,
    param: BindingParam,
    points: usize,
    fill: bool,
) -> Result<RangeReport, RangeError> {
    let mut values = builder.population_range(param, points)?;
    if fill {
        values = fill_gaps(&values, REGIME_BLOCKS, param)?;
    }
    info!(%param, fill, points = values.len(), "population range");
    Ok(RangeReport::new(param, None, values))
}

pub fn uniform_range(
    builder: &RangeBuilder<'_>,
    param: BindingParam,
    points: usize,
) -> Result<RangeReport, RangeError> {
    let values = builder.uniform_range(param, points)?;
    Ok(RangeReport::new(param, None, values))
}

pub fn groups(
    builder: &RangeBuilder<'_>,
    thresholds: (f64, f64),
    param: BindingParam,
) -> Result<GroupReport, RangeError> {
    Ok(GroupReport {
        param,
        thresholds,
        groups: builder.groups(param)?,
        spans: builder.spans(param)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceData;

    fn with_builder<T>(f: impl FnOnce(&RangeBuilder<'_>) -> T) -> T {
        let (library, thresholds) = ReferenceData::bundled().unwrap().build().unwrap();
        f(&RangeBuilder::new(&library, &thresholds))
    }

    #[test]
    fn test_drug_range_lengths() {
        with_builder(|builder| {
            let log = drug_range(builder, "verapamil", BindingParam::Ku, 10, false).unwrap();
            assert_eq!(log.len, 50);
            assert_eq!(log.drug.as_deref(), Some("verapamil"));

            let single = drug_range(builder, "verapamil", BindingParam::Ku, 10, true).unwrap();
            assert_eq!(single.len, 40);

            let linear = drug_range(builder, "verapamil", BindingParam::N, 5, false).unwrap();
            assert_eq!(linear.len, 20);
        });
    }

    #[test]
    fn test_every_bundled_drug_and_param() {
        with_builder(|builder| {
            let (library, _) = ReferenceData::bundled().unwrap().build().unwrap();
            for drug in library.drugs() {
                for param in BindingParam::ALL {
                    let report = drug_range(builder, drug, param, 10, false).unwrap();
                    assert!(report.values.iter().all(|v| v.is_finite()));
                }
            }
        });
    }

    #[test]
    fn test_population_fill() {
        with_builder(|builder| {
            let plain = population_range(builder, BindingParam::Kmax, 5, false).unwrap();
            assert_eq!(plain.len, 15);

            let filled = population_range(builder, BindingParam::Kmax, 5, true).unwrap();
            assert!(filled.len > plain.len);
            assert_eq!(filled.len, filled.values.len());
        });
    }

    #[test]
    fn test_groups_report() {
        with_builder(|builder| {
            let report = groups(builder, (100.0, 1e6), BindingParam::Kmax).unwrap();
            assert_eq!(report.spans.low, (1.0, 30.0));
            assert_eq!(report.groups.len(), 12);
        });
    }

    #[test]
    fn test_report_json_shape() {
        with_builder(|builder| {
            let report = uniform_range(builder, BindingParam::Vhalf, 3).unwrap();
            let json = serde_json::to_value(&report).unwrap();
            assert_eq!(json["param"], "Vhalf");
            assert_eq!(json["len"], 3);
            assert!(json.get("drug").is_none());
            assert_eq!(json["values"][0], -199.5);
        });
    }

    #[test]
    fn test_errors_surface() {
        with_builder(|builder| {
            assert_eq!(
                drug_range(builder, "aspirin", BindingParam::Ku, 10, false).unwrap_err(),
                RangeError::UnknownDrug("aspirin".to_string())
            );
            assert!(matches!(
                uniform_range(builder, BindingParam::N, 0),
                Err(RangeError::InvalidPointCount(_))
            ));
        });
    }
}
