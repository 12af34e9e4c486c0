//! Reference library of known drug binding parameters

use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};

use super::BindingParam;

/// One value per binding parameter.
///
/// Used both for the fitted parameters of a library drug and for a candidate
/// point handed to the comparison evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(rename = "Vhalf")]
    pub vhalf: f64,
    #[serde(rename = "Kmax")]
    pub kmax: f64,
    #[serde(rename = "Ku")]
    pub ku: f64,
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "EC50")]
    pub ec50: f64,
}

/// A point in parameter space to be evaluated
pub type CandidateParameters = ParameterSet;

impl ParameterSet {
    /// Build from a positional slice in [`BindingParam::ALL`] order
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let [vhalf, kmax, ku, n, ec50] = <[f64; 5]>::try_from(values).map_err(|_| {
            RangeError::InvalidVectorLength {
                expected: BindingParam::ALL.len(),
                actual: values.len(),
            }
        })?;
        Ok(Self {
            vhalf,
            kmax,
            ku,
            n,
            ec50,
        })
    }

    #[must_use]
    pub fn get(&self, param: BindingParam) -> f64 {
        match param {
            BindingParam::Vhalf => self.vhalf,
            BindingParam::Kmax => self.kmax,
            BindingParam::Ku => self.ku,
            BindingParam::N => self.n,
            BindingParam::Ec50 => self.ec50,
        }
    }

    pub fn set(&mut self, param: BindingParam, value: f64) {
        match param {
            BindingParam::Vhalf => self.vhalf = value,
            BindingParam::Kmax => self.kmax = value,
            BindingParam::Ku => self.ku = value,
            BindingParam::N => self.n = value,
            BindingParam::Ec50 => self.ec50 = value,
        }
    }

    /// Copy with a single parameter replaced
    #[must_use]
    pub fn with_value(mut self, param: BindingParam, value: f64) -> Self {
        self.set(param, value);
        self
    }

    /// Decode a log10-encoded vector: applies `10^x` to Kmax, Ku and EC50
    #[must_use]
    pub fn exponentiated(&self) -> Self {
        let mut out = *self;
        for param in BindingParam::ALL {
            if param.is_log_encoded() {
                out.set(param, 10f64.powf(self.get(param)));
            }
        }
        out
    }

    /// Values in [`BindingParam::ALL`] order
    #[must_use]
    pub fn to_values(&self) -> [f64; 5] {
        BindingParam::ALL.map(|p| self.get(p))
    }
}

/// Read-only binding parameter library.
///
/// Drug order is the insertion order and defines the population order seen by
/// the range builders.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingLibrary {
    entries: Vec<(String, ParameterSet)>,
}

impl BindingLibrary {
    pub fn new(entries: Vec<(String, ParameterSet)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(RangeError::EmptyLibrary);
        }
        for (i, (name, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(other, _)| other == name) {
                return Err(RangeError::DuplicateDrug(name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Drug identifiers in library order
    pub fn drugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, drug: &str) -> Result<&ParameterSet> {
        self.entries
            .iter()
            .find(|(name, _)| name == drug)
            .map(|(_, params)| params)
            .ok_or_else(|| RangeError::UnknownDrug(drug.to_string()))
    }

    pub fn value(&self, drug: &str, param: BindingParam) -> Result<f64> {
        self.get(drug).map(|p| p.get(param))
    }

    /// Values of `param` across every drug, in library order
    #[must_use]
    pub fn population(&self, param: BindingParam) -> Vec<f64> {
        self.entries.iter().map(|(_, p)| p.get(param)).collect()
    }
}
