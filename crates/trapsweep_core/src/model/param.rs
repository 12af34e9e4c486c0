//! Binding parameter names and regime labels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// One of the five parameters of the state-dependent (trapping) binding model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BindingParam {
    /// Half-activation voltage of the drug-bound trapping gate (mV)
    Vhalf,
    /// Maximum drug effect rate constant
    Kmax,
    /// Unbinding rate constant (1/ms)
    Ku,
    /// Hill coefficient of the binding reaction
    N,
    /// Half-maximal concentration (in units of nM^N)
    #[serde(rename = "EC50")]
    Ec50,
}

impl BindingParam {
    /// All parameters in canonical order. Positional parameter vectors use this order.
    pub const ALL: [BindingParam; 5] = [
        BindingParam::Vhalf,
        BindingParam::Kmax,
        BindingParam::Ku,
        BindingParam::N,
        BindingParam::Ec50,
    ];

    /// Canonical name as used in reference data files
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Vhalf => "Vhalf",
            Self::Kmax => "Kmax",
            Self::Ku => "Ku",
            Self::N => "N",
            Self::Ec50 => "EC50",
        }
    }

    /// Position of this parameter in [`BindingParam::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Vhalf => 0,
            Self::Kmax => 1,
            Self::Ku => 2,
            Self::N => 3,
            Self::Ec50 => 4,
        }
    }

    /// Parameters that are carried in log10 encoding by positional candidate vectors
    #[must_use]
    pub fn is_log_encoded(self) -> bool {
        matches!(self, Self::Kmax | Self::Ku | Self::Ec50)
    }
}

impl fmt::Display for BindingParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BindingParam {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BindingParam::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RangeError::UnknownParameter(s.to_string()))
    }
}

/// Population regime of a parameter value relative to its category thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    Low,
    Mid,
    High,
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Low => write!(f, "low"),
            Regime::Mid => write!(f, "mid"),
            Regime::High => write!(f, "high"),
        }
    }
}
