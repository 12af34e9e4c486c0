//! Reference data file: the drug binding library and regime thresholds.
//!
//! ```yaml
//! drugs:
//!   - name: verapamil
//!     Vhalf: -100.0
//!     Kmax: 46460.0
//!     Ku: 7.927e-4
//!     N: 1.043
//!     EC50: 9.184e6
//! thresholds:
//!   Ku: [1.0e-4, 1.0e-2]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use trapsweep_core::model::ParameterSet;
use trapsweep_core::{BindingLibrary, BindingParam, CategoryThresholds, RangeError};

/// Default reference data compiled into the binary
const BUNDLED_REFERENCE: &str = include_str!("../data/reference.yaml");

/// One drug entry; parameter keys use the canonical names
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrugRecord {
    pub name: String,
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

impl DrugRecord {
    fn parameters(&self) -> ParameterSet {
        ParameterSet {
            vhalf: self.vhalf,
            kmax: self.kmax,
            ku: self.ku,
            n: self.n,
            ec50: self.ec50,
        }
    }
}

/// Contents of a reference data file
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceData {
    pub drugs: Vec<DrugRecord>,
    /// Parameter name to `[low, high]`
    #[serde(default)]
    pub thresholds: BTreeMap<String, (f64, f64)>,
}

#[derive(Debug)]
pub enum ReferenceError {
    Io(String),
    Parse(String),
    Invalid(RangeError),
}

impl std::fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceError::Io(msg) => write!(f, "IO error: {}", msg),
            ReferenceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ReferenceError::Invalid(err) => write!(f, "Invalid reference data: {}", err),
        }
    }
}

impl std::error::Error for ReferenceError {}

impl From<RangeError> for ReferenceError {
    fn from(err: RangeError) -> Self {
        ReferenceError::Invalid(err)
    }
}

impl ReferenceData {
    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// The reference data shipped with the binary
    pub fn bundled() -> Result<Self, ReferenceError> {
        Self::from_yaml(BUNDLED_REFERENCE)
            .map_err(|e| ReferenceError::Parse(format!("bundled reference data: {}", e)))
    }

    /// Read a reference data file
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReferenceError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
            .map_err(|e| ReferenceError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// `path` if given, otherwise the bundled data
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, ReferenceError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    /// Build the binding library; drug order follows the file
    pub fn library(&self) -> Result<BindingLibrary, RangeError> {
        BindingLibrary::new(
            self.drugs
                .iter()
                .map(|d| (d.name.clone(), d.parameters()))
                .collect(),
        )
    }

    pub fn thresholds(&self) -> Result<CategoryThresholds, RangeError> {
        let bounds = self
            .thresholds
            .iter()
            .map(|(name, &bounds)| name.parse::<BindingParam>().map(|param| (param, bounds)))
            .collect::<Result<Vec<_>, _>>()?;
        CategoryThresholds::new(bounds)
    }

    /// Library and thresholds together, validated
    pub fn build(&self) -> Result<(BindingLibrary, CategoryThresholds), ReferenceError> {
        Ok((self.library()?, self.thresholds()?))
    }
}
