//! Sweep axes and N-dimensional result storage.

use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::model::{BindingParam, CandidateParameters};

/// One swept parameter and the values it takes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub param: BindingParam,
    pub values: Vec<f64>,
}

impl SweepAxis {
    #[must_use]
    pub fn new(param: BindingParam, values: Vec<f64>) -> Self {
        Self { param, values }
    }
}

/// Cartesian sweep around a base candidate.
///
/// Axis values use the same encoding as `base` (log10 for Kmax/Ku/EC50 when
/// the evaluator runs with `log_transform`). Parameters without an axis keep
/// their base value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub base: CandidateParameters,
    pub axes: Vec<SweepAxis>,
}

impl SweepConfig {
    /// Number of points along each axis
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(|a| a.values.len()).collect()
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.axes.iter().map(|a| a.values.len()).product()
    }

    pub fn validate(&self) -> Result<(), SweepError> {
        if self.axes.is_empty() {
            return Err(SweepError::Config(
                "at least one sweep axis required".to_string(),
            ));
        }
        for (i, axis) in self.axes.iter().enumerate() {
            if axis.values.is_empty() {
                return Err(SweepError::Config(format!("axis {} has no values", axis.param)));
            }
            if self.axes[..i].iter().any(|a| a.param == axis.param) {
                return Err(SweepError::Config(format!(
                    "{} is swept more than once",
                    axis.param
                )));
            }
        }
        Ok(())
    }

    /// Candidate at the given grid indices
    #[must_use]
    pub fn candidate_at(&self, indices: &[usize]) -> CandidateParameters {
        self.axes
            .iter()
            .zip(indices)
            .fold(self.base, |candidate, (axis, &idx)| {
                candidate.with_value(axis.param, axis.values[idx])
            })
    }
}

/// N-dimensional grid over a flat row-major vector (last axis varies fastest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T> SweepGrid<T> {
    /// Wrap row-major `data`; `None` if its length does not match `shape`
    pub fn from_data(shape: Vec<usize>, data: Vec<T>) -> Option<Self> {
        if data.len() != shape.iter().product::<usize>() {
            return None;
        }
        let strides = strides_for(&shape);
        Some(Self {
            data,
            shape,
            strides,
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn flat_index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.shape.len() {
            return None;
        }
        indices
            .iter()
            .zip(&self.shape)
            .zip(&self.strides)
            .try_fold(0, |acc, ((&idx, &size), &stride)| {
                (idx < size).then_some(acc + idx * stride)
            })
    }

    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        self.flat_index(indices).map(|i| &self.data[i])
    }

    /// All index tuples in row-major order
    pub fn indices(&self) -> GridIndices {
        GridIndices::new(&self.shape)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec<usize>, &T)> {
        self.indices().zip(self.data.iter())
    }

    /// New grid of the same shape with `f` applied to every cell
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> SweepGrid<U> {
        SweepGrid {
            data: self.data.iter().map(f).collect(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }
}

fn strides_for(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Row-major iterator over the index tuples of a grid shape
pub struct GridIndices {
    shape: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl GridIndices {
    #[must_use]
    pub fn new(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            current: vec![0; shape.len()],
            done: shape.is_empty() || shape.contains(&0),
        }
    }
}

impl Iterator for GridIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();

        // odometer increment, last axis fastest
        self.done = true;
        for axis in (0..self.shape.len()).rev() {
            self.current[axis] += 1;
            if self.current[axis] < self.shape[axis] {
                self.done = false;
                break;
            }
            self.current[axis] = 0;
        }

        Some(item)
    }
}
