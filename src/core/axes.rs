//! Defines the axis-labeled array used to carry trajectories through the
//! identification pipeline, where each dimension has a named role instead of a
//! positional convention.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use ndarray::{ArrayD, Axis, Slice};

use crate::core::errors::{Result, UtilsError};

/// The logical role of one dimension of an [`AxesArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisRole {
    /// Sequential samples over time.
    Time,
    /// State or feature components at a single time step.
    Coord,
    /// Independent samples or trajectories stacked in one array.
    Sample,
    /// A spatial grid dimension (PDE data).
    Spatial,
}

impl AxisRole {
    pub fn name(&self) -> &'static str {
        match self {
            AxisRole::Time => "time",
            AxisRole::Coord => "coord",
            AxisRole::Sample => "sample",
            AxisRole::Spatial => "spatial",
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisRole {
    type Err = UtilsError;

    /// Accepts both the prefixed (`"ax_time"`) and bare (`"time"`) spellings.
    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix("ax_").unwrap_or(s) {
            "time" => Ok(AxisRole::Time),
            "coord" => Ok(AxisRole::Coord),
            "sample" => Ok(AxisRole::Sample),
            "spatial" => Ok(AxisRole::Spatial),
            _ => Err(UtilsError::UnknownAxis(s.to_string())),
        }
    }
}

/// A numeric array whose dimensions each carry exactly one [`AxisRole`].
///
/// The mapping is validated once at construction: every dimension has a role
/// and no role labels two dimensions. Slicing produces a new owned array with
/// the mapping carried over.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesArray {
    data: ArrayD<f64>,
    // roles[d] is the role of dimension d
    roles: Vec<AxisRole>,
}

impl AxesArray {
    /// Wraps `data`, labelling dimensions according to `axes` (role, dimension index) pairs.
    ///
    /// # Returns
    /// `UtilsError::InvalidAxes` if a role is repeated, an index is out of range
    /// or repeated, or the number of pairs differs from the array rank.
    pub fn new(data: ArrayD<f64>, axes: &[(AxisRole, usize)]) -> Result<Self> {
        let ndim = data.ndim();
        if axes.len() != ndim {
            return Err(UtilsError::InvalidAxes(format!(
                "{} axes named for an array of rank {}.",
                axes.len(),
                ndim
            )));
        }

        let mut slots: Vec<Option<AxisRole>> = vec![None; ndim];
        for (i, &(role, index)) in axes.iter().enumerate() {
            if axes[..i].iter().any(|&(seen, _)| seen == role) {
                return Err(UtilsError::InvalidAxes(format!(
                    "axis '{}' is named more than once.",
                    role
                )));
            }
            if index >= ndim {
                return Err(UtilsError::InvalidAxes(format!(
                    "axis '{}' maps to dimension {} but the array has rank {}.",
                    role, index, ndim
                )));
            }
            if let Some(other) = slots[index] {
                return Err(UtilsError::InvalidAxes(format!(
                    "dimension {} is claimed by both '{}' and '{}'.",
                    index, other, role
                )));
            }
            slots[index] = Some(role);
        }

        // axes.len() == ndim and no index was reused, so every slot is filled.
        let roles = slots.into_iter().flatten().collect();
        Ok(AxesArray { data, roles })
    }

    /// Same as [`AxesArray::new`] but takes axis names such as `"ax_time"`.
    pub fn from_names(data: ArrayD<f64>, axes: &[(&str, usize)]) -> Result<Self> {
        let parsed = axes
            .iter()
            .map(|&(name, index)| name.parse::<AxisRole>().map(|role| (role, index)))
            .collect::<Result<Vec<_>>>()?;
        AxesArray::new(data, &parsed)
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn into_data(self) -> ArrayD<f64> {
        self.data
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Dimension index labelled by `role`, if any.
    pub fn axis(&self, role: AxisRole) -> Option<usize> {
        self.roles.iter().position(|&r| r == role)
    }

    /// Role/index pairs in dimension order.
    pub fn axes(&self) -> Vec<(AxisRole, usize)> {
        self.roles.iter().copied().zip(0..).collect()
    }

    pub fn extent(&self, role: AxisRole) -> Option<usize> {
        self.axis(role).map(|d| self.data.len_of(Axis(d)))
    }

    /// Number of time steps.
    pub fn n_time(&self) -> Result<usize> {
        self.extent(AxisRole::Time).ok_or(UtilsError::MissingAxis(AxisRole::Time))
    }

    /// Number of state/feature components.
    pub fn n_coord(&self) -> Result<usize> {
        self.extent(AxisRole::Coord).ok_or(UtilsError::MissingAxis(AxisRole::Coord))
    }

    /// Restricts the time axis to `range`, leaving all other axes whole.
    pub fn slice_time(&self, range: Range<usize>) -> Result<AxesArray> {
        let t = self.axis(AxisRole::Time).ok_or(UtilsError::MissingAxis(AxisRole::Time))?;
        let n_time = self.data.len_of(Axis(t));
        if range.start > range.end || range.end > n_time {
            return Err(UtilsError::InvalidAxes(format!(
                "time range {}..{} is out of bounds for {} time steps.",
                range.start, range.end, n_time
            )));
        }
        let data = self.data.slice_axis(Axis(t), Slice::from(range)).to_owned();
        Ok(AxesArray { data, roles: self.roles.clone() })
    }

    /// Drops the final time step.
    pub fn drop_last_time(&self) -> Result<AxesArray> {
        let n_time = self.n_time()?;
        if n_time == 0 {
            return Err(UtilsError::InvalidAxes(
                "cannot drop the last time step of an empty time axis.".to_string(),
            ));
        }
        self.slice_time(0..n_time - 1)
    }
}
