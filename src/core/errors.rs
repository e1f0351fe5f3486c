//! Error type shared by the axis, constraint and control utilities.

use thiserror::Error;

use crate::core::axes::AxisRole;

pub type Result<T> = std::result::Result<T, UtilsError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilsError {
    #[error("Constraint length {len} is not divisible by n_features ({n_features}).")]
    NotDivisible { len: usize, n_features: usize },

    #[error("Constraint array must be 1- or 2-dimensional, got {0} dimensions.")]
    InvalidRank(usize),

    #[error("Unrecognized output order '{0}'. Expected 'row' or 'target'.")]
    InvalidOrder(String),

    #[error("Unknown axis name '{0}'.")]
    UnknownAxis(String),

    #[error("Invalid axis mapping: {0}")]
    InvalidAxes(String),

    #[error("Array has no {0} axis.")]
    MissingAxis(AxisRole),

    #[error("x and u must contain the same number of trajectories ({x} != {u}).")]
    LengthMismatch { x: usize, u: usize },

    #[error(
        "Control variables u must have the same number of time steps as x \
         in trajectory {trajectory} ({u} != {x})."
    )]
    TimeMismatch { trajectory: usize, x: usize, u: usize },
}
