//! Small array utilities for sparse-regression system identification:
//! reordering linear constraint matrices between row and target layouts, and
//! validating control inputs against state trajectories.

pub mod core;

pub use crate::core::axes::{AxesArray, AxisRole};
pub use crate::core::constraints::{reorder_constraints, reorder_constraints_str, ConstraintOrder};
pub use crate::core::control::{validate_control_trajectory, validate_control_variables};
pub use crate::core::errors::{Result, UtilsError};
