//! Validation of control inputs `u` against state trajectories `x` before they
//! enter a system-identification fit.

use log::debug;
use ndarray::Axis;

use crate::core::axes::{AxesArray, AxisRole};
use crate::core::errors::{Result, UtilsError};

/// Checks that every control trajectory lines up in time with its state trajectory.
///
/// `x` and `u` are paired element-wise: `u[i]` is the control signal applied
/// along `x[i]`. A 1-D control array is read as a single control channel and
/// returned with shape `(n_time, 1)`.
///
/// # Arguments
/// * `x` - State trajectories.
/// * `u` - Control trajectories, one per state trajectory.
/// * `trim_last_point` - Drop the last time step of each control, for
///   one-step-ahead setups where the final control has no next state.
///
/// # Returns
/// The validated controls (trimmed if requested), or an error if the number of
/// trajectories differs or any pair disagrees on the number of time steps.
/// Inputs are never modified.
pub fn validate_control_variables(
    x: &[AxesArray],
    u: &[AxesArray],
    trim_last_point: bool,
) -> Result<Vec<AxesArray>> {
    if x.len() != u.len() {
        return Err(UtilsError::LengthMismatch { x: x.len(), u: u.len() });
    }

    let validated = x
        .iter()
        .zip(u)
        .enumerate()
        .map(|(trajectory, (x_i, u_i))| check_control_shape(trajectory, x_i, u_i, trim_last_point))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Validated controls for {} trajectories (trim_last_point={})",
        validated.len(),
        trim_last_point
    );
    Ok(validated)
}

/// Single-trajectory form of [`validate_control_variables`].
pub fn validate_control_trajectory(
    x: &AxesArray,
    u: &AxesArray,
    trim_last_point: bool,
) -> Result<AxesArray> {
    check_control_shape(0, x, u, trim_last_point)
}

fn check_control_shape(
    trajectory: usize,
    x: &AxesArray,
    u: &AxesArray,
    trim_last_point: bool,
) -> Result<AxesArray> {
    let x_time = x.n_time()?;
    let u_time = u.n_time()?;
    if x_time != u_time {
        return Err(UtilsError::TimeMismatch { trajectory, x: x_time, u: u_time });
    }

    let u = if u.ndim() == 1 { as_single_channel(u)? } else { u.clone() };
    u.n_coord()?;

    // An empty trajectory stays empty when trimmed.
    if trim_last_point && u_time > 0 {
        u.drop_last_time()
    } else {
        Ok(u)
    }
}

// A rank-1 array with a time axis becomes an (n_time, 1) column.
fn as_single_channel(u: &AxesArray) -> Result<AxesArray> {
    let column = u.data().clone().insert_axis(Axis(1));
    AxesArray::new(column, &[(AxisRole::Time, 0), (AxisRole::Coord, 1)])
}
