//! Reordering of linear constraint matrices defined over a coefficient tensor
//! of shape `(n_targets, n_features)`.
//!
//! A constraint row holds one entry per coefficient, flattened either in
//! *target order* (`target * n_features + feature`, one block per target) or in
//! *row order* (`feature * n_targets + target`, targets interleaved within each
//! feature). Solvers consume row order while constraint encoders usually build
//! target order, so this module converts between the two.

use std::fmt;
use std::str::FromStr;

use log::debug;
use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis};

use crate::core::errors::{Result, UtilsError};

/// The flat layout to produce when reordering constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstraintOrder {
    /// Interleave targets within each feature block. Converts target order to row order.
    #[default]
    Row,
    /// Group all features of one target together. Converts row order to target order.
    Target,
}

impl ConstraintOrder {
    /// Builds the gather permutation for this layout.
    ///
    /// Entry `i` of the reordered row is taken from entry `perm[i]` of the
    /// input row. The `Row` and `Target` permutations are inverses of each other.
    ///
    /// # Arguments
    /// * `n_features` - Number of candidate features per target.
    /// * `n_targets` - Number of regression targets.
    pub fn permutation(&self, n_features: usize, n_targets: usize) -> Vec<usize> {
        let len = n_features * n_targets;
        match self {
            ConstraintOrder::Row => (0..len)
                .map(|i| (i % n_targets) * n_features + i / n_targets)
                .collect(),
            ConstraintOrder::Target => (0..len)
                .map(|j| (j % n_features) * n_targets + j / n_features)
                .collect(),
        }
    }

    pub fn inverse(&self) -> ConstraintOrder {
        match self {
            ConstraintOrder::Row => ConstraintOrder::Target,
            ConstraintOrder::Target => ConstraintOrder::Row,
        }
    }
}

impl fmt::Display for ConstraintOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintOrder::Row => f.write_str("row"),
            ConstraintOrder::Target => f.write_str("target"),
        }
    }
}

impl FromStr for ConstraintOrder {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            // "feature" is the historical name of the default layout.
            "row" | "feature" => Ok(ConstraintOrder::Row),
            "target" => Ok(ConstraintOrder::Target),
            other => Err(UtilsError::InvalidOrder(other.to_string())),
        }
    }
}

/// Permutes the last axis of a constraint array into the requested layout.
///
/// A 1-D input is a single constraint row; a 2-D input is a batch of rows and
/// each row is permuted identically. The row axis is left untouched.
///
/// # Arguments
/// * `constraints` - Constraint coefficients; the last axis has length `n_targets * n_features`.
/// * `n_features` - Number of candidate features per target.
/// * `order` - Layout of the returned array.
///
/// # Returns
/// A new array with the same shape, or an error if the rank is not 1 or 2 or
/// the last axis is not a whole multiple of `n_features`.
pub fn reorder_constraints<A, S, D>(
    constraints: &ArrayBase<S, D>,
    n_features: usize,
    order: ConstraintOrder,
) -> Result<Array<A, D>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: RemoveAxis,
{
    let ndim = constraints.ndim();
    if ndim != 1 && ndim != 2 {
        return Err(UtilsError::InvalidRank(ndim));
    }

    let last = Axis(ndim - 1);
    let len = constraints.len_of(last);
    if n_features == 0 || len % n_features != 0 {
        return Err(UtilsError::NotDivisible { len, n_features });
    }
    let n_targets = len / n_features;

    debug!(
        "Reordering constraints of shape {:?} to {} order (n_features={}, n_targets={})",
        constraints.shape(),
        order,
        n_features,
        n_targets
    );

    if len == 0 {
        return Ok(constraints.to_owned());
    }

    let perm = order.permutation(n_features, n_targets);
    Ok(constraints.select(last, &perm))
}

/// Like [`reorder_constraints`], with the layout given by name
/// (`"row"`, `"feature"` or `"target"`).
pub fn reorder_constraints_str<A, S, D>(
    constraints: &ArrayBase<S, D>,
    n_features: usize,
    output_order: &str,
) -> Result<Array<A, D>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: RemoveAxis,
{
    let order = output_order.parse::<ConstraintOrder>()?;
    reorder_constraints(constraints, n_features, order)
}
