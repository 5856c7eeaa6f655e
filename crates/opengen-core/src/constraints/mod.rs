//! Constraint sets.
//!
//! A constraint is a subset of ℝⁿ that restricts or penalizes an optimization
//! vector `u`. The generator treats sets polymorphically through the
//! [`Constraint`] trait and chooses between a projection-based formulation and
//! a penalty formulation from the answers it gives.
//!
//! New set kinds are added by implementing [`Constraint`]; nothing in this
//! crate needs to change.
//!
//! # Example
//!
//! ```
//! use opengen_core::constraints::{Ball2, Constraint, Zero};
//! use opengen_core::expr::Vector;
//!
//! let u = Vector::from_values(&[3.0, 4.0]);
//!
//! let zero = Zero::new();
//! assert_eq!(zero.distance_squared(&u).unwrap().as_constant(), Some(25.0));
//! assert!(zero.project(&u).unwrap_err().is_unsupported());
//!
//! let ball = Ball2::new_at_origin_with_radius(1.0).unwrap();
//! let projected = ball.project(&u).unwrap();
//! assert_eq!(projected.as_constants(), Some(vec![0.6, 0.8]));
//! ```

mod ball2;
mod ball_inf;
mod cartesian_product;
mod finite_set;
mod no_constraints;
mod rectangle;
mod zero;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use crate::error::{OpengenError, Result};
use crate::expr::{Expr, Vector};

pub use ball2::Ball2;
pub use ball_inf::BallInf;
pub use cartesian_product::CartesianProduct;
pub use finite_set::FiniteSet;
pub use no_constraints::NoConstraints;
pub use rectangle::Rectangle;
pub use zero::Zero;

/// Uniform contract of every constraint set.
///
/// All operations are pure: they never mutate the set and calls on the same
/// instance do not influence each other.
///
/// A set may implement [`distance_squared`](Constraint::distance_squared),
/// [`project`](Constraint::project), or both. A missing operation returns
/// [`OpengenError::Unsupported`]; there are no capability flags, so callers
/// discover absence by invoking the operation.
pub trait Constraint: Debug + Send + Sync {
    /// Short name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Squared Euclidean distance from `u` to the set.
    ///
    /// For convex sets that also implement [`project`](Constraint::project)
    /// this equals `‖u − project(u)‖²`.
    fn distance_squared(&self, u: &Vector) -> Result<Expr>;

    /// Point of the set nearest to `u`.
    ///
    /// Unique when the set is convex; nonconvex sets document their tie-break.
    fn project(&self, u: &Vector) -> Result<Vector>;

    /// Whether the set is convex. Constant for a given set.
    fn is_convex(&self) -> bool;

    /// Whether the set is closed and bounded. Constant for a given set.
    fn is_compact(&self) -> bool;
}

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn distance_squared(&self, u: &Vector) -> Result<Expr> {
        (**self).distance_squared(u)
    }

    fn project(&self, u: &Vector) -> Result<Vector> {
        (**self).project(u)
    }

    fn is_convex(&self) -> bool {
        (**self).is_convex()
    }

    fn is_compact(&self) -> bool {
        (**self).is_compact()
    }
}

/// Validates a ball radius.
fn check_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(OpengenError::InvalidParameter(format!(
            "radius must be positive and finite, got {}",
            radius
        )))
    }
}

/// Validates a set-defining point.
fn check_finite(what: &str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(OpengenError::InvalidParameter(format!(
            "{} must have finite components",
            what
        )))
    }
}

/// Returns `u - center`, or `u` itself when the set is centered at the origin.
fn offset_from(center: Option<&[f64]>, u: &Vector) -> Result<Vector> {
    match center {
        None => Ok(u.clone()),
        Some(c) => {
            u.check_len(c.len())?;
            u.checked_sub(&Vector::from_values(c))
        }
    }
}

/// Inverse of [`offset_from`].
fn shift_back(center: Option<&[f64]>, d: Vector) -> Result<Vector> {
    match center {
        None => Ok(d),
        Some(c) => d.checked_add(&Vector::from_values(c)),
    }
}
