//! Choosing how a constraint enters the generated solver.
//!
//! A set that can be projected onto is handled exactly by projected steps.
//! Otherwise the generator falls back to a penalty built from the squared
//! distance to the set.
//!
//! Logging levels:
//! - **DEBUG**: the formulation chosen for each set
//! - **TRACE**: the rendered expressions

use crate::constraints::Constraint;
use crate::error::Result;
use crate::expr::{Expr, Vector};

/// How a constraint is encoded for a given operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Formulation {
    /// Exact projection of the operand onto the set.
    Projection(Vector),
    /// Squared distance to the set, to be penalized.
    Penalty(Expr),
}

impl Formulation {
    /// Picks the formulation for `set` at operand `u`.
    ///
    /// Convex sets use their projection when they have one. Nonconvex sets,
    /// and sets whose projection is unsupported, get a penalty. Errors other
    /// than an unsupported projection propagate unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use opengen_core::constraints::{Ball2, Zero};
    /// use opengen_core::expr::Vector;
    /// use opengen_core::Formulation;
    ///
    /// let u = Vector::symbols("u", 3);
    ///
    /// let ball = Ball2::new_at_origin_with_radius(1.0).unwrap();
    /// assert!(Formulation::select(&ball, &u).unwrap().is_projection());
    ///
    /// let zero = Zero::new();
    /// assert!(Formulation::select(&zero, &u).unwrap().is_penalty());
    /// ```
    pub fn select<C: Constraint + ?Sized>(set: &C, u: &Vector) -> Result<Self> {
        if !set.is_convex() {
            tracing::debug!(constraint = set.name(), "nonconvex set, using penalty formulation");
            return Self::penalty(set, u);
        }
        match set.project(u) {
            Ok(projection) => {
                tracing::debug!(constraint = set.name(), "using projection formulation");
                tracing::trace!(projection = %projection);
                Ok(Formulation::Projection(projection))
            }
            Err(err) if err.is_unsupported() => {
                tracing::debug!(
                    constraint = set.name(),
                    "projection unsupported, using penalty formulation"
                );
                Self::penalty(set, u)
            }
            Err(err) => Err(err),
        }
    }

    fn penalty<C: Constraint + ?Sized>(set: &C, u: &Vector) -> Result<Self> {
        let distance = set.distance_squared(u)?;
        tracing::trace!(distance_squared = %distance);
        Ok(Formulation::Penalty(distance))
    }

    pub fn is_projection(&self) -> bool {
        matches!(self, Formulation::Projection(_))
    }

    pub fn is_penalty(&self) -> bool {
        matches!(self, Formulation::Penalty(_))
    }
}
