//! The whole space.

use num_traits::Zero as _;

use super::Constraint;
use crate::error::Result;
use crate::expr::{Expr, Vector};

/// The unconstrained set ℝⁿ, for any `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoConstraints;

impl NoConstraints {
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for NoConstraints {
    fn name(&self) -> &'static str {
        "NoConstraints"
    }

    fn distance_squared(&self, _u: &Vector) -> Result<Expr> {
        Ok(Expr::zero())
    }

    fn project(&self, u: &Vector) -> Result<Vector> {
        Ok(u.clone())
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_compact(&self) -> bool {
        false
    }
}
