//! The zero set `{0}`.

use super::Constraint;
use crate::error::{OpengenError, Result};
use crate::expr::{Expr, Vector};

/// The singleton set containing only the origin.
///
/// Used to force a vector, or a block of one, to exactly zero. The set has no
/// dimension of its own and accepts operands of any length, including zero.
///
/// Projection is not offered: [`project`](Constraint::project) always fails
/// with [`OpengenError::Unsupported`], which steers the generator to the
/// penalty formulation built from [`distance_squared`](Constraint::distance_squared).
///
/// # Example
///
/// ```
/// use opengen_core::constraints::{Constraint, Zero};
/// use opengen_core::expr::Vector;
///
/// let zero = Zero::new();
/// let d = zero.distance_squared(&Vector::from_values(&[3.0, 4.0])).unwrap();
/// assert_eq!(d.as_constant(), Some(25.0));
/// assert!(zero.is_convex() && zero.is_compact());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Zero {
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for Zero {
    fn name(&self) -> &'static str {
        "Zero"
    }

    fn distance_squared(&self, u: &Vector) -> Result<Expr> {
        Ok(u.norm2_squared())
    }

    fn project(&self, _u: &Vector) -> Result<Vector> {
        tracing::trace!("projection onto the zero set requested");
        Err(OpengenError::unsupported(self.name(), "project"))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_compact(&self) -> bool {
        true
    }
}
