//! Euclidean balls.

use num_traits::Zero as _;

use super::{check_finite, check_radius, offset_from, shift_back, Constraint};
use crate::error::Result;
use crate::expr::{Expr, Vector};

/// The Euclidean ball `{x : ‖x − c‖ ≤ r}`.
///
/// Without a center the ball sits at the origin and accepts operands of any
/// length; with a center the operand must match its dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball2 {
    center: Option<Vec<f64>>,
    radius: f64,
}

impl Ball2 {
    /// Creates a ball with the given center (`None` for the origin).
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error if the radius is not positive and
    /// finite or the center has a non-finite component.
    pub fn new(center: Option<Vec<f64>>, radius: f64) -> Result<Self> {
        check_radius(radius)?;
        if let Some(c) = &center {
            check_finite("center", c)?;
        }
        Ok(Self { center, radius })
    }

    pub fn new_at_origin_with_radius(radius: f64) -> Result<Self> {
        Self::new(None, radius)
    }

    pub fn center(&self) -> Option<&[f64]> {
        self.center.as_deref()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Constraint for Ball2 {
    fn name(&self) -> &'static str {
        "Ball2"
    }

    /// `max(0, ‖u − c‖ − r)²`
    fn distance_squared(&self, u: &Vector) -> Result<Expr> {
        let norm = offset_from(self.center(), u)?.norm2();
        let excess = Expr::max(norm - Expr::constant(self.radius), Expr::zero());
        Ok(Expr::square(excess))
    }

    /// `c + (u − c)·r / max(r, ‖u − c‖)`
    fn project(&self, u: &Vector) -> Result<Vector> {
        let d = offset_from(self.center(), u)?;
        let r = Expr::constant(self.radius);
        let denominator = Expr::max(r.clone(), d.norm2());
        let scaled = d.map(|x| x.clone() * r.clone() / denominator.clone());
        shift_back(self.center(), scaled)
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_compact(&self) -> bool {
        true
    }
}
