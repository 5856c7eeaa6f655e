//! Infinity-norm balls.

use num_traits::Zero as _;

use super::{check_finite, check_radius, offset_from, shift_back, Constraint};
use crate::error::Result;
use crate::expr::{Expr, Vector};

/// The ball `{x : ‖x − c‖∞ ≤ r}`, an axis-aligned cube.
#[derive(Debug, Clone, PartialEq)]
pub struct BallInf {
    center: Option<Vec<f64>>,
    radius: f64,
}

impl BallInf {
    /// Creates a ball with the given center (`None` for the origin).
    ///
    /// # Errors
    ///
    /// Same validation as [`Ball2::new`](super::Ball2::new).
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

impl Constraint for BallInf {
    fn name(&self) -> &'static str {
        "BallInf"
    }

    /// `Σ max(0, |u_i − c_i| − r)²`
    fn distance_squared(&self, u: &Vector) -> Result<Expr> {
        let r = Expr::constant(self.radius);
        let excess = offset_from(self.center(), u)?
            .map(|x| Expr::square(Expr::max(Expr::abs(x.clone()) - r.clone(), Expr::zero())));
        Ok(excess.sum())
    }

    /// `c_i + clamp(u_i − c_i, −r, r)`
    fn project(&self, u: &Vector) -> Result<Vector> {
        let r = self.radius;
        let clamped = offset_from(self.center(), u)?
            .map(|x| Expr::clamp(x.clone(), Expr::constant(-r), Expr::constant(r)));
        shift_back(self.center(), clamped)
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_compact(&self) -> bool {
        true
    }
}
