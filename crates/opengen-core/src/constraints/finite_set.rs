//! Finite collections of points.

use num_traits::Zero as _;

use super::{check_finite, Constraint};
use crate::error::{OpengenError, Result};
use crate::expr::{Expr, Vector};

/// A finite set of points `{p_1, ..., p_k}`.
///
/// Nonconvex unless all listed points coincide. When several points are
/// equally close to the operand, projection returns the one listed first.
#[derive(Debug, Clone, PartialEq)]
pub struct FiniteSet {
    points: Vec<Vec<f64>>,
}

impl FiniteSet {
    /// Creates a finite set.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error if `points` is empty, if the points
    /// have different dimensions, or if any coordinate is not finite.
    pub fn new(points: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = points.first() else {
            return Err(OpengenError::InvalidParameter(
                "a finite set needs at least one point".into(),
            ));
        };
        let dim = first.len();
        for (i, p) in points.iter().enumerate() {
            if p.len() != dim {
                return Err(OpengenError::InvalidParameter(format!(
                    "point {} has dimension {}, expected {}",
                    i,
                    p.len(),
                    dim
                )));
            }
            check_finite("points", p)?;
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    pub fn dimension(&self) -> usize {
        self.points[0].len()
    }

    /// Squared distance from `u` to every point, in order.
    fn distances(&self, u: &Vector) -> Result<Vec<Expr>> {
        u.check_len(self.dimension())?;
        self.points
            .iter()
            .map(|p| Ok(u.checked_sub(&Vector::from_values(p))?.norm2_squared()))
            .collect()
    }
}

impl Constraint for FiniteSet {
    fn name(&self) -> &'static str {
        "FiniteSet"
    }

    fn distance_squared(&self, u: &Vector) -> Result<Expr> {
        Ok(self
            .distances(u)?
            .into_iter()
            .reduce(Expr::min)
            .unwrap_or_else(Expr::zero))
    }

    fn project(&self, u: &Vector) -> Result<Vector> {
        let distances = self.distances(u)?;
        let mut best = Vector::from_values(&self.points[0]);
        let mut best_distance = distances[0].clone();
        for (p, d) in self.points.iter().zip(&distances).skip(1) {
            // `<=` keeps the earlier point on ties
            best = best.zip_with(&Vector::from_values(p), |kept, candidate| {
                Expr::if_le(
                    best_distance.clone(),
                    d.clone(),
                    kept.clone(),
                    candidate.clone(),
                )
            })?;
            best_distance = Expr::min(best_distance, d.clone());
        }
        Ok(best)
    }

    fn is_convex(&self) -> bool {
        let first = &self.points[0];
        self.points.iter().all(|p| p == first)
    }

    fn is_compact(&self) -> bool {
        true
    }
}
