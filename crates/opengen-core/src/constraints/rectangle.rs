//! Boxes with optional bounds.

use super::Constraint;
use crate::error::{OpengenError, Result};
use crate::expr::{Expr, Vector};

/// The box `{x : xmin ≤ x ≤ xmax}`.
///
/// Either bound may be omitted, and individual components may be infinite,
/// so half-spaces aligned with the axes are rectangles too.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    xmin: Option<Vec<f64>>,
    xmax: Option<Vec<f64>>,
}

impl Rectangle {
    /// Creates a rectangle from its bounds.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error if both bounds are missing, if
    /// their lengths differ, if a bound is NaN, if a lower bound is `+∞` or an
    /// upper bound is `-∞`, or if `xmin[i] > xmax[i]`.
    pub fn new(xmin: Option<Vec<f64>>, xmax: Option<Vec<f64>>) -> Result<Self> {
        let invalid = |msg: String| Err(OpengenError::InvalidParameter(msg));
        match (&xmin, &xmax) {
            (None, None) => return invalid("at least one of xmin and xmax is required".into()),
            (Some(lo), Some(hi)) if lo.len() != hi.len() => {
                return invalid(format!(
                    "xmin and xmax have different lengths ({} and {})",
                    lo.len(),
                    hi.len()
                ))
            }
            _ => {}
        }
        if xmin.iter().chain(xmax.iter()).flatten().any(|b| b.is_nan()) {
            return invalid("bounds must not be NaN".into());
        }
        if let Some(i) = xmin.iter().flatten().position(|&b| b == f64::INFINITY) {
            return invalid(format!("xmin[{i}] is +inf, so the rectangle is empty"));
        }
        if let Some(i) = xmax.iter().flatten().position(|&b| b == f64::NEG_INFINITY) {
            return invalid(format!("xmax[{i}] is -inf, so the rectangle is empty"));
        }
        if let (Some(lo), Some(hi)) = (&xmin, &xmax) {
            if let Some(i) = (0..lo.len()).find(|&i| lo[i] > hi[i]) {
                return invalid(format!("xmin[{i}] = {} exceeds xmax[{i}] = {}", lo[i], hi[i]));
            }
        }
        Ok(Self { xmin, xmax })
    }

    pub fn xmin(&self) -> Option<&[f64]> {
        self.xmin.as_deref()
    }

    pub fn xmax(&self) -> Option<&[f64]> {
        self.xmax.as_deref()
    }

    /// Dimension of the box.
    pub fn dimension(&self) -> usize {
        self.xmin
            .as_ref()
            .or(self.xmax.as_ref())
            .map_or(0, Vec::len)
    }

    fn project_component(&self, i: usize, x: &Expr) -> Expr {
        let mut projected = x.clone();
        if let Some(lo) = self.xmin.as_ref().map(|v| v[i]).filter(|v| v.is_finite()) {
            projected = Expr::max(Expr::constant(lo), projected);
        }
        if let Some(hi) = self.xmax.as_ref().map(|v| v[i]).filter(|v| v.is_finite()) {
            projected = Expr::min(Expr::constant(hi), projected);
        }
        projected
    }
}

impl Constraint for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn distance_squared(&self, u: &Vector) -> Result<Expr> {
        let projected = self.project(u)?;
        Ok(u.checked_sub(&projected)?.norm2_squared())
    }

    fn project(&self, u: &Vector) -> Result<Vector> {
        u.check_len(self.dimension())?;
        Ok(u.iter()
            .enumerate()
            .map(|(i, x)| self.project_component(i, x))
            .collect())
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_compact(&self) -> bool {
        let bounded = |bound: &Option<Vec<f64>>| {
            bound
                .as_ref()
                .is_some_and(|values| values.iter().all(|v| v.is_finite()))
        };
        bounded(&self.xmin) && bounded(&self.xmax)
    }
}
