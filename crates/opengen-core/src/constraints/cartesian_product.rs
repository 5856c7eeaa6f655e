//! Products of sets over consecutive segments.

use num_traits::Zero as _;

use super::Constraint;
use crate::error::{OpengenError, Result};
use crate::expr::{Expr, Vector};

/// The product `C_1 × ... × C_m` of sets acting on consecutive blocks of `u`.
///
/// Segment `i` ends (exclusive) at `segments[i]` and starts where segment
/// `i - 1` ended, so the blocks are `u[0..s_0]`, `u[s_0..s_1]`, and so on.
/// Each block's set is owned exclusively by the product.
///
/// # Example
///
/// ```
/// use opengen_core::constraints::{Ball2, CartesianProduct, Constraint, NoConstraints, Zero};
/// use opengen_core::expr::Vector;
///
/// let product = CartesianProduct::new()
///     .with_constraint(2, Zero::new())
///     .unwrap()
///     .with_constraint(5, NoConstraints::new())
///     .unwrap();
///
/// let u = Vector::from_values(&[3.0, 4.0, 7.0, 8.0, 9.0]);
/// assert_eq!(product.distance_squared(&u).unwrap().as_constant(), Some(25.0));
/// assert!(!product.is_compact());
/// ```
#[derive(Debug, Default)]
pub struct CartesianProduct {
    segments: Vec<usize>,
    sets: Vec<Box<dyn Constraint>>,
}

impl CartesianProduct {
    /// Creates an empty product, the set ℝ⁰.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `set` acting on the block that ends (exclusive) at `end`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error unless `end` is greater than the
    /// end of the previous segment (and greater than zero).
    pub fn with_constraint(mut self, end: usize, set: impl Constraint + 'static) -> Result<Self> {
        let start = self.dimension();
        if end <= start {
            return Err(OpengenError::InvalidParameter(format!(
                "segment end {} must exceed the previous end {}",
                end, start
            )));
        }
        self.segments.push(end);
        self.sets.push(Box::new(set));
        Ok(self)
    }

    /// Total dimension covered by the segments.
    pub fn dimension(&self) -> usize {
        self.segments.last().copied().unwrap_or(0)
    }

    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterates over `(block of u, set)` pairs.
    fn blocks<'a>(
        &'a self,
        u: &'a Vector,
    ) -> Result<impl Iterator<Item = (Vector, &'a dyn Constraint)> + 'a> {
        u.check_len(self.dimension())?;
        let starts = std::iter::once(0).chain(self.segments.iter().copied());
        Ok(starts
            .zip(&self.segments)
            .zip(&self.sets)
            .map(move |((start, &end), set)| (u.slice(start..end), &**set)))
    }
}

impl Constraint for CartesianProduct {
    fn name(&self) -> &'static str {
        "CartesianProduct"
    }

    fn distance_squared(&self, u: &Vector) -> Result<Expr> {
        self.blocks(u)?
            .try_fold(Expr::zero(), |acc, (block, set)| -> Result<Expr> {
                Ok(acc + set.distance_squared(&block)?)
            })
    }

    fn project(&self, u: &Vector) -> Result<Vector> {
        let parts = self
            .blocks(u)?
            .map(|(block, set)| set.project(&block))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector::concat(parts))
    }

    fn is_convex(&self) -> bool {
        self.sets.iter().all(|set| set.is_convex())
    }

    fn is_compact(&self) -> bool {
        self.sets.iter().all(|set| set.is_compact())
    }
}
