//! Vector operands.

use std::fmt;
use std::ops::{Index, Range};
use std::sync::Arc;

use num_traits::Zero;

use super::{Bindings, Expr};
use crate::error::{OpengenError, Result};

/// An ordered list of scalar expressions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector {
    elements: Vec<Expr>,
}

impl Vector {
    pub fn new(elements: Vec<Expr>) -> Self {
        Self { elements }
    }

    /// Creates the symbolic vector `name[0], ..., name[len - 1]`.
    pub fn symbols(name: &str, len: usize) -> Self {
        let name: Arc<str> = Arc::from(name);
        (0..len).map(|i| Expr::symbol(name.clone(), i)).collect()
    }

    /// Creates a vector of constants.
    pub fn from_values(values: &[f64]) -> Self {
        values.iter().copied().map(Expr::constant).collect()
    }

    /// Creates a vector of `len` zero constants.
    pub fn zeros(len: usize) -> Self {
        (0..len).map(|_| Expr::zero()).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Expr> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Expr] {
        &self.elements
    }

    /// Returns the components in `range` as a new vector.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> Vector {
        Self::new(self.elements[range].to_vec())
    }

    /// Concatenates `parts` in order.
    pub fn concat(parts: impl IntoIterator<Item = Vector>) -> Vector {
        parts.into_iter().flat_map(|part| part.elements).collect()
    }

    /// Returns an error unless `self` has exactly `expected` components.
    pub fn check_len(&self, expected: usize) -> Result<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(OpengenError::DimensionMismatch {
                expected,
                actual: self.len(),
            })
        }
    }

    /// Applies `f` to every component.
    pub fn map(&self, f: impl FnMut(&Expr) -> Expr) -> Vector {
        self.elements.iter().map(f).collect()
    }

    /// Combines matching components of `self` and `other` with `f`.
    pub fn zip_with(&self, other: &Vector, mut f: impl FnMut(&Expr, &Expr) -> Expr) -> Result<Vector> {
        other.check_len(self.len())?;
        Ok(self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| f(a, b))
            .collect())
    }

    /// Componentwise `self + other`.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    /// Componentwise `self - other`.
    pub fn checked_sub(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    /// Multiplies every component by `factor`.
    pub fn scale(&self, factor: &Expr) -> Vector {
        self.map(|a| a.clone() * factor.clone())
    }

    pub fn dot(&self, other: &Vector) -> Result<Expr> {
        Ok(self.zip_with(other, |a, b| a.clone() * b.clone())?.sum())
    }

    /// Sum of all components; zero for an empty vector.
    pub fn sum(&self) -> Expr {
        self.elements
            .iter()
            .cloned()
            .fold(Expr::zero(), |acc, x| acc + x)
    }

    /// Sum of squared components.
    pub fn norm2_squared(&self) -> Expr {
        self.map(|x| Expr::square(x.clone())).sum()
    }

    /// Euclidean norm.
    pub fn norm2(&self) -> Expr {
        Expr::sqrt(self.norm2_squared())
    }

    /// Returns the values if every component is a constant.
    pub fn as_constants(&self) -> Option<Vec<f64>> {
        self.elements.iter().map(Expr::as_constant).collect()
    }

    /// Evaluates every component with symbol values taken from `bindings`.
    pub fn eval(&self, bindings: &Bindings) -> Result<Vec<f64>> {
        self.elements.iter().map(|x| x.eval(bindings)).collect()
    }
}

impl FromIterator<Expr> for Vector {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Vector {
    type Item = Expr;
    type IntoIter = std::vec::IntoIter<Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Index<usize> for Vector {
    type Output = Expr;

    fn index(&self, index: usize) -> &Expr {
        &self.elements[index]
    }
}

impl From<Vec<Expr>> for Vector {
    fn from(elements: Vec<Expr>) -> Self {
        Self::new(elements)
    }
}

/// Renders the vector as a Rust array expression.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}
