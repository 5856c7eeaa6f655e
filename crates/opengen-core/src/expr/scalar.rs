//! Scalar expression trees.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use num_traits::{One, Zero};

use super::Bindings;
use crate::error::{OpengenError, Result};

/// A scalar expression node.
///
/// Children are `Arc`-shared, so cloning an expression is cheap and common
/// subexpressions (a norm reused by a distance and a projection) are stored once.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(f64),
    /// Component `index` of the symbol vector `name`.
    Symbol {
        name: Arc<str>,
        index: usize,
    },
    Add(Arc<Expr>, Arc<Expr>),
    Sub(Arc<Expr>, Arc<Expr>),
    Mul(Arc<Expr>, Arc<Expr>),
    Div(Arc<Expr>, Arc<Expr>),
    Neg(Arc<Expr>),
    Sqrt(Arc<Expr>),
    Abs(Arc<Expr>),
    Min(Arc<Expr>, Arc<Expr>),
    Max(Arc<Expr>, Arc<Expr>),
    /// `then_expr` if `lhs <= rhs`, otherwise `else_expr`.
    IfLe {
        lhs: Arc<Expr>,
        rhs: Arc<Expr>,
        then_expr: Arc<Expr>,
        else_expr: Arc<Expr>,
    },
}

impl Expr {
    // Constructors fold constants and drop additive/multiplicative identities.
    // `x * 0` is kept symbolic so a non-finite binding still evaluates to NaN.

    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    pub fn symbol(name: impl Into<Arc<str>>, index: usize) -> Self {
        Expr::Symbol {
            name: name.into(),
            index,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(left: Expr, right: Expr) -> Self {
        match (left.as_constant(), right.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a + b),
            (Some(a), _) if a == 0.0 => right,
            (_, Some(b)) if b == 0.0 => left,
            _ => Expr::Add(Arc::new(left), Arc::new(right)),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(left: Expr, right: Expr) -> Self {
        match (left.as_constant(), right.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a - b),
            (Some(a), _) if a == 0.0 => Expr::neg(right),
            (_, Some(b)) if b == 0.0 => left,
            _ => Expr::Sub(Arc::new(left), Arc::new(right)),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn mul(left: Expr, right: Expr) -> Self {
        match (left.as_constant(), right.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a * b),
            (Some(a), _) if a == 1.0 => right,
            (_, Some(b)) if b == 1.0 => left,
            _ => Expr::Mul(Arc::new(left), Arc::new(right)),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn div(left: Expr, right: Expr) -> Self {
        match (left.as_constant(), right.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a / b),
            (_, Some(b)) if b == 1.0 => left,
            _ => Expr::Div(Arc::new(left), Arc::new(right)),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn neg(expr: Expr) -> Self {
        match expr {
            Expr::Constant(a) => Expr::Constant(-a),
            Expr::Neg(inner) => Arc::unwrap_or_clone(inner),
            other => Expr::Neg(Arc::new(other)),
        }
    }

    pub fn sqrt(expr: Expr) -> Self {
        match expr.as_constant() {
            Some(a) => Expr::Constant(a.sqrt()),
            None => Expr::Sqrt(Arc::new(expr)),
        }
    }

    pub fn abs(expr: Expr) -> Self {
        match expr.as_constant() {
            Some(a) => Expr::Constant(a.abs()),
            None => Expr::Abs(Arc::new(expr)),
        }
    }

    pub fn min(left: Expr, right: Expr) -> Self {
        match (left.as_constant(), right.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a.min(b)),
            _ => Expr::Min(Arc::new(left), Arc::new(right)),
        }
    }

    pub fn max(left: Expr, right: Expr) -> Self {
        match (left.as_constant(), right.as_constant()) {
            (Some(a), Some(b)) => Expr::Constant(a.max(b)),
            _ => Expr::Max(Arc::new(left), Arc::new(right)),
        }
    }

    /// Clamps `expr` to `[lower, upper]`.
    pub fn clamp(expr: Expr, lower: Expr, upper: Expr) -> Self {
        Expr::min(upper, Expr::max(lower, expr))
    }

    pub fn square(expr: Expr) -> Self {
        Expr::mul(expr.clone(), expr)
    }

    pub fn if_le(lhs: Expr, rhs: Expr, then_expr: Expr, else_expr: Expr) -> Self {
        match (lhs.as_constant(), rhs.as_constant()) {
            (Some(a), Some(b)) if a <= b => then_expr,
            (Some(_), Some(_)) => else_expr,
            _ => Expr::IfLe {
                lhs: Arc::new(lhs),
                rhs: Arc::new(rhs),
                then_expr: Arc::new(then_expr),
                else_expr: Arc::new(else_expr),
            },
        }
    }

    /// Returns the value if this expression is a constant.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Evaluates the expression with symbol values taken from `bindings`.
    pub fn eval(&self, bindings: &Bindings) -> Result<f64> {
        let value = match self {
            Expr::Constant(value) => *value,
            Expr::Symbol { name, index } => bindings
                .get(name, *index)
                .ok_or_else(|| OpengenError::UnboundSymbol(format!("{}[{}]", name, index)))?,
            Expr::Add(a, b) => a.eval(bindings)? + b.eval(bindings)?,
            Expr::Sub(a, b) => a.eval(bindings)? - b.eval(bindings)?,
            Expr::Mul(a, b) => a.eval(bindings)? * b.eval(bindings)?,
            Expr::Div(a, b) => a.eval(bindings)? / b.eval(bindings)?,
            Expr::Neg(a) => -a.eval(bindings)?,
            Expr::Sqrt(a) => a.eval(bindings)?.sqrt(),
            Expr::Abs(a) => a.eval(bindings)?.abs(),
            Expr::Min(a, b) => a.eval(bindings)?.min(b.eval(bindings)?),
            Expr::Max(a, b) => a.eval(bindings)?.max(b.eval(bindings)?),
            Expr::IfLe {
                lhs,
                rhs,
                then_expr,
                else_expr,
            } => {
                if lhs.eval(bindings)? <= rhs.eval(bindings)? {
                    then_expr.eval(bindings)?
                } else {
                    else_expr.eval(bindings)?
                }
            }
        };
        Ok(value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Expr::Constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.as_constant() == Some(0.0)
    }
}

impl One for Expr {
    fn one() -> Self {
        Expr::Constant(1.0)
    }
}

// Implement std::ops traits for operator syntax

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::add(self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::sub(self, rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::mul(self, rhs)
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::div(self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::neg(self)
    }
}

/// Renders the expression as Rust source over `f64` values.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write_constant(f, *value),
            Expr::Symbol { name, index } => write!(f, "{}[{}]", name, index),
            Expr::Add(a, b) => write!(f, "({} + {})", a, b),
            Expr::Sub(a, b) => write!(f, "({} - {})", a, b),
            Expr::Mul(a, b) => write!(f, "({} * {})", a, b),
            Expr::Div(a, b) => write!(f, "({} / {})", a, b),
            Expr::Neg(a) => write!(f, "(-{})", a),
            Expr::Sqrt(a) => write!(f, "{}.sqrt()", a),
            Expr::Abs(a) => write!(f, "{}.abs()", a),
            Expr::Min(a, b) => write!(f, "{}.min({})", a, b),
            Expr::Max(a, b) => write!(f, "{}.max({})", a, b),
            Expr::IfLe {
                lhs,
                rhs,
                then_expr,
                else_expr,
            } => write!(
                f,
                "(if {} <= {} {{ {} }} else {{ {} }})",
                lhs, rhs, then_expr, else_expr
            ),
        }
    }
}

fn write_constant(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("f64::NAN")
    } else if value == f64::INFINITY {
        f.write_str("f64::INFINITY")
    } else if value == f64::NEG_INFINITY {
        f.write_str("f64::NEG_INFINITY")
    } else if value.is_sign_negative() {
        write!(f, "({:?}_f64)", value)
    } else {
        write!(f, "{:?}_f64", value)
    }
}
