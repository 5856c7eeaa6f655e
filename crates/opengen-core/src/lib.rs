//! opengen core - constraint sets for the optimizer generator
//!
//! This crate provides the fundamental abstractions:
//! - Symbolic operands that constraint sets build expressions over
//! - The [`Constraint`] trait and the standard geometric sets
//! - [`Formulation`] selection between projection and penalty encodings

pub mod constraints;
pub mod error;
pub mod expr;
pub mod formulation;

#[cfg(test)]
mod formulation_tests;

pub use constraints::{
    Ball2, BallInf, CartesianProduct, Constraint, FiniteSet, NoConstraints, Rectangle, Zero,
};
pub use error::{OpengenError, Result};
pub use expr::{Bindings, Expr, Vector};
pub use formulation::Formulation;
