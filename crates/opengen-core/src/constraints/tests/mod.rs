//! Tests for constraint sets.

use super::*;
use crate::expr::Bindings;

mod balls;
mod no_constraints;
mod rectangle;
mod zero;

/// Evaluates a distance that must have folded to a constant.
fn numeric_distance<C: Constraint + ?Sized>(set: &C, u: &[f64]) -> f64 {
    set.distance_squared(&Vector::from_values(u))
        .unwrap()
        .as_constant()
        .expect("numeric operand should fold to a constant")
}

/// Evaluates a projection that must have folded to constants.
fn numeric_projection<C: Constraint + ?Sized>(set: &C, u: &[f64]) -> Vec<f64> {
    set.project(&Vector::from_values(u))
        .unwrap()
        .as_constants()
        .expect("numeric operand should fold to constants")
}

fn assert_close(actual: f64, expected: f64) {
    let tol = 1e-10 * (1.0 + expected.abs());
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}

fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_close(*a, *e);
    }
}

fn bind(values: &[f64]) -> Bindings {
    Bindings::new().bind("u", values.to_vec())
}
