//! Tests for formulation selection

use super::constraints::*;
use super::error::OpengenError;
use super::expr::Vector;
use super::formulation::*;

/// A convex set whose operations always fail with a dimension error.
#[derive(Debug)]
struct Broken;

impl Constraint for Broken {
    fn name(&self) -> &'static str {
        "Broken"
    }

    fn distance_squared(&self, u: &Vector) -> crate::Result<crate::Expr> {
        Err(OpengenError::DimensionMismatch {
            expected: 0,
            actual: u.len(),
        })
    }

    fn project(&self, u: &Vector) -> crate::Result<Vector> {
        Err(OpengenError::DimensionMismatch {
            expected: 0,
            actual: u.len(),
        })
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn is_compact(&self) -> bool {
        true
    }
}

#[test]
fn test_projection_when_available() {
    let u = Vector::from_values(&[2.0, 0.0]);
    let ball = Ball2::new_at_origin_with_radius(1.0).unwrap();
    let formulation = Formulation::select(&ball, &u).unwrap();
    assert_eq!(formulation, Formulation::Projection(Vector::from_values(&[1.0, 0.0])));
}

#[test]
fn test_penalty_when_projection_unsupported() {
    let u = Vector::from_values(&[3.0, 4.0]);
    let formulation = Formulation::select(&Zero::new(), &u).unwrap();
    assert!(formulation.is_penalty());
    assert_eq!(formulation, Formulation::Penalty(25.0.into()));
}

#[test]
fn test_penalty_for_nonconvex_sets() {
    let set = FiniteSet::new(vec![vec![0.0], vec![1.0]]).unwrap();
    let formulation = Formulation::select(&set, &Vector::from_values(&[0.75])).unwrap();
    assert_eq!(formulation, Formulation::Penalty(0.0625.into()));
}

#[test]
fn test_other_errors_propagate() {
    let err = Formulation::select(&Broken, &Vector::symbols("u", 2)).unwrap_err();
    assert_eq!(
        err,
        OpengenError::DimensionMismatch {
            expected: 0,
            actual: 2
        }
    );
}

#[test]
fn test_works_through_trait_objects() {
    let sets: Vec<Box<dyn Constraint>> = vec![
        Box::new(Zero::new()),
        Box::new(NoConstraints::new()),
        Box::new(BallInf::new_at_origin_with_radius(1.0).unwrap()),
    ];
    let u = Vector::symbols("u", 2);
    let kinds: Vec<bool> = sets
        .iter()
        .map(|set| Formulation::select(set, &u).unwrap().is_projection())
        .collect();
    assert_eq!(kinds, vec![false, true, true]);
}
