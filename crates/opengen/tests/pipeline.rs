//! End-to-end use of constraint sets the way the generator drives them.

use opengen::prelude::*;
use opengen::{ConfigError, OpengenError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn boxed(set: impl Constraint + 'static) -> Box<dyn Constraint> {
    Box::new(set)
}

/// One set per constrained block, in declaration order.
fn declared_sets() -> Vec<(usize, Box<dyn Constraint>)> {
    vec![
        (2, boxed(Ball2::new_at_origin_with_radius(1.0).unwrap())),
        (1, boxed(Zero::new())),
        (3, boxed(Rectangle::new(Some(vec![0.0; 3]), Some(vec![1.0; 3])).unwrap())),
        (1, boxed(FiniteSet::new(vec![vec![-1.0], vec![1.0]]).unwrap())),
    ]
}

#[test]
fn test_formulation_per_block() {
    init_tracing();
    let u = Vector::symbols("u", 7);
    let mut start = 0;
    let mut kinds = Vec::new();
    for (len, set) in declared_sets() {
        let block = u.slice(start..start + len);
        start += len;
        let formulation = Formulation::select(&set, &block).unwrap();
        kinds.push(formulation.is_projection());
    }
    assert_eq!(kinds, vec![true, false, true, false]);
}

#[test]
fn test_penalty_evaluates_at_runtime_values() {
    init_tracing();
    let u = Vector::symbols("u", 2);
    let Formulation::Penalty(penalty) = Formulation::select(&Zero::new(), &u).unwrap() else {
        panic!("zero set must fall back to a penalty");
    };
    let bindings = Bindings::new().bind("u", vec![3.0, 4.0]);
    assert_eq!(penalty.eval(&bindings).unwrap(), 25.0);
    assert_eq!(penalty.to_string(), "((u[0] * u[0]) + (u[1] * u[1]))");
}

#[test]
fn test_product_projection_renders_rust() {
    let set = CartesianProduct::new()
        .with_constraint(1, BallInf::new_at_origin_with_radius(2.0).unwrap())
        .unwrap()
        .with_constraint(2, NoConstraints::new())
        .unwrap();
    let projection = set.project(&Vector::symbols("u", 2)).unwrap();
    assert_eq!(projection.to_string(), "[2.0_f64.min((-2.0_f64).max(u[0])), u[1]]");
}

#[test]
fn test_unsupported_projection_is_a_hard_error() {
    let err = Zero::new().project(&Vector::default()).unwrap_err();
    assert!(matches!(err, OpengenError::Unsupported { constraint: "Zero", .. }));
}

#[test]
fn test_configuration_alongside_constraints() {
    let ros = RosConfiguration::new().with_package_name("my_pkg").unwrap();
    assert_eq!(ros.package_name().as_str(), "my_pkg");
    assert!(matches!(
        RosConfiguration::new().with_package_name("1bad"),
        Err(ConfigError::InvalidIdentifier { .. })
    ));
    assert!(matches!(
        RosConfiguration::new().with_package_name("bad name"),
        Err(ConfigError::InvalidIdentifier { .. })
    ));

    let solver = SolverConfiguration::new().with_preconditioning(true);
    assert!(solver.preconditioning());
}
