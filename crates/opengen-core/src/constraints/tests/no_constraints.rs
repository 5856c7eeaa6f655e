use super::*;

#[test]
fn test_everything_is_feasible() {
    let set = NoConstraints::new();
    assert_eq!(numeric_distance(&set, &[1e6, -3.0]), 0.0);
    assert_eq!(numeric_projection(&set, &[1e6, -3.0]), vec![1e6, -3.0]);
}

#[test]
fn test_symbolic_projection_is_identity() {
    let u = Vector::symbols("u", 2);
    assert_eq!(NoConstraints::new().project(&u).unwrap(), u);
}

#[test]
fn test_classification() {
    assert!(NoConstraints::new().is_convex());
    assert!(!NoConstraints::new().is_compact());
}
