use super::*;

#[test]
fn test_distance_squared_is_squared_norm() {
    assert_eq!(numeric_distance(&Zero::new(), &[3.0, 4.0]), 25.0);
    assert_eq!(numeric_distance(&Zero::new(), &[-1.0, 2.0, -2.0]), 9.0);
}

#[test]
fn test_distance_squared_of_empty_vector() {
    assert_eq!(numeric_distance(&Zero::new(), &[]), 0.0);
}

#[test]
fn test_distance_squared_symbolic() {
    let u = Vector::symbols("u", 3);
    let d = Zero::new().distance_squared(&u).unwrap();
    assert_eq!(d.as_constant(), None);
    assert_eq!(d.eval(&bind(&[1.0, 2.0, 3.0])).unwrap(), 14.0);
}

#[test]
fn test_distance_squared_is_repeatable() {
    let zero = Zero::new();
    let u = Vector::symbols("u", 4);
    let first = zero.distance_squared(&u).unwrap();
    let second = zero.distance_squared(&u).unwrap();
    assert_eq!(first, second);

    let other = Vector::from_values(&[1.0]);
    assert_eq!(zero.distance_squared(&other).unwrap().as_constant(), Some(1.0));
    assert_eq!(zero.distance_squared(&u).unwrap(), first);
}

#[test]
fn test_any_dimension_is_accepted() {
    let zero = Zero::new();
    for n in 0..8 {
        assert!(zero.distance_squared(&Vector::symbols("u", n)).is_ok());
    }
}

#[test]
fn test_project_is_unsupported() {
    let zero = Zero::new();
    let operands = [
        Vector::from_values(&[0.0, 0.0]),
        Vector::default(),
        Vector::from_values(&[1.0, -2.0]),
        Vector::symbols("u", 3),
    ];
    for u in &operands {
        let err = zero.project(u).unwrap_err();
        assert_eq!(err, OpengenError::unsupported("Zero", "project"));
        assert!(err.is_unsupported());
    }
}

#[test]
fn test_unsupported_error_message() {
    let err = Zero::new().project(&Vector::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported operation: Zero does not implement project"
    );
}

#[test]
fn test_classification() {
    assert!(Zero::new().is_convex());
    assert!(Zero::new().is_compact());
}

#[test]
fn test_boxed_zero_behaves_like_zero() {
    let boxed: Box<dyn Constraint> = Box::new(Zero::new());
    assert_eq!(boxed.name(), "Zero");
    assert_eq!(numeric_distance(&boxed, &[2.0]), 4.0);
    assert!(boxed.project(&Vector::default()).is_err());
}
