use super::*;

#[test]
fn test_bounded_box() {
    let rect = Rectangle::new(Some(vec![0.0, -1.0]), Some(vec![1.0, 1.0])).unwrap();
    assert_eq!(numeric_projection(&rect, &[2.0, -3.0]), vec![1.0, -1.0]);
    assert_eq!(numeric_distance(&rect, &[2.0, -3.0]), 5.0);
    assert_eq!(numeric_distance(&rect, &[0.5, 0.5]), 0.0);
    assert!(rect.is_compact());
}

#[test]
fn test_lower_bound_only() {
    let rect = Rectangle::new(Some(vec![0.0, 0.0]), None).unwrap();
    assert_eq!(numeric_projection(&rect, &[-1.0, 7.0]), vec![0.0, 7.0]);
    assert!(rect.is_convex());
    assert!(!rect.is_compact());
}

#[test]
fn test_infinite_components_are_skipped() {
    let rect = Rectangle::new(
        Some(vec![f64::NEG_INFINITY, 0.0]),
        Some(vec![1.0, f64::INFINITY]),
    )
    .unwrap();
    assert_eq!(numeric_projection(&rect, &[5.0, -5.0]), vec![1.0, 0.0]);
    assert_eq!(numeric_projection(&rect, &[-5.0, 5.0]), vec![-5.0, 5.0]);
    assert!(!rect.is_compact());

    let rendered = rect.project(&Vector::symbols("u", 2)).unwrap().to_string();
    assert_eq!(rendered, "[1.0_f64.min(u[0]), 0.0_f64.max(u[1])]");
}

#[test]
fn test_dimension_mismatch() {
    let rect = Rectangle::new(None, Some(vec![1.0, 2.0])).unwrap();
    assert_eq!(rect.dimension(), 2);
    assert_eq!(
        rect.distance_squared(&Vector::symbols("u", 3)),
        Err(OpengenError::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn test_invalid_bounds() {
    assert!(Rectangle::new(None, None).is_err());
    assert!(Rectangle::new(Some(vec![0.0]), Some(vec![1.0, 2.0])).is_err());
    assert!(Rectangle::new(Some(vec![2.0]), Some(vec![1.0])).is_err());
    assert!(Rectangle::new(Some(vec![f64::NAN]), None).is_err());
}

#[test]
fn test_empty_bounds_are_rejected() {
    assert!(Rectangle::new(Some(vec![f64::INFINITY]), None).is_err());
    assert!(Rectangle::new(None, Some(vec![f64::NEG_INFINITY])).is_err());
    assert!(Rectangle::new(Some(vec![f64::INFINITY]), Some(vec![f64::INFINITY])).is_err());
    assert!(matches!(
        Rectangle::new(Some(vec![0.0, f64::INFINITY]), None),
        Err(OpengenError::InvalidParameter(msg)) if msg.contains("xmin[1]")
    ));
}
