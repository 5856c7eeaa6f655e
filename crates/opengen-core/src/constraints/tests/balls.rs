use super::*;

mod ball2 {
    use super::*;

    #[test]
    fn test_projection_of_outside_point() {
        let ball = Ball2::new_at_origin_with_radius(1.0).unwrap();
        assert_all_close(&numeric_projection(&ball, &[3.0, 4.0]), &[0.6, 0.8]);
        assert_close(numeric_distance(&ball, &[3.0, 4.0]), 16.0);
    }

    #[test]
    fn test_inside_point_is_fixed() {
        let ball = Ball2::new_at_origin_with_radius(2.0).unwrap();
        assert_eq!(numeric_projection(&ball, &[0.5, -1.0]), vec![0.5, -1.0]);
        assert_eq!(numeric_distance(&ball, &[0.5, -1.0]), 0.0);
    }

    #[test]
    fn test_centered_ball() {
        let ball = Ball2::new(Some(vec![1.0, 1.0]), 1.0).unwrap();
        assert_all_close(&numeric_projection(&ball, &[1.0, 5.0]), &[1.0, 2.0]);
        assert_close(numeric_distance(&ball, &[1.0, 5.0]), 9.0);
    }

    #[test]
    fn test_centered_ball_checks_dimension() {
        let ball = Ball2::new(Some(vec![0.0, 0.0]), 1.0).unwrap();
        let err = ball.project(&Vector::symbols("u", 3)).unwrap_err();
        assert_eq!(
            err,
            OpengenError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert!(ball.distance_squared(&Vector::symbols("u", 1)).is_err());
    }

    #[test]
    fn test_symbolic_projection_evaluates() {
        let ball = Ball2::new_at_origin_with_radius(0.1).unwrap();
        let projected = ball.project(&Vector::symbols("u", 2)).unwrap();
        let values = projected.eval(&bind(&[1.0, 3.0])).unwrap();
        let norm = (10.0_f64).sqrt();
        assert_all_close(&values, &[0.1 / norm, 0.3 / norm]);
    }

    #[test]
    fn test_invalid_radius() {
        assert!(Ball2::new_at_origin_with_radius(0.0).is_err());
        assert!(Ball2::new_at_origin_with_radius(-1.0).is_err());
        assert!(Ball2::new_at_origin_with_radius(f64::NAN).is_err());
        assert!(Ball2::new_at_origin_with_radius(f64::INFINITY).is_err());
        assert!(Ball2::new(Some(vec![f64::NAN]), 1.0).is_err());
    }

    #[test]
    fn test_accessors_and_classification() {
        let ball = Ball2::new(Some(vec![1.0]), 2.5).unwrap();
        assert_eq!(ball.center(), Some(&[1.0][..]));
        assert_eq!(ball.radius(), 2.5);
        assert!(ball.is_convex());
        assert!(ball.is_compact());
    }
}

mod ball_inf {
    use super::*;

    #[test]
    fn test_projection_clamps_each_component() {
        let ball = BallInf::new_at_origin_with_radius(1.0).unwrap();
        assert_eq!(numeric_projection(&ball, &[3.0, -0.5, -2.0]), vec![1.0, -0.5, -1.0]);
        assert_eq!(numeric_distance(&ball, &[3.0, -0.5, -2.0]), 5.0);
    }

    #[test]
    fn test_centered_ball() {
        let ball = BallInf::new(Some(vec![10.0, 0.0]), 2.0).unwrap();
        assert_eq!(numeric_projection(&ball, &[0.0, 1.0]), vec![8.0, 1.0]);
        assert_eq!(numeric_distance(&ball, &[0.0, 1.0]), 64.0);
    }

    #[test]
    fn test_symbolic_distance_evaluates() {
        let ball = BallInf::new_at_origin_with_radius(0.5).unwrap();
        let d = ball.distance_squared(&Vector::symbols("u", 2)).unwrap();
        assert_close(d.eval(&bind(&[1.5, 0.25])).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_radius() {
        assert!(BallInf::new_at_origin_with_radius(0.0).is_err());
        assert!(BallInf::new(Some(vec![f64::INFINITY]), 1.0).is_err());
    }

    #[test]
    fn test_classification() {
        let ball = BallInf::new_at_origin_with_radius(1.0).unwrap();
        assert!(ball.is_convex());
        assert!(ball.is_compact());
    }
}
