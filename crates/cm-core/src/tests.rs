//! Unit tests for cm-core primitives.

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn unit_from_deg_cardinal_directions() {
        let east = Vec2::unit_from_deg(0.0);
        assert!((east.x - 1.0).abs() < 1e-12);
        assert!(east.y.abs() < 1e-12);

        let north = Vec2::unit_from_deg(90.0);
        assert!(north.x.abs() < 1e-12);
        assert!((north.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dot_and_cross() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
    }

    #[test]
    fn normalized_unit_length() {
        let v = Vec2::new(3.0, 4.0).normalized().unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn normalized_rejects_zero_vector() {
        assert!(Vec2::new(0.0, 0.0).normalized().is_none());
        assert!(Vec2::new(f64::NAN, 1.0).normalized().is_none());
    }

    #[test]
    fn heading_deg_quadrants() {
        assert!((Vec2::new(1.0, 1.0).heading_deg() - 45.0).abs() < 1e-12);
        assert!((Vec2::new(-1.0, -1.0).heading_deg() - (-135.0)).abs() < 1e-12);
    }

    #[test]
    fn add_sub_scale() {
        let v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, -1.0);
        assert_eq!(v, Vec2::new(4.0, 1.0));
        assert_eq!(v - Vec2::new(4.0, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(v.scaled(0.5), Vec2::new(2.0, 0.5));
    }

    #[test]
    fn rotated_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotated(std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);

        // Negative angle turns clockwise.
        let w = Vec2::new(0.0, 1.0).rotated(-std::f64::consts::FRAC_PI_2);
        assert!((w.x - 1.0).abs() < 1e-12);
        assert!(w.y.abs() < 1e-12);
    }
}

#[cfg(test)]
mod angle {
    use crate::{clip_unit, wrap_display_deg};

    #[test]
    fn clip_unit_bounds() {
        assert_eq!(clip_unit(1.0 + 1e-15), 1.0);
        assert_eq!(clip_unit(-1.0 - 1e-15), -1.0);
        assert_eq!(clip_unit(0.5), 0.5);
    }

    #[test]
    fn clip_makes_acos_safe() {
        // A cosine a hair above 1 must not produce NaN downstream.
        let theta = clip_unit(1.0 + 1e-15).acos();
        assert_eq!(theta, 0.0);
    }

    #[test]
    fn wrap_shifts_only_below_minus_90() {
        assert_eq!(wrap_display_deg(-135.0), 225.0);
        assert_eq!(wrap_display_deg(-180.0), 180.0);
        assert_eq!(wrap_display_deg(-90.0), -90.0);
        assert_eq!(wrap_display_deg(170.0), 170.0);
    }
}
