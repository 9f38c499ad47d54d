//! Tests for heading vectors, normalisation and arc sampling

#[cfg(test)]
mod tests {
    use birdwalk::math::geometry::{
        arc_segments, distance_squared, heading_vector, lerp, normalise_degrees,
    };

    #[test]
    fn test_heading_vectors_hit_the_axes() {
        let east = heading_vector(0.0);
        assert!((east[0] - 1.0).abs() < 1e-12);
        assert!(east[1].abs() < 1e-12);

        let north = heading_vector(90.0);
        assert!(north[0].abs() < 1e-12);
        assert!((north[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalise_wraps_both_directions() {
        assert!((normalise_degrees(370.0) - 10.0).abs() < 1e-12);
        assert!((normalise_degrees(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalise_degrees(720.0)).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert!((lerp(2.0f64, 6.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((lerp(2.0f64, 6.0, 1.0) - 6.0).abs() < 1e-12);
        assert!((lerp(2.0f64, 6.0, 0.5) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_arc_segments_scale_with_arc_length() {
        let tiny = arc_segments(2.0, 30.0);
        let large = arc_segments(200.0, 360.0);
        assert_eq!(tiny, 4);
        assert_eq!(large, 96);
        assert!(arc_segments(40.0, 90.0) > tiny);
    }

    #[test]
    fn test_distance_squared() {
        assert!((distance_squared([0.0, 0.0], [3.0, 4.0]) - 25.0).abs() < 1e-12);
    }
}
