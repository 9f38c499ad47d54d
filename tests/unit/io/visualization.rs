//! Tests for placement capture and GIF export

#[cfg(test)]
mod tests {
    use birdwalk::WalkError;
    use birdwalk::io::visualization::SceneCapture;
    use birdwalk::scene::Variant;

    #[test]
    fn test_placements_keep_insertion_order() {
        let mut capture = SceneCapture::new(9, 7, 3);
        capture.record(3, 2, Variant::BeachTrip, 1);
        capture.record(3, 3, Variant::BeachTrip, 2);
        capture.record(3, 3, Variant::OceanTrip, 3);

        let iterations: Vec<usize> = capture
            .placements()
            .iter()
            .map(|placement| placement.iteration)
            .collect();
        assert_eq!(iterations, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_capture_refuses_to_export() {
        let capture = SceneCapture::new(9, 7, 0);
        assert!(matches!(
            capture.export_gif("unused.gif", 120),
            Err(WalkError::InvalidDataset { .. })
        ));
    }

    #[test]
    fn test_export_writes_a_gif_file() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("temp directory unavailable");
        };
        let path = dir.path().join("walk.gif");

        let mut capture = SceneCapture::new(9, 7, 2);
        capture.record(0, 0, Variant::LeavingHome, 1);
        capture.record(1, 0, Variant::LeavingHome, 2);
        assert!(capture.export_gif(&path.to_string_lossy(), 120).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_extreme_frame_delays_export_without_error() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("temp directory unavailable");
        };
        let path = dir.path().join("slow.gif");

        let mut capture = SceneCapture::new(9, 7, 1);
        capture.record(0, 0, Variant::BeachTrip, 1);
        // The held final frame must not overflow the delay arithmetic
        assert!(capture.export_gif(&path.to_string_lossy(), u32::MAX).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_fast_frame_rates_export_without_error() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("temp directory unavailable");
        };
        let path = dir.path().join("fast.gif");

        let mut capture = SceneCapture::new(9, 7, 6);
        for step in 0..6 {
            capture.record(step, 0, Variant::MountainTrip, step + 1);
        }
        // Ten millisecond frames fall below what viewers honour and trigger skipping
        assert!(capture.export_gif(&path.to_string_lossy(), 10).is_ok());
        assert!(path.exists());
    }
}
