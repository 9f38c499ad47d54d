//! Tests for the centred coordinate mapping and boundary clipping

#[cfg(test)]
mod tests {
    use birdwalk::canvas::palette;
    use birdwalk::canvas::surface::Surface;

    #[test]
    fn test_origin_maps_to_the_centre() {
        let surface = Surface::new(100, 60, palette::WHITE);
        assert_eq!(surface.to_pixel(0.0, 0.0), Some((50, 30)));
    }

    #[test]
    fn test_off_canvas_coordinates_clip() {
        let surface = Surface::new(100, 60, palette::WHITE);
        assert_eq!(surface.to_pixel(60.0, 0.0), None);
        assert_eq!(surface.to_pixel(0.0, -31.0), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut surface = Surface::new(40, 40, palette::WHITE);
        surface.set(5.0, 5.0, palette::RED);
        assert_eq!(surface.get(5.0, 5.0), Some(palette::RED));
        assert_eq!(surface.get(6.0, 5.0), Some(palette::WHITE));
    }

    #[test]
    fn test_off_canvas_writes_are_ignored() {
        let mut surface = Surface::new(10, 10, palette::WHITE);
        surface.set(100.0, 100.0, palette::RED);
        assert_eq!(surface.image().pixels().filter(|p| p.0 == palette::RED).count(), 0);
    }
}
