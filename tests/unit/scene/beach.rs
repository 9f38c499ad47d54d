//! Tests for the beach trip scene

#[cfg(test)]
mod tests {
    use birdwalk::canvas::palette;
    use birdwalk::canvas::surface::Surface;
    use birdwalk::canvas::turtle::Pen;
    use birdwalk::scene::beach;

    fn rendered() -> Surface {
        let mut surface = Surface::new(200, 200, palette::WHITE);
        {
            let mut pen = Pen::new(&mut surface);
            pen.goto([-50.0, -50.0]);
            beach::render(&mut pen, 100.0);
        }
        surface
    }

    #[test]
    fn test_water_sand_and_sun_colours_present() {
        let surface = rendered();
        let has = |colour: [u8; 4]| surface.image().pixels().any(|p| p.0 == colour);
        assert!(has(palette::DEEP_SKY_BLUE));
        assert!(has(palette::NAVAJO_WHITE));
        assert!(has(palette::ORANGE));
        assert!(has(palette::FOREST_GREEN));
    }

    #[test]
    fn test_backdrop_is_light_cyan() {
        let surface = rendered();
        assert_eq!(surface.get(-45.0, 45.0), Some(palette::LIGHT_CYAN));
    }

    #[test]
    fn test_pen_returns_to_the_anchor() {
        let mut surface = Surface::new(200, 200, palette::WHITE);
        let mut pen = Pen::new(&mut surface);
        pen.goto([-50.0, -50.0]);
        beach::render(&mut pen, 100.0);
        let [x, y] = pen.position();
        assert!((x + 50.0).abs() < 1e-9);
        assert!((y + 50.0).abs() < 1e-9);
    }
}
