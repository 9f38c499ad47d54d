//! Tests for the leaving-home night scene

#[cfg(test)]
mod tests {
    use birdwalk::canvas::palette;
    use birdwalk::canvas::surface::Surface;
    use birdwalk::canvas::turtle::Pen;
    use birdwalk::scene::home;

    #[test]
    fn test_night_backdrop_fills_the_cell() {
        let mut surface = Surface::new(200, 200, palette::WHITE);
        {
            let mut pen = Pen::new(&mut surface);
            pen.goto([-50.0, -50.0]);
            home::render(&mut pen, 100.0);
        }
        // The tree and bird cover the middle; the lower right corner is open sky
        assert_eq!(surface.get(45.0, -45.0), Some(palette::MEDIUM_BLUE));
        assert_eq!(surface.get(-60.0, 0.0), Some(palette::WHITE));
    }

    #[test]
    fn test_scene_contains_moon_and_trunk_colours() {
        let mut surface = Surface::new(200, 200, palette::WHITE);
        {
            let mut pen = Pen::new(&mut surface);
            pen.goto([-50.0, -50.0]);
            home::render(&mut pen, 100.0);
        }
        let has = |colour: [u8; 4]| surface.image().pixels().any(|p| p.0 == colour);
        assert!(has(palette::YELLOW));
        assert!(has(palette::SIENNA));
        assert!(has(palette::KHAKI));
    }

    #[test]
    fn test_pen_returns_to_the_anchor() {
        let mut surface = Surface::new(200, 200, palette::WHITE);
        let mut pen = Pen::new(&mut surface);
        pen.goto([-50.0, -50.0]);
        home::render(&mut pen, 100.0);
        let [x, y] = pen.position();
        assert!((x + 50.0).abs() < 1e-9);
        assert!((y + 50.0).abs() < 1e-9);
    }
}
