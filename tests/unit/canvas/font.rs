//! Tests for bitmap text measurement and placement

#[cfg(test)]
mod tests {
    use birdwalk::canvas::font::{Alignment, GLYPH_ADVANCE, draw_text, text_width};
    use birdwalk::canvas::palette;
    use birdwalk::canvas::surface::Surface;

    #[test]
    fn test_text_width_counts_advances() {
        // The trailing advance gap is trimmed before scaling
        assert!((text_width("ABC", 1.0) - (3.0 * GLYPH_ADVANCE - 1.0)).abs() < 1e-12);
        assert!(text_width("", 1.0).abs() < 1e-12);
        assert!((text_width("ABC", 2.0) - (3.0 * GLYPH_ADVANCE - 1.0) * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_draw_text_marks_pixels_near_the_anchor() {
        let mut surface = Surface::new(120, 60, palette::WHITE);
        draw_text(
            &mut surface,
            [0.0, 0.0],
            "A",
            2.0,
            palette::BLACK,
            Alignment::Left,
        );
        let marked = surface
            .image()
            .pixels()
            .filter(|p| p.0 == palette::BLACK)
            .count();
        assert!(marked > 0);
    }

    #[test]
    fn test_centre_alignment_straddles_the_anchor() {
        let mut left = Surface::new(200, 60, palette::WHITE);
        let mut centred = Surface::new(200, 60, palette::WHITE);
        draw_text(&mut left, [0.0, 0.0], "OO", 2.0, palette::BLACK, Alignment::Left);
        draw_text(
            &mut centred,
            [0.0, 0.0],
            "OO",
            2.0,
            palette::BLACK,
            Alignment::Centre,
        );
        // Centred text reaches left of the anchor; left-aligned does not
        let left_of_anchor = |s: &Surface| {
            (1..40).any(|x| s.get(-f64::from(x), 5.0) == Some(palette::BLACK))
        };
        assert!(!left_of_anchor(&left));
        assert!(left_of_anchor(&centred));
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        let mut surface = Surface::new(60, 60, palette::WHITE);
        draw_text(&mut surface, [0.0, 0.0], "~", 2.0, palette::BLACK, Alignment::Left);
        let marked = surface
            .image()
            .pixels()
            .filter(|p| p.0 == palette::BLACK)
            .count();
        assert_eq!(marked, 0);
    }
}
