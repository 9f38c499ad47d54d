//! Tests for colour name and hex specification parsing

#[cfg(test)]
mod tests {
    use birdwalk::WalkError;
    use birdwalk::canvas::palette::{self, named, parse};

    #[test]
    fn test_named_lookup_accepts_both_spellings() {
        assert_eq!(named("light grey"), Some(palette::LIGHT_GREY));
        assert_eq!(named("light gray"), Some(palette::LIGHT_GREY));
        assert_eq!(named("Slate Grey"), Some(palette::SLATE_GREY));
    }

    #[test]
    fn test_hex_parsing() {
        assert!(matches!(parse("#ff6347"), Ok(c) if c == palette::TOMATO));
        assert!(matches!(parse("#000000"), Ok(c) if c == palette::BLACK));
    }

    #[test]
    fn test_unknown_specifications_error() {
        assert!(matches!(
            parse("sparkle"),
            Err(WalkError::UnknownColour { .. })
        ));
        assert!(parse("#ff63").is_err());
        assert!(parse("#ff6347aa").is_err());
    }
}
