//! Tests for instruction parsing and canonical formatting

#[cfg(test)]
mod tests {
    use birdwalk::scene::Variant;
    use birdwalk::walk::{Direction, Instruction};

    #[test]
    fn test_canonical_lowercase_formatting() {
        let start = Instruction::Start {
            column: 2,
            row: 3,
            variant: Variant::LeavingHome,
        };
        assert_eq!(start.to_string(), "start c 4 A");
        assert_eq!(
            Instruction::Change {
                variant: Variant::OceanTrip
            }
            .to_string(),
            "change D"
        );
        assert_eq!(
            Instruction::Move {
                direction: Direction::East,
                steps: 0
            }
            .to_string(),
            "east 0"
        );
    }

    #[test]
    fn test_parsing_is_case_insensitive() {
        assert!(matches!(
            "START C 4 a".parse(),
            Ok(Instruction::Start {
                column: 2,
                row: 3,
                variant: Variant::LeavingHome,
            })
        ));
        assert!(matches!(
            "NORTH 2".parse(),
            Ok(Instruction::Move {
                direction: Direction::North,
                steps: 2,
            })
        ));
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::North.offset(), [0, 1]);
        assert_eq!(Direction::South.offset(), [0, -1]);
        assert_eq!(Direction::East.offset(), [1, 0]);
        assert_eq!(Direction::West.offset(), [-1, 0]);
    }

    #[test]
    fn test_rejects_extra_and_missing_tokens() {
        assert!("start c 4".parse::<Instruction>().is_err());
        assert!("start c 4 A extra".parse::<Instruction>().is_err());
        assert!("change".parse::<Instruction>().is_err());
        assert!("north".parse::<Instruction>().is_err());
    }
}
