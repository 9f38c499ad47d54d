//! Tests for instruction interpretation and canvas state

#[cfg(test)]
mod tests {
    use birdwalk::WalkError;
    use birdwalk::canvas::grid::GridLayout;
    use birdwalk::scene::Variant;
    use birdwalk::walk::{CanvasOptions, Direction, Instruction, Walker};

    fn walker() -> Walker {
        let layout = match GridLayout::new(100, 9, 7) {
            Ok(layout) => layout,
            Err(error) => panic!("valid layout rejected: {error}"),
        };
        Walker::new(layout, 42, &CanvasOptions::default())
    }

    #[test]
    fn test_change_before_start_is_rejected() {
        let mut walker = walker();
        let result = walker.apply(&Instruction::Change {
            variant: Variant::BeachTrip,
        });
        assert!(matches!(
            result,
            Err(WalkError::MissingStart { iteration: 1 })
        ));
    }

    #[test]
    fn test_change_redraws_in_place() {
        let mut walker = walker();
        let start = Instruction::Start {
            column: 4,
            row: 4,
            variant: Variant::LeavingHome,
        };
        let change = Instruction::Change {
            variant: Variant::OceanTrip,
        };
        assert!(walker.apply(&start).is_ok());
        assert!(walker.apply(&change).is_ok());
        assert_eq!(walker.position(), Some([4, 4]));
        assert_eq!(walker.variant(), Some(Variant::OceanTrip));
        assert_eq!(walker.visits().get((4, 4)), Some(&2));
    }

    #[test]
    fn test_finish_without_start_skips_the_final_panel() {
        let mut walker = walker();
        let before = walker.surface().image().clone();
        walker.finish();
        assert_eq!(walker.surface().image().as_raw(), before.as_raw());
    }

    #[test]
    fn test_move_failure_reports_the_escape_cell() {
        let mut walker = walker();
        let start = Instruction::Start {
            column: 0,
            row: 0,
            variant: Variant::MountainTrip,
        };
        let step = Instruction::Move {
            direction: Direction::South,
            steps: 2,
        };
        assert!(walker.apply(&start).is_ok());
        assert!(matches!(
            walker.apply(&step),
            Err(WalkError::OutOfBounds {
                column: 0,
                row: -1,
                iteration: 2,
                grid: (9, 7),
            })
        ));
    }

    #[test]
    fn test_canvas_matches_the_layout_window() {
        let walker = walker();
        assert_eq!(walker.surface().width(), 1450);
        assert_eq!(walker.surface().height(), 800);
    }
}
