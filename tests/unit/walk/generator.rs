//! Tests for bounded random walk generation

#[cfg(test)]
mod tests {
    use birdwalk::canvas::grid::GridLayout;
    use birdwalk::walk::{Instruction, generate_walk};

    fn layout() -> GridLayout {
        match GridLayout::new(100, 9, 7) {
            Ok(layout) => layout,
            Err(error) => panic!("valid layout rejected: {error}"),
        }
    }

    #[test]
    fn test_explicit_item_count_is_honoured() {
        let layout = layout();
        for items in [0, 1, 50, 100] {
            let walk = generate_walk(&layout, 3, Some(items));
            assert_eq!(walk.len(), items + 1);
        }
    }

    #[test]
    fn test_start_cell_is_always_on_the_grid() {
        let layout = layout();
        for seed in 0..100 {
            let walk = generate_walk(&layout, seed, Some(0));
            match walk.first() {
                Some(Instruction::Start { column, row, .. }) => {
                    assert!(*column < layout.columns());
                    assert!(*row < layout.rows());
                }
                other => panic!("seed {seed}: expected a start, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_walk_stays_on_the_grid() {
        let layout = layout();
        for seed in 0..100 {
            let walk = generate_walk(&layout, seed, None);
            let mut column = 0i64;
            let mut row = 0i64;
            for instruction in &walk {
                match instruction {
                    Instruction::Start {
                        column: c, row: r, ..
                    } => {
                        column = *c as i64;
                        row = *r as i64;
                    }
                    Instruction::Change { .. } => {}
                    Instruction::Move { direction, steps } => {
                        let [dc, dr] = direction.offset();
                        column += dc * *steps as i64;
                        row += dr * *steps as i64;
                    }
                }
                assert!(layout.contains(column, row), "seed {seed} left the grid");
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let layout = layout();
        assert_ne!(
            generate_walk(&layout, 1, Some(40)),
            generate_walk(&layout, 2, Some(40))
        );
    }
}
