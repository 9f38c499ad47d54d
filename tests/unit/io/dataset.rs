//! Tests for dataset text parsing and file round trips

#[cfg(test)]
mod tests {
    use birdwalk::WalkError;
    use birdwalk::io::dataset::{load_dataset, parse_dataset, write_dataset};
    use birdwalk::scene::Variant;
    use birdwalk::walk::{Direction, Instruction};

    #[test]
    fn test_comment_lines_do_not_count_for_error_reporting() {
        let text = "# header\n\nstart a 1 A\n# middle\nbroken line here\n";
        assert!(matches!(
            parse_dataset(text),
            Err(WalkError::DatasetParse { line: 5, .. })
        ));
    }

    #[test]
    fn test_empty_text_parses_to_an_empty_walk() {
        assert!(matches!(parse_dataset(""), Ok(ref v) if v.is_empty()));
        assert!(matches!(parse_dataset("\n# only comments\n"), Ok(ref v) if v.is_empty()));
    }

    #[test]
    fn test_written_files_are_line_per_instruction() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("temp directory unavailable");
        };
        let path = dir.path().join("emitted").join("walk.txt");
        let instructions = vec![
            Instruction::Start {
                column: 0,
                row: 0,
                variant: Variant::LeavingHome,
            },
            Instruction::Move {
                direction: Direction::North,
                steps: 2,
            },
        ];
        write_dataset(&instructions, &path).unwrap_or_else(|error| panic!("{error}"));

        let text = std::fs::read_to_string(&path).unwrap_or_else(|error| panic!("{error}"));
        assert_eq!(text, "start a 1 A\nnorth 2\n");
        assert_eq!(
            load_dataset(&path).unwrap_or_else(|error| panic!("{error}")),
            instructions
        );
    }
}
