//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use birdwalk::WalkError;
    use birdwalk::io::error::{invalid_parameter, parse_error};
    use std::error::Error;

    #[test]
    fn test_file_system_error_chains_its_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = WalkError::FileSystem {
            path: "/tmp/walk.txt".into(),
            operation: "read file",
            source: io_error,
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("read file"));
    }

    #[test]
    fn test_out_of_bounds_message_names_cell_and_grid() {
        let error = WalkError::OutOfBounds {
            column: -1,
            row: 3,
            iteration: 12,
            grid: (9, 7),
        };
        let message = error.to_string();
        assert!(message.contains("Instruction 12"));
        assert!(message.contains("column -1"));
        assert!(message.contains("9x7"));
    }

    #[test]
    fn test_helper_constructors_carry_their_fields() {
        let parameter = invalid_parameter("cell_size", &50, &"too small");
        assert!(matches!(
            parameter,
            WalkError::InvalidParameter {
                parameter: "cell_size",
                ..
            }
        ));

        let parse = parse_error(7, &"bad line");
        assert!(matches!(parse, WalkError::DatasetParse { line: 7, .. }));
        assert!(parse.to_string().contains("line 7"));
    }
}
