//! Tests for line-based layout parsing

#[cfg(test)]
mod tests {
    use brickwork::BrickworkError;
    use brickwork::io::reader::read_first_layer;

    // Tests a well-formed layout populates the declared grid
    // Verified by transposing row and col while populating
    #[test]
    fn test_reads_declared_grid() {
        let layer = read_first_layer("2 4\n1 1 2 2\n3 3 4 4\n".as_bytes()).unwrap();

        assert_eq!(layer.rows(), 2);
        assert_eq!(layer.cols(), 4);
        assert_eq!(layer.value(0, 0).unwrap(), 1);
        assert_eq!(layer.value(0, 2).unwrap(), 2);
        assert_eq!(layer.value(1, 3).unwrap(), 4);
    }

    // Tests tolerance for irregular whitespace between tokens
    // Verified by splitting on single spaces only
    #[test]
    fn test_accepts_irregular_whitespace() {
        let layer = read_first_layer("2 2\n 1\t1 \n2   2\n".as_bytes()).unwrap();
        assert_eq!(layer.value(0, 1).unwrap(), 1);
        assert_eq!(layer.value(1, 0).unwrap(), 2);
    }

    // Tests header rejection for missing input and wrong token counts
    // Verified by defaulting missing dimensions to zero
    #[test]
    fn test_rejects_malformed_header() {
        assert!(matches!(
            read_first_layer("".as_bytes()).unwrap_err(),
            BrickworkError::InvalidHeader { .. }
        ));
        assert!(matches!(
            read_first_layer("4\n".as_bytes()).unwrap_err(),
            BrickworkError::InvalidHeader { .. }
        ));
        assert!(matches!(
            read_first_layer("2 4 6\n".as_bytes()).unwrap_err(),
            BrickworkError::InvalidHeader { .. }
        ));
    }

    // Tests dimension validation fires before any data row is read
    // Verified by validating dimensions after populating the grid
    #[test]
    fn test_rejects_invalid_dimensions_from_header() {
        assert!(matches!(
            read_first_layer("3 4\n1 1 2 2\n".as_bytes()).unwrap_err(),
            BrickworkError::InvalidDimension {
                parameter: "rows",
                value: 3
            }
        ));
        assert!(matches!(
            read_first_layer("2 200\n".as_bytes()).unwrap_err(),
            BrickworkError::InvalidDimension {
                parameter: "cols",
                value: 200
            }
        ));
    }

    // Tests non-integer tokens are rejected with their line number
    // Verified by skipping unparseable tokens
    #[test]
    fn test_rejects_non_integer_tokens() {
        let error = read_first_layer("2 2\n1 1\n2 x\n".as_bytes()).unwrap_err();
        assert!(matches!(
            error,
            BrickworkError::InvalidToken { line: 3, .. }
        ));
    }

    // Tests early end of input against the declared row count
    // Verified by accepting however many rows arrive
    #[test]
    fn test_rejects_missing_rows() {
        assert!(matches!(
            read_first_layer("2 4\n1 1 2 2\n".as_bytes()).unwrap_err(),
            BrickworkError::InvalidRowCount {
                expected: 2,
                actual: 1
            }
        ));
    }

    // Tests per-row column counting, including the trailing-space layout
    // Verified by counting characters instead of tokens
    #[test]
    fn test_rejects_wrong_column_count() {
        assert!(matches!(
            read_first_layer("2 4\n1 1 2 \n3 3 3 2\n".as_bytes()).unwrap_err(),
            BrickworkError::InvalidColCount {
                row: 0,
                expected: 4,
                actual: 3
            }
        ));

        // A blank data line counts as zero columns
        assert!(matches!(
            read_first_layer("2 2\n\n1 1\n".as_bytes()).unwrap_err(),
            BrickworkError::InvalidColCount {
                row: 0,
                expected: 2,
                actual: 0
            }
        ));
    }

    // Tests rejection of content after the declared rows
    // Verified by ignoring everything past the last declared row
    #[test]
    fn test_rejects_trailing_content() {
        assert!(matches!(
            read_first_layer("2 2\n1 1\n2 2\n3 3\n".as_bytes()).unwrap_err(),
            BrickworkError::InvalidRowCount {
                expected: 2,
                actual: 3
            }
        ));
    }

    // Tests clean EOF and trailing blank space after the last row
    // Verified by demanding one more readable line after the grid
    #[test]
    fn test_accepts_end_of_input_after_last_row() {
        assert!(read_first_layer("2 2\n1 1\n2 2".as_bytes()).is_ok());
        assert!(read_first_layer("2 2\n1 1\n2 2\n   \n".as_bytes()).is_ok());
    }

    // Tests that geometry is not the reader's concern
    // Verified by running shape validation inside the reader
    #[test]
    fn test_accepts_geometrically_invalid_values() {
        // Negative ids and isolated values parse fine; the validator
        // rejects them later
        let layer = read_first_layer("2 2\n-1 7\n3 9\n".as_bytes()).unwrap();
        assert_eq!(layer.value(0, 0).unwrap(), -1);
        assert_eq!(layer.value(1, 1).unwrap(), 9);
    }
}
