use ndarray::Array2;

use crate::input::vectors::parse_decimal_list;
use crate::prelude::{InputError, InputResult};

/// Parses newline-separated rows of comma-separated decimals into a
/// rectangular matrix (events x centroids).
///
/// The block is trimmed as a whole before splitting, so trailing newlines
/// from the editor are harmless. Interior blank lines parse to zero-length
/// rows and fail the rectangularity check like any other ragged row.
pub fn parse_matrix(text: &str) -> InputResult<Array2<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Shape("intensity matrix is empty".to_string()));
    }

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for line in trimmed.split('\n') {
        rows.push(parse_decimal_list(line)?);
    }

    let columns = rows[0].len();
    for (index, row) in rows.iter().enumerate() {
        if row.len() != columns {
            return Err(InputError::Shape(format!(
                "row {} has {} columns, expected {}",
                index,
                row.len(),
                columns
            )));
        }
    }

    let events = rows.len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((events, columns), flat)
        .map_err(|err| InputError::Shape(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn parses_default_matrix() {
        let matrix = parse_matrix("1,2,3\n2,1,0\n0,2,1").unwrap();
        assert_eq!(
            matrix,
            array![[1.0, 2.0, 3.0], [2.0, 1.0, 0.0], [0.0, 2.0, 1.0]]
        );
    }

    #[test]
    fn trailing_newline_is_ignored() {
        let matrix = parse_matrix("1,2\n3,4\n").unwrap();
        assert_eq!(matrix.dim(), (2, 2));
    }

    #[test]
    fn ragged_rows_are_a_shape_error() {
        let err = parse_matrix("1,2,3\n2,1").unwrap_err();
        assert!(matches!(err, InputError::Shape(_)));
        assert_eq!(err.to_string(), "row 1 has 2 columns, expected 3");
    }

    #[test]
    fn interior_blank_line_is_a_shape_error() {
        let err = parse_matrix("1,2,3\n\n0,2,1").unwrap_err();
        assert!(matches!(err, InputError::Shape(_)));
    }

    #[test]
    fn non_numeric_cell_is_a_parse_error() {
        let err = parse_matrix("1,2,3\n2,x,0").unwrap_err();
        assert_eq!(err, InputError::Parse("x".to_string()));
    }

    #[test]
    fn empty_text_is_a_shape_error() {
        let err = parse_matrix("  \n ").unwrap_err();
        assert_eq!(err.to_string(), "intensity matrix is empty");
    }
}
