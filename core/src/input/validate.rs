use ndarray::Array2;

use crate::prelude::{InputError, InputResult};

/// The one business rule of the form: every matrix column must have a
/// matching centroid.
pub fn validate_shape(matrix: &Array2<f64>, lat: &[f64]) -> InputResult<()> {
    if matrix.ncols() != lat.len() {
        return Err(InputError::Validation(
            "Number of centroids must match number of columns in intensity matrix.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn matching_column_count_passes() {
        let matrix = array![[1.0, 2.0, 3.0], [2.0, 1.0, 0.0]];
        assert!(validate_shape(&matrix, &[50.0, 55.0, 70.0]).is_ok());
    }

    #[test]
    fn mismatch_fails_with_exact_message() {
        let matrix = array![[1.0, 2.0, 3.0]];
        let err = validate_shape(&matrix, &[50.0, 55.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Number of centroids must match number of columns in intensity matrix."
        );
    }

    #[test]
    fn empty_latitudes_fail_against_nonempty_matrix() {
        let matrix = array![[1.0, 2.0]];
        assert!(validate_shape(&matrix, &[]).is_err());
    }
}
