use ndarray::{ArrayView2, Axis};

pub struct StatsHelper;

impl StatsHelper {
    /// Column-wise arithmetic mean, one value per centroid.
    pub fn column_means(matrix: ArrayView2<f64>) -> Vec<f64> {
        match matrix.mean_axis(Axis(0)) {
            Some(means) => means.to_vec(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn column_means_of_default_matrix() {
        let matrix = array![[1.0, 2.0, 3.0], [2.0, 1.0, 0.0], [0.0, 2.0, 1.0]];
        let means = StatsHelper::column_means(matrix.view());
        assert_eq!(means.len(), 3);
        assert!((means[0] - 1.0).abs() < 1e-12);
        assert!((means[1] - 5.0 / 3.0).abs() < 1e-12);
        assert!((means[2] - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_matrix_yields_no_means() {
        let matrix = ndarray::Array2::<f64>::zeros((0, 3));
        assert!(StatsHelper::column_means(matrix.view()).is_empty());
    }
}
