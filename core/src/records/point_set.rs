use serde::{Deserialize, Serialize};

use crate::prelude::{InputError, InputResult};

/// Ordered centroid coordinates, index-aligned with the matrix columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
}

impl PointSet {
    /// Builds a point set from equal-length, non-empty coordinate vectors.
    pub fn new(lat: Vec<f64>, lon: Vec<f64>) -> InputResult<Self> {
        if lat.len() != lon.len() {
            return Err(InputError::Validation(format!(
                "latitude and longitude must have the same length ({} vs {})",
                lat.len(),
                lon.len()
            )));
        }
        if lat.is_empty() {
            return Err(InputError::Validation(
                "point set must contain at least one centroid".to_string(),
            ));
        }
        Ok(Self { lat, lon })
    }

    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }
}
