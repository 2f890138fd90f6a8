use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::prelude::InputResult;
use crate::records::point_set::PointSet;

/// Aggregate bundling the intensity matrix with its centroids and per-event
/// bookkeeping. Rebuilt from scratch on every submission, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardRecord {
    pub intensity: Array2<f64>,
    pub centroids: PointSet,
    pub frequency: Vec<f64>,
    pub event_id: Vec<u32>,
}

impl HazardRecord {
    /// Wraps validated inputs. Frequency defaults to 1.0 per event and event
    /// ids to the range `0..events`, matching the upstream hazard model.
    pub fn new(intensity: Array2<f64>, centroids: PointSet) -> Self {
        let events = intensity.nrows();
        Self {
            intensity,
            centroids,
            frequency: vec![1.0; events],
            event_id: (0..events as u32).collect(),
        }
    }

    pub fn event_count(&self) -> usize {
        self.intensity.nrows()
    }

    pub fn centroid_count(&self) -> usize {
        self.intensity.ncols()
    }
}

/// Builds a record from parsed inputs, constructing the point set first so
/// its own invariants are enforced before anything is bundled.
pub fn build_record(intensity: Array2<f64>, lat: Vec<f64>, lon: Vec<f64>) -> InputResult<HazardRecord> {
    let centroids = PointSet::new(lat, lon)?;
    Ok(HazardRecord::new(intensity, centroids))
}
