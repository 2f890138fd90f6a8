use crate::input::{parse_matrix, parse_vectors, validate_shape};
use crate::prelude::InputResult;
use crate::records::hazard::{build_record, HazardRecord};
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;

/// Runs one full submission: parse the three fields, validate the shapes,
/// and build a fresh record. Nothing is retained between submissions.
pub struct SubmissionHandler {
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl SubmissionHandler {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("submission"),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn submit(
        &self,
        lat_text: &str,
        lon_text: &str,
        intensity_text: &str,
    ) -> InputResult<HazardRecord> {
        let outcome = self.run(lat_text, lon_text, intensity_text);
        match &outcome {
            Ok(record) => {
                self.metrics.record_accepted();
                self.logger.record(&format!(
                    "accepted: {} events x {} centroids",
                    record.event_count(),
                    record.centroid_count()
                ));
            }
            Err(err) => {
                self.metrics.record_rejected();
                self.logger.record(&format!("rejected: {}", err));
            }
        }
        outcome
    }

    fn run(
        &self,
        lat_text: &str,
        lon_text: &str,
        intensity_text: &str,
    ) -> InputResult<HazardRecord> {
        let (lat, lon) = parse_vectors(lat_text, lon_text)?;
        let intensity = parse_matrix(intensity_text)?;
        validate_shape(&intensity, &lat)?;
        build_record(intensity, lat, lon)
    }

    /// Returns (accepted, rejected) submission counts for this session.
    pub fn metrics_snapshot(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}

impl Default for SubmissionHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::InputError;

    const LAT: &str = "50,55,70";
    const LON: &str = "10,20,30";
    const INTENSITY: &str = "1,2,3\n2,1,0\n0,2,1";

    #[test]
    fn default_inputs_build_a_record() {
        let handler = SubmissionHandler::new();
        let record = handler.submit(LAT, LON, INTENSITY).unwrap();
        assert_eq!(record.centroids.lat, vec![50.0, 55.0, 70.0]);
        assert_eq!(record.centroids.lon, vec![10.0, 20.0, 30.0]);
        assert_eq!(record.frequency, vec![1.0; 3]);
        assert_eq!(record.event_id, vec![0, 1, 2]);
        assert_eq!(handler.metrics_snapshot(), (1, 0));
    }

    #[test]
    fn non_numeric_latitude_is_rejected_before_construction() {
        let handler = SubmissionHandler::new();
        let err = handler.submit("50,abc,70", LON, INTENSITY).unwrap_err();
        assert_eq!(err, InputError::Parse("abc".to_string()));
        assert_eq!(handler.metrics_snapshot(), (0, 1));
    }

    #[test]
    fn ragged_matrix_is_rejected_before_construction() {
        let handler = SubmissionHandler::new();
        let err = handler.submit(LAT, LON, "1,2,3\n2,1").unwrap_err();
        assert!(matches!(err, InputError::Shape(_)));
    }

    #[test]
    fn column_mismatch_surfaces_the_validation_message() {
        let handler = SubmissionHandler::new();
        let err = handler.submit("50,55", "10,20", INTENSITY).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Number of centroids must match number of columns in intensity matrix."
        );
    }

    #[test]
    fn empty_latitudes_fail_shape_validation() {
        let handler = SubmissionHandler::new();
        let err = handler.submit("", "", INTENSITY).unwrap_err();
        assert!(matches!(err, InputError::Validation(_)));
    }

    #[test]
    fn each_submission_builds_a_fresh_record() {
        let handler = SubmissionHandler::new();
        let first = handler.submit(LAT, LON, INTENSITY).unwrap();
        let second = handler.submit("1,2", "3,4", "5,6\n7,8").unwrap();
        assert_eq!(first.centroid_count(), 3);
        assert_eq!(second.centroid_count(), 2);
        assert_eq!(handler.metrics_snapshot(), (2, 0));
    }
}
