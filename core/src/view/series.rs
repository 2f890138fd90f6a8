use crate::math::stats::StatsHelper;
use crate::prelude::{RenderError, RenderResult};
use crate::records::hazard::HazardRecord;
use crate::view::colormap::Palette;
use crate::view::selection::Selection;

/// Fully derived plot description: coordinates, per-point color values, and
/// labels. The viewer draws this without touching the record again.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    pub values: Vec<f64>,
    pub palette: Palette,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub value_label: &'static str,
}

impl ScatterSeries {
    /// Min and max of the color values, for normalization and the color bar.
    pub fn value_range(&self) -> (f64, f64) {
        let min = self.values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

/// Derives the scatter series for one selection. Mean uses the column-wise
/// average under viridis; a single event uses its matrix row under plasma.
pub fn render_selection(record: &HazardRecord, selection: Selection) -> RenderResult<ScatterSeries> {
    let (values, palette, title) = match selection {
        Selection::Mean => (
            StatsHelper::column_means(record.intensity.view()),
            Palette::Viridis,
            "Mean Hazard Intensity".to_string(),
        ),
        Selection::Event(index) => {
            if index >= record.event_count() {
                return Err(RenderError::EventOutOfRange {
                    index,
                    events: record.event_count(),
                });
            }
            (
                record.intensity.row(index).to_vec(),
                Palette::Plasma,
                format!("Hazard Intensity for Event {}", index),
            )
        }
    };

    Ok(ScatterSeries {
        lon: record.centroids.lon.clone(),
        lat: record.centroids.lat.clone(),
        values,
        palette,
        title,
        x_label: "Longitude",
        y_label: "Latitude",
        value_label: "Intensity",
    })
}
