pub mod hazard;
pub mod point_set;

pub use hazard::{build_record, HazardRecord};
pub use point_set::PointSet;
