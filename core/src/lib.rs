//! Input parsing, record construction, and plot derivation for the hazard
//! centroid viewer.
//!
//! The modules mirror the form's linear flow: raw text is parsed into numeric
//! arrays, shapes are validated against each other, a hazard record is built,
//! and a selection is turned into a colored scatter series.

pub mod input;
pub mod math;
pub mod prelude;
pub mod records;
pub mod session;
pub mod telemetry;
pub mod view;

pub use prelude::{InputError, RenderError};
