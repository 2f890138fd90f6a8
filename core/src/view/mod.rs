pub mod colormap;
pub mod selection;
pub mod series;

pub use colormap::Palette;
pub use selection::Selection;
pub use series::{render_selection, ScatterSeries};
