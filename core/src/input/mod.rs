pub mod matrix;
pub mod validate;
pub mod vectors;

pub use matrix::parse_matrix;
pub use validate::validate_shape;
pub use vectors::{parse_decimal_list, parse_vectors};
