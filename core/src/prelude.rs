use thiserror::Error;

/// Common error type for turning form text into domain records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("invalid decimal literal: '{0}'")]
    Parse(String),
    #[error("{0}")]
    Shape(String),
    #[error("{0}")]
    Validation(String),
}

/// Common error type for deriving a plot from an already-built record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("event index {index} out of range ({events} events)")]
    EventOutOfRange { index: usize, events: usize },
}

pub type InputResult<T> = Result<T, InputError>;
pub type RenderResult<T> = Result<T, RenderError>;
