// src/error.rs

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
