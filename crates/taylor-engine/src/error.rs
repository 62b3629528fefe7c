//! Error types for the series engine

use taylor_catalog::CatalogError;
use thiserror::Error;

/// Errors raised by engine operations
///
/// Numeric singularities are not errors; they surface as NaN in the data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Requested degree has no term in the catalog entry
    #[error("degree {degree} is out of range for '{function}' (valid degrees: 0..{term_count})")]
    InvalidDegree {
        function: String,
        degree: usize,
        term_count: usize,
    },

    /// A configured table sample point is not one of the grid values
    #[error("table sample point {x} of '{function}' is not on the grid")]
    SamplePointNotFound { function: String, x: f64 },

    /// A catalog entry's x range does not start on a grid value
    #[error("x range of '{function}' starts at {min}, which is not a grid value")]
    MisalignedRange { function: String, min: f64 },

    /// Bundle series are not aligned with its grid or degree
    #[error("malformed bundle for '{function}': {reason}")]
    MalformedBundle { function: String, reason: String },

    /// Table view requested for a bundle produced from another function
    #[error("bundle was generated for '{got}', not '{expected}'")]
    FunctionMismatch { expected: String, got: String },

    /// Rejected engine configuration
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
