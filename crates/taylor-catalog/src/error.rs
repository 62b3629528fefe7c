//! Error types for catalog lookups and registration

use thiserror::Error;

/// Errors raised by [`Catalog`](crate::Catalog) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No entry is registered under the requested identifier
    #[error("unknown function '{id}'")]
    NotFound { id: String },

    /// An entry with the same identifier is already registered
    #[error("function '{id}' is already registered")]
    DuplicateId { id: String },
}
