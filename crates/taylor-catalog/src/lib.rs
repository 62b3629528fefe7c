//! Taylor Function Catalog
//!
//! A fixed registry of the functions the series engine knows how to expand.
//! Every entry carries:
//! - the closed-form function `f(x)`
//! - a fixed-length list of hand-supplied Taylor terms `t_k(x, a)`
//! - typeset labels for `f` and for each term
//! - display bounds (x-range, y-range, valid range of `a`) and the x-values
//!   sampled by the summary table
//!
//! Entries are plain `static` data holding function pointers, so the catalog
//! never allocates closures and nothing in it is mutable after startup.

pub mod definition;
pub mod error;
pub mod functions;
pub mod label;
pub mod registry;

// Re-exports
pub use definition::{Bounds, EvalFn, FunctionDefinition, FunctionId, TermDefinition, TermFn};
pub use error::CatalogError;
pub use label::{Label, A_PLACEHOLDER};
pub use registry::Catalog;
