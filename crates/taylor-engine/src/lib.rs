//! Taylor Series Engine
//!
//! Turns a catalog entry, a degree `n` and an expansion point `a` into
//! chart-ready data: a dense x grid, `f(x)`, every included term `t_k(x, a)`,
//! the partial sum `g(x)` and, on request, a sparse summary table.
//!
//! # Modules
//!
//! - `config`: grid tick size and rounding precisions
//! - `rounding`: fixed-precision rounding and the undefined marker
//! - `grid`: drift-free x grid generation
//! - `sample`: the cached `(function, a)` sample set
//! - `bundle`: the chart series snapshot handed to the plotting layer
//! - `engine`: the memoizing `SeriesEngine`
//! - `table`: the summary table view
//! - `layout`: equal-scale plot sizing
//!
//! Singular values (±∞) are never errors: they are stored as NaN, which
//! propagates through sums and serializes to JSON `null` so the plotting
//! layer draws a gap.

pub mod bundle;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod layout;
pub mod rounding;
pub mod sample;
pub mod table;

// Re-export main types
pub use bundle::ChartBundle;
pub use config::EngineConfig;
pub use engine::SeriesEngine;
pub use error::EngineError;
pub use layout::PlotSize;
pub use sample::SampleSet;
pub use table::{check_table_points, RowKind, TableRow, TableView};
pub use taylor_catalog::{Catalog, CatalogError, FunctionDefinition, FunctionId};
