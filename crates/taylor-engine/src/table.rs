//! Summary table view
//!
//! A sparse companion to the chart: one column per configured table sample
//! point and, in display order, rows for the error `f - g`, for `f`, for the
//! partial sum `g` and for each included term. Labels are emitted as
//! templates; substituting `a` is up to the renderer.

use crate::bundle::ChartBundle;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::grid::{generate_grid, position};
use crate::rounding::{display_value, round_to};
use serde::Serialize;
use std::iter;
use taylor_catalog::{FunctionDefinition, FunctionId};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Error,
    Function,
    Sum,
    Term(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub kind: RowKind,
    /// Short typeset row header, e.g. `t_{2}(x)`
    pub label: String,
    /// Typeset formula, may contain the `{a}` placeholder
    pub expression: String,
    /// One value per table column
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub function: FunctionId,
    /// Column headers: the table sample points
    pub x: Vec<f64>,
    pub error: TableRow,
    pub f: TableRow,
    pub sum: TableRow,
    pub terms: Vec<TableRow>,
}

impl TableView {
    /// Extract the table columns of `function` from `bundle`.
    ///
    /// Every sample point must be an exact grid value, otherwise the catalog
    /// entry is misconfigured and `SamplePointNotFound` is returned. A bundle
    /// whose series do not line up with its grid is rejected with
    /// `MalformedBundle`.
    pub fn build(function: &FunctionDefinition, bundle: &ChartBundle) -> Result<Self, EngineError> {
        if bundle.function != function.id {
            return Err(EngineError::FunctionMismatch {
                expected: function.id.to_string(),
                got: bundle.function.to_string(),
            });
        }
        check_shape(function, bundle)?;

        let columns = function
            .table_sample_points
            .iter()
            .map(|&x| {
                bundle.index_of(x).ok_or_else(|| {
                    warn!(function = %function.id, x, "table sample point missing from grid");
                    EngineError::SamplePointNotFound {
                        function: function.id.to_string(),
                        x,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pick = |series: &[f64]| -> Vec<f64> { columns.iter().map(|&i| series[i]).collect() };

        let error_values = columns
            .iter()
            .map(|&i| display_value(bundle.f_series[i] - bundle.sum_series[i], bundle.value_precision))
            .collect();

        let terms = bundle
            .term_series
            .iter()
            .zip(function.terms)
            .enumerate()
            .map(|(k, (series, term))| TableRow {
                kind: RowKind::Term(k),
                label: format!("t_{{{}}}(x)", k),
                expression: term.label.template().to_string(),
                values: pick(series.as_slice()),
            })
            .collect();

        Ok(Self {
            function: function.id,
            x: columns.iter().map(|&i| bundle.grid[i]).collect(),
            error: TableRow {
                kind: RowKind::Error,
                label: "\\delta".to_string(),
                expression: "f(x)-g(x)".to_string(),
                values: error_values,
            },
            f: TableRow {
                kind: RowKind::Function,
                label: "f(x)".to_string(),
                expression: function.label.template().to_string(),
                values: pick(bundle.f_series.as_slice()),
            },
            sum: TableRow {
                kind: RowKind::Sum,
                label: "g(x)".to_string(),
                expression: format!(
                    "\\sum_{{k=0}}^{{{}}}\\frac{{f^{{(k)}}({{a}})}}{{k!}}(x-{{a}})^{{k}}",
                    bundle.degree
                ),
                values: pick(bundle.sum_series.as_slice()),
            },
            terms,
        })
    }

    /// Rows in display order: error, f, sum, then terms by order
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        iter::once(&self.error)
            .chain(iter::once(&self.f))
            .chain(iter::once(&self.sum))
            .chain(self.terms.iter())
    }

    /// Column index of sample point `x`
    pub fn column(&self, x: f64) -> Option<usize> {
        position(&self.x, x)
    }
}

/// Series lengths must match the grid and the term rows must cover
/// `0..=degree` of `function`. Indexing below relies on this.
fn check_shape(function: &FunctionDefinition, bundle: &ChartBundle) -> Result<(), EngineError> {
    let malformed = |reason: String| EngineError::MalformedBundle {
        function: function.id.to_string(),
        reason,
    };

    let len = bundle.grid.len();
    if bundle.f_series.len() != len || bundle.sum_series.len() != len {
        return Err(malformed(format!("series length differs from grid length {}", len)));
    }
    if bundle.term_series.len() != bundle.degree + 1 || bundle.term_series.len() > function.term_count() {
        return Err(malformed(format!(
            "{} term rows for degree {}",
            bundle.term_series.len(),
            bundle.degree
        )));
    }
    if let Some(k) = bundle.term_series.iter().position(|row| row.len() != len) {
        return Err(malformed(format!("term row {} differs from grid length {}", k, len)));
    }
    Ok(())
}

/// Check that the x range of `function` starts on a grid value and that every
/// table sample point lies on the grid the engine builds with `config`.
///
/// Meant to run once per catalog entry (e.g. at startup or in tests) rather
/// than on every table request.
pub fn check_table_points(function: &FunctionDefinition, config: &EngineConfig) -> Result<(), EngineError> {
    let min = function.x_range.min;
    if round_to(min, config.grid_precision) != min {
        return Err(EngineError::MisalignedRange {
            function: function.id.to_string(),
            min,
        });
    }

    let grid = generate_grid(function.x_range, config.tick_size, config.grid_precision);
    match function
        .table_sample_points
        .iter()
        .find(|&&x| position(&grid, x).is_none())
    {
        Some(&x) => Err(EngineError::SamplePointNotFound {
            function: function.id.to_string(),
            x,
        }),
        None => Ok(()),
    }
}
