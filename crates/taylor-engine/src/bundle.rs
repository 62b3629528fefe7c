//! Chart series snapshot
//!
//! A `ChartBundle` is what the plotting collaborator consumes: the grid as an
//! ordered category axis plus one value series per row, all index-aligned.
//! Undefined points are NaN in memory and `null` once serialized.

use crate::grid;
use crate::rounding::display_value;
use crate::sample::SampleSet;
use serde::Serialize;
use taylor_catalog::{Bounds, FunctionDefinition, FunctionId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    pub function: FunctionId,
    pub degree: usize,
    pub a: f64,
    /// y-axis bounds for the plot
    pub y_range: Bounds,
    /// Digits every series value was rounded to
    pub value_precision: u32,
    pub grid: Vec<f64>,
    pub f_series: Vec<f64>,
    /// Partial sum through `degree`
    pub sum_series: Vec<f64>,
    /// Term rows `0..=degree`
    pub term_series: Vec<Vec<f64>>,
}

impl ChartBundle {
    /// Slice the cached samples down to `degree` and sum them.
    ///
    /// `degree` must already be validated against the catalog entry.
    pub(crate) fn from_samples(
        samples: &SampleSet,
        function: &FunctionDefinition,
        degree: usize,
        value_precision: u32,
    ) -> Self {
        Self {
            function: function.id,
            degree,
            a: samples.a(),
            y_range: function.y_range,
            value_precision,
            grid: samples.grid().to_vec(),
            f_series: samples.f_values().to_vec(),
            sum_series: samples.partial_sum(degree, value_precision),
            term_series: samples.terms_through(degree).to_vec(),
        }
    }

    /// Number of grid points
    #[inline]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Grid index of `x`, by exact comparison
    pub fn index_of(&self, x: f64) -> Option<usize> {
        grid::position(&self.grid, x)
    }

    /// Pointwise approximation error `round(f - g)`
    pub fn error_series(&self) -> Vec<f64> {
        self.f_series
            .iter()
            .zip(&self.sum_series)
            .map(|(f, g)| display_value(f - g, self.value_precision))
            .collect()
    }

    /// Serialize for the plotting layer; undefined points become `null`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
