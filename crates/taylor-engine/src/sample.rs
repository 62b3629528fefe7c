//! Cached sample set
//!
//! A `SampleSet` holds the expensive part of chart generation: the grid,
//! `f` on the grid and every term row of the catalog entry at one expansion
//! point. It is keyed by `(definition, a)` and only ever replaced as a whole.

use crate::config::EngineConfig;
use crate::grid::generate_grid;
use crate::rounding::{defined, display_value, round_to};
use taylor_catalog::{Bounds, FunctionDefinition, FunctionId};

/// Identity of a catalog entry as far as cached data is concerned.
///
/// Two entries sharing an id but differing in formulas or display bounds get
/// different keys. Formulas are compared by address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DefinitionKey {
    id: FunctionId,
    evaluate: usize,
    terms: usize,
    term_count: usize,
    x_range: Bounds,
    y_range: Bounds,
}

impl DefinitionKey {
    pub(crate) fn of(function: &FunctionDefinition) -> Self {
        Self {
            id: function.id,
            evaluate: function.evaluate as usize,
            terms: function.terms.as_ptr() as usize,
            term_count: function.terms.len(),
            x_range: function.x_range,
            y_range: function.y_range,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    key: DefinitionKey,
    a: f64,
    grid: Vec<f64>,
    f_values: Vec<f64>,
    /// One row per term order, all `K` of them
    term_values: Vec<Vec<f64>>,
}

impl SampleSet {
    /// Sample `f` and every term of `function` over its x grid.
    ///
    /// Cost is O(grid length × term count).
    pub fn build(function: &FunctionDefinition, a: f64, config: &EngineConfig) -> Self {
        let grid = generate_grid(function.x_range, config.tick_size, config.grid_precision);
        let precision = config.value_precision;

        let f_values = grid
            .iter()
            .map(|&x| display_value(function.eval(x), precision))
            .collect();

        let term_values = function
            .terms
            .iter()
            .map(|term| {
                grid.iter()
                    .map(|&x| display_value(term.eval(x, a), precision))
                    .collect()
            })
            .collect();

        Self {
            key: DefinitionKey::of(function),
            a,
            grid,
            f_values,
            term_values,
        }
    }

    /// Whether this set was sampled for this exact `function` at exactly `a`
    pub fn matches(&self, function: &FunctionDefinition, a: f64) -> bool {
        self.key == DefinitionKey::of(function) && self.a.to_bits() == a.to_bits()
    }

    pub fn function(&self) -> FunctionId {
        self.key.id
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    pub fn f_values(&self) -> &[f64] {
        &self.f_values
    }

    pub fn term_values(&self) -> &[Vec<f64>] {
        &self.term_values
    }

    /// Term rows `0..=degree`; `degree` must be below the term count
    pub(crate) fn terms_through(&self, degree: usize) -> &[Vec<f64>] {
        &self.term_values[..=degree]
    }

    /// Pointwise `round(Σ_{k=0}^{degree} t_k, precision)`.
    ///
    /// Terms are added in order starting from zero, so a NaN in any included
    /// row makes that grid point NaN.
    pub(crate) fn partial_sum(&self, degree: usize, precision: u32) -> Vec<f64> {
        let rows = self.terms_through(degree);
        (0..self.grid.len())
            .map(|i| {
                let sum = rows.iter().fold(0.0, |acc, row| acc + row[i]);
                round_to(defined(sum), precision)
            })
            .collect()
    }
}
