//! Catalog entry types
//!
//! `FunctionDefinition` and `TermDefinition` are immutable records built as
//! `static` items. Formulas are plain function pointers so entries can live
//! in read-only memory and be shared freely.

use crate::label::Label;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Closed-form target function `f(x)`
pub type EvalFn = fn(f64) -> f64;

/// The k-th Taylor term `t_k(x, a)` as a closed-form function of `x` and `a`
pub type TermFn = fn(f64, f64) -> f64;

/// Stable identifier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FunctionId(pub &'static str);

impl FunctionId {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// One summand of a Taylor expansion
#[derive(Debug, Clone, Copy)]
pub struct TermDefinition {
    pub evaluate: TermFn,
    pub label: Label,
}

impl TermDefinition {
    pub const fn new(evaluate: TermFn, label: &'static str) -> Self {
        Self {
            evaluate,
            label: Label::new(label),
        }
    }

    #[inline]
    pub fn eval(&self, x: f64, a: f64) -> f64 {
        (self.evaluate)(x, a)
    }
}

/// A supported function together with its term formulas and display metadata
///
/// The term list has a fixed length `K`; index `k` is the term of order `k`,
/// so valid degrees are `0..=K-1`.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDefinition {
    /// Catalog key
    pub id: FunctionId,
    /// Plain-text name, e.g. `sin(x)`
    pub name: &'static str,
    /// Typeset representation of `f`
    pub label: Label,
    pub evaluate: EvalFn,
    pub terms: &'static [TermDefinition],
    /// Plotting bounds of the x axis
    pub x_range: Bounds,
    /// Plotting bounds of the y axis
    pub y_range: Bounds,
    /// Bounds offered to the expansion-point slider
    pub a_range: Bounds,
    /// x-values shown by the summary table; each must be a grid point
    pub table_sample_points: &'static [f64],
}

impl FunctionDefinition {
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.evaluate)(x)
    }

    /// Term of order `k`, if the entry supplies one
    #[inline]
    pub fn term(&self, k: usize) -> Option<&TermDefinition> {
        self.terms.get(k)
    }

    #[inline]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Highest valid degree (`K-1`), or `None` for an entry without terms
    pub fn max_degree(&self) -> Option<usize> {
        self.terms.len().checked_sub(1)
    }

    pub fn accepts_degree(&self, degree: usize) -> bool {
        degree < self.terms.len()
    }

    /// Degrees a caller may request, `0..=max_degree`
    pub fn degree_bounds(&self) -> Option<RangeInclusive<usize>> {
        self.max_degree().map(|max| 0..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64) -> f64 {
        x * x
    }

    fn constant(_x: f64, a: f64) -> f64 {
        a * a
    }

    static TERMS: [TermDefinition; 1] = [TermDefinition::new(constant, "{a}^{2}")];

    static SQUARE: FunctionDefinition = FunctionDefinition {
        id: FunctionId("square"),
        name: "x^2",
        label: Label::new("x^{2}"),
        evaluate: square,
        terms: &TERMS,
        x_range: Bounds::new(-1.0, 1.0),
        y_range: Bounds::new(0.0, 1.0),
        a_range: Bounds::new(-1.0, 1.0),
        table_sample_points: &[0.0],
    };

    #[test]
    fn test_bounds() {
        let b = Bounds::new(-2.0, 3.0);
        assert!(b.contains(-2.0));
        assert!(b.contains(3.0));
        assert!(!b.contains(3.1));
        assert_eq!(b.span(), 5.0);
    }

    #[test]
    fn test_degree_bounds() {
        assert_eq!(SQUARE.term_count(), 1);
        assert_eq!(SQUARE.max_degree(), Some(0));
        assert!(SQUARE.accepts_degree(0));
        assert!(!SQUARE.accepts_degree(1));
        assert_eq!(SQUARE.degree_bounds(), Some(0..=0));

        let empty = FunctionDefinition { terms: &[], ..SQUARE };
        assert_eq!(empty.max_degree(), None);
        assert_eq!(empty.degree_bounds(), None);
    }

    #[test]
    fn test_eval_dispatch() {
        assert_eq!(SQUARE.eval(3.0), 9.0);
        assert_eq!(SQUARE.term(0).map(|t| t.eval(10.0, 2.0)), Some(4.0));
        assert!(SQUARE.term(1).is_none());
    }
}
