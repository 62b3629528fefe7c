use crate::definition::{Bounds, FunctionDefinition, FunctionId, TermDefinition};
use crate::label::Label;

// For k >= 1: f^(k)(a) / k! = (-1)^(k+1) / (k (1 + a)^k).
// ln(1+x) diverges to -inf at x = -1, which shows up as a gap in the plot.

fn ln_term0(_x: f64, a: f64) -> f64 {
    a.ln_1p()
}

fn ln_term1(x: f64, a: f64) -> f64 {
    (x - a) / (1.0 + a)
}

fn ln_term2(x: f64, a: f64) -> f64 {
    -(x - a).powi(2) / (2.0 * (1.0 + a).powi(2))
}

fn ln_term3(x: f64, a: f64) -> f64 {
    (x - a).powi(3) / (3.0 * (1.0 + a).powi(3))
}

fn ln_term4(x: f64, a: f64) -> f64 {
    -(x - a).powi(4) / (4.0 * (1.0 + a).powi(4))
}

fn ln_term5(x: f64, a: f64) -> f64 {
    (x - a).powi(5) / (5.0 * (1.0 + a).powi(5))
}

static LN_1P_TERMS: [TermDefinition; 6] = [
    TermDefinition::new(ln_term0, "\\ln(1+{a})"),
    TermDefinition::new(ln_term1, "\\frac{x-{a}}{1+{a}}"),
    TermDefinition::new(ln_term2, "-\\frac{(x-{a})^{2}}{2(1+{a})^{2}}"),
    TermDefinition::new(ln_term3, "\\frac{(x-{a})^{3}}{3(1+{a})^{3}}"),
    TermDefinition::new(ln_term4, "-\\frac{(x-{a})^{4}}{4(1+{a})^{4}}"),
    TermDefinition::new(ln_term5, "\\frac{(x-{a})^{5}}{5(1+{a})^{5}}"),
];

/// `ln(1+x)`
pub static LN_1P: FunctionDefinition = FunctionDefinition {
    id: FunctionId("ln_one_plus_x"),
    name: "ln(1+x)",
    label: Label::new("\\ln(1+x)"),
    evaluate: f64::ln_1p,
    terms: &LN_1P_TERMS,
    x_range: Bounds::new(-1.0, 3.0),
    y_range: Bounds::new(-4.0, 2.0),
    a_range: Bounds::new(-0.5, 1.0),
    table_sample_points: &[-1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0],
};
