use crate::definition::{Bounds, FunctionDefinition, FunctionId, TermDefinition};
use crate::label::Label;

// f^(k)(a) / k! = 1 / (1 - a)^(k+1), so t_k = (x - a)^k / (1 - a)^(k+1).
// Both f and every term blow up at 1; the engine turns the infinities into gaps.

fn inv_one_minus_x(x: f64) -> f64 {
    1.0 / (1.0 - x)
}

fn geo_term0(_x: f64, a: f64) -> f64 {
    1.0 / (1.0 - a)
}

fn geo_term1(x: f64, a: f64) -> f64 {
    (x - a) / (1.0 - a).powi(2)
}

fn geo_term2(x: f64, a: f64) -> f64 {
    (x - a).powi(2) / (1.0 - a).powi(3)
}

fn geo_term3(x: f64, a: f64) -> f64 {
    (x - a).powi(3) / (1.0 - a).powi(4)
}

fn geo_term4(x: f64, a: f64) -> f64 {
    (x - a).powi(4) / (1.0 - a).powi(5)
}

fn geo_term5(x: f64, a: f64) -> f64 {
    (x - a).powi(5) / (1.0 - a).powi(6)
}

static GEOMETRIC_TERMS: [TermDefinition; 6] = [
    TermDefinition::new(geo_term0, "\\frac{1}{1-{a}}"),
    TermDefinition::new(geo_term1, "\\frac{x-{a}}{(1-{a})^{2}}"),
    TermDefinition::new(geo_term2, "\\frac{(x-{a})^{2}}{(1-{a})^{3}}"),
    TermDefinition::new(geo_term3, "\\frac{(x-{a})^{3}}{(1-{a})^{4}}"),
    TermDefinition::new(geo_term4, "\\frac{(x-{a})^{4}}{(1-{a})^{5}}"),
    TermDefinition::new(geo_term5, "\\frac{(x-{a})^{5}}{(1-{a})^{6}}"),
];

/// `1/(1-x)`
pub static GEOMETRIC: FunctionDefinition = FunctionDefinition {
    id: FunctionId("inv_one_minus_x"),
    name: "1/(1-x)",
    label: Label::new("\\frac{1}{1-x}"),
    evaluate: inv_one_minus_x,
    terms: &GEOMETRIC_TERMS,
    x_range: Bounds::new(-2.0, 2.0),
    y_range: Bounds::new(-5.0, 5.0),
    a_range: Bounds::new(-0.9, 0.9),
    table_sample_points: &[-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0],
};
