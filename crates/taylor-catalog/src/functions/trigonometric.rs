use crate::definition::{Bounds, FunctionDefinition, FunctionId, TermDefinition};
use crate::label::Label;

// Derivatives of sin cycle through sin, cos, -sin, -cos; cos is the same cycle
// shifted by one.

fn sin_term0(_x: f64, a: f64) -> f64 {
    a.sin()
}

fn sin_term1(x: f64, a: f64) -> f64 {
    a.cos() * (x - a)
}

fn sin_term2(x: f64, a: f64) -> f64 {
    -a.sin() / 2.0 * (x - a).powi(2)
}

fn sin_term3(x: f64, a: f64) -> f64 {
    -a.cos() / 6.0 * (x - a).powi(3)
}

fn sin_term4(x: f64, a: f64) -> f64 {
    a.sin() / 24.0 * (x - a).powi(4)
}

fn sin_term5(x: f64, a: f64) -> f64 {
    a.cos() / 120.0 * (x - a).powi(5)
}

fn cos_term0(_x: f64, a: f64) -> f64 {
    a.cos()
}

fn cos_term1(x: f64, a: f64) -> f64 {
    -a.sin() * (x - a)
}

fn cos_term2(x: f64, a: f64) -> f64 {
    -a.cos() / 2.0 * (x - a).powi(2)
}

fn cos_term3(x: f64, a: f64) -> f64 {
    a.sin() / 6.0 * (x - a).powi(3)
}

fn cos_term4(x: f64, a: f64) -> f64 {
    a.cos() / 24.0 * (x - a).powi(4)
}

fn cos_term5(x: f64, a: f64) -> f64 {
    -a.sin() / 120.0 * (x - a).powi(5)
}

static SIN_TERMS: [TermDefinition; 6] = [
    TermDefinition::new(sin_term0, "\\sin({a})"),
    TermDefinition::new(sin_term1, "\\frac{\\cos({a})}{1!}(x-{a})"),
    TermDefinition::new(sin_term2, "-\\frac{\\sin({a})}{2!}(x-{a})^{2}"),
    TermDefinition::new(sin_term3, "-\\frac{\\cos({a})}{3!}(x-{a})^{3}"),
    TermDefinition::new(sin_term4, "\\frac{\\sin({a})}{4!}(x-{a})^{4}"),
    TermDefinition::new(sin_term5, "\\frac{\\cos({a})}{5!}(x-{a})^{5}"),
];

static COS_TERMS: [TermDefinition; 6] = [
    TermDefinition::new(cos_term0, "\\cos({a})"),
    TermDefinition::new(cos_term1, "-\\frac{\\sin({a})}{1!}(x-{a})"),
    TermDefinition::new(cos_term2, "-\\frac{\\cos({a})}{2!}(x-{a})^{2}"),
    TermDefinition::new(cos_term3, "\\frac{\\sin({a})}{3!}(x-{a})^{3}"),
    TermDefinition::new(cos_term4, "\\frac{\\cos({a})}{4!}(x-{a})^{4}"),
    TermDefinition::new(cos_term5, "-\\frac{\\sin({a})}{5!}(x-{a})^{5}"),
];

/// `sin(x)`
pub static SIN: FunctionDefinition = FunctionDefinition {
    id: FunctionId("sin_x"),
    name: "sin(x)",
    label: Label::new("\\sin(x)"),
    evaluate: f64::sin,
    terms: &SIN_TERMS,
    x_range: Bounds::new(-6.3, 6.3),
    y_range: Bounds::new(-3.0, 3.0),
    a_range: Bounds::new(-3.0, 3.0),
    table_sample_points: &[-6.0, -3.0, -1.5, 0.0, 1.5, 3.0, 6.0],
};

/// `cos(x)`
pub static COS: FunctionDefinition = FunctionDefinition {
    id: FunctionId("cos_x"),
    name: "cos(x)",
    label: Label::new("\\cos(x)"),
    evaluate: f64::cos,
    terms: &COS_TERMS,
    x_range: Bounds::new(-6.3, 6.3),
    y_range: Bounds::new(-3.0, 3.0),
    a_range: Bounds::new(-3.0, 3.0),
    table_sample_points: &[-6.0, -3.0, -1.5, 0.0, 1.5, 3.0, 6.0],
};
