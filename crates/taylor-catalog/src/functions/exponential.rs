use crate::definition::{Bounds, FunctionDefinition, FunctionId, TermDefinition};
use crate::label::Label;

// Every derivative of e^x is e^x, so t_k = e^a / k! * (x - a)^k

fn exp_term0(_x: f64, a: f64) -> f64 {
    a.exp()
}

fn exp_term1(x: f64, a: f64) -> f64 {
    a.exp() * (x - a)
}

fn exp_term2(x: f64, a: f64) -> f64 {
    a.exp() / 2.0 * (x - a).powi(2)
}

fn exp_term3(x: f64, a: f64) -> f64 {
    a.exp() / 6.0 * (x - a).powi(3)
}

fn exp_term4(x: f64, a: f64) -> f64 {
    a.exp() / 24.0 * (x - a).powi(4)
}

static EXP_TERMS: [TermDefinition; 5] = [
    TermDefinition::new(exp_term0, "e^{{a}}"),
    TermDefinition::new(exp_term1, "\\frac{e^{{a}}}{1!}(x-{a})"),
    TermDefinition::new(exp_term2, "\\frac{e^{{a}}}{2!}(x-{a})^{2}"),
    TermDefinition::new(exp_term3, "\\frac{e^{{a}}}{3!}(x-{a})^{3}"),
    TermDefinition::new(exp_term4, "\\frac{e^{{a}}}{4!}(x-{a})^{4}"),
];

/// `e^x`
pub static EXP: FunctionDefinition = FunctionDefinition {
    id: FunctionId("e_pow_x"),
    name: "e^x",
    label: Label::new("e^{x}"),
    evaluate: f64::exp,
    terms: &EXP_TERMS,
    x_range: Bounds::new(0.0, 5.0),
    y_range: Bounds::new(0.0, 10.0),
    a_range: Bounds::new(0.0, 5.0),
    table_sample_points: &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::test_support::partial_sum;
    use approx::assert_relative_eq;

    #[test]
    fn test_maclaurin_terms_at_zero() {
        assert_eq!(EXP.term_count(), 5);
        for k in 1..EXP.term_count() {
            assert_eq!(EXP.terms[k].eval(0.0, 0.0), 0.0);
        }
        assert_eq!(EXP.terms[0].eval(3.0, 0.0), 1.0);
    }

    #[test]
    fn test_term_coefficients() {
        // x = 1, a = 0: t_k = 1/k!
        let expected = [1.0, 1.0, 0.5, 1.0 / 6.0, 1.0 / 24.0];
        for (term, want) in EXP.terms.iter().zip(expected) {
            assert_relative_eq!(term.eval(1.0, 0.0), want, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_expansion_around_nonzero_point() {
        let a = 2.0;
        let x = 2.1;
        assert_relative_eq!(partial_sum(&EXP, 4, x, a), EXP.eval(x), epsilon = 1e-6);
    }
}
