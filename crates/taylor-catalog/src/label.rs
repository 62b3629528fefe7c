//! Typeset label templates
//!
//! Labels are LaTeX fragments that may mention the expansion point through the
//! [`A_PLACEHOLDER`] token. The catalog and the engine hand templates out
//! untouched; substitution is left to whoever renders them.

use serde::{Serialize, Serializer};
use std::fmt;

/// Token standing in for the literal value of the expansion point `a`
pub const A_PLACEHOLDER: &str = "{a}";

/// A typeset template, e.g. `\frac{e^{{a}}}{2!}(x-{a})^{2}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(&'static str);

impl Label {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// The raw template, placeholder included
    pub const fn template(&self) -> &'static str {
        self.0
    }

    /// Whether the template depends on `a`
    pub fn mentions_a(&self) -> bool {
        self.0.contains(A_PLACEHOLDER)
    }

    /// Substitute the literal value of `a` into the template.
    ///
    /// Negative values are parenthesized so `x-{a}` renders as `x-(-0.5)`.
    pub fn render(&self, a: f64) -> String {
        if !self.mentions_a() {
            return self.0.to_string();
        }
        self.0.replace(A_PLACEHOLDER, &format_literal(a))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

fn format_literal(a: f64) -> String {
    // -0.0 prints as "-0"
    let a = if a == 0.0 { 0.0 } else { a };
    if a < 0.0 {
        format!("({})", a)
    } else {
        format!("{}", a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_every_placeholder() {
        let label = Label::new("\\frac{e^{{a}}}{1!}(x-{a})");
        assert_eq!(label.render(2.0), "\\frac{e^{2}}{1!}(x-2)");
        assert_eq!(label.render(0.5), "\\frac{e^{0.5}}{1!}(x-0.5)");
    }

    #[test]
    fn test_render_parenthesizes_negative_values() {
        let label = Label::new("(x-{a})^{2}");
        assert_eq!(label.render(-1.5), "(x-(-1.5))^{2}");
    }

    #[test]
    fn test_render_negative_zero() {
        let label = Label::new("x-{a}");
        assert_eq!(label.render(-0.0), "x-0");
    }

    #[test]
    fn test_label_without_placeholder() {
        let label = Label::new("e^{x}");
        assert!(!label.mentions_a());
        assert_eq!(label.render(3.0), "e^{x}");
        assert_eq!(label.to_string(), "e^{x}");
    }
}
