//! Fixed-precision rounding
//!
//! Every number the engine exposes goes through [`display_value`]: infinities
//! become the undefined marker (NaN) and finite values are rounded half away
//! from zero to a fixed number of decimal digits. Rounding at the point of
//! computation keeps repeated calls bit-identical.

/// Round `value` to `digits` decimal places.
///
/// Non-finite values are returned untouched, as are values too large to scale.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    scaled.round() / factor
}

/// Replace ±∞ with the undefined marker
#[inline]
pub fn defined(value: f64) -> f64 {
    if value.is_infinite() {
        f64::NAN
    } else {
        value
    }
}

/// `round_to(defined(value), digits)`
#[inline]
pub fn display_value(value: f64, digits: u32) -> f64 {
    round_to(defined(value), digits)
}
