//! Grid generation
//!
//! Steps from `min` to `max` (inclusive) at a fixed tick. Repeated float
//! addition drifts, so each stepped value is rounded before it is stored or
//! used as the base of the next step. Grid values therefore compare exactly
//! against decimal literals such as the catalog's table sample points.

use crate::rounding::round_to;
use taylor_catalog::Bounds;

/// Build the x grid for `range`.
///
/// The first value is the smallest grid value not below `min` (exactly `min`
/// when it is aligned to `precision`), the last is the largest stepped value
/// not exceeding `max`. An inverted or non-finite range yields an empty grid.
pub fn generate_grid(range: Bounds, tick_size: f64, precision: u32) -> Vec<f64> {
    let mut grid = Vec::new();
    if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
        return grid;
    }

    let mut x = round_to(range.min, precision);
    if x < range.min {
        x = round_to(x + tick_size, precision);
    }
    while x <= range.max {
        grid.push(x);
        let next = round_to(x + tick_size, precision);
        if next <= x {
            break;
        }
        x = next;
    }
    grid
}

/// Position of `x` in `grid`, by exact comparison
#[inline]
pub fn position(grid: &[f64], x: f64) -> Option<usize> {
    grid.iter().position(|&g| g == x)
}
