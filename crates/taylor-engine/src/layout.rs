//! Plot sizing
//!
//! Picks a width and height for the plot area so one unit on the x axis has
//! the same length on screen as one unit on the y axis. The longer axis gets
//! the full `max_size`.

use serde::Serialize;
use taylor_catalog::{Bounds, FunctionDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotSize {
    pub width: f64,
    pub height: f64,
}

impl PlotSize {
    pub fn fit(max_size: f64, x_range: Bounds, y_range: Bounds) -> Self {
        let span_x = x_range.span();
        let span_y = y_range.span();

        if span_x <= 0.0 || span_y <= 0.0 {
            return Self {
                width: max_size,
                height: max_size,
            };
        }

        if span_x > span_y {
            Self {
                width: max_size,
                height: max_size * span_y / span_x,
            }
        } else {
            Self {
                width: max_size * span_x / span_y,
                height: max_size,
            }
        }
    }

    /// Equal-scale size for a catalog entry's display bounds
    pub fn for_function(max_size: f64, function: &FunctionDefinition) -> Self {
        Self::fit(max_size, function.x_range, function.y_range)
    }
}
