//! Engine configuration
//!
//! The defaults reproduce the chart contract: a 0.1 tick, grid values kept
//! to one decimal and every series value kept to four.

use crate::error::EngineError;
use crate::rounding::round_to;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TICK_SIZE: f64 = 0.1;
pub const DEFAULT_GRID_PRECISION: u32 = 1;
pub const DEFAULT_VALUE_PRECISION: u32 = 4;

/// Largest precision that still means something for an f64
const MAX_PRECISION: u32 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Distance between consecutive grid points
    pub tick_size: f64,
    /// Decimal digits each grid value is rounded to
    pub grid_precision: u32,
    /// Decimal digits every series value is rounded to
    pub value_precision: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_size: DEFAULT_TICK_SIZE,
            grid_precision: DEFAULT_GRID_PRECISION,
            value_precision: DEFAULT_VALUE_PRECISION,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.tick_size.is_finite() || self.tick_size <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "tick size must be a positive number, got {}",
                self.tick_size
            )));
        }
        if self.grid_precision > MAX_PRECISION || self.value_precision > MAX_PRECISION {
            return Err(EngineError::InvalidConfig(format!(
                "precision must be at most {} digits",
                MAX_PRECISION
            )));
        }
        // Otherwise rounding each step would stall or skew the grid
        if round_to(self.tick_size, self.grid_precision) != self.tick_size {
            return Err(EngineError::InvalidConfig(format!(
                "tick size {} is not representable with {} grid digits",
                self.tick_size, self.grid_precision
            )));
        }
        Ok(())
    }
}
