//! Reference catalog entries
//!
//! - `e^x`: converges everywhere
//! - `1/(1-x)`: singular at `x = 1`
//! - `sin(x)`, `cos(x)`: derivative signs cycle with period four
//! - `ln(1+x)`: singular at `x = -1`

mod exponential;
mod geometric;
mod logarithmic;
mod trigonometric;

use crate::definition::FunctionDefinition;

pub use exponential::EXP;
pub use geometric::GEOMETRIC;
pub use logarithmic::LN_1P;
pub use trigonometric::{COS, SIN};

/// Entries registered by [`Catalog::standard`](crate::Catalog::standard)
pub static STANDARD: [&FunctionDefinition; 5] = [&EXP, &GEOMETRIC, &SIN, &COS, &LN_1P];
