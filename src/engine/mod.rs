// ============================================================================
// Engine Module
// Validation-first dispatch of calculator operations
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
