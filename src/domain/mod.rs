// ============================================================================
// Domain Models Module
// Operation catalogue and calculator configuration
// ============================================================================

pub mod config;
pub mod operation;

pub use config::{CalculatorConfig, OverflowPolicy};
pub use operation::{Arity, Operation};
