// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::{CalculatorConfig, OverflowPolicy};
use crate::engine::Calculator;
use crate::numeric::CalcResult;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Example
/// ```
/// use calculator::prelude::*;
///
/// let calc = create_from_config(CalculatorConfig::strict()).unwrap();
/// assert!(calc.add_two(i64::MAX, 1).is_err());
/// ```
pub fn create_from_config(config: CalculatorConfig) -> CalcResult<Calculator> {
    Calculator::from_config(config)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use calculator::prelude::*;
///
/// let calc = CalculatorBuilder::new()
///     .fail_on_overflow()
///     .with_max_arguments(1_000)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.config().max_arguments, Some(1_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Promote overflowing integer results to float (default)
    pub fn promote_on_overflow(mut self) -> Self {
        self.config.overflow = OverflowPolicy::PromoteToFloat;
        self
    }

    /// Fail with `Overflow` when an integer result does not fit
    pub fn fail_on_overflow(mut self) -> Self {
        self.config.overflow = OverflowPolicy::Error;
        self
    }

    /// Limit the argument count of variadic operations
    pub fn with_max_arguments(mut self, limit: usize) -> Self {
        self.config.max_arguments = Some(limit);
        self
    }

    /// Build the calculator
    pub fn build(self) -> CalcResult<Calculator> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}
