// ============================================================================
// Calculator Configuration
// Integer overflow handling and variadic input limits
// ============================================================================

use crate::numeric::{CalcError, CalcResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Overflow Policy
// ============================================================================

/// What to do when an integer-only computation does not fit in i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Recompute the operation in f64 and return a float
    /// - Never fails, loses precision past 2^53
    #[default]
    PromoteToFloat,

    /// Fail the call with an `Overflow` error
    Error,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Integer overflow handling
    pub overflow: OverflowPolicy,

    /// Optional: Maximum number of arguments for variadic operations
    /// None means unlimited
    pub max_arguments: Option<usize>,
}

impl CalculatorConfig {
    pub const fn new(overflow: OverflowPolicy) -> Self {
        Self {
            overflow,
            max_arguments: None,
        }
    }

    /// Builder method: Set overflow policy
    pub fn with_overflow_policy(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Builder method: Set variadic argument limit
    pub fn with_max_arguments(mut self, limit: usize) -> Self {
        self.max_arguments = Some(limit);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_arguments == Some(0) {
            return Err(CalcError::InvalidConfig(
                "max_arguments must allow at least one argument".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// Never fails on integer overflow; no argument limit
    pub const fn lenient() -> Self {
        Self::new(OverflowPolicy::PromoteToFloat)
    }

    /// Integer overflow is an error; no argument limit
    pub const fn strict() -> Self {
        Self::new(OverflowPolicy::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = CalculatorConfig::default();
        assert_eq!(config.overflow, OverflowPolicy::PromoteToFloat);
        assert_eq!(config.max_arguments, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::lenient()
            .with_overflow_policy(OverflowPolicy::Error)
            .with_max_arguments(16);

        assert_eq!(config.overflow, OverflowPolicy::Error);
        assert_eq!(config.max_arguments, Some(16));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = CalculatorConfig::strict().with_max_arguments(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidConfig(_)));
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(CalculatorConfig::strict().overflow, OverflowPolicy::Error);
        assert_eq!(
            CalculatorConfig::lenient().overflow,
            OverflowPolicy::PromoteToFloat
        );
    }
}
