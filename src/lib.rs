// ============================================================================
// Calculator Library
// Validated arithmetic over integer and floating-point values
// ============================================================================

//! # Calculator
//!
//! A small, stateless arithmetic library with one validation routine shared
//! by every operation.
//!
//! ## Features
//!
//! - **Uniform validation**: every argument is checked to be an integer or a
//!   float before any arithmetic runs
//! - **Explicit domain errors** for division by zero, negative square roots
//!   and empty variadic input
//! - **Integer-preserving arithmetic** with a configurable overflow policy
//! - **Floor-division modulo**: the remainder takes the sign of the divisor
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//!
//! assert_eq!(add_two(2, 3).unwrap(), Number::Int(5));
//! assert_eq!(divide(10, 2).unwrap(), Number::Float(5.0));
//! assert_eq!(modulo(-7, 3).unwrap(), Number::Int(2));
//! assert_eq!(average([1, 2, 3, 4, 5]).unwrap(), Number::Float(3.0));
//!
//! let err = square_root(-1).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NegativeInput);
//!
//! let err = add_two(1, "two").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Type);
//!
//! // Strict calculator: integer overflow is an error
//! let calc = CalculatorBuilder::new().fail_on_overflow().build().unwrap();
//! assert_eq!(calc.power(2, 64).unwrap_err().kind(), ErrorKind::Overflow);
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;
pub mod ops;

pub use domain::{CalculatorConfig, Operation, OverflowPolicy};
pub use engine::{Calculator, CalculatorBuilder};
pub use numeric::{CalcError, CalcResult, ErrorKind, Number, Value, ValueKind};
pub use ops::{
    absolute, add_three, add_two, average, divide, max_of_list, min_of_list, modulo, multiply,
    percentage, power, square_root, subtract,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Arity, CalculatorConfig, Operation, OverflowPolicy};
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::numeric::{CalcError, CalcResult, ErrorKind, Number, Value, ValueKind};
    pub use crate::ops::*;
}
