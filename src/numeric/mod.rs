// ============================================================================
// Numeric Module
// Operands, arguments and the error taxonomy shared by every operation
// ============================================================================
//
// This module provides:
// - Number: validated integer or floating-point operand
// - Value: loosely typed argument as supplied by the caller
// - validate_numbers: the single numeric guard run before any arithmetic
// - CalcError: error types for validation and domain checks
//
// Design principles:
// - Integer arithmetic is checked; overflow is surfaced to the caller
// - All fallible operations return Result (no panics)
// - Mixed integer/float inputs promote to f64

mod errors;
mod number;
mod value;

pub use errors::{CalcError, CalcResult, ErrorKind};
pub use number::Number;
pub use value::{validate_numbers, Numbers, Value, ValueKind};
