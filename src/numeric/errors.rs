// ============================================================================
// Calculator Errors
// Failure signals for validation and per-operation domain checks
// ============================================================================

use super::number::Number;
use super::value::ValueKind;
use crate::domain::Operation;
use thiserror::Error;

/// Errors returned by every calculator operation.
///
/// All failures are per-call and recoverable by the caller: nothing is
/// logged, retried or suppressed before it reaches the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// An argument was not an integer or floating-point value
    #[error("expected number, got {found} (argument {position})")]
    Type { position: usize, found: ValueKind },

    /// Divisor, modulus or total was exactly zero
    #[error("{operation}: cannot divide by zero")]
    DivideByZero { operation: Operation },

    /// Negative input to an operation defined only for n >= 0
    #[error("{operation}: cannot take the square root of negative number {value}")]
    NegativeInput { operation: Operation, value: Number },

    /// Variadic operation called without any argument
    #[error("{operation}: at least one number required")]
    EmptyInput { operation: Operation },

    /// Integer result does not fit in i64 and the overflow policy forbids promotion
    #[error("{operation}: integer overflow")]
    Overflow { operation: Operation },

    /// Fixed-arity operation called with the wrong number of arguments
    #[error("{operation}: expected {expected} arguments, got {found}")]
    Arity {
        operation: Operation,
        expected: usize,
        found: usize,
    },

    /// Variadic operation called with more arguments than the configured limit
    #[error("{operation}: at most {limit} arguments allowed, got {found}")]
    TooManyArguments {
        operation: Operation,
        limit: usize,
        found: usize,
    },

    /// Operation name does not match any known operation
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),

    /// Input could not be read as a number
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Calculator configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Discriminant of [`CalcError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    DivideByZero,
    NegativeInput,
    EmptyInput,
    Overflow,
    Arity,
    TooManyArguments,
    UnknownOperation,
    InvalidNumber,
    InvalidConfig,
}

impl CalcError {
    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Type { .. } => ErrorKind::Type,
            CalcError::DivideByZero { .. } => ErrorKind::DivideByZero,
            CalcError::NegativeInput { .. } => ErrorKind::NegativeInput,
            CalcError::EmptyInput { .. } => ErrorKind::EmptyInput,
            CalcError::Overflow { .. } => ErrorKind::Overflow,
            CalcError::Arity { .. } => ErrorKind::Arity,
            CalcError::TooManyArguments { .. } => ErrorKind::TooManyArguments,
            CalcError::UnknownOperation(_) => ErrorKind::UnknownOperation,
            CalcError::InvalidNumber(_) => ErrorKind::InvalidNumber,
            CalcError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    /// The operation that failed, when the error came from one.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            CalcError::DivideByZero { operation }
            | CalcError::NegativeInput { operation, .. }
            | CalcError::EmptyInput { operation }
            | CalcError::Overflow { operation }
            | CalcError::Arity { operation, .. }
            | CalcError::TooManyArguments { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
