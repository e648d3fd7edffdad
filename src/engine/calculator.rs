// ============================================================================
// Calculator
// Validation-first dispatch and per-operation domain checks
// ============================================================================

use crate::domain::{Arity, CalculatorConfig, Operation, OverflowPolicy};
use crate::numeric::{validate_numbers, CalcError, CalcResult, Number, Value};
use smallvec::SmallVec;
use std::cmp::Ordering;

type Args = SmallVec<[Value; 4]>;

/// Stateless calculator.
///
/// Every operation goes through [`Calculator::evaluate`], which
/// 1. checks the argument count,
/// 2. validates that every argument is numeric,
/// 3. applies the operation's domain checks and computes the result.
///
/// The only state is the immutable configuration, so a `Calculator` can be
/// copied freely and shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Create a calculator with the lenient default configuration
    pub const fn new() -> Self {
        Self {
            config: CalculatorConfig::lenient(),
        }
    }

    /// Create a calculator from a validated configuration
    pub fn from_config(config: CalculatorConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Evaluate `operation` over loosely typed arguments.
    ///
    /// # Errors
    /// - `Arity` / `EmptyInput` / `TooManyArguments` on a bad argument count
    /// - `Type` if any argument is not numeric
    /// - the operation's domain error (`DivideByZero`, `NegativeInput`,
    ///   `Overflow`)
    pub fn evaluate(&self, operation: Operation, args: &[Value]) -> CalcResult<Number> {
        tracing::trace!(%operation, arguments = args.len(), "dispatching operation");

        self.check_arity(operation, args.len())?;
        let numbers = validate_numbers(args)?;
        let result = self.dispatch(operation, &numbers)?;

        tracing::debug!(%operation, %result, "operation evaluated");
        Ok(result)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    pub fn add_two(&self, a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
        self.evaluate(Operation::AddTwo, &[a.into(), b.into()])
    }

    pub fn subtract(&self, a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
        self.evaluate(Operation::Subtract, &[a.into(), b.into()])
    }

    pub fn multiply(&self, a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
        self.evaluate(Operation::Multiply, &[a.into(), b.into()])
    }

    pub fn add_three(
        &self,
        a: impl Into<Value>,
        b: impl Into<Value>,
        c: impl Into<Value>,
    ) -> CalcResult<Number> {
        self.evaluate(Operation::AddThree, &[a.into(), b.into(), c.into()])
    }

    /// `a / b` as a float.
    pub fn divide(&self, a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
        self.evaluate(Operation::Divide, &[a.into(), b.into()])
    }

    pub fn power(
        &self,
        base: impl Into<Value>,
        exponent: impl Into<Value>,
    ) -> CalcResult<Number> {
        self.evaluate(Operation::Power, &[base.into(), exponent.into()])
    }

    /// Floor-division remainder; the result has the sign of `b`.
    pub fn modulo(&self, a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
        self.evaluate(Operation::Modulo, &[a.into(), b.into()])
    }

    pub fn average<I>(&self, numbers: I) -> CalcResult<Number>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args: Args = numbers.into_iter().map(Into::into).collect();
        self.evaluate(Operation::Average, &args)
    }

    /// What percentage `value` is of `total`.
    pub fn percentage(
        &self,
        value: impl Into<Value>,
        total: impl Into<Value>,
    ) -> CalcResult<Number> {
        self.evaluate(Operation::Percentage, &[value.into(), total.into()])
    }

    pub fn square_root(&self, n: impl Into<Value>) -> CalcResult<Number> {
        self.evaluate(Operation::SquareRoot, &[n.into()])
    }

    pub fn absolute(&self, n: impl Into<Value>) -> CalcResult<Number> {
        self.evaluate(Operation::Absolute, &[n.into()])
    }

    pub fn min_of_list<I>(&self, numbers: I) -> CalcResult<Number>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args: Args = numbers.into_iter().map(Into::into).collect();
        self.evaluate(Operation::MinOfList, &args)
    }

    pub fn max_of_list<I>(&self, numbers: I) -> CalcResult<Number>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args: Args = numbers.into_iter().map(Into::into).collect();
        self.evaluate(Operation::MaxOfList, &args)
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn check_arity(&self, operation: Operation, found: usize) -> CalcResult<()> {
        let arity = operation.arity();
        if !arity.accepts(found) {
            return Err(match arity {
                Arity::Exact(expected) => CalcError::Arity {
                    operation,
                    expected,
                    found,
                },
                Arity::AtLeastOne => CalcError::EmptyInput { operation },
            });
        }

        match self.config.max_arguments {
            Some(limit) if operation.is_variadic() && found > limit => {
                Err(CalcError::TooManyArguments {
                    operation,
                    limit,
                    found,
                })
            }
            _ => Ok(()),
        }
    }

    fn dispatch(&self, operation: Operation, numbers: &[Number]) -> CalcResult<Number> {
        match (operation, numbers) {
            (Operation::AddTwo, &[a, b]) => {
                self.integral(operation, a.checked_add(b), || a.to_f64() + b.to_f64())
            }
            (Operation::Subtract, &[a, b]) => {
                self.integral(operation, a.checked_sub(b), || a.to_f64() - b.to_f64())
            }
            (Operation::Multiply, &[a, b]) => {
                self.integral(operation, a.checked_mul(b), || a.to_f64() * b.to_f64())
            }
            (Operation::AddThree, &[a, b, c]) => {
                self.integral(operation, Number::checked_sum(&[a, b, c]), || {
                    a.to_f64() + b.to_f64() + c.to_f64()
                })
            }
            (Operation::Divide, &[a, b]) => {
                if b.is_zero() {
                    return Err(CalcError::DivideByZero { operation });
                }
                Ok(Number::Float(a.to_f64() / b.to_f64()))
            }
            (Operation::Power, &[base, exponent]) => {
                self.integral(operation, base.checked_pow(exponent), || {
                    base.to_f64().powf(exponent.to_f64())
                })
            }
            (Operation::Modulo, &[a, b]) => {
                if b.is_zero() {
                    return Err(CalcError::DivideByZero { operation });
                }
                Ok(a.floor_rem(b))
            }
            (Operation::Percentage, &[value, total]) => {
                if total.is_zero() {
                    return Err(CalcError::DivideByZero { operation });
                }
                Ok(Number::Float(value.to_f64() / total.to_f64() * 100.0))
            }
            (Operation::SquareRoot, &[n]) => {
                if n.is_negative() {
                    return Err(CalcError::NegativeInput {
                        operation,
                        value: n,
                    });
                }
                Ok(Number::Float(n.to_f64().sqrt()))
            }
            (Operation::Absolute, &[n]) => {
                self.integral(operation, n.checked_abs(), || n.to_f64().abs())
            }
            (Operation::Average, values) => mean(values)
                .map(Number::Float)
                .ok_or(CalcError::EmptyInput { operation }),
            (Operation::MinOfList, values) => extreme(values, Ordering::Less)
                .ok_or(CalcError::EmptyInput { operation }),
            (Operation::MaxOfList, values) => extreme(values, Ordering::Greater)
                .ok_or(CalcError::EmptyInput { operation }),
            // Guard only: check_arity has already rejected these shapes
            (_, values) => match operation.arity() {
                Arity::Exact(expected) => Err(CalcError::Arity {
                    operation,
                    expected,
                    found: values.len(),
                }),
                Arity::AtLeastOne => Err(CalcError::EmptyInput { operation }),
            },
        }
    }

    /// Apply the overflow policy to an integer-preserving computation.
    fn integral(
        &self,
        operation: Operation,
        checked: Option<Number>,
        in_float: impl FnOnce() -> f64,
    ) -> CalcResult<Number> {
        match (checked, self.config.overflow) {
            (Some(result), _) => Ok(result),
            (None, OverflowPolicy::PromoteToFloat) => Ok(Number::Float(in_float())),
            (None, OverflowPolicy::Error) => Err(CalcError::Overflow { operation }),
        }
    }
}

/// Arithmetic mean, or `None` for an empty slice.
///
/// An all-integer input is summed exactly in i128 before the single division.
fn mean(values: &[Number]) -> Option<f64> {
    let count = values.len() as f64;
    let exact: Option<i128> = values.iter().try_fold(0i128, |sum, n| match *n {
        Number::Int(i) => Some(sum + i128::from(i)),
        Number::Float(_) => None,
    });

    let sum = match exact {
        Some(_) if values.is_empty() => return None,
        Some(total) => total as f64,
        None => {
            // Seeded with the first value so a lone -0.0 survives
            let mut floats = values.iter().map(|n| n.to_f64());
            let first = floats.next()?;
            floats.fold(first, |sum, x| sum + x)
        }
    };
    Some(sum / count)
}

/// First value that is extreme in the `wanted` direction under total ordering.
fn extreme(values: &[Number], wanted: Ordering) -> Option<Number> {
    values
        .iter()
        .copied()
        .reduce(|best, n| if n.total_cmp(&best) == wanted { n } else { best })
}
