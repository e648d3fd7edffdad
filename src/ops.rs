// ============================================================================
// Operations
// Free functions over the default calculator
// ============================================================================
//
// Each function validates every argument, then applies the operation with
// the lenient default configuration (integer overflow promotes to float).
// Use `Calculator` directly for a different configuration.

use crate::engine::Calculator;
use crate::numeric::{CalcResult, Number, Value};

const DEFAULT: Calculator = Calculator::new();

/// Returns the sum of two numbers.
///
/// ```
/// assert_eq!(calculator::add_two(2, 3).unwrap(), calculator::Number::Int(5));
/// assert!(calculator::add_two(2, "3").is_err());
/// ```
pub fn add_two(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
    DEFAULT.add_two(a, b)
}

/// Returns the difference between two numbers.
pub fn subtract(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
    DEFAULT.subtract(a, b)
}

/// Returns the product of two numbers.
pub fn multiply(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
    DEFAULT.multiply(a, b)
}

/// Returns the sum of three numbers.
pub fn add_three(
    a: impl Into<Value>,
    b: impl Into<Value>,
    c: impl Into<Value>,
) -> CalcResult<Number> {
    DEFAULT.add_three(a, b, c)
}

/// Returns `a / b` as a float.
///
/// # Errors
/// `DivideByZero` if `b` is zero.
///
/// ```
/// use calculator::{divide, Number};
///
/// assert_eq!(divide(10, 2).unwrap(), Number::Float(5.0));
/// assert!(divide(1, 0).is_err());
/// ```
pub fn divide(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
    DEFAULT.divide(a, b)
}

/// Returns `base` raised to `exponent`.
///
/// Integer inputs with a non-negative exponent give an integer; anything
/// else gives a float.
pub fn power(base: impl Into<Value>, exponent: impl Into<Value>) -> CalcResult<Number> {
    DEFAULT.power(base, exponent)
}

/// Returns the remainder of floor division, with the sign of `b`.
///
/// # Errors
/// `DivideByZero` if `b` is zero.
///
/// ```
/// use calculator::{modulo, Number};
///
/// assert_eq!(modulo(-7, 3).unwrap(), Number::Int(2));
/// ```
pub fn modulo(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<Number> {
    DEFAULT.modulo(a, b)
}

/// Returns the arithmetic mean of one or more numbers, as a float.
///
/// # Errors
/// `EmptyInput` if no number is given.
pub fn average<I>(numbers: I) -> CalcResult<Number>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    DEFAULT.average(numbers)
}

/// Returns what percentage `value` is of `total`.
///
/// # Errors
/// `DivideByZero` if `total` is zero.
pub fn percentage(value: impl Into<Value>, total: impl Into<Value>) -> CalcResult<Number> {
    DEFAULT.percentage(value, total)
}

/// Returns the square root of `n`, as a float.
///
/// # Errors
/// `NegativeInput` if `n` is below zero.
pub fn square_root(n: impl Into<Value>) -> CalcResult<Number> {
    DEFAULT.square_root(n)
}

/// Returns the absolute value of `n`.
pub fn absolute(n: impl Into<Value>) -> CalcResult<Number> {
    DEFAULT.absolute(n)
}

/// Returns the smallest of one or more numbers.
pub fn min_of_list<I>(numbers: I) -> CalcResult<Number>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    DEFAULT.min_of_list(numbers)
}

/// Returns the largest of one or more numbers.
pub fn max_of_list<I>(numbers: I) -> CalcResult<Number>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    DEFAULT.max_of_list(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    #[test]
    fn test_scenarios() {
        assert_eq!(add_two(2, 3).unwrap(), Number::Int(5));
        assert_eq!(subtract(2, 3).unwrap(), Number::Int(-1));
        assert_eq!(multiply(2, 3).unwrap(), Number::Int(6));
        assert_eq!(add_three(5, -1, 6).unwrap(), Number::Int(10));
        assert_eq!(divide(10, 2).unwrap(), Number::Float(5.0));
        assert_eq!(power(2, 3).unwrap(), Number::Int(8));
        assert_eq!(average([1, 2, 3, 4, 5]).unwrap(), Number::Float(3.0));
        assert_eq!(percentage(25, 10).unwrap(), Number::Float(250.0));
        assert_eq!(modulo(-7, 3).unwrap(), Number::Int(2));
        assert_eq!(square_root(9).unwrap(), Number::Float(3.0));
        assert_eq!(absolute(-4).unwrap(), Number::Int(4));
        assert_eq!(min_of_list([4, -2, 9]).unwrap(), Number::Int(-2));
        assert_eq!(max_of_list([4, -2, 9]).unwrap(), Number::Int(9));
    }

    #[test]
    fn test_failure_scenarios() {
        assert_eq!(square_root(-1).unwrap_err().kind(), ErrorKind::NegativeInput);
        assert_eq!(
            min_of_list(Vec::<i64>::new()).unwrap_err().kind(),
            ErrorKind::EmptyInput
        );
        assert_eq!(
            max_of_list(Vec::<Value>::new()).unwrap_err().kind(),
            ErrorKind::EmptyInput
        );
        assert_eq!(percentage(1, 0.0).unwrap_err().kind(), ErrorKind::DivideByZero);
        assert_eq!(absolute("5").unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(
            add_three(1, 2, vec![Value::Int(3)]).unwrap_err().kind(),
            ErrorKind::Type
        );
    }

    #[test]
    fn test_chained_results() {
        let r1 = add_two(2, 3).unwrap();
        let r2 = subtract(2, 3).unwrap();
        let r3 = multiply(2, 3).unwrap();
        assert_eq!(add_three(r1, r2, r3).unwrap(), Number::Int(10));
    }
}
