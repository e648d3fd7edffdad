// ============================================================================
// Value
// Dynamically typed operation argument and the shared numeric guard
// ============================================================================

use super::errors::{CalcError, CalcResult};
use super::number::Number;
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validated operands. Every fixed-arity operation fits inline.
pub type Numbers = SmallVec<[Number; 4]>;

/// An argument as supplied by the caller, before validation.
///
/// Only `Int` and `Float` are accepted by the operations; the other kinds
/// exist so that callers holding loosely typed data get a `Type` error that
/// names what they actually passed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
    Null,
}

/// The kind of a [`Value`], reported in `Type` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueKind {
    Int,
    Float,
    Bool,
    Text,
    List,
    Null,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Null => "null",
        }
    }

    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
            Value::Null => ValueKind::Null,
        }
    }

    /// The numeric content, if this value is an integer or a float.
    ///
    /// Booleans are not numbers here.
    #[inline]
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Value::Int(i) => Some(Number::Int(i)),
            Value::Float(f) => Some(Number::Float(f)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }
}

/// Validate that every argument is numeric.
///
/// Arguments are checked in order; the first non-numeric one fails the whole
/// call with a `Type` error carrying its position and kind. Nothing is
/// computed from a partially valid list.
pub fn validate_numbers(args: &[Value]) -> CalcResult<Numbers> {
    args.iter()
        .enumerate()
        .map(|(position, arg)| {
            arg.as_number().ok_or(CalcError::Type {
                position,
                found: arg.kind(),
            })
        })
        .collect()
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<()> for Value {
    #[inline]
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Number> for Value {
    #[inline]
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Value::from(3).kind(), ValueKind::Int);
        assert_eq!(Value::from(3.5).kind(), ValueKind::Float);
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::from(vec![Value::Int(1)]).kind(), ValueKind::List);
        assert_eq!(Value::from(()).kind(), ValueKind::Null);
        assert_eq!(Value::from(None::<i64>).kind(), ValueKind::Null);
        assert_eq!(Value::from(Some(2u8)).kind(), ValueKind::Int);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Value::Int(4).as_number(), Some(Number::Int(4)));
        assert_eq!(Value::Float(0.5).as_number(), Some(Number::Float(0.5)));
        assert_eq!(Value::Bool(true).as_number(), None);
        assert_eq!(Value::Text("4".into()).as_number(), None);
    }

    #[test]
    fn test_validate_numbers_accepts_numeric() {
        let args = [Value::Int(1), Value::Float(2.5), Value::Int(-3)];
        let numbers = validate_numbers(&args).unwrap();
        assert_eq!(
            numbers.as_slice(),
            &[Number::Int(1), Number::Float(2.5), Number::Int(-3)]
        );
    }

    #[test]
    fn test_validate_numbers_reports_first_offender() {
        let args = [
            Value::Int(1),
            Value::Int(2),
            Value::Text("three".into()),
            Value::Null,
        ];
        assert_eq!(
            validate_numbers(&args),
            Err(CalcError::Type {
                position: 2,
                found: ValueKind::Text,
            })
        );
    }

    #[test]
    fn test_validate_numbers_checks_last_position() {
        let args = [Value::Int(1), Value::Int(2), Value::Bool(false)];
        assert_eq!(
            validate_numbers(&args),
            Err(CalcError::Type {
                position: 2,
                found: ValueKind::Bool,
            })
        );
    }

    #[test]
    fn test_validate_numbers_empty() {
        assert!(validate_numbers(&[]).unwrap().is_empty());
    }
}
