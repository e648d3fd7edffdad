// ============================================================================
// Operation
// The fixed set of calculator operations and their call shapes
// ============================================================================

use crate::numeric::CalcError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every operation the calculator can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    /// a + b
    AddTwo,
    /// a - b
    Subtract,
    /// a * b
    Multiply,
    /// a + b + c
    AddThree,
    /// a / b, always a float
    Divide,
    /// base ^ exponent
    Power,
    /// Floor-division remainder, sign of the divisor
    Modulo,
    /// Arithmetic mean of one or more numbers
    Average,
    /// (value / total) * 100
    Percentage,
    /// n ^ 0.5 for n >= 0
    SquareRoot,
    /// Magnitude, same numeric kind as the input
    Absolute,
    /// Smallest of one or more numbers
    MinOfList,
    /// Largest of one or more numbers
    MaxOfList,
}

/// Number of arguments an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments
    Exact(usize),
    /// Variadic, non-empty
    AtLeastOne,
}

impl Arity {
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeastOne => count >= 1,
        }
    }
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 13] = [
        Operation::AddTwo,
        Operation::Subtract,
        Operation::Multiply,
        Operation::AddThree,
        Operation::Divide,
        Operation::Power,
        Operation::Modulo,
        Operation::Average,
        Operation::Percentage,
        Operation::SquareRoot,
        Operation::Absolute,
        Operation::MinOfList,
        Operation::MaxOfList,
    ];

    /// Snake-case name, as used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::AddTwo => "add_two",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::AddThree => "add_three",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Modulo => "modulo",
            Operation::Average => "average",
            Operation::Percentage => "percentage",
            Operation::SquareRoot => "square_root",
            Operation::Absolute => "absolute",
            Operation::MinOfList => "min_of_list",
            Operation::MaxOfList => "max_of_list",
        }
    }

    pub const fn arity(self) -> Arity {
        match self {
            Operation::SquareRoot | Operation::Absolute => Arity::Exact(1),
            Operation::AddThree => Arity::Exact(3),
            Operation::Average | Operation::MinOfList | Operation::MaxOfList => Arity::AtLeastOne,
            _ => Arity::Exact(2),
        }
    }

    #[inline]
    pub const fn is_variadic(self) -> bool {
        matches!(self.arity(), Arity::AtLeastOne)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| CalcError::UnknownOperation(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
            assert_eq!(op.to_string(), op.name());
        }
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            "sqrt".parse::<Operation>(),
            Err(CalcError::UnknownOperation("sqrt".to_string()))
        );
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operation::AddTwo.arity(), Arity::Exact(2));
        assert_eq!(Operation::AddThree.arity(), Arity::Exact(3));
        assert_eq!(Operation::SquareRoot.arity(), Arity::Exact(1));
        assert!(Operation::Average.is_variadic());
        assert!(Operation::MinOfList.is_variadic());
        assert!(!Operation::Modulo.is_variadic());

        assert!(Arity::AtLeastOne.accepts(1));
        assert!(!Arity::AtLeastOne.accepts(0));
        assert!(Arity::Exact(2).accepts(2));
        assert!(!Arity::Exact(2).accepts(3));
    }

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        let mut names: Vec<_> = Operation::ALL.iter().map(|op| op.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13);
    }
}
