//! # Right hand sides
//!
//! Arithmetic accepts either another rational or a plain integer. `Operand` is that choice,
//! `Value` is what a dynamically typed caller may hand over before it is known to be one of them.
use std::fmt;

use log::debug;

use super::error::RationalError;
use super::small::Small;

/// The four field operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
        })
    }
}

/// A supported right hand side.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operand<T> {
    Rational(Small<T>),
    Integer(T),
}

impl<T> From<Small<T>> for Operand<T> {
    fn from(value: Small<T>) -> Self {
        Operand::Rational(value)
    }
}

impl<T: Copy> From<&Small<T>> for Operand<T> {
    fn from(value: &Small<T>) -> Self {
        Operand::Rational(*value)
    }
}

/// Any right hand side, supported or not.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<T> {
    Rational(Small<T>),
    Integer(T),
    Float(f64),
    Text(String),
}

impl<T> Value<T> {
    /// Narrow to an operand that `operation` can compute with.
    pub fn into_operand(self, operation: Operation) -> Result<Operand<T>, RationalError> {
        match self {
            Value::Rational(value) => Ok(Operand::Rational(value)),
            Value::Integer(value) => Ok(Operand::Integer(value)),
            Value::Float(value) => {
                debug!("{:?} rejected float operand {}", operation, value);
                Err(RationalError::UnsupportedOperand { operation })
            }
            Value::Text(value) => {
                debug!("{:?} rejected text operand {:?}", operation, value);
                Err(RationalError::UnsupportedOperand { operation })
            }
        }
    }
}

impl<T> From<Operand<T>> for Value<T> {
    fn from(operand: Operand<T>) -> Self {
        match operand {
            Operand::Rational(value) => Value::Rational(value),
            Operand::Integer(value) => Value::Integer(value),
        }
    }
}

impl<T> From<Small<T>> for Value<T> {
    fn from(value: Small<T>) -> Self {
        Value::Rational(value)
    }
}

impl<T: Copy> From<&Small<T>> for Value<T> {
    fn from(value: &Small<T>) -> Self {
        Value::Rational(*value)
    }
}

impl<T> From<f64> for Value<T> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T> From<&str> for Value<T> {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl<T> From<String> for Value<T> {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
