use thiserror::Error;

use super::operand::Operation;

/// Everything that can go wrong when building, changing or computing with a rational.
///
/// None of these are transient: they all point at a bad argument from the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("Denominator cannot be zero")]
    ZeroDenominator,

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("{operation} operation requires Rational or integer")]
    UnsupportedOperand { operation: Operation },

    #[error("Invalid key for Rational: {key:?}")]
    InvalidKey { key: String },

    #[error("expected a rational of the form \"<int>/<int>\", got {input:?}")]
    Format { input: String },
}
