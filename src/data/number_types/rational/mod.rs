//! # Rational numbers
//!
//! Exact computation with fractions of fixed width integers.
pub use error::RationalError;
pub use field::Field;
pub use operand::{Operand, Operation, Value};
pub use small::Small;

#[macro_use]
mod macros;
mod error;
mod field;
mod operand;
mod small;

pub type Rational32 = Small<i32>;
pub type Rational64 = Small<i64>;
pub type Rational128 = Small<i128>;

/// Access to the two parts of a fraction.
///
/// Writes go through setters so that an implementor can keep the value normalized.
pub trait Rational {
    type Numerator;
    type Denominator;

    fn numerator(&self) -> &Self::Numerator;
    fn denominator(&self) -> &Self::Denominator;

    fn set_numerator(&mut self, value: Self::Numerator);
    /// Fails, without modifying `self`, when `value` is zero.
    fn set_denominator(&mut self, value: Self::Denominator) -> Result<(), RationalError>;
}

#[cfg(test)]
mod test;
