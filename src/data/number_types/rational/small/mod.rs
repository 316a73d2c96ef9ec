//! # Fixed width rationals
//!
//! A numerator and a denominator of the same primitive signed integer type.
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, trace};
use num::{One, Zero};

use crate::data::number_types::rational::error::RationalError;
use crate::data::number_types::rational::field::Field;
use crate::data::number_types::rational::operand::{Operand, Operation, Value};
use crate::data::number_types::rational::Rational;
use crate::data::number_types::traits::Int;

mod with_primitive;

/// Exact fraction `numerator / denominator`.
///
/// After every construction or mutation:
///
/// * the denominator is strictly positive, the sign lives in the numerator;
/// * numerator and denominator have no common factor other than one, so zero is `0/1`.
///
/// Because of this the derived equality is numeric equality.
///
/// Intermediate products in the arithmetic are computed in `T` itself. They overflow the way `T`
/// does.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Small<T> {
    numerator: T,
    denominator: T,
}

mod creation {
    use super::*;

    impl<T: Int> Small<T> {
        /// Create a new rational in lowest terms.
        ///
        /// # Errors
        ///
        /// `RationalError::ZeroDenominator` if `denominator` is zero.
        pub fn new(numerator: T, denominator: T) -> Result<Self, RationalError> {
            if denominator.is_zero() {
                debug!("rejected {}/{}: zero denominator", numerator, denominator);
                return Err(RationalError::ZeroDenominator);
            }

            Ok(Self::new_unchecked(numerator, denominator))
        }

        /// Reduce a pair that is already known to have a nonzero denominator.
        pub(crate) fn new_unchecked(numerator: T, denominator: T) -> Self {
            debug_assert!(!denominator.is_zero());

            let mut value = Self { numerator, denominator };
            value.reduce();
            value
        }

        pub fn from_integer(value: T) -> Self {
            Self {
                numerator: value,
                denominator: T::one(),
            }
        }

        /// Parse `"<int>/<int>"`.
        ///
        /// Whitespace around either integer is ignored. Anything other than exactly two parts
        /// separated by a single `/` is a format error.
        pub fn parse(input: &str) -> Result<Self, RationalError> {
            let format_error = || {
                debug!("rejected rational text {:?}", input);
                RationalError::Format { input: input.to_owned() }
            };

            let (numerator, denominator) = input.split('/')
                .collect_tuple()
                .ok_or_else(format_error)?;
            let numerator = numerator.trim().parse::<T>().map_err(|_| format_error())?;
            let denominator = denominator.trim().parse::<T>().map_err(|_| format_error())?;

            Self::new(numerator, denominator)
        }

        /// Bring the pair in lowest terms with a positive denominator.
        ///
        /// `Integer::gcd` is never negative, and it is nonzero here because the denominator is.
        /// The divisions are exact.
        pub(super) fn reduce(&mut self) {
            let divisor = self.numerator.gcd(&self.denominator);
            let mut numerator = self.numerator / divisor;
            let mut denominator = self.denominator / divisor;
            if denominator.is_negative() {
                numerator = -numerator;
                denominator = -denominator;
            }

            if numerator != self.numerator || denominator != self.denominator {
                trace!("reduced {} to {}/{}", self, numerator, denominator);
                self.numerator = numerator;
                self.denominator = denominator;
            }
        }

        pub fn into_parts(self) -> (T, T) {
            (self.numerator, self.denominator)
        }
    }

    impl<T: Int> FromStr for Small<T> {
        type Err = RationalError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Self::parse(s)
        }
    }

    impl<T: Int> TryFrom<(T, T)> for Small<T> {
        type Error = RationalError;

        fn try_from((numerator, denominator): (T, T)) -> Result<Self, Self::Error> {
            Self::new(numerator, denominator)
        }
    }

    impl<T> From<Small<T>> for (T, T) {
        fn from(value: Small<T>) -> Self {
            (value.numerator, value.denominator)
        }
    }
}

mod access {
    use super::*;

    impl<T: Int> Rational for Small<T> {
        type Numerator = T;
        type Denominator = T;

        fn numerator(&self) -> &T {
            &self.numerator
        }

        fn denominator(&self) -> &T {
            &self.denominator
        }

        fn set_numerator(&mut self, value: T) {
            self.numerator = value;
            self.reduce();
        }

        fn set_denominator(&mut self, value: T) -> Result<(), RationalError> {
            if value.is_zero() {
                debug!("rejected zero denominator for {}", self);
                return Err(RationalError::ZeroDenominator);
            }

            self.denominator = value;
            self.reduce();
            Ok(())
        }
    }

    impl<T: Int> Small<T> {
        pub fn field(&self, field: Field) -> T {
            match field {
                Field::Numerator => self.numerator,
                Field::Denominator => self.denominator,
            }
        }

        pub fn set_field(&mut self, field: Field, value: T) -> Result<(), RationalError> {
            match field {
                Field::Numerator => {
                    self.set_numerator(value);
                    Ok(())
                }
                Field::Denominator => self.set_denominator(value),
            }
        }

        /// Read a part by its key, `"n"` or `"d"`.
        pub fn get(&self, key: &str) -> Result<T, RationalError> {
            Ok(self.field(key.parse()?))
        }

        /// Overwrite a part by its key, `"n"` or `"d"`, and normalize again.
        ///
        /// On error nothing is written.
        pub fn set(&mut self, key: &str, value: T) -> Result<(), RationalError> {
            self.set_field(key.parse()?, value)
        }

        /// Approximate as a float with true division.
        pub fn evaluate(&self) -> f64 {
            let numerator: f64 = self.numerator.as_();
            let denominator: f64 = self.denominator.as_();
            numerator / denominator
        }

        pub fn is_integer(&self) -> bool {
            self.denominator.is_one()
        }
    }

    impl<T: fmt::Display> fmt::Display for Small<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

mod field {
    use super::*;

    impl<T: Int> Small<T> {
        /// Compute `self <operation> rhs` for a right hand side of any kind.
        ///
        /// # Errors
        ///
        /// * `RationalError::UnsupportedOperand` when `rhs` is neither a rational nor an integer.
        /// * `RationalError::DivisionByZero` when dividing by a zero rational or integer.
        pub fn apply(
            &self,
            operation: Operation,
            rhs: impl Into<Value<T>>,
        ) -> Result<Self, RationalError> {
            let rhs = rhs.into().into_operand(operation)?;

            match operation {
                Operation::Add => Ok(self.add_operand(rhs)),
                Operation::Subtract => Ok(self.subtract_operand(rhs)),
                Operation::Multiply => Ok(self.multiply_operand(rhs)),
                Operation::Divide => self.divide_operand(rhs),
            }
        }

        pub fn try_add(&self, rhs: impl Into<Value<T>>) -> Result<Self, RationalError> {
            self.apply(Operation::Add, rhs)
        }

        pub fn try_subtract(&self, rhs: impl Into<Value<T>>) -> Result<Self, RationalError> {
            self.apply(Operation::Subtract, rhs)
        }

        pub fn try_multiply(&self, rhs: impl Into<Value<T>>) -> Result<Self, RationalError> {
            self.apply(Operation::Multiply, rhs)
        }

        pub fn try_divide(&self, rhs: impl Into<Value<T>>) -> Result<Self, RationalError> {
            self.apply(Operation::Divide, rhs)
        }

        pub(crate) fn add_operand(&self, rhs: Operand<T>) -> Self {
            match rhs {
                Operand::Rational(rhs) => Self::new_unchecked(
                    self.numerator * rhs.denominator + rhs.numerator * self.denominator,
                    self.denominator * rhs.denominator,
                ),
                Operand::Integer(rhs) => Self::new_unchecked(
                    self.numerator + rhs * self.denominator,
                    self.denominator,
                ),
            }
        }

        pub(crate) fn subtract_operand(&self, rhs: Operand<T>) -> Self {
            match rhs {
                Operand::Rational(rhs) => Self::new_unchecked(
                    self.numerator * rhs.denominator - rhs.numerator * self.denominator,
                    self.denominator * rhs.denominator,
                ),
                Operand::Integer(rhs) => Self::new_unchecked(
                    self.numerator - rhs * self.denominator,
                    self.denominator,
                ),
            }
        }

        pub(crate) fn multiply_operand(&self, rhs: Operand<T>) -> Self {
            match rhs {
                Operand::Rational(rhs) => Self::new_unchecked(
                    self.numerator * rhs.numerator,
                    self.denominator * rhs.denominator,
                ),
                Operand::Integer(rhs) => Self::new_unchecked(
                    self.numerator * rhs,
                    self.denominator,
                ),
            }
        }

        /// The divisor is zero when its numerator is, denominators are never zero.
        pub(crate) fn divide_operand(&self, rhs: Operand<T>) -> Result<Self, RationalError> {
            let (numerator, denominator) = match rhs {
                Operand::Rational(rhs) => (rhs.numerator, rhs.denominator),
                Operand::Integer(rhs) => (rhs, T::one()),
            };
            if numerator.is_zero() {
                debug!("rejected division of {} by zero", self);
                return Err(RationalError::DivisionByZero);
            }

            Ok(Self::new_unchecked(
                self.numerator * denominator,
                self.denominator * numerator,
            ))
        }
    }

    macro_rules! define_operator {
        ($trait:ident, $method:ident, $operand_method:ident) => {
            impl<T: Int> $trait for Small<T> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    self.$operand_method(Operand::Rational(rhs))
                }
            }

            impl<T: Int> $trait<&Small<T>> for Small<T> {
                type Output = Self;

                fn $method(self, rhs: &Small<T>) -> Self::Output {
                    self.$operand_method(Operand::Rational(*rhs))
                }
            }

            impl<T: Int> $trait<&Small<T>> for &Small<T> {
                type Output = Small<T>;

                fn $method(self, rhs: &Small<T>) -> Self::Output {
                    self.$operand_method(Operand::Rational(*rhs))
                }
            }
        };
    }

    define_operator!(Add, add, add_operand);
    define_operator!(Sub, sub, subtract_operand);
    define_operator!(Mul, mul, multiply_operand);

    /// Unwrap a quotient the way integer division does: a zero divisor panics.
    pub(super) fn expect_quotient<T>(quotient: Result<Small<T>, RationalError>) -> Small<T> {
        match quotient {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    impl<T: Int> Div for Small<T> {
        type Output = Self;

        /// # Panics
        ///
        /// If `rhs` is zero. Use `Small::try_divide` to handle that case.
        fn div(self, rhs: Self) -> Self::Output {
            expect_quotient(self.divide_operand(Operand::Rational(rhs)))
        }
    }

    impl<T: Int> Div<&Small<T>> for Small<T> {
        type Output = Self;

        fn div(self, rhs: &Small<T>) -> Self::Output {
            expect_quotient(self.divide_operand(Operand::Rational(*rhs)))
        }
    }

    impl<T: Int> Div<&Small<T>> for &Small<T> {
        type Output = Small<T>;

        fn div(self, rhs: &Small<T>) -> Self::Output {
            expect_quotient(self.divide_operand(Operand::Rational(*rhs)))
        }
    }

    impl<T: Int> Neg for Small<T> {
        type Output = Self;

        fn neg(self) -> Self::Output {
            // Negating the numerator keeps the pair reduced.
            Self {
                numerator: -self.numerator,
                denominator: self.denominator,
            }
        }
    }

    impl<T: Int> Zero for Small<T> {
        fn zero() -> Self {
            Self::from_integer(T::zero())
        }

        fn is_zero(&self) -> bool {
            self.numerator.is_zero()
        }
    }

    impl<T: Int> One for Small<T> {
        fn one() -> Self {
            Self::from_integer(T::one())
        }
    }
}
