//! # Interactions with the underlying primitive
//!
//! Implemented per width rather than generically over `T`, a blanket `impl<T> PartialEq<T>` would
//! overlap with the derived `PartialEq<Small<T>>`.
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

use num::One;

use crate::data::number_types::rational::operand::{Operand, Value};

use super::field::expect_quotient;
use super::Small;

macro_rules! define_interactions {
    ($t:ident, $module:ident) => {
        mod $module {
            use super::*;

            mod creation {
                use super::*;

                impl From<$t> for Small<$t> {
                    fn from(value: $t) -> Self {
                        Self::from_integer(value)
                    }
                }

                impl From<&$t> for Small<$t> {
                    fn from(value: &$t) -> Self {
                        Self::from(*value)
                    }
                }

                impl From<$t> for Operand<$t> {
                    fn from(value: $t) -> Self {
                        Operand::Integer(value)
                    }
                }

                impl From<$t> for Value<$t> {
                    fn from(value: $t) -> Self {
                        Value::Integer(value)
                    }
                }
            }

            mod compare {
                use super::*;

                impl PartialEq<$t> for Small<$t> {
                    fn eq(&self, other: &$t) -> bool {
                        self.denominator.is_one() && self.numerator == *other
                    }
                }
            }

            mod field {
                use super::*;

                mod add {
                    use super::*;

                    impl Add<$t> for Small<$t> {
                        type Output = Self;

                        fn add(self, rhs: $t) -> Self::Output {
                            self.add_operand(Operand::Integer(rhs))
                        }
                    }

                    impl Add<&$t> for &Small<$t> {
                        type Output = Small<$t>;

                        fn add(self, rhs: &$t) -> Self::Output {
                            self.add_operand(Operand::Integer(*rhs))
                        }
                    }

                    impl AddAssign<$t> for Small<$t> {
                        fn add_assign(&mut self, rhs: $t) {
                            *self = self.add_operand(Operand::Integer(rhs));
                        }
                    }
                }

                mod sub {
                    use super::*;

                    impl Sub<$t> for Small<$t> {
                        type Output = Self;

                        fn sub(self, rhs: $t) -> Self::Output {
                            self.subtract_operand(Operand::Integer(rhs))
                        }
                    }

                    impl Sub<&$t> for &Small<$t> {
                        type Output = Small<$t>;

                        fn sub(self, rhs: &$t) -> Self::Output {
                            self.subtract_operand(Operand::Integer(*rhs))
                        }
                    }

                    impl SubAssign<$t> for Small<$t> {
                        fn sub_assign(&mut self, rhs: $t) {
                            *self = self.subtract_operand(Operand::Integer(rhs));
                        }
                    }
                }

                mod mul {
                    use super::*;

                    impl Mul<$t> for Small<$t> {
                        type Output = Self;

                        fn mul(self, rhs: $t) -> Self::Output {
                            self.multiply_operand(Operand::Integer(rhs))
                        }
                    }

                    impl Mul<&$t> for &Small<$t> {
                        type Output = Small<$t>;

                        fn mul(self, rhs: &$t) -> Self::Output {
                            self.multiply_operand(Operand::Integer(*rhs))
                        }
                    }

                    impl MulAssign<$t> for Small<$t> {
                        fn mul_assign(&mut self, rhs: $t) {
                            *self = self.multiply_operand(Operand::Integer(rhs));
                        }
                    }
                }

                mod div {
                    use super::*;

                    impl Div<$t> for Small<$t> {
                        type Output = Self;

                        /// # Panics
                        ///
                        /// If `rhs` is zero.
                        fn div(self, rhs: $t) -> Self::Output {
                            expect_quotient(self.divide_operand(Operand::Integer(rhs)))
                        }
                    }

                    impl Div<&$t> for &Small<$t> {
                        type Output = Small<$t>;

                        fn div(self, rhs: &$t) -> Self::Output {
                            expect_quotient(self.divide_operand(Operand::Integer(*rhs)))
                        }
                    }
                }
            }
        }
    }
}

define_interactions!(i8, with_i8);
define_interactions!(i16, with_i16);
define_interactions!(i32, with_i32);
define_interactions!(i64, with_i64);
define_interactions!(i128, with_i128);
define_interactions!(isize, with_isize);
