//! # Integer bounds
use std::fmt::{Debug, Display};
use std::str::FromStr;

use num::traits::AsPrimitive;
use num::{Integer, PrimInt, Signed};

/// Fixed width signed integer that a rational can be built over.
///
/// Arithmetic on these wraps or panics on overflow exactly like the primitive does; nothing is
/// widened.
pub trait Int:
    PrimInt +
    Signed +
    Integer +
    AsPrimitive<f64> +
    FromStr +
    Display +
    Debug
{
}

impl<T> Int for T
where
    T: PrimInt + Signed + Integer + AsPrimitive<f64> + FromStr + Display + Debug,
{
}
