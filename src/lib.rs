//! # Exact rational numbers
//!
//! Fractions over fixed width signed integers, always kept in lowest terms with a positive
//! denominator.
//!
//! ```
//! use rust_rational::{Rational64, R64};
//!
//! let half: Rational64 = "3/6".parse().unwrap();
//! assert_eq!(half, R64!(1, 2));
//! assert_eq!((half + R64!(1, 3)).to_string(), "5/6");
//! ```
pub mod data;

pub use data::number_types::rational::{
    Field, Operand, Operation, Rational, Rational128, Rational32, Rational64, RationalError, Small,
    Value,
};
