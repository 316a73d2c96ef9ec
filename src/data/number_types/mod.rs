//! # Number types
//!
//! Exact number types and the traits bounding their underlying integers.
pub mod rational;
pub mod traits;
