//! # Literals
//!
//! `R64!(1, 2)` is one half, `R64!(3)` is three. A zero denominator panics.

#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::Rational32::from_integer($value as i32)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Rational32::new($numerator as i32, $denominator as i32)
            .expect("rational literal with a zero denominator")
    };
}

#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::Rational64::from_integer($value as i64)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Rational64::new($numerator as i64, $denominator as i64)
            .expect("rational literal with a zero denominator")
    };
}

#[macro_export]
macro_rules! R128 {
    ($value:expr) => {
        $crate::Rational128::from_integer($value as i128)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Rational128::new($numerator as i128, $denominator as i128)
            .expect("rational literal with a zero denominator")
    };
}
