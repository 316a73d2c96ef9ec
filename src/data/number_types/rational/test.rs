use crate::data::number_types::rational::{
    Field, Operand, Operation, Rational, Rational64, RationalError, Value,
};

mod field {
    use super::*;

    #[test]
    fn keys() {
        assert_eq!("n".parse::<Field>(), Ok(Field::Numerator));
        assert_eq!("d".parse::<Field>(), Ok(Field::Denominator));
        assert_eq!(Field::Numerator.to_string(), "n");
        assert_eq!(Field::Denominator.to_string(), "d");
    }

    #[test]
    fn invalid() {
        for key in &["x", "", "numerator", " n", "D"] {
            assert_eq!(
                key.parse::<Field>(),
                Err(RationalError::InvalidKey { key: key.to_string() }),
            );
        }
    }
}

mod error {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(RationalError::ZeroDenominator.to_string(), "Denominator cannot be zero");
        assert_eq!(RationalError::DivisionByZero.to_string(), "Division by zero is not allowed");
        assert_eq!(
            RationalError::UnsupportedOperand { operation: Operation::Add }.to_string(),
            "Addition operation requires Rational or integer",
        );
        assert_eq!(
            RationalError::UnsupportedOperand { operation: Operation::Subtract }.to_string(),
            "Subtraction operation requires Rational or integer",
        );
        assert_eq!(
            RationalError::UnsupportedOperand { operation: Operation::Multiply }.to_string(),
            "Multiplication operation requires Rational or integer",
        );
        assert_eq!(
            RationalError::UnsupportedOperand { operation: Operation::Divide }.to_string(),
            "Division operation requires Rational or integer",
        );
        assert!(RationalError::InvalidKey { key: "x".to_string() }
            .to_string()
            .starts_with("Invalid key for Rational"));
    }
}

mod operand {
    use super::*;

    #[test]
    fn narrowing() {
        let half = R64!(1, 2);

        assert_eq!(
            Value::from(half).into_operand(Operation::Add),
            Ok(Operand::Rational(half)),
        );
        assert_eq!(
            Value::<i64>::from(3).into_operand(Operation::Divide),
            Ok(Operand::Integer(3)),
        );
        assert_eq!(
            Value::<i64>::from(1.5).into_operand(Operation::Multiply),
            Err(RationalError::UnsupportedOperand { operation: Operation::Multiply }),
        );
        assert_eq!(
            Value::<i64>::from("1/2").into_operand(Operation::Subtract),
            Err(RationalError::UnsupportedOperand { operation: Operation::Subtract }),
        );
    }

    #[test]
    fn widening() {
        let half = R64!(1, 2);

        assert_eq!(Value::from(Operand::Rational(half)), Value::Rational(half));
        assert_eq!(Value::from(Operand::<i64>::Integer(-2)), Value::Integer(-2));
        assert_eq!(Operand::from(&half), Operand::Rational(half));
        assert_eq!(Operand::<i64>::from(7), Operand::Integer(7));
    }
}

mod macros {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(R64!(2, 4), Rational64::new(1, 2).unwrap());
        assert_eq!(R64!(5), Rational64::from_integer(5));
        assert_eq!(*R32!(-6, 4).numerator(), -3);
        assert_eq!(*R128!(-6, 4).denominator(), 2);
    }

    #[test]
    #[should_panic]
    fn zero_denominator() {
        let _ = R64!(1, 0);
    }
}
