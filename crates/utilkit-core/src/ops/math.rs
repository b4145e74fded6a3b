//! Arithmetic on `f64` with plain IEEE-754 semantics.

use crate::error::{UtilError, UtilResult};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`, refusing a zero divisor of either sign
pub fn divide(a: f64, b: f64) -> UtilResult<f64> {
    if b == 0.0 {
        return Err(UtilError::DivisionByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-2.0, -3.0), -5.0);
        assert_eq!(add(5.0, -3.0), 2.0);
        assert_eq!(add(10.0, -10.0), 0.0);
        assert_eq!(add(1.5, 2.3), 3.8);
        assert!((add(0.1, 0.2) - 0.3).abs() < 1e-4);
        assert_eq!(add(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(-5.0, -3.0), -2.0);
        assert_eq!(subtract(5.0, -3.0), 8.0);
        assert_eq!(subtract(-5.0, 3.0), -8.0);
        assert_eq!(subtract(3.8, 1.5), 2.3);
        assert!((subtract(0.3, 0.1) - 0.2).abs() < 1e-4);
        assert_eq!(subtract(0.0, 5.0), -5.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(2.0, 3.0), 6.0);
        assert_eq!(multiply(-4.0, -5.0), 20.0);
        assert_eq!(multiply(-2.0, 3.0), -6.0);
        assert_eq!(multiply(2.5, 4.0), 10.0);
        assert_eq!(multiply(1.5, 2.5), 3.75);
        assert_eq!(multiply(0.0, 5.0), 0.0);
        assert_eq!(multiply(1.0, 5.0), 5.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(6.0, 2.0).unwrap(), 3.0);
        assert_eq!(divide(-15.0, -3.0).unwrap(), 5.0);
        assert_eq!(divide(6.0, -2.0).unwrap(), -3.0);
        assert_eq!(divide(7.5, 2.5).unwrap(), 3.0);
        assert!((divide(10.0, 3.0).unwrap() - 3.3333).abs() < 1e-4);
        assert_eq!(divide(0.0, 5.0).unwrap(), 0.0);
        assert_eq!(divide(-5.0, 1.0).unwrap(), -5.0);
    }

    #[test]
    fn test_divide_by_zero() {
        for dividend in [5.0, -5.0, 0.0, f64::INFINITY] {
            let err = divide(dividend, 0.0).unwrap_err();
            assert!(matches!(err, UtilError::DivisionByZero));
            assert_eq!(err.to_string(), "Cannot divide by zero");
        }

        assert!(divide(1.0, -0.0).is_err());
    }

    #[test]
    fn test_no_precision_correction() {
        assert_ne!(add(0.1, 0.2), 0.3);
        assert!(divide(1.0, f64::INFINITY).unwrap() == 0.0);
    }
}
