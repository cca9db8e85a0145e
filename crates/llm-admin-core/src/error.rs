use thiserror::Error;

/// Errors produced by the calculation core.
///
/// Negative inputs are not errors; they clamp to zero before any formula
/// runs. Only non-finite values and guarded zero denominators reject.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid value for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("division by zero: {what}")]
    DivisionByZero { what: &'static str },
}

/// Clamps a numeric input to the non-negative range, rejecting NaN and
/// infinities. The floor policy for the whole crate: negatives become 0.
pub(crate) fn clamp_input(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::InvalidInput { field, value });
    }
    Ok(value.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(clamp_input("requests_per_day", -5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_finite_passes_through() {
        assert_eq!(clamp_input("requests_per_day", 100.0).unwrap(), 100.0);
    }

    #[test]
    fn test_nan_rejected() {
        let err = clamp_input("avg_input_tokens", f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidInput {
                field: "avg_input_tokens",
                ..
            }
        ));
    }

    #[test]
    fn test_infinity_rejected() {
        assert!(clamp_input("token_cost", f64::INFINITY).is_err());
        assert!(clamp_input("token_cost", f64::NEG_INFINITY).is_err());
    }
}
