//! Error types shared by both calculators and their console drivers

use thiserror::Error;

/// Errors raised while reading inputs or evaluating a calculation
#[derive(Error, Debug)]
pub enum CalcError {
    /// Console input could not be parsed as the expected numeric type
    #[error("invalid input for {field}: {input:?} is not a valid number")]
    InputFormat {
        field: &'static str,
        input: String,
    },

    /// A derived quantity was requested before the calculation it depends on
    #[error("{0} requested before it was calculated")]
    UninitializedState(&'static str),

    /// A value was read fine but is outside the formula's domain
    #[error("invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Inputs were in range but the formula overflowed
    #[error("{quantity} is not a finite number for these inputs")]
    NonFiniteResult {
        quantity: &'static str,
        value: f64,
    },

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Require a finite value strictly greater than zero
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::InvalidInput {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(CalcError::InvalidInput {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

/// Reject formula outputs that overflowed to infinity or NaN
pub(crate) fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFiniteResult { quantity, value })
    }
}

/// Require a finite value that is zero or greater
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::InvalidInput {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(CalcError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_check() {
        assert!(ensure_positive("principal", 1.0).is_ok());
        assert!(matches!(
            ensure_positive("principal", 0.0),
            Err(CalcError::InvalidInput { field: "principal", .. })
        ));
        assert!(ensure_positive("principal", f64::NAN).is_err());
        assert!(ensure_positive("principal", f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative_check() {
        assert!(ensure_non_negative("rate", 0.0).is_ok());
        assert!(ensure_non_negative("rate", -0.5).is_err());
    }

    #[test]
    fn test_finite_check() {
        assert_eq!(ensure_finite("final balance", 12.5).unwrap(), 12.5);
        assert!(matches!(
            ensure_finite("final balance", f64::INFINITY),
            Err(CalcError::NonFiniteResult { quantity: "final balance", .. })
        ));
        assert!(ensure_finite("monthly payment", f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CalcError::InputFormat { field: "principal", input: "abc".to_string() };
        assert_eq!(err.to_string(), "invalid input for principal: \"abc\" is not a valid number");

        let err = CalcError::UninitializedState("monthly payment");
        assert_eq!(err.to_string(), "monthly payment requested before it was calculated");

        let err = CalcError::NonFiniteResult { quantity: "final balance", value: f64::INFINITY };
        assert_eq!(err.to_string(), "final balance is not a finite number for these inputs");
    }
}
