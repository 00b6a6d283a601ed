//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for drawing operations
//! and their parameter validation.

use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A geometry operation has no meaningful result for this drawing.
    #[error("Geometry error: {0}")]
    GeometryError(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to CAM tool parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A required parameter is missing.
    #[error("Missing required parameter: {0}")]
    Missing(String),

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

fn require_finite(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("{} is not a finite number", value),
        })
    }
}

/// Finite and `>= 0`
pub(crate) fn require_non_negative(name: &str, value: f64) -> ParameterResult<()> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(ParameterError::OutOfRange {
            name: name.to_string(),
            value,
            min: 0.0,
            max: f64::INFINITY,
        });
    }
    Ok(())
}

/// Finite and `> 0`
pub(crate) fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
    require_non_negative(name, value)?;
    if value == 0.0 {
        return Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// Finite and not zero; negative values are allowed
pub(crate) fn require_non_zero(name: &str, value: f64) -> ParameterResult<()> {
    require_finite(name, value)?;
    if value == 0.0 {
        return Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: "must not be zero".to_string(),
        });
    }
    Ok(())
}

/// Any finite value
pub(crate) fn require_any(name: &str, value: f64) -> ParameterResult<()> {
    require_finite(name, value)
}
