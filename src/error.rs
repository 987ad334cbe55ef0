// src/error.rs
use thiserror::Error;

/// Rejections raised while turning raw console text into calculator inputs.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Please enter valid numbers. {field} must be a non-negative number in range, got '{value}'")]
    InvalidNumericInput { field: &'static str, value: String },

    #[error("Unknown diet '{0}'. Use 'veg' or 'nonveg'")]
    UnknownDiet(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
}
