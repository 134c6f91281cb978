//! Error types for structured error handling.
//!
//! This module provides:
//! - `InvalidParameter`: Errors from generator and distribution construction

use thiserror::Error;

/// Construction-time parameter validation errors.
///
/// Every fallible constructor in this workspace validates its parameters
/// eagerly and returns one of these variants instead of a partially built
/// value. Once a value is constructed, number generation itself never fails.
///
/// # Variants
/// - `NotPositive`: A parameter that must be strictly positive was not
/// - `OutOfRange`: A parameter fell outside its closed valid interval
/// - `InvalidOrdering`: A set of parameters violated a required ordering
///
/// # Examples
/// ```
/// use variate_rng::{InvalidParameter, WichmannHill};
///
/// let err = WichmannHill::new(0, 1, 1).unwrap_err();
/// assert_eq!(
///     format!("{}", err),
///     "Parameter x = 0 outside valid range [1, 30000]"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidParameter {
    /// Parameter must be strictly positive.
    #[error("Parameter {name} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Parameter outside its closed valid interval.
    #[error("Parameter {name} = {value} outside valid range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Lower bound of the valid interval
        min: f64,
        /// Upper bound of the valid interval
        max: f64,
    },

    /// Parameters violate a required ordering.
    #[error("Invalid parameter ordering: {0}")]
    InvalidOrdering(String),
}
