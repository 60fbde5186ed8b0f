//! Error type for filter construction and batch runs.
//!
//! All variants describe invalid parameters or invalid input signals and
//! are reported before any sample is processed. Non-finite values arising
//! from a diverging recursion are not errors, they propagate into the
//! outputs unchanged.

use core::fmt::{Display, Formatter, Result};

/// Error type for power-of-two error LMS operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Po2LmsError {
    /// The initial coefficient vector length does not equal the filter
    /// order plus one.
    CoefficientCountMismatch {
        /// Number of initial coefficients provided.
        got: usize,
        /// Number of coefficients required by the filter order.
        expected: usize,
    },

    /// The data wordlength must be at least one bit (excluding the sign bit).
    ZeroWordlength,

    /// A scalar parameter is NaN or infinite.
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value provided.
        value: f32,
    },

    /// The desired and input signals must have the same number of samples.
    SignalLengthMismatch {
        /// Number of samples in the desired signal.
        desired_len: usize,
        /// Number of samples in the input signal.
        input_len: usize,
    },
}

impl Display for Po2LmsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::CoefficientCountMismatch { got, expected } => {
                write!(
                    f,
                    "Got {got} initial coefficients, the filter order requires {expected}"
                )
            }
            Self::ZeroWordlength => {
                write!(f, "Data wordlength must be at least 1 bit")
            }
            Self::NonFiniteParameter { name, value } => {
                write!(f, "Parameter '{name}' must be finite, got {value}")
            }
            Self::SignalLengthMismatch {
                desired_len,
                input_len,
            } => {
                write!(
                    f,
                    "Length mismatch: desired has {desired_len} samples, input has {input_len}"
                )
            }
        }
    }
}

impl core::error::Error for Po2LmsError {}
