//! Power-of-two error [least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! adaptive FIR filtering.
//!
//! The coefficient update uses the LMS recursion, but the instantaneous
//! error is first quantized to a signed power of two:
//!
//! * errors with a magnitude of 1 or more are replaced by ±1,
//! * errors below the wordlength dependent floor `2^(1 - bd)` are replaced
//!   by `±tau`, a small fixed gain that keeps the adaptation from stalling,
//! * everything in between is rounded down to the nearest power of two,
//!   keeping its sign.
//!
//! In fixed point hardware this replaces the full precision multiply of
//! the coefficient update with a bit shift.
//!
//! # Examples
//! ## System identification
//!
//! Identify a single tap plant with gain 0.5. Since the input is constant,
//! the error magnitude halves on every update until it falls below the
//! quantization floor, after which the coefficient oscillates around the
//! plant gain with an amplitude set by `tau`.
//!
//! ```
//! use po2lms::lms::{run, Po2LmsConfig};
//!
//! let input = vec![1.0; 100];
//! let desired = vec![0.5; 100];
//!
//! let config = Po2LmsConfig {
//!     step: 0.25,
//!     filter_order: 0,
//!     initial_coefficients: vec![0.0],
//!     data_wordlength: 8,
//!     tau: 0.01,
//! };
//!
//! let result = run(&desired, &input, &config).unwrap();
//!
//! let identified = result.coefficient_history.last().unwrap()[0];
//! assert!((identified - 0.5).abs() < 0.01);
//! ```

mod batch;
mod error;
mod filter;
mod quantizer;

pub use batch::{run, Po2LmsConfig, Po2LmsRun};
pub use error::Po2LmsError;
pub use filter::Po2LmsFilter;
pub use quantizer::quantize_error;
