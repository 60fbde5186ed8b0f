//! A rust implementation of the power-of-two error [LMS](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! adaptive filter algorithm. This LMS variant quantizes the instantaneous
//! error to a signed power of two (or a small fixed floor value) before each
//! coefficient update, which turns the update multiply into a bit shift in
//! fixed point hardware.
//!
//! Features
//! * Per sample streaming API and a batch API that records the full
//! coefficient trajectory of a run.
//! * No panics on bad parameters, validation errors are returned before
//! any sample is processed.
//! * `no_std` compatible.

extern crate alloc;

pub mod common;
pub mod lms;
