use alloc::{vec, vec::Vec};

use crate::lms::error::Po2LmsError;
use crate::lms::quantizer::quantize_error;

/// An adaptive FIR filter trained by the power-of-two error
/// [LMS](https://en.wikipedia.org/wiki/Least_mean_squares_filter) recursion.
///
/// The filter keeps its coefficient vector and a delay line of recent
/// input samples. Each call to [`update`](Po2LmsFilter::update) computes
/// the filter output, the error against the desired sample, and performs
/// the coefficient update
///
/// ```text
/// h(k+1) = h(k) + 2 * step * q(e(k)) * x(k)
/// ```
///
/// where `q` is [`quantize_error`] and `x(k)` is the regressor, the
/// window of recent input samples with the newest sample first, aligned
/// with coefficient 0. The delay line starts out zeroed, so the first
/// `tap_count - 1` regressors are implicitly zero padded.
#[derive(Debug)]
pub struct Po2LmsFilter {
    /// FIR filter coefficients. Coefficient 0 weighs the newest sample.
    h: Vec<f32>,
    /// The coefficients the filter was created with, restored on reset.
    h_initial: Vec<f32>,
    /// Delay line of recent input samples.
    x: Vec<f32>,
    /// Write index into the delay line.
    buffer_pos: usize,
    /// Relaxation factor. The update applies 2 * step.
    step: f32,
    /// Data wordlength in bits, excluding the sign bit. Sets the
    /// quantization floor at 2^(1 - data_wordlength).
    data_wordlength: u32,
    /// Gain applied in place of errors below the quantization floor.
    tau: f32,
}

impl Po2LmsFilter {
    /// Creates a filter of the given order with all coefficients zero.
    /// A filter of order `n` has `n + 1` coefficients.
    pub fn new(
        filter_order: usize,
        step: f32,
        data_wordlength: u32,
        tau: f32,
    ) -> Result<Self, Po2LmsError> {
        Po2LmsFilter::from_coefficients(&vec![0.0; filter_order + 1], step, data_wordlength, tau)
    }

    /// Creates a filter starting from the given coefficient vector.
    pub fn from_coefficients(
        initial_coefficients: &[f32],
        step: f32,
        data_wordlength: u32,
        tau: f32,
    ) -> Result<Self, Po2LmsError> {
        if initial_coefficients.is_empty() {
            return Err(Po2LmsError::CoefficientCountMismatch {
                got: 0,
                expected: 1,
            });
        }
        if data_wordlength == 0 {
            return Err(Po2LmsError::ZeroWordlength);
        }
        if !step.is_finite() {
            return Err(Po2LmsError::NonFiniteParameter {
                name: "step",
                value: step,
            });
        }
        if !tau.is_finite() {
            return Err(Po2LmsError::NonFiniteParameter {
                name: "tau",
                value: tau,
            });
        }

        Ok(Po2LmsFilter {
            h: initial_coefficients.to_vec(),
            h_initial: initial_coefficients.to_vec(),
            x: vec![0.0; initial_coefficients.len()],
            buffer_pos: 0,
            step,
            data_wordlength,
            tau,
        })
    }

    /// The current filter coefficients.
    pub fn coefficients(&self) -> &[f32] {
        &self.h
    }

    /// The number of filter coefficients, i.e the filter order plus one.
    pub fn tap_count(&self) -> usize {
        self.h.len()
    }

    /// The filter order.
    pub fn filter_order(&self) -> usize {
        self.h.len() - 1
    }

    /// Processes one sample. Pushes `input` into the delay line, computes
    /// the filter output and the error `desired - output`, then updates
    /// the coefficients using the quantized error.
    ///
    /// Returns `(output, error)`. Non-finite values are not intercepted,
    /// a diverging recursion propagates NaN/infinity into the outputs and
    /// subsequent coefficients.
    pub fn update(&mut self, input: f32, desired: f32) -> (f32, f32) {
        let taps = self.h.len();
        self.x[self.buffer_pos] = input;

        // Filter output, regressor sample for tap i is x(k - i).
        let mut output = 0.0;
        for (tap, h) in self.h.iter().enumerate() {
            output += h * self.x[(self.buffer_pos + taps - tap) % taps];
        }

        let error = desired - output;
        let quantized = quantize_error(error, self.data_wordlength, self.tau);

        let delta_scale = 2.0 * self.step * quantized;
        for tap in 0..taps {
            self.h[tap] += delta_scale * self.x[(self.buffer_pos + taps - tap) % taps];
        }

        self.buffer_pos = (self.buffer_pos + 1) % taps;

        (output, error)
    }

    /// Restores the initial coefficients and clears the delay line.
    pub fn reset(&mut self) {
        self.h.copy_from_slice(&self.h_initial);
        self.x.fill(0.0);
        self.buffer_pos = 0;
    }
}
