use alloc::vec::Vec;

use crate::lms::error::Po2LmsError;
use crate::lms::filter::Po2LmsFilter;

/// Parameters for a batch power-of-two error LMS run.
#[derive(Debug, Clone)]
pub struct Po2LmsConfig {
    /// Relaxation factor. The coefficient update applies 2 * step.
    pub step: f32,
    /// Filter order. The filter has `filter_order + 1` coefficients.
    pub filter_order: usize,
    /// Coefficient vector before the first iteration. Must have
    /// `filter_order + 1` entries.
    pub initial_coefficients: Vec<f32>,
    /// Data wordlength in bits, excluding the sign bit. Sets the
    /// quantization floor at `2^(1 - data_wordlength)`.
    pub data_wordlength: u32,
    /// Gain applied in place of errors below the quantization floor.
    pub tau: f32,
}

/// The result of a batch run over `n` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Po2LmsRun {
    /// Filter output per iteration, `n` entries.
    pub outputs: Vec<f32>,
    /// Error (desired minus output) per iteration, `n` entries.
    pub errors: Vec<f32>,
    /// Coefficient snapshots, `n + 1` entries. Snapshot 0 is the initial
    /// coefficient vector, snapshot `k + 1` holds the coefficients after
    /// iteration `k`.
    pub coefficient_history: Vec<Vec<f32>>,
}

/// Runs the power-of-two error LMS recursion over a pair of signals,
/// recording the output, the error and the coefficient trajectory.
///
/// The two signals must have the same length. All parameter and input
/// validation happens before the first iteration, an `Err` means no
/// sample was processed. See [`Po2LmsError`] for the possible failures.
///
/// Non-finite values produced by a diverging recursion (a too large
/// `step`, extreme inputs) are not intercepted, they propagate into the
/// outputs, errors and subsequent coefficient snapshots.
pub fn run(
    desired: &[f32],
    input: &[f32],
    config: &Po2LmsConfig,
) -> Result<Po2LmsRun, Po2LmsError> {
    let expected = config.filter_order + 1;
    if config.initial_coefficients.len() != expected {
        return Err(Po2LmsError::CoefficientCountMismatch {
            got: config.initial_coefficients.len(),
            expected,
        });
    }
    if desired.len() != input.len() {
        return Err(Po2LmsError::SignalLengthMismatch {
            desired_len: desired.len(),
            input_len: input.len(),
        });
    }

    let mut filter = Po2LmsFilter::from_coefficients(
        &config.initial_coefficients,
        config.step,
        config.data_wordlength,
        config.tau,
    )?;

    let sample_count = desired.len();
    let mut outputs = Vec::with_capacity(sample_count);
    let mut errors = Vec::with_capacity(sample_count);
    let mut coefficient_history = Vec::with_capacity(sample_count + 1);
    coefficient_history.push(config.initial_coefficients.clone());

    for (x, d) in input.iter().zip(desired.iter()) {
        let (output, error) = filter.update(*x, *d);
        outputs.push(output);
        errors.push(error);
        coefficient_history.push(filter.coefficients().to_vec());
    }

    Ok(Po2LmsRun {
        outputs,
        errors,
        coefficient_history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn test_config(filter_order: usize) -> Po2LmsConfig {
        Po2LmsConfig {
            step: 0.01,
            filter_order,
            initial_coefficients: vec![0.0; filter_order + 1],
            data_wordlength: 8,
            tau: 0.01,
        }
    }

    #[test]
    fn test_result_lengths() {
        let desired = [0.5, -0.5, 0.25, 1.0, 0.0];
        let input = [1.0, 0.5, -1.0, 0.25, 0.75];
        let result = run(&desired, &input, &test_config(2)).unwrap();
        assert_eq!(result.outputs.len(), 5);
        assert_eq!(result.errors.len(), 5);
        assert_eq!(result.coefficient_history.len(), 6);
        for snapshot in &result.coefficient_history {
            assert_eq!(snapshot.len(), 3);
        }
    }

    #[test]
    fn test_first_snapshot_is_initial_coefficients() {
        let mut config = test_config(1);
        config.initial_coefficients = vec![0.75, -0.125];
        let desired = [1.0, 2.0, 3.0];
        let input = [0.5, 0.5, 0.5];
        let result = run(&desired, &input, &config).unwrap();
        assert_eq!(result.coefficient_history[0], config.initial_coefficients);
    }

    #[test]
    fn test_errors_equal_desired_minus_outputs() {
        let mut config = test_config(3);
        config.step = 0.05;
        let desired = [1.0, -0.5, 0.25, 0.7, -0.9, 0.1];
        let input = [0.3, 0.8, -0.6, 0.2, 0.9, -0.4];
        let result = run(&desired, &input, &config).unwrap();
        for it in 0..desired.len() {
            let expected = desired[it] - result.outputs[it];
            assert!((result.errors[it] - expected).abs() <= 1e-6);
        }
    }

    #[test]
    fn test_all_zero_signals_leave_coefficients_untouched() {
        let mut config = test_config(1);
        config.initial_coefficients = vec![0.5, -0.5];
        let zeros = [0.0, 0.0, 0.0];
        let result = run(&zeros, &zeros, &config).unwrap();
        assert_eq!(result.outputs, vec![0.0, 0.0, 0.0]);
        assert_eq!(result.errors, vec![0.0, 0.0, 0.0]);
        assert_eq!(result.coefficient_history.len(), 4);
        for snapshot in &result.coefficient_history {
            assert_eq!(snapshot, &config.initial_coefficients);
        }
    }

    #[test]
    fn test_empty_signals() {
        let result = run(&[], &[], &test_config(2)).unwrap();
        assert!(result.outputs.is_empty());
        assert!(result.errors.is_empty());
        assert_eq!(result.coefficient_history.len(), 1);
    }

    #[test]
    fn test_single_tap_unit_step_trajectory() {
        let config = Po2LmsConfig {
            step: 0.5,
            filter_order: 0,
            initial_coefficients: vec![0.0],
            data_wordlength: 8,
            tau: 0.01,
        };
        let result = run(&[1.0], &[1.0], &config).unwrap();
        assert_eq!(result.outputs, vec![0.0]);
        assert_eq!(result.errors, vec![1.0]);
        // |e| = 1 clips to a quantized value of 1, so the coefficient
        // moves to 0 + 2 * 0.5 * 1 * 1 = 1.
        assert_eq!(result.coefficient_history, vec![vec![0.0], vec![1.0]]);
    }

    #[test]
    fn test_coefficient_count_mismatch_is_rejected() {
        let mut config = test_config(3);
        config.initial_coefficients = vec![0.0; 3];
        let result = run(&[1.0], &[1.0], &config);
        assert_eq!(
            result.unwrap_err(),
            Po2LmsError::CoefficientCountMismatch {
                got: 3,
                expected: 4
            }
        );
    }

    #[test]
    fn test_signal_length_mismatch_is_rejected() {
        let result = run(&[1.0, 2.0], &[1.0], &test_config(0));
        assert_eq!(
            result.unwrap_err(),
            Po2LmsError::SignalLengthMismatch {
                desired_len: 2,
                input_len: 1
            }
        );
    }

    #[test]
    fn test_invalid_scalar_parameters_are_rejected() {
        let mut config = test_config(0);
        config.data_wordlength = 0;
        assert_eq!(
            run(&[1.0], &[1.0], &config).unwrap_err(),
            Po2LmsError::ZeroWordlength
        );

        let mut config = test_config(0);
        config.tau = f32::NAN;
        assert!(matches!(
            run(&[1.0], &[1.0], &config).unwrap_err(),
            Po2LmsError::NonFiniteParameter { name: "tau", .. }
        ));
    }

    #[test]
    fn test_divergence_propagates_as_non_finite_values() {
        // A step large enough to overflow f32 on the first update. The
        // run still succeeds, the overflow shows up as non-finite values
        // in the history and the following outputs.
        let config = Po2LmsConfig {
            step: 1e38,
            filter_order: 0,
            initial_coefficients: vec![0.0],
            data_wordlength: 8,
            tau: 0.01,
        };
        let desired = [1.0, 1.0];
        let input = [1e20, 1e20];
        let result = run(&desired, &input, &config).unwrap();
        assert_eq!(result.outputs[0], 0.0);
        assert!(result.coefficient_history[1][0].is_infinite());
        assert!(!result.outputs[1].is_finite());
        assert!(!result.errors[1].is_finite());
    }

    #[test]
    fn test_streaming_and_batch_agree() {
        let mut config = test_config(4);
        config.step = 0.02;
        config.initial_coefficients = vec![0.1, 0.0, -0.1, 0.2, 0.0];

        let sample_count = 64;
        let mut input = vec![0.0; sample_count];
        let mut desired = vec![0.0; sample_count];
        for i in 0..sample_count {
            input[i] = ((i * 7 + 3) % 11) as f32 / 11.0 - 0.5;
            desired[i] = ((i * 5 + 1) % 13) as f32 / 13.0 - 0.5;
        }

        let result = run(&desired, &input, &config).unwrap();

        let mut filter = crate::lms::Po2LmsFilter::from_coefficients(
            &config.initial_coefficients,
            config.step,
            config.data_wordlength,
            config.tau,
        )
        .unwrap();
        for i in 0..sample_count {
            let (output, error) = filter.update(input[i], desired[i]);
            assert_eq!(output, result.outputs[i]);
            assert_eq!(error, result.errors[i]);
            assert_eq!(filter.coefficients(), &result.coefficient_history[i + 1][..]);
        }
    }
}
