use po2lms::common::F32ArrayExt;
use po2lms::lms::{run, Po2LmsConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    const FILTER_ORDER: usize = 4;
    const STEP: f32 = 0.002;
    const DATA_WORDLENGTH: u32 = 15;
    const TAU: f32 = 0.001;
    const SAMPLE_COUNT: usize = 20000;

    // Using notation from https://en.wikipedia.org/wiki/Least_mean_squares_filter

    // x, the reference noise
    let mut rng = StdRng::seed_from_u64(7);
    let x: Vec<f32> = (0..SAMPLE_COUNT)
        .map(|_| rng.gen_range(-1.0..=1.0))
        .collect();

    // y, the version of x present in d, x colored by a 3 tap path
    let path = [0.6, -0.3, 0.15];
    let y: Vec<f32> = (0..SAMPLE_COUNT)
        .map(|n| {
            path.iter()
                .enumerate()
                .filter(|(k, _)| n >= *k)
                .map(|(k, tap)| tap * x[n - k])
                .sum()
        })
        .collect();

    // v, the signal of interest buried in the noise
    let v: Vec<f32> = (0..SAMPLE_COUNT)
        .map(|n| 0.2 * (2.0 * std::f32::consts::PI * 0.01 * n as f32).sin())
        .collect();

    // d, the sum of v and y
    let d: Vec<f32> = v.iter().zip(y.iter()).map(|(v, y)| v + y).collect();

    println!("Created input signals");
    println!("x(n): reference noise, d(n) = v(n) + y(n)");
    println!();

    println!("Filtering (step={STEP}, bd={DATA_WORDLENGTH}, tau={TAU}, order={FILTER_ORDER})");
    println!();

    let config = Po2LmsConfig {
        step: STEP,
        filter_order: FILTER_ORDER,
        initial_coefficients: vec![0.0; FILTER_ORDER + 1],
        data_wordlength: DATA_WORDLENGTH,
        tau: TAU,
    };
    // e, the cleaned signal, d with the estimate of y removed
    let result = run(&d, &x, &config).unwrap();

    // Compare the residual noise before and after cancellation over the
    // last quarter, where the filter has converged.
    let tail = 3 * SAMPLE_COUNT / 4..;
    let noise_before: Vec<f32> = d[tail.clone()]
        .iter()
        .zip(v[tail.clone()].iter())
        .map(|(d, v)| d - v)
        .collect();
    let noise_after: Vec<f32> = result.errors[tail.clone()]
        .iter()
        .zip(v[tail].iter())
        .map(|(e, v)| e - v)
        .collect();

    println!("Noise level before cancellation: {:.1} dB", noise_before.rms_level_db());
    println!("Noise level after cancellation:  {:.1} dB", noise_after.rms_level_db());
    println!();
    println!("Identified noise path: {:?}", result.coefficient_history.last().unwrap());
    println!("True noise path:       {:?}", path);
}
