use micromath::F32Ext;

/// The smallest error magnitude representable with a data wordlength of
/// `data_wordlength` magnitude bits, i.e `2^(1 - data_wordlength)`.
/// Computed by exact halving, each step is an exact floating point
/// operation down to the subnormal range.
fn quantization_floor(data_wordlength: u32) -> f32 {
    let mut floor = 1.0_f32;
    for _ in 1..data_wordlength {
        floor *= 0.5;
    }
    floor
}

/// Quantizes an instantaneous error value to a signed power of two.
///
/// * `error == 0` maps to 0.
/// * Magnitudes of 1 or more map to ±1.
/// * Magnitudes below `2^(1 - data_wordlength)` map to `±tau`. The
///   boundary itself belongs to the power-of-two branch below.
/// * Everything in between maps to the largest power of two not
///   exceeding the magnitude, with the sign of the error.
///
/// The power of two is found by halving from 1, not by taking a
/// logarithm. This keeps the branch boundaries exact (micromath's `log2`
/// is approximate) and means the zero error case never has to evaluate
/// `log2(0)`.
pub fn quantize_error(error: f32, data_wordlength: u32, tau: f32) -> f32 {
    if error == 0.0 {
        return 0.0;
    }
    let sign = if error > 0.0 { 1.0 } else { -1.0 };
    let magnitude = F32Ext::abs(error);

    if magnitude >= 1.0 {
        return sign;
    }
    if magnitude < quantization_floor(data_wordlength) {
        return tau * sign;
    }

    let mut quantized = 0.5;
    while quantized > magnitude {
        quantized *= 0.5;
    }
    sign * quantized
}
