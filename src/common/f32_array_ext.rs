//! `[f32]` extensions.

use micromath::F32Ext;

/// `[f32]` extensions for measuring signal levels.
pub trait F32ArrayExt {
    /// Returns the maximum absolute value.
    fn peak_level(&self) -> f32;
    /// Returns the mean of the squared values.
    fn mean_square(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level.
    fn rms_level(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level in dB relative to 1, i.e 0 dB corresponds to a level of 1.
    fn rms_level_db(&self) -> f32;
}

impl F32ArrayExt for [f32] {
    fn peak_level(&self) -> f32 {
        self.iter()
            .fold(0.0, |max, sample| F32Ext::abs(*sample).max(max))
    }

    fn mean_square(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.iter().map(|sample| sample * sample).sum();
        sum / (self.len() as f32)
    }

    fn rms_level(&self) -> f32 {
        let mean_square = self.mean_square();
        if mean_square == 0.0 {
            // micromath's approximate sqrt does not hit 0 exactly
            return 0.0;
        }
        F32Ext::sqrt(mean_square)
    }

    fn rms_level_db(&self) -> f32 {
        20. * F32Ext::log10(self.rms_level())
    }
}
