//! Analysis/synthesis window
//!
//! The frame taper is a power-complementary "sine of sine-squared" half
//! window. Applied at both edges of a frame it lets consecutive frames be
//! cross-faded by overlap-add without discontinuities.

use std::f64::consts::PI;

use crate::{Frame, FreqContext, OVERLAP_SIZE, WINDOW_SIZE};

/// Generate the rising half of the frame taper
///
/// `w[i] = sin(π/2 · sin²(π/2 · (i + 0.5) / len))`. The values increase
/// monotonically from near 0 to near 1 and satisfy
/// `w[i]² + w[len - 1 - i]² = 1`.
pub fn half_window(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let s = (0.5 * PI * (i as f64 + 0.5) / len as f64).sin();
            (0.5 * PI * s * s).sin() as f32
        })
        .collect()
}

impl FreqContext {
    /// Taper both edges of a frame in-place
    ///
    /// The first `OVERLAP_SIZE` samples are multiplied by the rising taper and
    /// the last `OVERLAP_SIZE` by the same taper mirrored; the interior (if any)
    /// is left untouched.
    pub fn apply_window(&self, frame: &mut Frame) {
        for (i, &w) in self.half_window().iter().enumerate() {
            frame[i] *= w;
            frame[WINDOW_SIZE - 1 - i] *= w;
        }
    }
}

const _: () = assert!(2 * OVERLAP_SIZE <= WINDOW_SIZE);
