//! FFT kernel wrapper
//!
//! This module wraps a single rustfft plan for the analysis window size.
//! The kernel follows the opus/kiss convention: a forward complex transform
//! scaled by `1/n`. Inverse transforms are obtained by the caller through
//! index reversal of a forward transform, so no inverse plan is kept.

use std::fmt;
use std::sync::Arc;

use num_complex::Complex32;
use rustfft::FftPlanner;

/// Forward FFT of a fixed size with `1/n` output scaling
#[derive(Clone)]
pub struct Fft {
    size: usize,
    forward: Arc<dyn rustfft::Fft<f32>>,
}

impl fmt::Debug for Fft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fft").field("size", &self.size).finish()
    }
}

impl Fft {
    /// Plan a forward transform of `size` points
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(size);
        Self { size, forward }
    }

    /// Transform size in points
    pub fn size(&self) -> usize {
        self.size
    }

    /// Scaled forward FFT in-place
    ///
    /// After this call `buffer[k] = (1/n) Σ x[m] e^{-2πikm/n}`.
    ///
    /// # Panics
    /// Panics if `buffer.len()` differs from the planned size.
    pub fn forward_scaled(&self, buffer: &mut [Complex32]) {
        assert_eq!(buffer.len(), self.size, "FFT buffer length mismatch");
        self.forward.process(buffer);

        let scale = 1.0 / self.size as f32;
        for c in buffer.iter_mut() {
            *c *= scale;
        }
    }
}
