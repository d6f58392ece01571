//! Frame ↔ spectrum transforms
//!
//! Both directions run the same scaled forward kernel. The inverse mirrors
//! the half spectrum into a full conjugate-symmetric buffer, transforms it
//! forward and reads the output in reverse index order, which is the inverse
//! DFT up to the `WINDOW_SIZE` factor it multiplies back in.

use num_complex::Complex32;

use crate::{Frame, FreqContext, FreqError, Result, Spectrum, FREQ_SIZE, WINDOW_SIZE};

impl FreqContext {
    /// Spectrum of a real frame (`1/WINDOW_SIZE` scaled DFT, bins `0..FREQ_SIZE`)
    pub fn forward_transform(&self, frame: &Frame) -> Spectrum {
        let mut buffer = [Complex32::new(0.0, 0.0); WINDOW_SIZE];
        for (c, &x) in buffer.iter_mut().zip(frame.iter()) {
            *c = Complex32::new(x, 0.0);
        }

        self.fft().forward_scaled(&mut buffer);

        let mut bins = [Complex32::new(0.0, 0.0); FREQ_SIZE];
        bins.copy_from_slice(&buffer[..FREQ_SIZE]);
        Spectrum::from_bins(bins)
    }

    /// Real frame whose spectrum is `spectrum`
    ///
    /// Exact (to rounding) only when `spectrum` came from a real signal, i.e.
    /// its DC and Nyquist bins are real.
    pub fn inverse_transform(&self, spectrum: &Spectrum) -> Frame {
        let mut buffer = [Complex32::new(0.0, 0.0); WINDOW_SIZE];
        buffer[..FREQ_SIZE].copy_from_slice(spectrum.bins());
        for i in FREQ_SIZE..WINDOW_SIZE {
            buffer[i] = buffer[WINDOW_SIZE - i].conj();
        }

        self.fft().forward_scaled(&mut buffer);

        let n = WINDOW_SIZE as f32;
        let mut out = [0.0f32; WINDOW_SIZE];
        out[0] = n * buffer[0].re;
        for i in 1..WINDOW_SIZE {
            out[i] = n * buffer[WINDOW_SIZE - i].re;
        }
        out
    }
}

/// Copy a slice of exactly `WINDOW_SIZE` samples into a frame
pub fn frame_from_slice(samples: &[f32]) -> Result<Frame> {
    samples.try_into().map_err(|_| FreqError::InvalidLength {
        expected: WINDOW_SIZE,
        actual: samples.len(),
    })
}
