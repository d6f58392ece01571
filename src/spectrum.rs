//! Half-sided spectrum of one analysis frame
//!
//! A [`Spectrum`] holds the `FREQ_SIZE` non-negative-frequency bins of the DFT
//! of a real `WINDOW_SIZE` frame. The negative-frequency half is implied by
//! conjugate symmetry and reconstructed on inverse transform.

use num_complex::Complex32;

use crate::{FreqError, Result, FREQ_SIZE};

/// Non-negative-frequency half of a conjugate-symmetric spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spectrum {
    bins: [Complex32; FREQ_SIZE],
}

impl Spectrum {
    /// All-zero spectrum
    pub fn zeros() -> Self {
        Self {
            bins: [Complex32::new(0.0, 0.0); FREQ_SIZE],
        }
    }

    /// Wrap an array of bins
    pub fn from_bins(bins: [Complex32; FREQ_SIZE]) -> Self {
        Self { bins }
    }

    /// Copy bins from a slice of exactly `FREQ_SIZE` values
    pub fn from_slice(bins: &[Complex32]) -> Result<Self> {
        let bins: [Complex32; FREQ_SIZE] =
            bins.try_into().map_err(|_| FreqError::InvalidLength {
                expected: FREQ_SIZE,
                actual: bins.len(),
            })?;
        Ok(Self { bins })
    }

    /// Real spectrum with zero imaginary part, e.g. a power spectrum
    pub fn from_power(power: &[f32; FREQ_SIZE]) -> Self {
        let mut bins = [Complex32::new(0.0, 0.0); FREQ_SIZE];
        for (bin, &p) in bins.iter_mut().zip(power.iter()) {
            bin.re = p;
        }
        Self { bins }
    }

    /// Get the number of frequency bins
    pub fn num_bins(&self) -> usize {
        FREQ_SIZE
    }

    /// All bins, DC first
    pub fn bins(&self) -> &[Complex32; FREQ_SIZE] {
        &self.bins
    }

    /// Mutable access to the bins
    ///
    /// The DC and Nyquist bins should stay real for the inverse transform to
    /// produce the frame the bins describe.
    pub fn bins_mut(&mut self) -> &mut [Complex32; FREQ_SIZE] {
        &mut self.bins
    }

    /// Get the magnitude at a frequency bin
    pub fn get_magnitude(&self, bin: usize) -> Option<f32> {
        self.bins.get(bin).map(|c| c.norm())
    }

    /// Get the power (magnitude squared) at a frequency bin
    pub fn get_power(&self, bin: usize) -> Option<f32> {
        self.bins.get(bin).map(|c| c.norm_sqr())
    }

    /// Sum of bin powers
    pub fn total_power(&self) -> f32 {
        self.bins.iter().map(|c| c.norm_sqr()).sum()
    }
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[Complex32; FREQ_SIZE]> for Spectrum {
    fn from(bins: [Complex32; FREQ_SIZE]) -> Self {
        Self::from_bins(bins)
    }
}
