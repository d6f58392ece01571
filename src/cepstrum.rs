//! Cepstral transform over band vectors
//!
//! An orthonormal DCT-II maps log band energies to cepstral coefficients and
//! the matching DCT-III maps them back.

use crate::{BandEnergies, Cepstrum, FreqContext, NB_BANDS};

/// Baseline subtracted from cepstral coefficient 0 by [`FreqContext::cepstrum_from_bands`]
/// and added back by [`FreqContext::lpc_from_cepstrum`]
pub const CEPSTRAL_OFFSET: f32 = 4.0;

/// Floor added to band energies before taking the log
const LOG_ENERGY_FLOOR: f32 = 1e-2;

impl FreqContext {
    /// Type-II DCT: `out[i] = √(2/N) Σ_j in[j] · basis[j][i]`
    pub fn dct(&self, input: &[f32; NB_BANDS]) -> Cepstrum {
        let table = self.dct_table();
        let scale = (2.0f64 / NB_BANDS as f64).sqrt();
        let mut out = [0.0f32; NB_BANDS];
        for (i, o) in out.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for j in 0..NB_BANDS {
                sum += input[j] * table[j * NB_BANDS + i];
            }
            *o = (sum as f64 * scale) as f32;
        }
        out
    }

    /// Type-III DCT: `out[i] = √(2/N) Σ_j in[j] · basis[i][j]`
    pub fn idct(&self, input: &Cepstrum) -> [f32; NB_BANDS] {
        let table = self.dct_table();
        let scale = (2.0f64 / NB_BANDS as f64).sqrt();
        let mut out = [0.0f32; NB_BANDS];
        for (i, o) in out.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for j in 0..NB_BANDS {
                sum += input[j] * table[i * NB_BANDS + j];
            }
            *o = (sum as f64 * scale) as f32;
        }
        out
    }

    /// Cepstral features of a band-energy vector
    ///
    /// `log10(0.01 + E)`, DCT, then `CEPSTRAL_OFFSET` removed from coefficient 0.
    pub fn cepstrum_from_bands(&self, band_e: &BandEnergies) -> Cepstrum {
        let mut ly = [0.0f32; NB_BANDS];
        for (l, &e) in ly.iter_mut().zip(band_e.iter()) {
            *l = (LOG_ENERGY_FLOOR + e).log10();
        }
        let mut cepstrum = self.dct(&ly);
        cepstrum[0] -= CEPSTRAL_OFFSET;
        cepstrum
    }
}
