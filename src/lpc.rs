//! LPC recovery from band energies and cepstra
//!
//! The band vector is expanded to a per-bin power envelope and inverse
//! transformed; by Wiener-Khinchin the result is the autocorrelation of a
//! signal with that envelope. The first `LPC_ORDER + 1` lags are regularised
//! with a noise floor and a lag window before Levinson-Durbin.

use serde::{Deserialize, Serialize};

use crate::cepstrum::CEPSTRAL_OFFSET;
use crate::utils::lpc::{levinson_durbin, LpcResult};
use crate::{bands, BandEnergies, Cepstrum, FreqContext, Spectrum, FREQ_SIZE, LPC_ORDER, NB_BANDS};

/// Predictor, reflection coefficients and residual energy of one frame
pub type LpcAnalysis = LpcResult<LPC_ORDER>;

/// Per-band gain correcting the attenuation of the band/window construction
/// when going from cepstrum back to band energies
const COMPENSATION: [f32; NB_BANDS] = [
    1.000000, 1.000000, 1.000000, 1.000000, 1.000000, 1.000000, 1.000000, 1.000000, 1.000000,
    0.800000, 0.666667, 0.666667, 0.571429, 0.500000, 0.444444, 0.363636, 0.333333, 0.307692,
    0.266667, 0.222222, 0.190476, 0.166667, 0.137931, 0.114286, 0.093023, 0.093023,
];

/// Autocorrelation regularisation applied before Levinson-Durbin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LpcConfig {
    /// Fraction of lag 0 added to itself
    pub noise_floor_relative: f32,
    /// Absolute amount added to lag 0 (about -40 dB)
    pub noise_floor_absolute: f32,
    /// Lag `i` is scaled by `1 - lag_window * i²`
    pub lag_window: f32,
}

impl Default for LpcConfig {
    fn default() -> Self {
        Self {
            noise_floor_relative: 1e-4,
            // 320 / 12 truncates to 26 before the division by 38
            noise_floor_absolute: (320 / 12) as f32 / 38.0,
            lag_window: 6e-5,
        }
    }
}

impl LpcConfig {
    /// Apply noise floor and lag window to `ac` in-place
    pub fn regularize(&self, ac: &mut [f32]) {
        if ac.is_empty() {
            return;
        }
        ac[0] += ac[0] * self.noise_floor_relative + self.noise_floor_absolute;
        for (i, a) in ac.iter_mut().enumerate().skip(1) {
            *a *= 1.0 - self.lag_window * (i * i) as f32;
        }
    }
}

impl FreqContext {
    /// LPC from band energies
    pub fn lpc_from_bands(&self, band_e: &BandEnergies) -> LpcAnalysis {
        let mut xr = bands::interp_band_gain(band_e);
        xr[FREQ_SIZE - 1] = 0.0;

        let x_auto = self.inverse_transform(&Spectrum::from_power(&xr));

        let mut ac = [0.0f32; LPC_ORDER + 1];
        ac.copy_from_slice(&x_auto[..LPC_ORDER + 1]);
        self.lpc_config().regularize(&mut ac);

        levinson_durbin::<LPC_ORDER>(&ac)
    }

    /// LPC from cepstral features as produced by [`FreqContext::cepstrum_from_bands`]
    pub fn lpc_from_cepstrum(&self, cepstrum: &Cepstrum) -> LpcAnalysis {
        let mut tmp = *cepstrum;
        tmp[0] += CEPSTRAL_OFFSET;

        let mut band_e = self.idct(&tmp);
        for (e, &comp) in band_e.iter_mut().zip(COMPENSATION.iter()) {
            *e = 10.0f32.powf(*e) * comp;
        }

        self.lpc_from_bands(&band_e)
    }
}
