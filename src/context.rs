//! Constant tables shared by every transform
//!
//! A [`FreqContext`] owns the FFT plan for the analysis window, the half-window
//! taper and the cosine basis used by the cepstral transform. It is built once
//! and only read afterwards, so one instance can be shared freely between
//! threads. [`FreqContext::global`] hands out a lazily built process-wide
//! instance for callers that do not want to thread a context through.

use std::f64::consts::PI;
use std::fmt;
use std::sync::OnceLock;

use log::debug;

use crate::lpc::LpcConfig;
use crate::utils::Fft;
use crate::window::half_window;
use crate::{NB_BANDS, OVERLAP_SIZE, WINDOW_SIZE};

static GLOBAL_CONTEXT: OnceLock<FreqContext> = OnceLock::new();

/// FFT state, frame taper and DCT basis for one analysis configuration
#[derive(Clone)]
pub struct FreqContext {
    fft: Fft,
    half_window: [f32; OVERLAP_SIZE],
    /// Row-major `NB_BANDS × NB_BANDS`: entry (i, j) at `i * NB_BANDS + j`
    dct_table: [f32; NB_BANDS * NB_BANDS],
    lpc_config: LpcConfig,
}

impl fmt::Debug for FreqContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreqContext")
            .field("fft_size", &self.fft.size())
            .field("lpc_config", &self.lpc_config)
            .finish()
    }
}

impl FreqContext {
    /// Build a context with the calibrated LPC regularisation
    pub fn new() -> Self {
        Self::with_lpc_config(LpcConfig::default())
    }

    /// Build a context with custom LPC regularisation constants
    pub fn with_lpc_config(lpc_config: LpcConfig) -> Self {
        let fft = Fft::new(WINDOW_SIZE);

        let mut window = [0.0f32; OVERLAP_SIZE];
        window.copy_from_slice(&half_window(OVERLAP_SIZE));

        debug!(
            "building frequency context: window={} overlap={} bands={}",
            WINDOW_SIZE, OVERLAP_SIZE, NB_BANDS
        );

        Self {
            fft,
            half_window: window,
            dct_table: dct_basis(),
            lpc_config,
        }
    }

    /// Process-wide context with default configuration
    ///
    /// The first call builds the tables; later calls return the same instance.
    pub fn global() -> &'static FreqContext {
        GLOBAL_CONTEXT.get_or_init(FreqContext::new)
    }

    /// Rising half of the frame taper
    pub fn half_window(&self) -> &[f32; OVERLAP_SIZE] {
        &self.half_window
    }

    /// Orthonormal cosine basis, row-major
    pub fn dct_table(&self) -> &[f32; NB_BANDS * NB_BANDS] {
        &self.dct_table
    }

    /// LPC regularisation constants
    pub fn lpc_config(&self) -> &LpcConfig {
        &self.lpc_config
    }

    pub(crate) fn fft(&self) -> &Fft {
        &self.fft
    }
}

impl Default for FreqContext {
    fn default() -> Self {
        Self::new()
    }
}

/// `cos((i + 0.5) · j · π / NB_BANDS)` with column 0 scaled by `√0.5`
fn dct_basis() -> [f32; NB_BANDS * NB_BANDS] {
    let mut table = [0.0f32; NB_BANDS * NB_BANDS];
    for i in 0..NB_BANDS {
        for j in 0..NB_BANDS {
            let mut v = ((i as f64 + 0.5) * j as f64 * PI / NB_BANDS as f64).cos();
            if j == 0 {
                v *= 0.5f64.sqrt();
            }
            table[i * NB_BANDS + j] = v as f32;
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_global_is_built_once() {
        let a = FreqContext::global() as *const FreqContext;
        let b = FreqContext::global() as *const FreqContext;
        assert_eq!(a, b);
    }

    #[test]
    fn test_context_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FreqContext>();
    }

    #[test]
    fn test_dct_basis_is_orthogonal() {
        let ctx = FreqContext::new();
        let table = ctx.dct_table();
        let scale = 2.0 / NB_BANDS as f32;

        for a in 0..NB_BANDS {
            for b in 0..NB_BANDS {
                let dot: f32 = (0..NB_BANDS)
                    .map(|i| table[i * NB_BANDS + a] * table[i * NB_BANDS + b])
                    .sum();
                let expected = if a == b { 1.0 } else { 0.0 };
                assert_relative_eq!(dot * scale, expected, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_dct_basis_first_column() {
        let ctx = FreqContext::new();
        for i in 0..NB_BANDS {
            assert_relative_eq!(ctx.dct_table()[i * NB_BANDS], 0.5f32.sqrt(), epsilon = 1e-7);
        }
    }
}
