//! lpcnet-freq: frame-level spectral features and LPC recovery
//!
//! This library implements the frequency-domain front-end of an LPCNet-style
//! speech model: it turns fixed-length analysis frames into perceptual band
//! energies and cepstra, and turns those compact features back into short-term
//! linear prediction filters.
//!
//! # Core Types
//!
//! - [`FreqContext`] - FFT plan, frame taper and DCT basis, built once
//! - [`Spectrum`] - Half-sided spectrum of one frame
//! - [`LpcConfig`] - Autocorrelation regularisation for LPC recovery
//! - [`LpcAnalysis`] - Predictor, reflection coefficients and residual energy
//!
//! # Example
//! ```
//! use lpcnet_freq::{compute_band_energy, FreqContext, WINDOW_SIZE};
//!
//! let ctx = FreqContext::global();
//! let mut frame = [0.0f32; WINDOW_SIZE];
//! for (i, x) in frame.iter_mut().enumerate() {
//!     *x = 1000.0 * (0.3 * i as f32).sin();
//! }
//!
//! ctx.apply_window(&mut frame);
//! let spectrum = ctx.forward_transform(&frame);
//! let band_e = compute_band_energy(&spectrum);
//! let cepstrum = ctx.cepstrum_from_bands(&band_e);
//! let lpc = ctx.lpc_from_cepstrum(&cepstrum);
//! assert!(lpc.error.is_finite());
//! ```

pub mod bands;
pub mod cepstrum;
pub mod context;
pub mod lpc;
pub mod spectrum;
pub mod transform;
pub mod window;

pub mod utils;

// Re-export main types at crate root
pub use bands::{band_edges, compute_band_corr, compute_band_energy, interp_band_gain};
pub use cepstrum::CEPSTRAL_OFFSET;
pub use context::FreqContext;
pub use lpc::{LpcAnalysis, LpcConfig};
pub use spectrum::Spectrum;
pub use transform::frame_from_slice;
pub use utils::lpc_weighting;

use thiserror::Error;

/// Hop size in samples (10 ms at 16 kHz)
pub const FRAME_SIZE: usize = 160;
/// Taper length at each edge of the analysis window
pub const OVERLAP_SIZE: usize = 160;
/// Analysis window length in samples
pub const WINDOW_SIZE: usize = FRAME_SIZE + OVERLAP_SIZE;
/// Number of non-negative-frequency bins
pub const FREQ_SIZE: usize = WINDOW_SIZE / 2 + 1;
/// Number of perceptual bands
pub const NB_BANDS: usize = 26;
/// Linear prediction order
pub const LPC_ORDER: usize = 16;

/// One analysis window of time-domain samples
pub type Frame = [f32; WINDOW_SIZE];
/// One value per perceptual band
pub type BandEnergies = [f32; NB_BANDS];
/// DCT of log band energies
pub type Cepstrum = [f32; NB_BANDS];
/// One value per frequency bin
pub type BandGains = [f32; FREQ_SIZE];

/// Errors that can occur when building frames or spectra from slices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FreqError {
    #[error("invalid buffer length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, FreqError>;
