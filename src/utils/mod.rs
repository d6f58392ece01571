//! Utility modules for signal processing
//!
//! This module contains the low-level collaborators used by the feature
//! transforms: the FFT kernel and the Levinson-Durbin solver.

pub mod fft;
pub mod lpc;

pub use fft::Fft;
pub use lpc::{levinson_durbin, lpc_weighting, LpcResult};
