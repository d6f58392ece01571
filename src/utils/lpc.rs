//! Linear Predictive Coding (LPC) utilities
//!
//! This module provides the all-pole solver used by LPC recovery: a
//! Levinson-Durbin recursion on an autocorrelation sequence, plus
//! bandwidth expansion of the resulting predictor.

use log::trace;

/// Result of LPC analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LpcResult<const N: usize> {
    /// Predictor coefficients a[1..N] for A(z) = 1 + a[1]*z^-1 + ... + a[N]*z^-N
    /// (no leading 1.0)
    pub coefficients: [f32; N],
    /// Reflection coefficients, one per completed stage (zero after an early stop)
    pub reflection: [f32; N],
    /// Residual prediction error energy
    pub error: f32,
}

/// Compute LPC coefficients from autocorrelation using Levinson-Durbin
///
/// `ac` must hold at least `N + 1` lags. The recursion stops once the residual
/// drops below `0.001 * ac[0]` (30 dB of prediction gain); coefficients of the
/// skipped stages stay zero. A non-positive `ac[0]` yields an all-zero predictor.
///
/// # Panics
/// Panics if `ac.len() <= N`.
pub fn levinson_durbin<const N: usize>(ac: &[f32]) -> LpcResult<N> {
    assert!(ac.len() > N, "need {} autocorrelation lags, got {}", N + 1, ac.len());

    let mut lpc = [0.0f32; N];
    let mut rc = [0.0f32; N];
    let mut error = ac[0];

    if ac[0] <= 0.0 {
        return LpcResult {
            coefficients: lpc,
            reflection: rc,
            error,
        };
    }

    for i in 0..N {
        let mut rr = 0.0f32;
        for j in 0..i {
            rr += lpc[j] * ac[i - j];
        }
        rr += ac[i + 1];

        let r = -rr / error;
        rc[i] = r;
        lpc[i] = r;

        // Symmetric in-place update: a[j] += r * a[i-1-j]
        for j in 0..(i + 1) >> 1 {
            let tmp1 = lpc[j];
            let tmp2 = lpc[i - 1 - j];
            lpc[j] = tmp1 + r * tmp2;
            lpc[i - 1 - j] = tmp2 + r * tmp1;
        }

        error -= r * r * error;

        if error < 0.001 * ac[0] {
            trace!("levinson-durbin stopped after {} of {} stages", i + 1, N);
            break;
        }
    }

    LpcResult {
        coefficients: lpc,
        reflection: rc,
        error,
    }
}

/// Bandwidth expansion: scale coefficient k (1-based) by `gamma^k`
pub fn lpc_weighting(lpc: &mut [f32], gamma: f32) {
    let mut gamma_i = gamma;
    for a in lpc.iter_mut() {
        *a *= gamma_i;
        gamma_i *= gamma;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_levinson_ar1() {
        // Autocorrelation of an AR(1) process with rho = 0.5
        let rho = 0.5f32;
        let ac: Vec<f32> = (0..=4).map(|k| rho.powi(k)).collect();

        let result = levinson_durbin::<4>(&ac);

        assert_relative_eq!(result.coefficients[0], -rho, epsilon = 1e-6);
        for &a in &result.coefficients[1..] {
            assert_relative_eq!(a, 0.0, epsilon = 1e-6);
        }
        assert_relative_eq!(result.reflection[0], -rho, epsilon = 1e-6);
        assert_relative_eq!(result.error, 1.0 - rho * rho, epsilon = 1e-6);
    }

    #[test]
    fn test_levinson_stops_at_30db() {
        let rho = 0.9999f32;
        let ac: Vec<f32> = (0..=4).map(|k| rho.powi(k)).collect();

        let result = levinson_durbin::<4>(&ac);

        assert!(result.error < 0.001);
        assert_relative_eq!(result.coefficients[0], -rho, epsilon = 1e-4);
        // Remaining stages were never run
        assert_eq!(&result.reflection[1..], &[0.0; 3]);
    }

    #[test]
    fn test_levinson_silent_input() {
        let result = levinson_durbin::<3>(&[0.0; 4]);
        assert_eq!(result.coefficients, [0.0; 3]);
        assert_eq!(result.reflection, [0.0; 3]);
        assert_eq!(result.error, 0.0);
    }

    #[test]
    fn test_levinson_white_noise_has_no_prediction() {
        let mut ac = [0.0f32; 9];
        ac[0] = 2.0;
        let result = levinson_durbin::<8>(&ac);
        assert_eq!(result.coefficients, [0.0; 8]);
        assert_relative_eq!(result.error, 2.0);
    }

    #[test]
    fn test_lpc_weighting() {
        let mut lpc = [1.0f32, 1.0, 1.0];
        lpc_weighting(&mut lpc, 0.5);
        assert_relative_eq!(lpc[0], 0.5);
        assert_relative_eq!(lpc[1], 0.25);
        assert_relative_eq!(lpc[2], 0.125);
    }
}
