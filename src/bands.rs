//! Perceptual band mapping
//!
//! Bins are grouped into `NB_BANDS` overlapping triangular bands whose edges
//! follow an approximately auditory spacing: 100 Hz steps up to 900 Hz, then
//! widening towards 8 kHz. A bin at fractional position `f` between edges
//! `b[i]` and `b[i+1]` contributes `1 - f` to band `i` and `f` to band `i + 1`.

use crate::{BandEnergies, BandGains, Spectrum, FREQ_SIZE, NB_BANDS};

/// Band edges in bins at 50 Hz per bin
/// (0 100 200 ... 900 1050 1200 1350 1550 1750 2000 2300 2600 2950 3350 3850
/// 4400 5050 5850 6800 8000 Hz)
const BAND_EDGES: [usize; NB_BANDS] = [
    0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 21, 24, 27, 31, 35, 40, 46, 52, 59, 67, 77, 88, 101, 117,
    136, 160,
];

const _: () = assert!(BAND_EDGES[NB_BANDS - 1] < FREQ_SIZE);

/// Band edge table, in bins
pub fn band_edges() -> &'static [usize; NB_BANDS] {
    &BAND_EDGES
}

/// Triangular accumulation of a per-bin quantity into bands
///
/// The two edge bands only see one side of a triangle, so they are doubled.
fn accumulate_bands(per_bin: impl Fn(usize) -> f32) -> BandEnergies {
    let mut sum = [0.0f32; NB_BANDS];
    for i in 0..NB_BANDS - 1 {
        let band_size = BAND_EDGES[i + 1] - BAND_EDGES[i];
        for j in 0..band_size {
            let frac = j as f32 / band_size as f32;
            let tmp = per_bin(BAND_EDGES[i] + j);
            sum[i] += (1.0 - frac) * tmp;
            sum[i + 1] += frac * tmp;
        }
    }
    sum[0] *= 2.0;
    sum[NB_BANDS - 1] *= 2.0;
    sum
}

/// Band energies of a spectrum (triangular-weighted `|X|²`)
pub fn compute_band_energy(spectrum: &Spectrum) -> BandEnergies {
    let x = spectrum.bins();
    accumulate_bands(|k| x[k].re * x[k].re + x[k].im * x[k].im)
}

/// Band cross-correlation between two spectra (triangular-weighted `Re(X·P*)`)
pub fn compute_band_corr(spectrum: &Spectrum, reference: &Spectrum) -> BandEnergies {
    let x = spectrum.bins();
    let p = reference.bins();
    accumulate_bands(|k| x[k].re * p[k].re + x[k].im * p[k].im)
}

/// Expand band values to a per-bin curve by linear interpolation
///
/// Bins at or above the last band edge (the Nyquist bin) are zero.
pub fn interp_band_gain(band_e: &BandEnergies) -> BandGains {
    let mut g = [0.0f32; FREQ_SIZE];
    for i in 0..NB_BANDS - 1 {
        let band_size = BAND_EDGES[i + 1] - BAND_EDGES[i];
        for j in 0..band_size {
            let frac = j as f32 / band_size as f32;
            g[BAND_EDGES[i] + j] = (1.0 - frac) * band_e[i] + frac * band_e[i + 1];
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex32;

    fn unit_spectrum() -> Spectrum {
        Spectrum::from_bins([Complex32::new(0.6, 0.8); FREQ_SIZE])
    }

    #[test]
    fn test_band_edges_strictly_increasing() {
        for pair in band_edges().windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert_eq!(band_edges()[0], 0);
        assert_eq!(band_edges()[NB_BANDS - 1], FREQ_SIZE - 1);
    }

    #[test]
    fn test_unit_spectrum_band_weights() {
        let e = compute_band_energy(&unit_spectrum());

        // Edge bands: one-sided triangle, doubled
        assert_relative_eq!(e[0], (BAND_EDGES[1] + 1) as f32, epsilon = 1e-4);
        assert_relative_eq!(
            e[NB_BANDS - 1],
            (BAND_EDGES[NB_BANDS - 1] - BAND_EDGES[NB_BANDS - 2] - 1) as f32,
            epsilon = 1e-4
        );
        // Interior bands: average width of the two adjacent intervals
        for i in 1..NB_BANDS - 1 {
            let lower = BAND_EDGES[i] - BAND_EDGES[i - 1];
            let upper = BAND_EDGES[i + 1] - BAND_EDGES[i];
            assert_relative_eq!(e[i], (lower + upper) as f32 / 2.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_band_energy_conserves_power() {
        let mut e = compute_band_energy(&unit_spectrum());
        e[0] /= 2.0;
        e[NB_BANDS - 1] /= 2.0;
        let total: f32 = e.iter().sum();
        assert_relative_eq!(total, BAND_EDGES[NB_BANDS - 1] as f32, epsilon = 1e-3);
    }

    #[test]
    fn test_band_corr_with_self_is_energy() {
        let mut spectrum = Spectrum::zeros();
        for (k, c) in spectrum.bins_mut().iter_mut().enumerate() {
            *c = Complex32::new((k as f32 * 0.37).sin(), (k as f32 * 0.11).cos());
        }
        let energy = compute_band_energy(&spectrum);
        let corr = compute_band_corr(&spectrum, &spectrum);
        for (a, b) in energy.iter().zip(corr.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_band_corr_of_quadrature_spectra_is_zero() {
        let x = Spectrum::from_bins([Complex32::new(1.0, 0.0); FREQ_SIZE]);
        let p = Spectrum::from_bins([Complex32::new(0.0, 1.0); FREQ_SIZE]);
        assert!(compute_band_corr(&x, &p).iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_interp_band_gain_hits_band_edges() {
        let mut band_e = [0.0f32; NB_BANDS];
        for (i, e) in band_e.iter_mut().enumerate() {
            *e = 1.0 + i as f32;
        }
        let g = interp_band_gain(&band_e);

        for i in 0..NB_BANDS - 1 {
            assert_relative_eq!(g[BAND_EDGES[i]], band_e[i]);
        }
        // Halfway through band 9 (bins 18..21): one third of the way to band 10
        assert_relative_eq!(g[19], 10.0 + 1.0 / 3.0, epsilon = 1e-5);
        assert_eq!(g[FREQ_SIZE - 1], 0.0);
    }
}
