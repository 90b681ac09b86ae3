//! Parameter sweep utilities for batch evaluation.
//!
//! Every formula in this crate is a pure function, so sweeping a parameter is
//! just mapping it over a sample grid; these helpers generate the grids and
//! collect typed points.

use crate::errors::MicrostripError;
use crate::math::Scalar;
use crate::wavelength::guided_wavelength;
use crate::wheeler::z0;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop` (Hz).
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start_hz > 0.0 && stop_hz > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// Impedance of one geometry sample in a width sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthPoint {
    /// Trace width (same unit as the substrate height used in the sweep).
    pub width: Scalar,
    /// Characteristic impedance Z0 in ohms.
    pub z0: Scalar,
}

/// Guided wavelength at one frequency sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyPoint {
    /// Frequency in Hz.
    pub freq_hz: Scalar,
    /// Guided wavelength λg in meters.
    pub lambda_g: Scalar,
}

/// Evaluates Z0 across trace widths for a fixed substrate.
///
/// # Errors
///
/// Fails on the first width for which [`z0`] fails.
pub fn sweep_impedance_over_width<I>(
    er: Scalar,
    h: Scalar,
    widths: I,
) -> Result<Vec<WidthPoint>, MicrostripError>
where
    I: IntoIterator<Item = Scalar>,
{
    widths
        .into_iter()
        .map(|w| z0(er, w, h).map(|z| WidthPoint { width: w, z0: z }))
        .collect()
}

/// Evaluates the guided wavelength across frequencies for a fixed ε_eff.
///
/// # Errors
///
/// Fails on the first frequency for which [`guided_wavelength`] fails.
pub fn sweep_guided_wavelength<I>(
    eeff: Scalar,
    freqs_hz: I,
) -> Result<Vec<FrequencyPoint>, MicrostripError>
where
    I: IntoIterator<Item = Scalar>,
{
    freqs_hz
        .into_iter()
        .map(|f| {
            guided_wavelength(f, eeff).map(|lambda_g| FrequencyPoint {
                freq_hz: f,
                lambda_g,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn logspace_hits_endpoints() {
        let v = logspace_hz(1.0e6, 1.0e9, 4);
        assert_eq!(v.len(), 4);
        assert_relative_eq!(v[0], 1.0e6, max_relative = 1.0e-12);
        assert_relative_eq!(v[3], 1.0e9, max_relative = 1.0e-12);
    }

    #[test]
    fn width_sweep_is_decreasing_in_wide_regime() {
        let points = sweep_impedance_over_width(4.4, 1.0, linspace(1.1, 5.0, 16)).unwrap();
        assert_eq!(points.len(), 16);
        for pair in points.windows(2) {
            assert!(pair[1].z0 < pair[0].z0);
        }
    }

    #[test]
    fn width_sweep_propagates_domain_errors() {
        let result = sweep_impedance_over_width(4.4, 1.0, [0.5, -0.5]);
        assert!(matches!(result, Err(MicrostripError::Domain(_))));
    }

    #[test]
    fn wavelength_sweep_matches_single_evaluations() {
        let freqs = logspace_hz(1.0e8, 1.0e10, 8);
        let points = sweep_guided_wavelength(2.5, freqs.iter().copied()).unwrap();
        for p in points {
            let single = guided_wavelength(p.freq_hz, 2.5).unwrap();
            assert_relative_eq!(p.lambda_g, single, epsilon = 1.0e-15);
        }
    }
}
