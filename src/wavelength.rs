//! Guided and quarter-wavelength calculations.

use crate::constants::SPEED_OF_LIGHT;
use crate::errors::MicrostripError;
use crate::math::Scalar;

/// Guided wavelength λg in meters: `c / (sqrt(ε_eff) · f)`.
///
/// # Errors
///
/// [`MicrostripError::Domain`] if `freq_hz` or `eeff` is non-positive.
pub fn guided_wavelength(freq_hz: Scalar, eeff: Scalar) -> Result<Scalar, MicrostripError> {
    if freq_hz <= 0.0 {
        return Err(MicrostripError::Domain(format!(
            "frequency must be positive, got {freq_hz}"
        )));
    }
    if eeff <= 0.0 {
        return Err(MicrostripError::Domain(format!(
            "effective permittivity must be positive, got {eeff}"
        )));
    }
    let v = SPEED_OF_LIGHT / eeff.sqrt();
    let lambda = v / freq_hz;
    tracing::debug!(freq_hz, eeff, lambda, "guided wavelength");
    Ok(lambda)
}

/// Quarter-wave length λg/4 in meters, exactly one fourth of
/// [`guided_wavelength`].
///
/// # Errors
///
/// [`MicrostripError::Domain`] if `freq_hz` or `eeff` is non-positive.
pub fn quarter_wavelength(freq_hz: Scalar, eeff: Scalar) -> Result<Scalar, MicrostripError> {
    Ok(guided_wavelength(freq_hz, eeff)? / 4.0)
}
