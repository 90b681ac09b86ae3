//! Microstrip line descriptor and derived electrical parameters.

use crate::errors::MicrostripError;
use crate::materials::Substrate;
use crate::math::Scalar;
use crate::wavelength;
use crate::wheeler;

/// A microstrip: a trace of width `w` above a ground plane, separated by a
/// substrate of height `h`.
///
/// Width and height share an arbitrary length unit; it cancels in every
/// derived quantity. Wavelength results are in meters regardless.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Microstrip {
    substrate: Substrate,
    width: Scalar,
    height: Scalar,
}

impl Microstrip {
    /// Creates a microstrip descriptor.
    ///
    /// # Errors
    ///
    /// [`MicrostripError::Domain`] if `width` or `height` is non-positive.
    pub fn new(
        substrate: Substrate,
        width: Scalar,
        height: Scalar,
    ) -> Result<Self, MicrostripError> {
        wheeler::check_geometry(width, height)?;
        Ok(Self {
            substrate,
            width,
            height,
        })
    }

    /// Substrate this trace sits on.
    #[must_use]
    pub const fn substrate(&self) -> Substrate {
        self.substrate
    }

    /// Trace width.
    #[must_use]
    pub const fn width(&self) -> Scalar {
        self.width
    }

    /// Substrate height.
    #[must_use]
    pub const fn height(&self) -> Scalar {
        self.height
    }

    /// Width-to-height ratio `w/h`.
    #[must_use]
    pub fn width_ratio(&self) -> Scalar {
        self.width / self.height
    }

    /// Field-geometry regime of this trace.
    #[must_use]
    pub fn regime(&self) -> wheeler::TraceRegime {
        wheeler::TraceRegime::classify(self.width_ratio())
    }

    /// Wheeler shape factor `F(W/H)`.
    ///
    /// # Errors
    ///
    /// Propagates [`MicrostripError`] from the underlying formula.
    pub fn shape_factor(&self) -> Result<Scalar, MicrostripError> {
        wheeler::f_wh(self.width, self.height)
    }

    /// Effective dielectric constant ε_eff.
    ///
    /// # Errors
    ///
    /// Propagates [`MicrostripError`] from the underlying formula.
    pub fn effective_permittivity(&self) -> Result<Scalar, MicrostripError> {
        wheeler::epsilon_eff(
            self.substrate.relative_permittivity(),
            self.width,
            self.height,
        )
    }

    /// Characteristic impedance Z0 in ohms.
    ///
    /// # Errors
    ///
    /// Propagates [`MicrostripError`] from the underlying formula.
    pub fn characteristic_impedance(&self) -> Result<Scalar, MicrostripError> {
        wheeler::z0(
            self.substrate.relative_permittivity(),
            self.width,
            self.height,
        )
    }

    /// Guided wavelength λg in meters at `freq_hz`.
    ///
    /// # Errors
    ///
    /// Propagates [`MicrostripError`] from the underlying formulas.
    pub fn guided_wavelength(&self, freq_hz: Scalar) -> Result<Scalar, MicrostripError> {
        wavelength::guided_wavelength(freq_hz, self.effective_permittivity()?)
    }

    /// Quarter-wave length λg/4 in meters at `freq_hz`.
    ///
    /// # Errors
    ///
    /// Propagates [`MicrostripError`] from the underlying formulas.
    pub fn quarter_wavelength(&self, freq_hz: Scalar) -> Result<Scalar, MicrostripError> {
        wavelength::quarter_wavelength(freq_hz, self.effective_permittivity()?)
    }

    /// Electrical length in degrees of a `length_m`-meter section at
    /// `freq_hz`. A quarter-wave section measures 90°.
    ///
    /// # Errors
    ///
    /// Propagates [`MicrostripError`] from the underlying formulas, plus
    /// [`MicrostripError::Domain`] for a negative `length_m`.
    pub fn electrical_length_deg(
        &self,
        freq_hz: Scalar,
        length_m: Scalar,
    ) -> Result<Scalar, MicrostripError> {
        if length_m < 0.0 {
            return Err(MicrostripError::Domain(format!(
                "section length must be non-negative, got {length_m}"
            )));
        }
        Ok(360.0 * length_m / self.guided_wavelength(freq_hz)?)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::wheeler::TraceRegime;

    #[test]
    fn methods_agree_with_free_functions() {
        let line = Microstrip::new(Substrate::fr4(), 0.5, 1.0).unwrap();
        assert_eq!(
            line.shape_factor().unwrap(),
            wheeler::f_wh(0.5, 1.0).unwrap()
        );
        assert_eq!(
            line.effective_permittivity().unwrap(),
            wheeler::epsilon_eff(4.4, 0.5, 1.0).unwrap()
        );
        assert_eq!(
            line.characteristic_impedance().unwrap(),
            wheeler::z0(4.4, 0.5, 1.0).unwrap()
        );
    }

    #[test]
    fn regime_follows_width_ratio() {
        let narrow = Microstrip::new(Substrate::fr4(), 0.5, 1.0).unwrap();
        let wide = Microstrip::new(Substrate::fr4(), 2.0, 1.0).unwrap();
        assert_eq!(narrow.regime(), TraceRegime::Narrow);
        assert_eq!(wide.regime(), TraceRegime::Wide);
    }

    #[test]
    fn quarter_wave_section_is_ninety_degrees() {
        let line = Microstrip::new(Substrate::rogers_ro4003c(), 1.2, 0.8).unwrap();
        let lq = line.quarter_wavelength(2.4e9).unwrap();
        let theta = line.electrical_length_deg(2.4e9, lq).unwrap();
        assert_relative_eq!(theta, 90.0, epsilon = 1.0e-9);
    }

    #[test]
    fn rejects_bad_geometry() {
        assert!(matches!(
            Microstrip::new(Substrate::fr4(), 0.0, 1.0),
            Err(MicrostripError::Domain(_))
        ));
        assert!(matches!(
            Microstrip::new(Substrate::fr4(), 1.0, -1.0),
            Err(MicrostripError::Domain(_))
        ));
    }
}
