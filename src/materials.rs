//! Substrate material models.

use crate::errors::MicrostripError;
use crate::math::Scalar;

/// Dielectric substrate described by its relative permittivity εr.
///
/// Wheeler's blend formula is fitted for `εr ≥ 1`; construction through
/// [`Substrate::new`] enforces that domain. The raw formula functions in
/// [`crate::wheeler`] stay permissive for callers that knowingly
/// extrapolate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Substrate {
    relative_permittivity: Scalar,
}

impl Substrate {
    /// Creates a substrate with the given relative permittivity.
    ///
    /// # Errors
    ///
    /// [`MicrostripError::Domain`] if `relative_permittivity < 1`.
    pub fn new(relative_permittivity: Scalar) -> Result<Self, MicrostripError> {
        if relative_permittivity < 1.0 {
            return Err(MicrostripError::Domain(format!(
                "relative permittivity must be at least 1, got {relative_permittivity}"
            )));
        }
        Ok(Self {
            relative_permittivity,
        })
    }

    /// Free space (εr = 1).
    #[must_use]
    pub const fn air() -> Self {
        Self {
            relative_permittivity: 1.0,
        }
    }

    /// FR-4 glass epoxy laminate (εr ≈ 4.4 at 1 GHz).
    #[must_use]
    pub const fn fr4() -> Self {
        Self {
            relative_permittivity: 4.4,
        }
    }

    /// Rogers RO4003C hydrocarbon ceramic laminate (εr ≈ 3.38).
    #[must_use]
    pub const fn rogers_ro4003c() -> Self {
        Self {
            relative_permittivity: 3.38,
        }
    }

    /// Alumina ceramic (εr ≈ 9.8).
    #[must_use]
    pub const fn alumina() -> Self {
        Self {
            relative_permittivity: 9.8,
        }
    }

    /// Relative permittivity εr.
    #[must_use]
    pub const fn relative_permittivity(&self) -> Scalar {
        self.relative_permittivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_in_domain() {
        for s in [
            Substrate::air(),
            Substrate::fr4(),
            Substrate::rogers_ro4003c(),
            Substrate::alumina(),
        ] {
            assert!(s.relative_permittivity() >= 1.0);
        }
    }

    #[test]
    fn rejects_sub_unity_permittivity() {
        assert!(matches!(
            Substrate::new(0.9),
            Err(MicrostripError::Domain(_))
        ));
        assert!(Substrate::new(1.0).is_ok());
    }
}
