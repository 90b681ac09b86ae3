//! Wheeler's closed-form approximation for microstrip lines.
//!
//! The approximation is piecewise in the width-to-height ratio `w/h`: narrow
//! traces (`w/h ≤ 1`) behave quasi-coaxially while wide traces approach a
//! parallel-plate geometry, and a single formula diverges at one of the two
//! extremes. Both branches share the shape factor `F(W/H)`, which estimates
//! the fraction of the field contained within the substrate.

use std::f64::consts::PI;

use crate::constants::FREE_SPACE_IMPEDANCE;
use crate::errors::MicrostripError;
use crate::math::Scalar;

/// Field-geometry regime of a trace relative to the substrate height.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceRegime {
    /// `w/h ≤ 1`: quasi-coaxial field distribution.
    Narrow,
    /// `w/h > 1`: parallel-plate-like field distribution.
    Wide,
}

impl TraceRegime {
    /// Selects the regime for a width-to-height ratio.
    #[must_use]
    pub fn classify(wh: Scalar) -> Self {
        if wh <= 1.0 {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

pub(crate) fn check_geometry(w: Scalar, h: Scalar) -> Result<(), MicrostripError> {
    if w <= 0.0 {
        return Err(MicrostripError::Domain(format!(
            "trace width must be positive, got {w}"
        )));
    }
    if h <= 0.0 {
        return Err(MicrostripError::Domain(format!(
            "substrate height must be positive, got {h}"
        )));
    }
    Ok(())
}

/// Computes Wheeler's shape factor `F(W/H)`.
///
/// `F` stays within `(0, 1]` for any positive geometry; the narrow branch
/// adds a `0.04·(1 − w/h)²` correction that vanishes at `w/h = 1`, keeping
/// the factor continuous across the regime seam.
///
/// # Errors
///
/// [`MicrostripError::Domain`] if `w` or `h` is non-positive.
pub fn f_wh(w: Scalar, h: Scalar) -> Result<Scalar, MicrostripError> {
    check_geometry(w, h)?;
    let wh = w / h;
    let hw = h / w;
    let base = 1.0 / (1.0 + 12.0 * hw).sqrt();
    let f = match TraceRegime::classify(wh) {
        TraceRegime::Narrow => base + 0.04 * (1.0 - wh).powi(2),
        TraceRegime::Wide => base,
    };
    tracing::debug!(w, h, wh, hw, f, "shape factor");
    Ok(f)
}

/// Computes the effective dielectric constant `ε_eff`.
///
/// Linear blend between free-space and substrate permittivity weighted by the
/// shape factor: `ε_eff = (εr + 1 + (εr − 1)·F) / 2`. Monotone non-decreasing
/// in `er` for fixed geometry.
///
/// # Errors
///
/// [`MicrostripError::Domain`] if `w` or `h` is non-positive.
pub fn epsilon_eff(er: Scalar, w: Scalar, h: Scalar) -> Result<Scalar, MicrostripError> {
    let f = f_wh(w, h)?;
    let eeff = 0.5 * (er + 1.0 + (er - 1.0) * f);
    tracing::debug!(er, w, h, f, eeff, "effective permittivity");
    Ok(eeff)
}

/// Computes the characteristic impedance `Z0` in ohms.
///
/// Narrow traces use the quasi-coaxial logarithmic form, wide traces the
/// parallel-plate rational form. The model's valid domain is `er ≥ 1`;
/// smaller values are accepted as extrapolation as long as the intermediate
/// effective permittivity stays positive.
///
/// # Errors
///
/// [`MicrostripError::Domain`] if `w` or `h` is non-positive, and
/// [`MicrostripError::Numeric`] if the intermediate `ε_eff` is non-positive
/// (adversarial `er` below −1), which would otherwise surface as a NaN from
/// the square root.
pub fn z0(er: Scalar, w: Scalar, h: Scalar) -> Result<Scalar, MicrostripError> {
    check_geometry(w, h)?;
    let wh = w / h;
    let hw = h / w;
    let eeff = epsilon_eff(er, w, h)?;
    if eeff <= 0.0 {
        return Err(MicrostripError::Numeric(format!(
            "effective permittivity {eeff} is non-positive for er = {er}"
        )));
    }
    let z = match TraceRegime::classify(wh) {
        TraceRegime::Narrow => {
            FREE_SPACE_IMPEDANCE / (2.0 * PI * eeff.sqrt()) * (8.0 * h / w + 0.25 * wh).ln()
        }
        TraceRegime::Wide => {
            FREE_SPACE_IMPEDANCE / (eeff.sqrt() * (wh + 2.46 - 0.49 * hw + (1.0 - wh).powi(6)))
        }
    };
    tracing::debug!(er, w, h, wh, eeff, z, "characteristic impedance");
    Ok(z)
}
