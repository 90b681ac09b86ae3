//! Convenience re-exports for microstrip calculations.

pub use crate::constants::*;
pub use crate::errors::MicrostripError;
pub use crate::materials::Substrate;
pub use crate::math::Scalar;
pub use crate::microstrip::Microstrip;
pub use crate::sweep::{
    linspace, logspace_hz, sweep_guided_wavelength, sweep_impedance_over_width, FrequencyPoint,
    WidthPoint,
};
pub use crate::wavelength::{guided_wavelength, quarter_wavelength};
pub use crate::wheeler::{epsilon_eff, f_wh, z0, TraceRegime};
