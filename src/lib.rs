#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and frequency helpers.
pub mod constants;
/// Shared numerical primitives.
pub mod math;
/// Wheeler's closed-form approximation for microstrip lines.
pub mod wheeler;
/// Guided and quarter-wavelength calculations.
pub mod wavelength;
/// Substrate material models (relative permittivity).
pub mod materials;
/// Microstrip line descriptor combining substrate and geometry.
pub mod microstrip;
/// Parameter sweep builders for batch evaluation.
pub mod sweep;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
