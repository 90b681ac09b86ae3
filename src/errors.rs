//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum MicrostripError {
    /// Raised when an input lies outside a formula's domain of validity.
    #[error("domain error: {0}")]
    Domain(String),
    /// Raised when an intermediate value would make a downstream step
    /// non-physical, e.g. a square root of a non-positive permittivity.
    #[error("numeric error: {0}")]
    Numeric(String),
}
