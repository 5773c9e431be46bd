//! Registrar provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "transip")]
mod transip;

#[cfg(feature = "transip")]
pub use transip::TransipProvider;
