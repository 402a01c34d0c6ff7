//! Error types for the engine.
//!
//! Validation itself never fails: invalid input is reported in a
//! `ValidationReport`. Only building an engine from bad configuration does.

use idcred_core::CoreError;
use thiserror::Error;

/// Errors that can occur while setting up an [`Engine`](crate::Engine).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration rejected by the core primitives.
    #[error("configuration error: {0}")]
    Config(#[from] CoreError),
}

/// Result type for engine setup.
pub type Result<T> = std::result::Result<T, EngineError>;
