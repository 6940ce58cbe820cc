//! Error types for the template engine

use thiserror::Error;

/// Errors raised when parsing caller-supplied identifiers.
///
/// Resolution and rendering themselves are total and never return this.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown document family: {0}")]
    UnknownFamily(String),
}
