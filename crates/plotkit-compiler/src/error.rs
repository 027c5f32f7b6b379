//! Error types for the compiler crate.

use plotkit_core::ConfigError;
use thiserror::Error;

/// Errors that can occur when compiling strokes to a motion program.
///
/// The compiler itself is total over well-formed input; the only
/// failure path is a configuration precondition violation.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The plot configuration failed validation.
    #[error("Invalid plot configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for compilation.
pub type CompileResult<T> = Result<T, CompileError>;
