//! Error types for SVG ingestion.

use thiserror::Error;

/// Errors that can occur while turning SVG markup into strokes.
#[derive(Error, Debug)]
pub enum SvgError {
    /// The viewBox attribute exists but does not parse as four reals.
    #[error("Malformed viewBox: {0}")]
    MalformedViewBox(String),

    /// A path's `d` attribute could not be interpreted.
    #[error("Malformed path data: {0}")]
    MalformedPathData(String),

    /// The document contains no drawable path geometry.
    #[error("SVG contains no drawable content")]
    NoDrawableContent,
}

/// Result type alias for SVG ingestion.
pub type SvgResult<T> = Result<T, SvgError>;
