//! # Plotkit SVG
//!
//! The vector-ingestion side of the pipeline: turns raw SVG markup
//! into the plain ordered strokes the motion compiler consumes.
//!
//! Responsibilities end at geometry: curves are flattened to
//! polylines with a caller-supplied tolerance, coordinates are mapped
//! from viewBox units onto the requested output size, and the y axis
//! is flipped to the machine's orientation. Clipping and ordering
//! belong to the compiler.

pub mod error;
pub mod flatten;
pub mod path_data;
pub mod view_box;

use lyon::path::Path;
use plotkit_core::Stroke;
use regex::Regex;
use tracing::debug;

pub use error::{SvgError, SvgResult};
pub use view_box::ViewBox;

/// Ingestion parameters.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Output width in millimeters the viewBox is scaled to.
    pub target_width: f64,
    /// Output height in millimeters the viewBox is scaled to.
    pub target_height: f64,
    /// Curve flattening tolerance, in viewBox units.
    pub tolerance: f64,
    /// Mirror the output top-to-bottom, on top of the axis-orientation
    /// flip that is always applied.
    pub flip_vertical: bool,
    /// Mirror the output left-to-right.
    pub flip_horizontal: bool,
}

/// Extract, flatten, and map every `<path>` in an SVG document.
///
/// Returns the strokes in document order, already scaled to the
/// target size and vertically flipped, ready for the compiler.
pub fn strokes_from_svg(svg: &str, options: &IngestOptions) -> SvgResult<Vec<Stroke>> {
    let view_box = view_box::extract_view_box(svg)?;
    let paths = collect_paths(svg)?;

    debug!(
        paths = paths.len(),
        view_box = ?view_box,
        "parsed svg document"
    );

    let strokes = flatten::flatten_to_strokes(&paths, &view_box, options);
    if strokes.is_empty() {
        return Err(SvgError::NoDrawableContent);
    }
    Ok(strokes)
}

/// Pull each `<path>` element's `d` attribute and build lyon paths.
fn collect_paths(svg: &str) -> SvgResult<Vec<Path>> {
    let re_path = Regex::new(r#"<path\s+[^>]*>"#).expect("invalid path regex");
    let re_d = Regex::new(r#"\bd\s*=\s*["']([^"']+)["']"#).expect("invalid d regex");

    let mut paths = Vec::new();
    for element in re_path.find_iter(svg) {
        if let Some(caps) = re_d.captures(element.as_str()) {
            paths.push(path_data::build_path(&caps[1])?);
        }
    }

    if paths.is_empty() {
        return Err(SvgError::NoDrawableContent);
    }
    Ok(paths)
}
