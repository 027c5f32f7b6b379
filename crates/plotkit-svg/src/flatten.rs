//! Curve flattening and work-area mapping.
//!
//! Flattens lyon paths into polylines at the requested tolerance,
//! scales viewBox coordinates onto the target output size, and flips
//! the y axis about the drawing's vertical center so the strokes
//! arrive in the machine's bottom-left-origin orientation. User-
//! requested mirrors are applied last, about the target rectangle.

use lyon::algorithms::path::iterator::PathIterator;
use lyon::path::{Event, Path};
use plotkit_core::{Point, Stroke};

use crate::view_box::ViewBox;
use crate::IngestOptions;

/// Flatten paths to strokes mapped into the target rectangle.
pub fn flatten_to_strokes(
    paths: &[Path],
    view_box: &ViewBox,
    options: &IngestOptions,
) -> Vec<Stroke> {
    let scale_x = options.target_width / view_box.width;
    let scale_y = options.target_height / view_box.height;

    let mut strokes = Vec::new();
    for path in paths {
        collect_polylines(path, options.tolerance as f32, |polyline| {
            if polyline.len() >= 2 {
                strokes.push(
                    polyline
                        .into_iter()
                        .map(|(x, y)| {
                            Point::new(
                                (x as f64 - view_box.min_x) * scale_x,
                                (y as f64 - view_box.min_y) * scale_y,
                            )
                        })
                        .collect(),
                );
            }
        });
    }

    flip_vertically(&mut strokes);
    if options.flip_vertical {
        map_points(&mut strokes, |p| {
            Point::new(p.x, options.target_height - p.y)
        });
    }
    if options.flip_horizontal {
        map_points(&mut strokes, |p| {
            Point::new(options.target_width - p.x, p.y)
        });
    }
    strokes
}

/// Walk a flattened path, handing each subpath's polyline to `emit`.
fn collect_polylines<F: FnMut(Vec<(f32, f32)>)>(path: &Path, tolerance: f32, mut emit: F) {
    let mut current: Vec<(f32, f32)> = Vec::new();
    let mut subpath_start = (0.0, 0.0);

    for event in path.iter().flattened(tolerance) {
        match event {
            Event::Begin { at } => {
                subpath_start = (at.x, at.y);
                current.push((at.x, at.y));
            }
            Event::Line { to, .. } => current.push((to.x, to.y)),
            Event::End { close, .. } => {
                if close {
                    current.push(subpath_start);
                }
                if !current.is_empty() {
                    emit(std::mem::take(&mut current));
                }
            }
            _ => {}
        }
    }
    if !current.is_empty() {
        emit(current);
    }
}

/// Mirror all strokes about the drawing's vertical center.
///
/// SVG's y axis points down; the machine's points up. Mirroring about
/// the occupied bounds keeps the drawing inside the work area without
/// any further translation.
fn flip_vertically(strokes: &mut [Stroke]) {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for stroke in strokes.iter() {
        for p in stroke.points() {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
    }
    if min_y > max_y {
        return;
    }

    let pivot = min_y + max_y;
    map_points(strokes, |p| Point::new(p.x, pivot - p.y));
}

fn map_points<F: Fn(&Point) -> Point>(strokes: &mut [Stroke], f: F) {
    for stroke in strokes.iter_mut() {
        *stroke = stroke.points().iter().map(&f).collect();
    }
}
