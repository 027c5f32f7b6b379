//! Bounds clipping.
//!
//! Splits a stroke into maximal contiguous in-bounds runs. Points
//! outside the work area are discarded, and a surviving run of fewer
//! than two points cannot be drawn, so it is dropped too.

use plotkit_core::{Point, Stroke, WorkArea};

/// Clip a stroke against the work area.
///
/// Walks the points in order, accumulating consecutive in-bounds
/// points; an out-of-bounds point closes the current run. The bounds
/// predicate is inclusive on all four edges. Empty input yields empty
/// output and an already in-bounds stroke comes back as a single run,
/// unchanged.
pub fn clip_stroke(stroke: &Stroke, work_area: &WorkArea) -> Vec<Stroke> {
    let mut runs = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for &point in stroke.points() {
        if work_area.contains(point) {
            current.push(point);
        } else if !current.is_empty() {
            close_run(&mut runs, &mut current);
        }
    }
    close_run(&mut runs, &mut current);

    runs
}

fn close_run(runs: &mut Vec<Stroke>, current: &mut Vec<Point>) {
    if current.len() >= 2 {
        runs.push(Stroke::new(std::mem::take(current)));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> WorkArea {
        WorkArea::new(100.0, 100.0)
    }

    fn stroke(points: &[(f64, f64)]) -> Stroke {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_in_bounds_stroke_unchanged() {
        let input = stroke(&[(10.0, 10.0), (50.0, 10.0), (50.0, 50.0)]);
        let runs = clip_stroke(&input, &area());
        assert_eq!(runs, vec![input]);
    }

    #[test]
    fn test_clipping_is_idempotent() {
        let input = stroke(&[(10.0, 10.0), (50.0, 10.0), (150.0, 10.0), (60.0, 10.0)]);
        let once: Vec<Stroke> = clip_stroke(&input, &area());
        let twice: Vec<Stroke> = once
            .iter()
            .flat_map(|s| clip_stroke(s, &area()))
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trailing_point_out_of_bounds() {
        let input = stroke(&[(10.0, 10.0), (50.0, 10.0), (150.0, 10.0)]);
        let runs = clip_stroke(&input, &area());
        assert_eq!(runs, vec![stroke(&[(10.0, 10.0), (50.0, 10.0)])]);
    }

    #[test]
    fn test_alternating_runs_split() {
        let input = stroke(&[
            (10.0, 10.0),
            (20.0, 10.0),
            (200.0, 10.0), // gap
            (30.0, 10.0),
            (40.0, 10.0),
            (50.0, 10.0),
        ]);
        let runs = clip_stroke(&input, &area());
        assert_eq!(
            runs,
            vec![
                stroke(&[(10.0, 10.0), (20.0, 10.0)]),
                stroke(&[(30.0, 10.0), (40.0, 10.0), (50.0, 10.0)]),
            ]
        );
    }

    #[test]
    fn test_single_point_runs_dropped() {
        let input = stroke(&[
            (200.0, 10.0),
            (10.0, 10.0), // lone survivor
            (200.0, 10.0),
            (20.0, 20.0),
            (30.0, 30.0),
        ]);
        let runs = clip_stroke(&input, &area());
        assert_eq!(runs, vec![stroke(&[(20.0, 20.0), (30.0, 30.0)])]);
    }

    #[test]
    fn test_boundary_points_are_in_bounds() {
        let input = stroke(&[(0.0, 0.0), (100.0, 100.0)]);
        let runs = clip_stroke(&input, &area());
        assert_eq!(runs.len(), 1);
    }

    #[test]
    fn test_empty_and_all_out_of_bounds() {
        assert!(clip_stroke(&Stroke::default(), &area()).is_empty());
        let input = stroke(&[(-1.0, 0.0), (200.0, 0.0)]);
        assert!(clip_stroke(&input, &area()).is_empty());
    }
}
