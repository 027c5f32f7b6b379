//! Travel-minimizing stroke ordering.
//!
//! A greedy nearest-neighbor heuristic over stroke endpoints: strokes
//! are reordered, and reversed where that shortens the hop from the
//! previous stroke's end. This approximates the open-path TSP; the
//! only guarantees are determinism and O(n²) comparisons.

use plotkit_core::{Point, Stroke};

/// Reorder and orient strokes to reduce total travel distance.
///
/// The first stroke out is the one whose start point lies nearest the
/// machine origin, kept in its original orientation. Each following
/// stroke is the not-yet-used one with the nearest endpoint to the
/// current cursor; it is reversed only when its end point is strictly
/// nearer than the best available start point. All ties fall back to
/// original input order, so the result is stable and deterministic.
pub fn order_strokes(strokes: Vec<Stroke>) -> Vec<Stroke> {
    if strokes.len() <= 1 {
        return strokes;
    }

    // Comparisons use squared distances; ordering and strictness are
    // the same as for true Euclidean distances.
    let origin = Point::new(0.0, 0.0);
    let n = strokes.len();

    let mut seed = 0;
    let mut seed_dist = f64::INFINITY;
    for (i, stroke) in strokes.iter().enumerate() {
        let Some(start) = stroke.first() else { continue };
        let d = origin.distance_squared(start);
        if d < seed_dist {
            seed_dist = d;
            seed = i;
        }
    }

    let mut used = vec![false; n];
    let mut ordered = Vec::with_capacity(n);
    let mut cursor = strokes[seed].last().unwrap_or(origin);
    used[seed] = true;
    ordered.push(strokes[seed].clone());

    for _ in 1..n {
        let mut best_start: Option<(f64, usize)> = None;
        let mut best_end: Option<(f64, usize)> = None;

        for (i, stroke) in strokes.iter().enumerate() {
            if used[i] {
                continue;
            }
            let (Some(start), Some(end)) = (stroke.first(), stroke.last()) else {
                continue;
            };
            let ds = cursor.distance_squared(start);
            if best_start.is_none_or(|(d, _)| ds < d) {
                best_start = Some((ds, i));
            }
            let de = cursor.distance_squared(end);
            if best_end.is_none_or(|(d, _)| de < d) {
                best_end = Some((de, i));
            }
        }

        // Degenerate strokes (no endpoints) are appended at the end
        // unchanged so nothing is lost.
        let Some((start_dist, start_idx)) = best_start else {
            break;
        };

        // Reversal only wins a strict comparison; a tie keeps the
        // forward orientation.
        let reverse = matches!(best_end, Some((end_dist, _)) if end_dist < start_dist);
        let next = if reverse {
            let (_, end_idx) = best_end.unwrap_or((start_dist, start_idx));
            used[end_idx] = true;
            strokes[end_idx].reversed()
        } else {
            used[start_idx] = true;
            strokes[start_idx].clone()
        };

        cursor = next.last().unwrap_or(cursor);
        ordered.push(next);
    }

    for (i, stroke) in strokes.into_iter().enumerate() {
        if !used[i] {
            ordered.push(stroke);
        }
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(points: &[(f64, f64)]) -> Stroke {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn travel_distance(strokes: &[Stroke]) -> f64 {
        strokes
            .windows(2)
            .filter_map(|pair| Some(pair[0].last()?.distance_to(pair[1].first()?)))
            .sum()
    }

    #[test]
    fn test_zero_and_one_stroke_unchanged() {
        assert!(order_strokes(vec![]).is_empty());
        let single = vec![stroke(&[(5.0, 5.0), (6.0, 6.0)])];
        assert_eq!(order_strokes(single.clone()), single);
    }

    #[test]
    fn test_seed_is_nearest_start_to_origin() {
        let far = stroke(&[(50.0, 50.0), (60.0, 50.0)]);
        let near = stroke(&[(1.0, 1.0), (20.0, 1.0)]);
        let ordered = order_strokes(vec![far.clone(), near.clone()]);
        assert_eq!(ordered[0], near);
        assert_eq!(ordered[1], far);
    }

    #[test]
    fn test_reverses_when_end_is_strictly_closer() {
        // Second stroke runs back toward the first one's end, so its
        // end point is the nearer hop and it gets flipped.
        let first = stroke(&[(0.0, 0.0), (10.0, 0.0)]);
        let second = stroke(&[(30.0, 0.0), (11.0, 0.0)]);
        let ordered = order_strokes(vec![first.clone(), second.clone()]);
        assert_eq!(ordered[1], second.reversed());
    }

    #[test]
    fn test_tie_keeps_forward_orientation() {
        // Start and end of the candidate are equidistant from the
        // cursor; forward orientation must win.
        let first = stroke(&[(0.0, 0.0), (10.0, 0.0)]);
        let second = stroke(&[(15.0, 5.0), (15.0, -5.0)]);
        let ordered = order_strokes(vec![first, second.clone()]);
        assert_eq!(ordered[1], second);
    }

    #[test]
    fn test_tie_between_strokes_prefers_input_order() {
        let first = stroke(&[(0.0, 0.0), (10.0, 0.0)]);
        let a = stroke(&[(20.0, 0.0), (30.0, 0.0)]);
        let b = stroke(&[(20.0, 0.0), (30.0, 10.0)]);
        let ordered = order_strokes(vec![first.clone(), b.clone(), a.clone()]);
        assert_eq!(ordered[1], b);
        assert_eq!(ordered[2], a);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let input = vec![
            stroke(&[(40.0, 40.0), (50.0, 40.0)]),
            stroke(&[(5.0, 5.0), (15.0, 5.0)]),
            stroke(&[(30.0, 5.0), (16.0, 5.0)]),
            stroke(&[(30.0, 5.0), (16.0, 6.0)]),
        ];
        assert_eq!(order_strokes(input.clone()), order_strokes(input));
    }

    #[test]
    fn test_ordering_does_not_increase_travel() {
        // Deliberately shuffled fixture; the heuristic should beat
        // the input ordering here.
        let input = vec![
            stroke(&[(90.0, 90.0), (80.0, 90.0)]),
            stroke(&[(0.0, 0.0), (10.0, 0.0)]),
            stroke(&[(85.0, 85.0), (70.0, 85.0)]),
            stroke(&[(12.0, 0.0), (20.0, 0.0)]),
        ];
        let ordered = order_strokes(input.clone());
        assert!(travel_distance(&ordered) <= travel_distance(&input));
    }
}
