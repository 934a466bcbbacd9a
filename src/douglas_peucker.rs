use log::{debug, info};

use crate::geometry::{deviation, Point};
use crate::listener::{EventKind, SegmentOptions};
use crate::polyline::PolyLine;
use crate::utils::argmax;

/// Interior point of `points[start..=end]` farthest from the chord
/// `points[start]`-`points[end]`, as `(index, deviation)`. The lowest
/// index wins a tie.
fn farthest_point(points: &[Point], start: usize, end: usize) -> Option<(usize, f64)> {
    let (p1, p2) = (&points[start], &points[end]);
    argmax(points[start + 1..end].iter().map(|p| deviation(p1, p2, p)))
        .map(|(offset, dist)| (start + 1 + offset, dist))
}

/// Ramer-Douglas-Peucker over a slice of points.
///
/// Ranges are kept on an explicit stack rather than the call stack, left
/// half on top, so segments are visited (and reported to `notify`) in the
/// same order as the textbook recursion: a range's trial first, then its
/// whole left half, then its right half. Kept points therefore come out
/// left to right and each accepted segment only adds its end point.
pub fn douglas_peucker<F>(points: &[Point], tolerance: f64, mut notify: F) -> Vec<Point>
where
    F: FnMut(EventKind, &SegmentOptions),
{
    let (first, last) = match (points.first(), points.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Vec::new(),
    };

    if points.len() < 3 {
        notify(EventKind::FinalApproxSeg, &SegmentOptions::new(first, last));
        return points.to_vec();
    }

    let mut result = vec![first];
    let mut ranges = vec![(0, points.len() - 1)];

    while let Some((start, end)) = ranges.pop() {
        let seg = SegmentOptions::new(points[start], points[end]);

        if end - start < 2 {
            notify(EventKind::FinalApproxSeg, &seg);
            result.push(points[end]);
            continue;
        }

        notify(EventKind::TrialApprox, &seg);

        match farthest_point(points, start, end) {
            Some((far, max_dev)) if max_dev > tolerance || max_dev.is_nan() || tolerance.is_nan() => {
                ranges.push((far, end));
                ranges.push((start, far));
            }
            _ => {
                debug!("Accepted segment {} - {} ({} points dropped)", seg.p1, seg.p2, end - start - 1);
                notify(EventKind::FinalApproxSeg, &seg);
                result.push(points[end]);
            }
        }
    }

    result
}

impl PolyLine {
    /// Simplified copy of this line: every dropped point lies within
    /// `tolerance` of the segment that replaced it.
    ///
    /// Listeners registered on `self` see a `trial_approx` for each range
    /// considered and a `final_approx_seg` for each segment kept. The
    /// returned line has no listeners.
    pub fn approximate(&self, tolerance: f64) -> PolyLine {
        let simplified = douglas_peucker(self.points(), tolerance, |event, options| {
            self.notify_all(event, options)
        });
        info!(
            "Simplified {} -> {} points at tolerance {}",
            self.len(),
            simplified.len(),
            tolerance
        );
        PolyLine::from(simplified)
    }
}
