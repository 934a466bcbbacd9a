use std::fmt;
use std::rc::Rc;

use crate::geometry::Point;
use crate::listener::{EventKind, Listener, SegmentOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub index: isize,
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolyLine index {} out of range for length {}", self.index, self.len)
    }
}

impl std::error::Error for IndexError {}

/// Ordered, appendable sequence of points.
///
/// Two polylines are equal when they hold equal points in the same order;
/// registered listeners play no part in equality.
#[derive(Clone, Default)]
pub struct PolyLine {
    points: Vec<Point>,
    listeners: Vec<Rc<dyn Listener>>,
}

impl PolyLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`. Negative indices count back from the end, so
    /// `-1` is the last point.
    pub fn get(&self, index: isize) -> Result<Point, IndexError> {
        let len = self.points.len();
        let err = IndexError { index, len };
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs()).ok_or(err)?
        } else {
            index as usize
        };
        self.points.get(resolved).copied().ok_or(err)
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
        self.points.iter().copied()
    }

    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn add_listener(&mut self, listener: Rc<dyn Listener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Tell every listener, in registration order, about a segment.
    pub fn notify_all(&self, event: EventKind, options: &SegmentOptions) {
        for listener in &self.listeners {
            listener.notify(event, options);
        }
    }
}

impl PartialEq for PolyLine {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl fmt::Debug for PolyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolyLine(")?;
        f.debug_list().entries(self.points.iter()).finish()?;
        write!(f, ")")
    }
}

impl From<Vec<Point>> for PolyLine {
    fn from(points: Vec<Point>) -> Self {
        Self { points, listeners: Vec::new() }
    }
}

impl FromIterator<Point> for PolyLine {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        PolyLine::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Point> for PolyLine {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PolyLine {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn pt(x: i32, y: i32) -> Point {
        Point::from((x, y))
    }

    #[test]
    fn test_list_protocol() {
        let mut pl = PolyLine::new();
        assert_eq!(pl.len(), 0);
        assert!(pl.is_empty());
        pl.append(pt(0, 0));
        assert_eq!(pl.len(), 1);
        assert_eq!(pl.get(0), Ok(pt(0, 0)));
        pl.append(pt(2, 3));
        assert_eq!(pl.len(), 2);
        assert_eq!(pl.get(0), Ok(pt(0, 0)));
        assert_eq!(pl.get(1), Ok(pt(2, 3)));
        assert_eq!(pl.get(1), pl.get(-1));
        assert_eq!(pl.get(0), pl.get(-2));
        assert_eq!(pl.get(3), Err(IndexError { index: 3, len: 2 }));
        assert_eq!(pl.get(-3), Err(IndexError { index: -3, len: 2 }));

        let mut count = 0;
        for p in &pl {
            assert_eq!(Ok(p), pl.get(count));
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_index_at_length_is_out_of_range() {
        let pl: PolyLine = vec![pt(1, 1), pt(2, 2)].into();
        assert!(pl.get(2).is_err());
        assert!(pl.get(isize::MIN).is_err());
        assert!(PolyLine::new().get(0).is_err());
        assert!(PolyLine::new().get(-1).is_err());
    }

    #[test]
    fn test_index_error_message() {
        let err = PolyLine::new().get(4).unwrap_err();
        assert_eq!(err.to_string(), "PolyLine index 4 out of range for length 0");
    }

    #[test]
    fn test_iteration_is_restartable() {
        let pl: PolyLine = [(0, 0), (1, 1), (2, 4)].into_iter().map(Point::from).collect();
        let a: Vec<Point> = pl.iter().collect();
        let b: Vec<Point> = pl.iter().collect();
        assert_eq!(a, b);
        assert_eq!(a, pl.points());
    }

    #[test]
    fn test_equality() {
        let a: PolyLine = vec![pt(0, 0), pt(5, 5)].into();
        let mut b = PolyLine::new();
        b.append(pt(0, 0));
        assert_ne!(a, b);
        b.append(pt(5, 5));
        assert_eq!(a, b);
        b.append(pt(6, 6));
        assert_ne!(a, b);

        let reversed: PolyLine = vec![pt(5, 5), pt(0, 0)].into();
        assert_ne!(a, reversed);
    }

    struct Counter {
        seen: RefCell<Vec<(usize, EventKind)>>,
        id: usize,
        log: Rc<RefCell<Vec<usize>>>,
    }

    impl Listener for Counter {
        fn notify(&self, event: EventKind, _options: &SegmentOptions) {
            self.seen.borrow_mut().push((self.id, event));
            self.log.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn test_equality_ignores_listeners() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut a: PolyLine = vec![pt(0, 0), pt(5, 5)].into();
        a.add_listener(Rc::new(Counter { seen: RefCell::new(Vec::new()), id: 0, log }));
        let b: PolyLine = vec![pt(0, 0), pt(5, 5)].into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_notify_all_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::new(Counter { seen: RefCell::new(Vec::new()), id: 1, log: log.clone() });
        let second = Rc::new(Counter { seen: RefCell::new(Vec::new()), id: 2, log: log.clone() });

        let mut pl = PolyLine::new();
        pl.add_listener(first.clone());
        pl.add_listener(second.clone());
        assert_eq!(pl.listener_count(), 2);

        let opts = SegmentOptions::new(pt(0, 0), pt(1, 1));
        pl.notify_all(EventKind::TrialApprox, &opts);
        pl.notify_all(EventKind::FinalApproxSeg, &opts);

        assert_eq!(*log.borrow(), vec![1, 2, 1, 2]);
        assert_eq!(
            *first.seen.borrow(),
            vec![(1, EventKind::TrialApprox), (1, EventKind::FinalApproxSeg)]
        );
    }

    #[test]
    fn test_debug_format() {
        let pl: PolyLine = vec![pt(0, 0), pt(-1, 2)].into();
        assert_eq!(format!("{:?}", pl), "PolyLine([Point(0, 0), Point(-1, 2)])");
    }
}
