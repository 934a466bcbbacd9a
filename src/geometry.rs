//! All coordinates are in a planar model coordinate system whose unit is
//! the same in x and y (UTM eastings/northings, metres, pixels). Distances
//! computed here are meaningless for latitude/longitude.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

/// Cartesian coordinates. Immutable once built.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.hypot(dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x as f64, y as f64)
    }
}

/// Shortest distance from `p` to the infinite line through `p1`,`p2`.
///
/// A zero-length reference segment has no direction, so the distance
/// falls back to the plain distance from `p` to `p1`.
pub fn deviation(p1: &Point, p2: &Point, p: &Point) -> f64 {
    if p1 == p2 {
        return p.distance_to(p1);
    }
    let intercept = normal_intercept(p1, p2, p);
    debug!("Computing distance from {} to {}", p, intercept);
    p.distance_to(&intercept)
}

/// The point at which the line through `p1` and `p2` meets the normal
/// dropped onto it from `p`. Colinear inputs are fine.
///
/// `p1` and `p2` must differ for the result to mean anything; with equal
/// endpoints the vertical rule applies and `(p1.x, p.y)` comes back.
pub fn normal_intercept(p1: &Point, p2: &Point, p: &Point) -> Point {
    debug!("Normal intercept {}-{} from {}", p1, p2, p);

    // slope or normal slope is undefined for vertical and horizontal
    // segments, but the intersections are trivial there
    if p2.x == p1.x {
        return Point::new(p1.x, p.y);
    } else if p2.y == p1.y {
        return Point::new(p.x, p1.y);
    }

    let seg_slope = (p2.y - p1.y) / (p2.x - p1.x);
    let normal_slope = -1.0 / seg_slope;

    // y = mx + b
    let seg_b = p1.y - seg_slope * p1.x;
    let normal_b = p.y - normal_slope * p.x;

    let x_intersect = (seg_b - normal_b) / (normal_slope - seg_slope);
    let y_intersect = seg_slope * x_intersect + seg_b;

    let intercept = Point::new(x_intersect, y_intersect);
    debug!("Intercept at {}", intercept);
    intercept
}
