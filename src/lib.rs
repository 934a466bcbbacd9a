pub mod geometry;
pub mod listener;
pub mod polyline;
pub mod douglas_peucker;
pub mod utils;
pub mod points;
pub mod transform;
pub mod trace;
pub mod view;

pub use geometry::{deviation, normal_intercept, Point};
pub use listener::{EventKind, Listener, SegmentOptions, UnknownEvent};
pub use polyline::{IndexError, PolyLine};
