use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Segment under consideration, may still be subdivided.
    #[serde(rename = "trial_approx")]
    TrialApprox,
    /// Segment kept in the simplified line, no further refinement.
    #[serde(rename = "final_approx_seg")]
    FinalApproxSeg,
}

impl EventKind {
    pub const TRIAL_APPROX: &'static str = "trial_approx";
    pub const FINAL_APPROX_SEG: &'static str = "final_approx_seg";

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::TrialApprox => Self::TRIAL_APPROX,
            EventKind::FinalApproxSeg => Self::FINAL_APPROX_SEG,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event name outside the two the simplifier produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEvent(pub String);

impl fmt::Display for UnknownEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown event {}", self.0)
    }
}

impl std::error::Error for UnknownEvent {}

impl FromStr for EventKind {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::TRIAL_APPROX => Ok(EventKind::TrialApprox),
            Self::FINAL_APPROX_SEG => Ok(EventKind::FinalApproxSeg),
            other => Err(UnknownEvent(other.to_string())),
        }
    }
}

/// Payload of every event: the two endpoints of the segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentOptions {
    pub p1: Point,
    pub p2: Point,
}

impl SegmentOptions {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
}

/// Anything that wants to watch a `PolyLine` being simplified.
///
/// Listeners are shared (`Rc`) with the line they watch, so `notify`
/// takes `&self`; implementors that record or draw keep their state
/// behind a `RefCell`.
pub trait Listener {
    fn notify(&self, event: EventKind, options: &SegmentOptions);
}
