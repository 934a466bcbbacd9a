use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use error_stack::{Report, ResultExt};
use log::debug;
use svg::node::element::{Line, Polyline, Rectangle};
use svg::Document;

use crate::geometry::Point;
use crate::listener::{EventKind, Listener, SegmentOptions};
use crate::polyline::PolyLine;
use crate::transform::{bbox, Transform};

pub const TRIAL_COLOR: &str = "grey";
pub const FINAL_COLOR: &str = "red";

#[derive(Debug)]
pub struct ViewError;

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Could not render view")
    }
}

impl std::error::Error for ViewError {}

/// Something drawn, already in window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Stroke {
    Path { points: Vec<Point>, color: String },
    Segment { p1: Point, p2: Point, color: String },
}

pub struct SvgView {
    width: u32,
    height: u32,
    path: Vec<Point>,
    tx: Transform,
    strokes: RefCell<Vec<Stroke>>,
}

impl SvgView {
    /// A view of `path` in a `width` x `height` window. Model coordinates
    /// are scaled uniformly into the window less `margin` on every side,
    /// with north up.
    pub fn new(path: &PolyLine, width: u32, height: u32, margin: u32) -> Result<Self, Report<ViewError>> {
        let (from_ll, from_ur) = bbox(path.iter())
            .ok_or_else(|| Report::new(ViewError).attach_printable("cannot view an empty path"))?;
        if 2 * u64::from(margin) >= u64::from(width) || 2 * u64::from(margin) >= u64::from(height) {
            return Err(Report::new(ViewError).attach_printable(format!(
                "margin {} leaves no room in a {}x{} window",
                margin, width, height
            )));
        }
        let tx = Transform::new(
            from_ll,
            from_ur,
            Point::new(margin as f64, margin as f64),
            Point::new(width.saturating_sub(margin) as f64, height.saturating_sub(margin) as f64),
            true,
            true,
        );
        debug!("Will plot in area 0..{}, 0..{}", width, height);
        Ok(Self {
            width,
            height,
            path: path.points().to_vec(),
            tx,
            strokes: RefCell::new(Vec::new()),
        })
    }

    /// Build a view and register it as a listener on `path`.
    pub fn attach(path: &mut PolyLine, width: u32, height: u32, margin: u32) -> Result<Rc<Self>, Report<ViewError>> {
        let view = Rc::new(Self::new(path, width, height, margin)?);
        path.add_listener(view.clone());
        Ok(view)
    }

    /// Draw the original path.
    pub fn plot(&self, color: &str) {
        let points = self.tx.transform(self.path.iter().copied());
        self.strokes.borrow_mut().push(Stroke::Path { points, color: color.to_string() });
    }

    pub fn draw_segment(&self, p1: &Point, p2: &Point, color: &str) {
        let stroke = Stroke::Segment {
            p1: self.tx.transform_pt(p1),
            p2: self.tx.transform_pt(p2),
            color: color.to_string(),
        };
        self.strokes.borrow_mut().push(stroke);
    }

    pub fn strokes(&self) -> Vec<Stroke> {
        self.strokes.borrow().clone()
    }

    pub fn document(&self) -> Document {
        let mut document = Document::new()
            .set("viewBox", (0, 0, self.width, self.height))
            .set("width", self.width)
            .set("height", self.height);

        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", "white");
        document = document.add(background);

        for stroke in self.strokes.borrow().iter() {
            document = match stroke {
                Stroke::Path { points, color } => {
                    let coords = points
                        .iter()
                        .map(|p| format!("{},{}", p.x(), p.y()))
                        .collect::<Vec<_>>()
                        .join(" ");
                    document.add(
                        Polyline::new()
                            .set("fill", "none")
                            .set("stroke", color.as_str())
                            .set("stroke-width", 1)
                            .set("points", coords),
                    )
                }
                Stroke::Segment { p1, p2, color } => document.add(
                    Line::new()
                        .set("x1", p1.x())
                        .set("y1", p1.y())
                        .set("x2", p2.x())
                        .set("y2", p2.y())
                        .set("stroke", color.as_str())
                        .set("stroke-width", 1),
                ),
            };
        }

        document
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Report<ViewError>> {
        let path = path.as_ref();
        svg::save(path, &self.document())
            .change_context(ViewError)
            .attach_printable_lazy(|| format!("writing {}", path.display()))
    }
}

impl Listener for SvgView {
    fn notify(&self, event: EventKind, options: &SegmentOptions) {
        let color = match event {
            EventKind::TrialApprox => TRIAL_COLOR,
            EventKind::FinalApproxSeg => FINAL_COLOR,
        };
        self.draw_segment(&options.p1, &options.p2, color);
    }
}
