use log::debug;

use crate::geometry::Point;

/// Lower-left and upper-right corners of the box enclosing `points`.
pub fn bbox<I>(points: I) -> Option<(Point, Point)>
where
    I: IntoIterator<Item = Point>,
{
    points.into_iter().fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((ll, ur)) => Some((
            Point::new(ll.x().min(p.x()), ll.y().min(p.y())),
            Point::new(ur.x().max(p.x()), ur.y().max(p.y())),
        )),
    })
}

/// Scale factor along one axis, or `None` when the model has no extent
/// on it.
fn axis_scale(to_lo: f64, to_hi: f64, from_lo: f64, from_hi: f64) -> Option<f64> {
    let span = from_hi - from_lo;
    if span == 0.0 {
        None
    } else {
        Some((to_hi - to_lo) / span)
    }
}

/// Translate and scale points from the box `from_ll..from_ur` into the
/// box `to_ll..to_ur`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    sfx: f64,
    sfy: f64,
    to_ll: Point,
    from_ll: Point,
}

impl Transform {
    /// `uniform` keeps x and y scaled alike so shapes are not distorted.
    /// `y_flip` is for targets whose y axis grows downward (windows),
    /// while the model's grows upward (north).
    pub fn new(
        from_ll: Point,
        from_ur: Point,
        to_ll: Point,
        to_ur: Point,
        uniform: bool,
        y_flip: bool,
    ) -> Self {
        let (to_ll, to_ur) = if y_flip {
            (Point::new(to_ll.x(), to_ur.y()), Point::new(to_ur.x(), to_ll.y()))
        } else {
            (to_ll, to_ur)
        };

        let sx = axis_scale(to_ll.x(), to_ur.x(), from_ll.x(), from_ur.x());
        let sy = axis_scale(to_ll.y(), to_ur.y(), from_ll.y(), from_ur.y());
        let sign_x = if to_ur.x() < to_ll.x() { -1.0 } else { 1.0 };
        let sign_y = if to_ur.y() < to_ll.y() { -1.0 } else { 1.0 };

        // a flat axis borrows the magnitude of the other one
        let (mut sfx, mut sfy) = match (sx, sy) {
            (Some(x), Some(y)) => (x, y),
            (Some(x), None) => (x, sign_y * x.abs()),
            (None, Some(y)) => (sign_x * y.abs(), y),
            (None, None) => (sign_x, sign_y),
        };
        debug!("Scale factor x {}, Scale factor y {}", sfx, sfy);

        if uniform && y_flip {
            sfx = sfx.min(-sfy);
            sfy = -sfx;
        } else if uniform {
            sfx = sfx.min(sfy);
            sfy = sfx;
        }
        debug!("Adjusted scale factor x {}, Scale factor y {}", sfx, sfy);

        Self { sfx, sfy, to_ll, from_ll }
    }

    pub fn scale(&self) -> (f64, f64) {
        (self.sfx, self.sfy)
    }

    pub fn transform_pt(&self, pt: &Point) -> Point {
        let x_scaled = self.to_ll.x() + self.sfx * (pt.x() - self.from_ll.x());
        let y_scaled = self.to_ll.y() + self.sfy * (pt.y() - self.from_ll.y());
        Point::new(x_scaled, y_scaled)
    }

    pub fn transform<I>(&self, points: I) -> Vec<Point>
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().map(|p| self.transform_pt(&p)).collect()
    }
}
