use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use error_stack::{Report, ResultExt};
use log::debug;

use crate::geometry::Point;

#[derive(Debug)]
pub struct PointSourceError;

impl fmt::Display for PointSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Could not read points")
    }
}

impl std::error::Error for PointSourceError {}

fn parse_field(s: &str, line_num: u64, name: &str) -> Result<f64, Report<PointSourceError>> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            Report::new(PointSourceError)
                .attach_printable(format!("Failed parsing {} {:?} at line {}", name, s, line_num))
        })
}

/// Eastings and northings from the first two columns. Records with a
/// non-numeric first column (headers) or fewer than two columns are
/// skipped.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Point>, Report<PointSourceError>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for record in rdr.records() {
        let record = record.change_context(PointSourceError)?;
        let line_num = record.position().map(|pos| pos.line()).unwrap_or(0);

        if record.len() < 2 {
            continue;
        }
        let easting = match parse_field(&record[0], line_num, "easting") {
            Ok(v) => v,
            Err(_) => {
                debug!("Skipping non-numeric record at line {}", line_num);
                continue;
            }
        };
        let northing = parse_field(&record[1], line_num, "northing")?;
        points.push(Point::new(easting, northing));
    }

    Ok(points)
}

pub fn read_points_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, Report<PointSourceError>> {
    let path = path.as_ref();
    let file = File::open(path)
        .change_context(PointSourceError)
        .attach_printable_lazy(|| format!("opening {}", path.display()))?;
    read_points(file).attach_printable_lazy(|| format!("in {}", path.display()))
}
