extern crate clap;

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use error_stack::{Report, ResultExt};
use log::{info, warn};

use polysimp::points::read_points_from_path;
use polysimp::trace::EventTrace;
use polysimp::view::SvgView;
use polysimp::PolyLine;

#[derive(Debug)]
struct AppError;

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("simplify_path failed")
    }
}

impl std::error::Error for AppError {}

/// Simplify a path of planar (e.g. UTM) points with Ramer-Douglas-Peucker
/// and print the kept points as CSV.
#[derive(Parser)]
struct Opts {
    /// CSV file with easting,northing in the first two columns
    csv: PathBuf,

    /// Largest allowed deviation of a dropped point, in model units
    #[clap(short, long, default_value = "25.0")]
    tolerance: f64,

    /// Write every trial/final event as JSON lines to this file
    #[clap(long)]
    trace: Option<PathBuf>,

    /// Render the path and the simplification steps to this SVG file
    #[clap(long)]
    svg: Option<PathBuf>,

    /// SVG width, in pixels
    #[clap(long, default_value = "300")]
    width: u32,

    /// SVG height, in pixels
    #[clap(long, default_value = "300")]
    height: u32,

    /// Blank border around the drawing, in pixels
    #[clap(long, default_value = "20")]
    margin: u32,
}

fn main() -> Result<(), Report<AppError>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts: Opts = Opts::parse();

    let points = read_points_from_path(&opts.csv).change_context(AppError)?;
    let mut path: PolyLine = points.into_iter().collect();
    info!("Read {} points from {}", path.len(), opts.csv.display());

    let view = match &opts.svg {
        Some(_) if !path.is_empty() => {
            let view = SvgView::attach(&mut path, opts.width, opts.height, opts.margin)
                .change_context(AppError)?;
            view.plot("blue");
            Some(view)
        }
        Some(svg_path) => {
            warn!("Nothing to draw, not writing {}", svg_path.display());
            None
        }
        None => None,
    };

    let trace = opts.trace.as_ref().map(|_| {
        let trace = Rc::new(EventTrace::new());
        path.add_listener(trace.clone());
        trace
    });

    let simplified = path.approximate(opts.tolerance);

    let mut writer = csv::Writer::from_writer(io::stdout());
    for pt in &simplified {
        writer
            .write_record([pt.x().to_string(), pt.y().to_string()])
            .change_context(AppError)?;
    }
    writer.flush().change_context(AppError)?;

    if let (Some(view), Some(svg_path)) = (&view, &opts.svg) {
        view.save(svg_path).change_context(AppError)?;
        info!("Wrote {}", svg_path.display());
    }

    if let (Some(trace), Some(trace_path)) = (&trace, &opts.trace) {
        if trace.is_empty() {
            warn!("No events recorded, {} will be empty", trace_path.display());
        }
        let file = File::create(trace_path)
            .change_context(AppError)
            .attach_printable_lazy(|| format!("creating {}", trace_path.display()))?;
        trace.write_jsonl(BufWriter::new(file)).change_context(AppError)?;
        info!("Wrote {} events to {}", trace.len(), trace_path.display());
    }

    Ok(())
}
