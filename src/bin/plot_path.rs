extern crate clap;

use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use error_stack::{Report, ResultExt};
use log::info;

use polysimp::points::read_points_from_path;
use polysimp::view::SvgView;
use polysimp::PolyLine;

#[derive(Debug)]
struct AppError;

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("plot_path failed")
    }
}

impl std::error::Error for AppError {}

/// Plot a CSV file of points to SVG.
#[derive(Parser)]
struct Opts {
    /// Path to CSV file of points
    csv: PathBuf,

    /// Window width, in pixels
    #[clap(default_value = "300")]
    width: u32,

    /// Window height, in pixels
    #[clap(default_value = "300")]
    height: u32,

    /// Output SVG file
    #[clap(long, default_value = "plot.svg")]
    svg: PathBuf,

    /// Stroke color of the path
    #[clap(long, default_value = "blue")]
    color: String,
}

fn main() -> Result<(), Report<AppError>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts: Opts = Opts::parse();

    let path: PolyLine = read_points_from_path(&opts.csv)
        .change_context(AppError)?
        .into_iter()
        .collect();

    let view = SvgView::new(&path, opts.width, opts.height, 20).change_context(AppError)?;
    view.plot(&opts.color);
    view.save(&opts.svg).change_context(AppError)?;
    info!("Plotted {} points to {}", path.len(), opts.svg.display());

    Ok(())
}
