use std::path::PathBuf;

use anyhow::Context as _;
use pubfig_data::{seeded_rng, time_series::TimeSeries};
use pubfig_render::{
    Figure as _,
    dual_axis::{DualAxisChart, FILE_NAME},
    style::FigureStyle,
};
use tracing::info;

use super::FigureArg;

/// Draws the temperature/strain chart and returns the path it was written to.
pub(crate) fn generate(arg: &FigureArg, style: &FigureStyle) -> anyhow::Result<PathBuf> {
    let series = match arg.noise_seed {
        Some(seed) => TimeSeries::generate(&mut seeded_rng(seed)),
        None => TimeSeries::generate(&mut rand::rng()),
    };
    info!(
        points = series.len(),
        noise_seed = ?arg.noise_seed,
        "generated time series"
    );

    let path = arg.output_path(FILE_NAME);
    DualAxisChart::new(&series, style)
        .save_svg(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "dual-axis chart written");
    Ok(path)
}
