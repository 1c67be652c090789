use std::path::PathBuf;

use anyhow::Context as _;
use pubfig_data::{
    comparison::compare_all_pairs,
    observations::{ObservationTable, SAMPLES_PER_GROUP},
    seeded_rng,
};
use pubfig_render::{
    Figure as _,
    box_plot::{BoxPlotChart, FILE_NAME},
    style::FigureStyle,
};
use pubfig_stats::descriptive::DescriptiveStats;
use tracing::info;

use super::FigureArg;

/// Samples the groups, tests every pair and draws the annotated box plot.
///
/// The observations come from a generator seeded with `--seed`, so the same
/// seed always yields the same figure.
pub(crate) fn generate(arg: &FigureArg, style: &FigureStyle) -> anyhow::Result<PathBuf> {
    let table = ObservationTable::sample(&mut seeded_rng(arg.seed), SAMPLES_PER_GROUP)?;
    for group in table.groups() {
        if let Some(stats) = DescriptiveStats::new(table.values(group)) {
            info!(
                %group,
                n = stats.count,
                mean = stats.mean,
                std_dev = stats.std_dev,
                "group summary"
            );
        }
    }

    let comparisons = compare_all_pairs(&table)?;
    for comparison in &comparisons {
        info!(
            first = %comparison.first,
            second = %comparison.second,
            t = comparison.test.statistic,
            df = comparison.test.degrees_of_freedom,
            p = comparison.p_value(),
            "t-test"
        );
    }

    let path = arg.output_path(FILE_NAME);
    BoxPlotChart::new(&table, &comparisons, style)
        .save_svg(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "box plot written");
    Ok(path)
}
