//! Temperature and strain over time on one chart with two vertical axes.
//!
//! Temperature uses the left axis and strain the right one; each axis and
//! its tick labels take the color of their series, and each series gets its
//! own legend in the matching upper corner of the plot area.

use std::ops::Range;

use plotters::{
    coord::{Shift, cartesian::Cartesian2d, types::RangedCoordf64},
    element::{EmptyElement, PathElement, Rectangle, Text},
    prelude::{ChartBuilder, DrawingArea, DrawingBackend, LineSeries},
    style::{Color as _, RGBColor},
};
use pubfig_data::time_series::TimeSeries;
use pubfig_stats::descriptive::DescriptiveStats;

use crate::{
    Figure, RenderError,
    style::{FigureStyle, format_tick},
};

/// Output file name used by the CLI.
pub const FILE_NAME: &str = "fig1_dual_axis.svg";

pub const TIME_LABEL: &str = "Time (s)";
pub const TEMPERATURE_LABEL: &str = "Temperature (°C)";
pub const STRAIN_LABEL: &str = "Strain (%)";
pub const TEMPERATURE_LEGEND: &str = "Temperature";
pub const STRAIN_LEGEND: &str = "Strain";

/// Fraction of a series' span added above and below it.
const RANGE_PADDING: f64 = 0.05;
/// Half-height used when every value of a series is equal.
const FLAT_PADDING: f64 = 0.5;

/// Distance of a legend box from the plot corner, in pixels.
const LEGEND_INSET: i32 = 10;
/// Length of the line sample inside a legend, in pixels.
const LEGEND_SWATCH: i32 = 24;
/// Inner spacing of a legend box, in pixels.
const LEGEND_PADDING: i32 = 6;

type PlotCoord = Cartesian2d<RangedCoordf64, RangedCoordf64>;

#[derive(Debug, Clone, Copy)]
enum Corner {
    UpperLeft,
    UpperRight,
}

/// Dual-axis line chart of a [`TimeSeries`].
#[derive(Debug, Clone, Copy)]
pub struct DualAxisChart<'a> {
    series: &'a TimeSeries,
    style: &'a FigureStyle,
}

impl<'a> DualAxisChart<'a> {
    #[must_use]
    pub fn new(series: &'a TimeSeries, style: &'a FigureStyle) -> Self {
        Self { series, style }
    }
}

impl Figure for DualAxisChart<'_> {
    fn size(&self) -> (u32, u32) {
        self.style.dual_axis_size
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError>
    where
        DB: DrawingBackend,
    {
        let style = self.style;
        let series = self.series;

        let x_range = domain(&series.time)?;
        let temperature_range = padded_range("temperature", &series.temperature)?;
        let strain_range = padded_range("strain", &series.strain)?;
        tracing::debug!(
            ?x_range,
            ?temperature_range,
            ?strain_range,
            points = series.len(),
            "dual-axis ranges"
        );

        root.fill(&style.background)?;
        let mut chart = ChartBuilder::on(root)
            .margin(style.margin)
            .x_label_area_size(style.label_area)
            .y_label_area_size(style.label_area)
            .right_y_label_area_size(style.label_area)
            .build_cartesian_2d(x_range.clone(), temperature_range.clone())?
            .set_secondary_coord(x_range.clone(), strain_range);

        // Horizontal axis in the foreground color.
        chart
            .configure_mesh()
            .disable_mesh()
            .y_labels(0)
            .x_desc(TIME_LABEL)
            .x_label_formatter(&format_tick)
            .axis_desc_style(style.axis_label_font(&style.foreground))
            .x_label_style(style.tick_label_font(&style.foreground))
            .axis_style(style.foreground)
            .draw()?;

        // Left axis in the temperature color.
        chart
            .configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .x_labels(0)
            .y_desc(TEMPERATURE_LABEL)
            .y_label_formatter(&format_tick)
            .axis_desc_style(style.axis_label_font(&style.temperature_color))
            .y_label_style(style.tick_label_font(&style.temperature_color))
            .axis_style(style.foreground)
            .draw()?;

        chart
            .configure_secondary_axes()
            .x_labels(0)
            .y_desc(STRAIN_LABEL)
            .y_label_formatter(&format_tick)
            .axis_desc_style(style.axis_label_font(&style.strain_color))
            .label_style(style.tick_label_font(&style.strain_color))
            .axis_style(style.foreground)
            .draw()?;

        chart.draw_series(LineSeries::new(
            series.temperature_points(),
            style.temperature_color.stroke_width(style.line_width),
        ))?;
        chart.draw_secondary_series(LineSeries::new(
            series.strain_points(),
            style.strain_color.stroke_width(style.line_width),
        ))?;

        let plot = chart.plotting_area();
        draw_legend(
            plot,
            (x_range.start, temperature_range.end),
            Corner::UpperLeft,
            TEMPERATURE_LEGEND,
            style.temperature_color,
            style,
        )?;
        draw_legend(
            plot,
            (x_range.end, temperature_range.end),
            Corner::UpperRight,
            STRAIN_LEGEND,
            style.strain_color,
            style,
        )?;
        Ok(())
    }
}

/// Exact extent of `time`, widened only when it is a single instant.
fn domain(time: &[f64]) -> Result<Range<f64>, RenderError> {
    let stats = summarize("time", time)?;
    if stats.max > stats.min {
        Ok(stats.min..stats.max)
    } else {
        Ok(stats.min - FLAT_PADDING..stats.max + FLAT_PADDING)
    }
}

/// Extent of `values` with [`RANGE_PADDING`] of the span added on each side.
fn padded_range(name: &str, values: &[f64]) -> Result<Range<f64>, RenderError> {
    let stats = summarize(name, values)?;
    let span = stats.max - stats.min;
    let pad = if span > 0.0 {
        span * RANGE_PADDING
    } else {
        FLAT_PADDING
    };
    Ok(stats.min - pad..stats.max + pad)
}

fn summarize(name: &str, values: &[f64]) -> Result<DescriptiveStats, RenderError> {
    DescriptiveStats::new(values.iter().copied()).ok_or_else(|| RenderError::EmptyData {
        name: name.to_owned(),
    })
}

/// Draws a framed legend entry inside the plot, hanging from `anchor`.
#[expect(clippy::cast_possible_wrap)]
fn draw_legend<DB>(
    plot: &DrawingArea<DB, PlotCoord>,
    anchor: (f64, f64),
    corner: Corner,
    label: &str,
    color: RGBColor,
    style: &FigureStyle,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
{
    let font = style.legend_font();
    let (text_width, text_height) = plot.estimate_text_size(label, &font)?;
    let width = LEGEND_PADDING * 3 + LEGEND_SWATCH + text_width as i32;
    let height = LEGEND_PADDING * 2 + text_height as i32;
    let left = match corner {
        Corner::UpperLeft => LEGEND_INSET,
        Corner::UpperRight => -LEGEND_INSET - width,
    };
    let top = LEGEND_INSET;
    let middle = top + height / 2;
    let frame = [(left, top), (left + width, top + height)];
    let swatch_start = left + LEGEND_PADDING;
    let swatch_end = swatch_start + LEGEND_SWATCH;

    let legend = EmptyElement::at(anchor)
        + Rectangle::new(frame, style.background.filled())
        + Rectangle::new(frame, style.outline())
        + PathElement::new(
            vec![(swatch_start, middle), (swatch_end, middle)],
            color.stroke_width(style.line_width),
        )
        + Text::new(
            label.to_owned(),
            (swatch_end + LEGEND_PADDING, middle),
            font,
        );
    plot.draw(&legend)?;
    Ok(())
}
