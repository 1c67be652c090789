//! Per-group box plot annotated with pairwise significance brackets.
//!
//! Groups sit at integer positions on a categorical axis in the table's
//! order of first appearance. Boxes span the quartiles with a median line,
//! whiskers follow the Tukey rule and anything beyond them is drawn as an
//! outlier marker. Brackets are stacked above the data by
//! [`BracketLayout`].

use std::ops::Range;

use plotters::{
    coord::Shift,
    element::{Circle, PathElement, Rectangle, Text},
    prelude::{ChartBuilder, DrawingArea, DrawingBackend},
    style::Color as _,
};
use pubfig_data::{
    comparison::PairwiseComparison,
    observations::{Group, ObservationTable},
};
use pubfig_stats::box_summary::BoxSummary;

use crate::{
    Figure, RenderError,
    annotation::{Bracket, BracketLayout},
    style::FigureStyle,
};

/// Output file name used by the CLI.
pub const FILE_NAME: &str = "fig2_boxplot.svg";

pub const GROUP_LABEL: &str = "Group";
pub const RESPONSE_LABEL: &str = "Response (a.u.)";

/// Space kept below the lowest plotted point.
const BOTTOM_MARGIN: f64 = 0.5;
/// Space kept above the bottom of the highest annotation, enough for its text.
const TOP_MARGIN: f64 = 0.6;
/// Whisker cap length as a fraction of the box width.
const CAP_RATIO: f64 = 0.5;
/// Radius of outlier markers, in pixels.
const OUTLIER_RADIUS: i32 = 3;

/// Everything needed to draw the box plot, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotLayout {
    /// One summary per group, in category order.
    pub boxes: Vec<(Group, BoxSummary)>,
    pub brackets: Vec<Bracket>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

impl BoxPlotLayout {
    /// Summarizes `table` and places one bracket per comparison above it.
    pub fn new(
        table: &ObservationTable,
        comparisons: &[PairwiseComparison],
    ) -> Result<Self, RenderError> {
        let empty = || RenderError::EmptyData {
            name: "observations".to_owned(),
        };
        let groups = table.groups();
        let boxes = groups
            .iter()
            .map(|&group| {
                BoxSummary::new(&table.values(group))
                    .map(|summary| (group, summary))
                    .ok_or_else(empty)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let max_value = table.max_value().ok_or_else(empty)?;

        let position = |group: Group| {
            groups
                .iter()
                .position(|&g| g == group)
                .map(category_position)
        };
        let brackets = BracketLayout::default()
            .place(max_value, comparisons, |comparison| {
                Some((position(comparison.first)?, position(comparison.second)?))
            })
            .map_err(|index| {
                let comparison = &comparisons[index];
                let group = if position(comparison.first).is_none() {
                    comparison.first
                } else {
                    comparison.second
                };
                RenderError::UnknownGroup { group }
            })?;

        let low = boxes
            .iter()
            .map(|(_, summary)| summary.extent().0)
            .fold(f64::INFINITY, f64::min);
        let high = brackets.last().map_or(max_value + BOTTOM_MARGIN, |bracket| {
            bracket.label_anchor().1 + TOP_MARGIN
        });

        Ok(Self {
            x_range: -0.5..category_position(boxes.len()) - 0.5,
            y_range: low - BOTTOM_MARGIN..high,
            boxes,
            brackets,
        })
    }
}

#[expect(clippy::cast_precision_loss)]
fn category_position(index: usize) -> f64 {
    index as f64
}

/// Box plot of an [`ObservationTable`] with its pairwise comparisons.
#[derive(Debug, Clone, Copy)]
pub struct BoxPlotChart<'a> {
    table: &'a ObservationTable,
    comparisons: &'a [PairwiseComparison],
    style: &'a FigureStyle,
}

impl<'a> BoxPlotChart<'a> {
    #[must_use]
    pub fn new(
        table: &'a ObservationTable,
        comparisons: &'a [PairwiseComparison],
        style: &'a FigureStyle,
    ) -> Self {
        Self {
            table,
            comparisons,
            style,
        }
    }
}

impl Figure for BoxPlotChart<'_> {
    fn size(&self) -> (u32, u32) {
        self.style.box_plot_size
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError>
    where
        DB: DrawingBackend,
    {
        let style = self.style;
        let layout = BoxPlotLayout::new(self.table, self.comparisons)?;
        for (group, summary) in &layout.boxes {
            tracing::debug!(
                %group,
                q1 = summary.q1,
                median = summary.median,
                q3 = summary.q3,
                outliers = summary.outliers.len(),
                "box"
            );
        }

        let labels = layout
            .boxes
            .iter()
            .enumerate()
            .map(|(index, (group, _))| (category_position(index), group.to_string()))
            .collect::<Vec<_>>();
        let format_category = |x: &f64| {
            labels
                .iter()
                .find(|(position, _)| (position - x).abs() < 0.25)
                .map(|(_, label)| label.clone())
                .unwrap_or_default()
        };

        root.fill(&style.background)?;
        let mut chart = ChartBuilder::on(root)
            .margin(style.margin)
            .x_label_area_size(style.label_area)
            .y_label_area_size(style.label_area)
            .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(GROUP_LABEL)
            .y_desc(RESPONSE_LABEL)
            .x_labels(labels.len())
            .x_label_formatter(&format_category)
            .axis_desc_style(style.axis_label_font(&style.foreground))
            .label_style(style.tick_label_font(&style.foreground))
            .axis_style(style.foreground)
            .draw()?;

        let half = style.box_width / 2.0;
        let cap = half * CAP_RATIO;
        let line = style.foreground.stroke_width(1);
        let boxes = || {
            layout
                .boxes
                .iter()
                .enumerate()
                .map(|(index, (_, summary))| (index, category_position(index), summary))
        };

        chart.draw_series(boxes().flat_map(|(_, x, s)| {
            [
                PathElement::new(vec![(x, s.q3), (x, s.whisker_high)], line),
                PathElement::new(vec![(x - cap, s.whisker_high), (x + cap, s.whisker_high)], line),
                PathElement::new(vec![(x, s.q1), (x, s.whisker_low)], line),
                PathElement::new(vec![(x - cap, s.whisker_low), (x + cap, s.whisker_low)], line),
            ]
        }))?;
        chart.draw_series(boxes().map(|(index, x, s)| {
            Rectangle::new(
                [(x - half, s.q1), (x + half, s.q3)],
                style.box_color(index).filled(),
            )
        }))?;
        chart.draw_series(
            boxes().map(|(_, x, s)| Rectangle::new([(x - half, s.q1), (x + half, s.q3)], line)),
        )?;
        chart.draw_series(boxes().map(|(_, x, s)| {
            PathElement::new(
                vec![(x - half, s.median), (x + half, s.median)],
                style.foreground.stroke_width(style.line_width),
            )
        }))?;
        chart.draw_series(boxes().flat_map(|(_, x, s)| {
            s.outliers
                .iter()
                .map(move |&value| Circle::new((x, value), OUTLIER_RADIUS, line))
        }))?;

        chart.draw_series(
            layout
                .brackets
                .iter()
                .map(|bracket| PathElement::new(bracket.path().to_vec(), line)),
        )?;
        chart.draw_series(layout.brackets.iter().map(|bracket| {
            Text::new(
                bracket.label.clone(),
                bracket.label_anchor(),
                style.annotation_font(),
            )
        }))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pubfig_data::{comparison::compare_all_pairs, observations::SAMPLES_PER_GROUP, seeded_rng};
    use pubfig_stats::t_test::TTest;

    use super::*;
    use crate::{annotation::format_p_value, svg_text_nodes};

    fn seeded_table(seed: u64) -> ObservationTable {
        ObservationTable::sample(&mut seeded_rng(seed), SAMPLES_PER_GROUP).unwrap()
    }

    #[test]
    fn test_renders_every_p_value_label() {
        let table = seeded_table(42);
        let comparisons = compare_all_pairs(&table).unwrap();
        let style = FigureStyle::default();
        let svg = BoxPlotChart::new(&table, &comparisons, &style)
            .to_svg_string()
            .unwrap();
        assert!(svg.trim_start().starts_with("<svg"));
        assert_eq!(comparisons.len(), 3);
        let nodes = svg_text_nodes(&svg);
        for comparison in &comparisons {
            let label = format_p_value(comparison.p_value());
            assert!(nodes.contains(&label.as_str()), "missing {label}");
        }
        let p_labels = nodes.iter().filter(|node| node.starts_with("p=")).count();
        assert_eq!(p_labels, comparisons.len());
        for text in ["ctrl", "trtA", "trtB", GROUP_LABEL, RESPONSE_LABEL] {
            assert!(nodes.contains(&text), "missing {text:?}");
        }
    }

    #[test]
    fn test_layout_stacks_brackets_above_data() {
        let table = seeded_table(42);
        let comparisons = compare_all_pairs(&table).unwrap();
        let layout = BoxPlotLayout::new(&table, &comparisons).unwrap();
        let max_value = table.max_value().unwrap();

        assert_eq!(layout.x_range, -0.5..2.5);
        assert_eq!(layout.boxes.len(), 3);
        let spans = layout
            .brackets
            .iter()
            .map(|b| (b.x1, b.x2))
            .collect::<Vec<_>>();
        assert_eq!(spans, vec![(0.0, 1.0), (0.0, 2.0), (1.0, 2.0)]);
        assert!((layout.brackets[0].y - (max_value + 0.5)).abs() < 1e-12);
        assert!(layout.brackets.windows(2).all(|w| w[0].y < w[1].y));

        let top_label = layout.brackets[2].label_anchor().1;
        assert!(layout.y_range.end > top_label);
        assert!(layout.y_range.start < max_value);
    }

    #[test]
    fn test_layout_covers_outliers() {
        let table = ObservationTable::from_samples([
            (Group::Control, vec![-30.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]),
            (Group::TreatmentA, vec![4.0, 5.0, 6.0]),
        ]);
        let layout = BoxPlotLayout::new(&table, &[]).unwrap();
        assert_eq!(layout.boxes[0].1.outliers, vec![-30.0]);
        assert_eq!(layout.y_range, -30.5..9.5);
        assert_eq!(layout.x_range, -0.5..1.5);
        assert!(layout.brackets.is_empty());
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let style = FigureStyle::default();
        let table = ObservationTable::default();
        let err = BoxPlotChart::new(&table, &[], &style)
            .to_svg_string()
            .unwrap_err();
        assert!(matches!(err, RenderError::EmptyData { .. }));
    }

    #[test]
    fn test_comparison_with_missing_group_is_rejected() {
        let table = ObservationTable::from_samples([
            (Group::Control, vec![1.0, 2.0, 3.0]),
            (Group::TreatmentA, vec![4.0, 5.0, 6.0]),
        ]);
        let comparison = PairwiseComparison {
            first: Group::Control,
            second: Group::TreatmentB,
            test: TTest {
                statistic: 0.0,
                degrees_of_freedom: 4.0,
                p_value: 1.0,
            },
        };
        let err = BoxPlotLayout::new(&table, &[comparison]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnknownGroup {
                group: Group::TreatmentB
            }
        ));
    }
}
