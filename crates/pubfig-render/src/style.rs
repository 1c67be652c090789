//! Shared look of the figures: a "ticks" theme with serif type, no grid,
//! white background and the classic tab10/Set2 colors.

use std::fmt;

use plotters::style::{Color as _, FontDesc, FontFamily, FontStyle, RGBColor, TextStyle};
use plotters_backend::text_anchor::{HPos, Pos, VPos};

/// Fonts, colors and sizes used by both figures.
#[derive(Clone)]
pub struct FigureStyle {
    /// Pixel size of the dual-axis chart (5:3).
    pub dual_axis_size: (u32, u32),
    /// Pixel size of the box plot (4:3).
    pub box_plot_size: (u32, u32),
    /// Blank space around the chart, in pixels.
    pub margin: u32,
    /// Room reserved for tick labels and axis descriptions, in pixels.
    pub label_area: u32,
    pub font_family: FontFamily<'static>,
    /// Axis description size, in pixels.
    pub axis_label_size: f64,
    /// Tick label size, in pixels.
    pub tick_label_size: f64,
    pub legend_size: f64,
    /// Size of the `p=...` annotations, in pixels.
    pub annotation_size: f64,
    pub foreground: RGBColor,
    pub background: RGBColor,
    pub temperature_color: RGBColor,
    pub strain_color: RGBColor,
    /// One fill color per box, cycled when there are more groups.
    pub box_palette: Vec<RGBColor>,
    /// Series stroke width, in pixels.
    pub line_width: u32,
    /// Box width in category units (the spacing between categories is 1).
    pub box_width: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            dual_axis_size: (800, 480),
            box_plot_size: (640, 480),
            margin: 16,
            label_area: 64,
            font_family: FontFamily::Serif,
            axis_label_size: 22.0,
            tick_label_size: 18.0,
            legend_size: 17.0,
            annotation_size: 16.0,
            foreground: RGBColor(0, 0, 0),
            background: RGBColor(255, 255, 255),
            temperature_color: RGBColor(0x1f, 0x77, 0xb4),
            strain_color: RGBColor(0xff, 0x7f, 0x0e),
            box_palette: vec![
                RGBColor(0x66, 0xc2, 0xa5),
                RGBColor(0xfc, 0x8d, 0x62),
                RGBColor(0x8d, 0xa0, 0xcb),
            ],
            line_width: 2,
            box_width: 0.5,
        }
    }
}

impl fmt::Debug for FigureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigureStyle")
            .field("dual_axis_size", &self.dual_axis_size)
            .field("box_plot_size", &self.box_plot_size)
            .field("margin", &self.margin)
            .field("label_area", &self.label_area)
            .field("font_family", &self.font_family.as_str())
            .field("axis_label_size", &self.axis_label_size)
            .field("tick_label_size", &self.tick_label_size)
            .field("legend_size", &self.legend_size)
            .field("annotation_size", &self.annotation_size)
            .field("foreground", &self.foreground)
            .field("background", &self.background)
            .field("temperature_color", &self.temperature_color)
            .field("strain_color", &self.strain_color)
            .field("box_palette", &self.box_palette)
            .field("line_width", &self.line_width)
            .field("box_width", &self.box_width)
            .finish()
    }
}

impl FigureStyle {
    fn font(&self, size: f64) -> FontDesc<'static> {
        FontDesc::new(self.font_family, size, FontStyle::Normal)
    }

    #[must_use]
    pub fn axis_label_font(&self, color: &RGBColor) -> TextStyle<'static> {
        self.font(self.axis_label_size).color(color)
    }

    #[must_use]
    pub fn tick_label_font(&self, color: &RGBColor) -> TextStyle<'static> {
        self.font(self.tick_label_size).color(color)
    }

    /// Legend text, vertically centered on its anchor.
    #[must_use]
    pub fn legend_font(&self) -> TextStyle<'static> {
        self.font(self.legend_size)
            .color(&self.foreground)
            .pos(Pos::new(HPos::Left, VPos::Center))
    }

    /// Annotation text, horizontally centered and sitting on its anchor.
    #[must_use]
    pub fn annotation_font(&self) -> TextStyle<'static> {
        self.font(self.annotation_size)
            .color(&self.foreground)
            .pos(Pos::new(HPos::Center, VPos::Bottom))
    }

    /// Fill color of the box at `index`.
    #[must_use]
    pub fn box_color(&self, index: usize) -> RGBColor {
        if self.box_palette.is_empty() {
            return self.foreground;
        }
        self.box_palette[index % self.box_palette.len()]
    }

    /// Semi-transparent foreground for outlines.
    #[must_use]
    pub fn outline(&self) -> plotters::style::ShapeStyle {
        self.foreground.mix(0.8).stroke_width(1)
    }
}

/// Formats a numeric tick label with up to three decimals.
///
/// Values that round to zero print as `0.0`, never `-0.0`.
#[must_use]
pub fn format_tick(value: &f64) -> String {
    let mut text = format!("{value:.3}");
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    if text == "-0.0" {
        text.remove(0);
    }
    text
}
