//! Publication figures rendered with `plotters` to SVG.
//!
//! - [`dual_axis`]: temperature and strain over time, one vertical axis each
//! - [`box_plot`]: per-group boxes with pairwise significance brackets
//! - [`annotation`]: layout of the significance brackets
//! - [`style`]: fonts, colors and figure sizes shared by both figures
//!
//! Both figures implement [`Figure`], which draws onto any `plotters`
//! backend and can write itself out as an SVG document.

use std::path::Path;

use plotters::{
    coord::Shift,
    drawing::DrawingAreaErrorKind,
    prelude::{DrawingArea, DrawingBackend, IntoDrawingArea as _, SVGBackend},
};
use pubfig_data::observations::Group;

pub mod annotation;
pub mod box_plot;
pub mod dual_axis;
pub mod style;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RenderError {
    #[display("drawing failed: {message}")]
    Drawing { message: String },
    #[display("cannot plot {name}: no data")]
    EmptyData { name: String },
    #[display("comparison references group {group}, which is not plotted")]
    UnknownGroup { group: Group },
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing {
            message: err.to_string(),
        }
    }
}

/// A figure that can be drawn onto a `plotters` drawing area.
pub trait Figure {
    /// Canvas size in pixels.
    fn size(&self) -> (u32, u32);

    /// Draws the complete figure onto `root`.
    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError>
    where
        DB: DrawingBackend;

    /// Renders the figure as an SVG document at `path`, replacing any existing file.
    fn save_svg(&self, path: &Path) -> Result<(), RenderError> {
        let root = SVGBackend::new(path, self.size()).into_drawing_area();
        self.draw(&root)?;
        root.present()?;
        tracing::debug!(path = %path.display(), "wrote svg");
        Ok(())
    }

    /// Renders the figure as an in-memory SVG document.
    fn to_svg_string(&self) -> Result<String, RenderError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size()).into_drawing_area();
            self.draw(&root)?;
            root.present()?;
        }
        Ok(svg)
    }
}

/// Text content of every `<text>` element of an SVG document.
///
/// The SVG backend writes the content on the line after the opening tag.
#[cfg(test)]
pub(crate) fn svg_text_nodes(svg: &str) -> Vec<&str> {
    let mut nodes = Vec::new();
    let mut lines = svg.lines();
    while let Some(line) = lines.next() {
        let Some(start) = line.find("<text") else {
            continue;
        };
        let Some(tag_end) = line[start..].find('>') else {
            continue;
        };
        let rest = &line[start + tag_end + 1..];
        let inline = rest.split("</text>").next().unwrap_or_default().trim();
        if !inline.is_empty() {
            nodes.push(inline);
        } else if let Some(content) = lines.next() {
            nodes.push(content.trim());
        }
    }
    nodes
}
