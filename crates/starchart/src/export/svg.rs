//! SVG export backend.
//!
//! [`SvgBuilder`] resolves a [`StyleConfig`] into an [`Svg`] exporter that
//! writes one document per chart to any [`Write`] target.
//!
//! Chart space is mapped onto the canvas by a uniform scale with the chart's
//! +y axis pointing up. The canvas covers the chart bounds plus a margin on
//! every side, so an empty chart yields a blank canvas of twice the margin.

mod elements;

use std::io::Write;

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use starchart_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::{Bounds, Point},
};

use crate::{
    chart::Chart,
    config::StyleConfig,
    export::{self, Exporter},
};

/// Maps chart coordinates to canvas coordinates.
#[derive(Debug, Clone, Copy)]
struct Frame {
    bounds: Bounds,
    scale: f64,
    margin: f64,
}

impl Frame {
    fn new(bounds: Bounds, scale: f64, margin: f64) -> Self {
        Self {
            bounds,
            scale,
            margin,
        }
    }

    fn width(&self) -> f64 {
        self.bounds.width().mul_add(self.scale, self.margin * 2.0)
    }

    fn height(&self) -> f64 {
        self.bounds.height().mul_add(self.scale, self.margin * 2.0)
    }

    /// Converts a chart point to canvas pixels, flipping y.
    fn to_canvas(&self, point: Point) -> Point {
        Point::new(
            (point.x() - self.bounds.min_x()).mul_add(self.scale, self.margin),
            (self.bounds.max_y() - point.y()).mul_add(self.scale, self.margin),
        )
    }
}

/// Builder for [`Svg`] exporters.
#[derive(Debug)]
pub struct SvgBuilder<W> {
    writer: W,
    style: StyleConfig,
}

impl<W: Write> SvgBuilder<W> {
    /// Creates a builder writing to `writer` with the default style.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            style: StyleConfig::default(),
        }
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Resolves the style and creates the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a style color cannot be parsed.
    pub fn build(self) -> Result<Svg<W>, export::Error> {
        let render_err = |err: crate::config::ConfigError| export::Error::Render(err.to_string());

        Ok(Svg {
            writer: self.writer,
            background_color: self.style.background_color().map_err(render_err)?,
            point_color: self.style.point_color().map_err(render_err)?,
            label_color: self.style.label_color().map_err(render_err)?,
            link_color: self.style.link_color().map_err(render_err)?,
            style: self.style,
        })
    }
}

/// SVG exporter with resolved colors.
#[derive(Debug)]
pub struct Svg<W> {
    writer: W,
    style: StyleConfig,
    background_color: Option<Color>,
    point_color: Color,
    label_color: Color,
    link_color: Color,
}

impl<W: Write> Svg<W> {
    /// Renders the chart to an SVG document.
    pub fn render_chart(&self, chart: &Chart) -> Document {
        let frame = Frame::new(
            chart.bounds().unwrap_or_default(),
            self.style.scale(),
            self.style.margin(),
        );
        let (width, height) = (frame.width(), frame.height());

        debug!(width, height; "SVG canvas size");

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        let mut output = LayeredOutput::new();

        if let Some(color) = self.background_color {
            output.add_to_layer(
                RenderLayer::Background,
                Box::new(
                    svg_element::Rectangle::new()
                        .set("width", width)
                        .set("height", height)
                        .set("fill", color),
                ),
            );
        }

        for point in chart.points() {
            output.merge(self.render_point(&frame, point));
        }
        for placement in chart.annotations() {
            output.merge(self.render_annotation(&frame, placement));
        }
        for link in chart.links() {
            output.merge(self.render_link(&frame, link));
        }

        if !chart.links().is_empty() {
            doc = doc.add(self.marker_definitions());
        }

        output
            .render()
            .into_iter()
            .fold(doc, |doc, group| doc.add(group))
    }

    fn write_document(&mut self, doc: &Document) -> Result<(), export::Error> {
        if let Err(err) = write!(self.writer, "{doc}").and_then(|()| self.writer.flush()) {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }
        Ok(())
    }
}

impl<W: Write> Exporter for Svg<W> {
    fn export_chart(&mut self, chart: &Chart) -> Result<(), export::Error> {
        let doc = self.render_chart(chart);
        debug!("SVG document rendered");

        self.write_document(&doc)?;
        info!(
            points = chart.points().len(),
            labels = chart.annotations().len(),
            links = chart.links().len();
            "SVG written"
        );
        Ok(())
    }
}
