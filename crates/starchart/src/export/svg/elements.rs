//! SVG rendering for chart elements.

use std::io::Write;

use svg::node::element as svg_element;

use starchart_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer, SvgNode},
    geometry::Point,
};

use super::{Frame, Svg};
use crate::{annotate::AnnotationPlacement, chart::ScatterPoint, link::ResolvedLink};

impl<W: Write> Svg<W> {
    pub(super) fn render_point(&self, frame: &Frame, point: &ScatterPoint) -> LayeredOutput {
        let center = frame.to_canvas(point.position());

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Point,
            Box::new(
                svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", self.style.point_radius())
                    .set("fill", self.point_color)
                    .set("fill-opacity", self.point_color.alpha()),
            ),
        );
        output
    }

    pub(super) fn render_annotation(
        &self,
        frame: &Frame,
        placement: &AnnotationPlacement,
    ) -> LayeredOutput {
        let anchor = frame.to_canvas(placement.anchor());
        let callout = frame.to_canvas(placement.callout());

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Callout,
            Box::new(
                svg_element::Line::new()
                    .set("x1", anchor.x())
                    .set("y1", anchor.y())
                    .set("x2", callout.x())
                    .set("y2", callout.y())
                    .set("stroke", self.label_color)
                    .set("stroke-opacity", self.label_color.alpha())
                    .set("stroke-width", 0.5),
            ),
        );

        let mut text = self.text(placement.label(), callout, "start");
        if placement.is_emphasized() {
            text = text.set("font-weight", "bold");
        }
        output.add_to_layer(RenderLayer::Text, Box::new(text));
        output
    }

    pub(super) fn render_link(&self, frame: &Frame, link: &ResolvedLink) -> LayeredOutput {
        let source = frame.to_canvas(link.source());
        let destination = frame.to_canvas(link.destination());
        let midpoint = frame.to_canvas(link.midpoint());

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Link,
            Box::new(
                svg_element::Path::new()
                    .set(
                        "d",
                        format!(
                            "M {} {} L {} {}",
                            source.x(),
                            source.y(),
                            destination.x(),
                            destination.y()
                        ),
                    )
                    .set("fill", "none")
                    .set("stroke", self.link_color)
                    .set("stroke-opacity", self.link_color.alpha())
                    .set("stroke-width", 1)
                    .set("marker-end", format!("url(#{})", marker_id(self.link_color))),
            ),
        );
        output.add_to_layer(
            RenderLayer::Text,
            Box::new(self.text(&link.label(), midpoint, "middle")),
        );
        output
    }

    /// Arrowhead definitions referenced by link paths.
    pub(super) fn marker_definitions(&self) -> SvgNode {
        let color = self.link_color;
        let marker = svg_element::Marker::new()
            .set("id", marker_id(color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color)
                    .set("fill-opacity", color.alpha()),
            );

        Box::new(svg_element::Definitions::new().add(marker))
    }

    fn text(&self, content: &str, position: Point, anchor: &'static str) -> svg_element::Text {
        svg_element::Text::new(content)
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", anchor)
            .set("font-family", self.style.font_family())
            .set("font-size", self.style.font_size())
            .set("fill", self.label_color)
    }
}

fn marker_id(color: Color) -> String {
    format!("arrow-right-{}", color.to_id_safe_string())
}
