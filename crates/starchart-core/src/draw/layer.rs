//! Layer-based rendering for SVG output.
//!
//! Chart elements are produced in catalog order, but they must be stacked by
//! kind: callout lines under the points they connect, labels over everything.
//! Drawing code tags each SVG node with a [`RenderLayer`] and
//! [`LayeredOutput::render`] emits the nodes grouped bottom to top.
//!
//! # Example
//!
//! ```
//! # use starchart_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Text};
//!
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("Sun")));
//! output.add_to_layer(RenderLayer::Point, Box::new(Circle::new()));
//!
//! // Points render before text
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas fill
    Background,
    /// Lines from a system to its label
    Callout,
    /// Link arrows between systems
    Link,
    /// Scatter points for plotted systems
    Point,
    /// Labels on systems and links
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Callout => "callout",
            Self::Link => "link",
            Self::Point => "point",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes within a layer keep the order they were added in.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends every node of another output to this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g>` element with a `data-layer`
    /// attribute. Groups are returned bottom to top.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Line};

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
    }

    #[test]
    fn test_layered_output_add_to_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Point, Box::new(Circle::new()));
        assert!(!output.is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Point, Box::new(Circle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Callout, Box::new(Line::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layered_output_render_groups_same_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Point, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Link, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Point, Box::new(Circle::new()));

        // Point nodes collapse into one group despite being interleaved
        assert_eq!(output.render().len(), 2);
    }

    #[test]
    fn test_layered_output_render_order() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Line::new()));

        let document = output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect::<String>();
        let background = document.find("background").expect("background group");
        let text = document.find("\"text\"").expect("text group");
        assert!(background < text);
    }

    #[test]
    fn test_render_layer_names_are_unique() {
        let layers = [
            RenderLayer::Background,
            RenderLayer::Callout,
            RenderLayer::Link,
            RenderLayer::Point,
            RenderLayer::Text,
        ];
        let names: std::collections::HashSet<_> = layers.iter().map(|l| l.name()).collect();
        assert_eq!(names.len(), layers.len());
    }
}
