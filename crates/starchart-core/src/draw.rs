//! Drawing support shared by chart exporters.
//!
//! - [`RenderLayer`] / [`LayeredOutput`] - z-ordered collection of SVG nodes

mod layer;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
