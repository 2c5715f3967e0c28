//! Starchart Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Starchart
//! parser, pipeline, and exporter. It includes:
//!
//! - **Readings**: Value-or-missing measurements ([`reading::Reading`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Planar and Cartesian types ([`geometry`] module)
//! - **Draw**: Layered SVG output ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod reading;
