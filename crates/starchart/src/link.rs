//! Directed links between named systems.
//!
//! A [`LinkSpec`] is configuration: an ordered pair of short names. Once the
//! annotation planner has built the complete [`LocationIndex`],
//! [`resolve_links`] turns every link spec into a [`ResolvedLink`] with both
//! endpoint positions, their planar distance, and the midpoint where the
//! distance label goes.

use log::{debug, trace};
use serde::Deserialize;
use thiserror::Error;

use starchart_core::geometry::Point;

use crate::annotate::LocationIndex;

/// Errors raised while resolving links.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Link refers to unknown system `{name}`")]
    UnknownSystem { name: String },
}

/// A configured link from one short name to another.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkSpec {
    from: String,
    to: String,
}

impl LinkSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Short name of the source system.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Short name of the destination system.
    pub fn to(&self) -> &str {
        &self.to
    }
}

/// A link whose endpoints have been located on the chart plane.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLink {
    from: String,
    to: String,
    source: Point,
    destination: Point,
    distance: f64,
    midpoint: Point,
}

impl ResolvedLink {
    fn between(spec: &LinkSpec, source: Point, destination: Point) -> Self {
        Self {
            from: spec.from.clone(),
            to: spec.to.clone(),
            source,
            destination,
            distance: source.distance_to(destination),
            midpoint: source.midpoint(destination),
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn source(&self) -> Point {
        self.source
    }

    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Planar distance between the endpoints.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn midpoint(&self) -> Point {
        self.midpoint
    }

    /// The distance label, rounded to one decimal place.
    pub fn label(&self) -> String {
        format!("{:.1}", self.distance)
    }
}

fn locate(locations: &LocationIndex, name: &str) -> Result<Point, LinkError> {
    locations
        .get(name)
        .map(|location| location.position())
        .ok_or_else(|| LinkError::UnknownSystem {
            name: name.to_string(),
        })
}

/// Resolves every link spec against `locations`, preserving order.
///
/// # Errors
///
/// Returns [`LinkError::UnknownSystem`] for the first endpoint name that has
/// no recorded location.
pub fn resolve_links(
    specs: &[LinkSpec],
    locations: &LocationIndex,
) -> Result<Vec<ResolvedLink>, LinkError> {
    let links = specs
        .iter()
        .map(|spec| {
            let source = locate(locations, spec.from())?;
            let destination = locate(locations, spec.to())?;
            let link = ResolvedLink::between(spec, source, destination);
            trace!(
                from = spec.from(),
                to = spec.to(),
                distance = link.distance();
                "Resolved link"
            );
            Ok(link)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(links = links.len(); "Links resolved");
    Ok(links)
}
