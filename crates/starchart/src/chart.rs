//! The finished chart handed to renderers.

use starchart_core::geometry::{Bounds, Point};

use crate::{
    annotate::{AnnotationPlacement, LocationIndex},
    catalog::{CatalogEntry, CatalogRow},
    link::ResolvedLink,
};

/// A plotted system.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    index: usize,
    position: Point,
    depth: f64,
}

impl ScatterPoint {
    /// Returns `None` if the entry has no position.
    pub(crate) fn from_entry(entry: &CatalogEntry) -> Option<Self> {
        entry.position().value().map(|position| Self {
            index: entry.index(),
            position: position.planar(),
            depth: position.depth(),
        })
    }

    /// Catalog index of the plotted row.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }
}

/// A row that could not be placed on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct UnplottableRow {
    index: usize,
    row: CatalogRow,
    missing: Vec<&'static str>,
}

impl UnplottableRow {
    pub(crate) fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            index: entry.index(),
            row: entry.row().clone(),
            missing: entry.missing_fields(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn system_name(&self) -> &str {
        self.row.system_name()
    }

    /// The raw text of the row.
    pub fn row(&self) -> &CatalogRow {
        &self.row
    }

    /// Names of the fields that failed to parse or were absent.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }
}

/// Everything a renderer needs to draw a chart.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    points: Vec<ScatterPoint>,
    annotations: Vec<AnnotationPlacement>,
    links: Vec<ResolvedLink>,
    unplottable: Vec<UnplottableRow>,
    locations: LocationIndex,
}

impl Chart {
    pub(crate) fn new(
        points: Vec<ScatterPoint>,
        annotations: Vec<AnnotationPlacement>,
        links: Vec<ResolvedLink>,
        unplottable: Vec<UnplottableRow>,
        locations: LocationIndex,
    ) -> Self {
        Self {
            points,
            annotations,
            links,
            unplottable,
            locations,
        }
    }

    /// Plotted systems, in catalog order.
    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    pub fn annotations(&self) -> &[AnnotationPlacement] {
        &self.annotations
    }

    /// Resolved links, in configuration order.
    pub fn links(&self) -> &[ResolvedLink] {
        &self.links
    }

    /// Rows that passed selection but have no position.
    pub fn unplottable(&self) -> &[UnplottableRow] {
        &self.unplottable
    }

    pub fn locations(&self) -> &LocationIndex {
        &self.locations
    }

    /// Returns `true` if nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.annotations.is_empty() && self.links.is_empty()
    }

    /// The box enclosing every point, callout, and link endpoint.
    ///
    /// Returns `None` for an empty chart.
    pub fn bounds(&self) -> Option<Bounds> {
        let points = self.points.iter().map(ScatterPoint::position);
        let callouts = self
            .annotations
            .iter()
            .flat_map(|a| [a.anchor(), a.callout()]);
        let links = self
            .links
            .iter()
            .flat_map(|l| [l.source(), l.destination()]);

        Bounds::enclosing(points.chain(callouts).chain(links))
    }
}
