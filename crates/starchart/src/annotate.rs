//! Label placement for named systems.
//!
//! The planner walks plotted entries once, in catalog order, and decides for
//! each system whether it gets a label, what the label says, and where its
//! callout goes. Multi-star systems appear in the catalog as adjacent rows
//! that share a short name; only the first of such a run is labeled and
//! recorded.
//!
//! Only the immediately preceding row is compared. Rows of one system that
//! are not adjacent in the catalog each get a label, while the location
//! index keeps the first one seen.
//!
//! The planner returns the [`LocationIndex`] it built alongside the
//! placements, so link resolution can only begin once every location is
//! known.

use indexmap::IndexMap;
use log::{debug, trace};

use starchart_core::geometry::Point;

use crate::{
    catalog::{CatalogEntry, short_name},
    config::AnnotationConfig,
};

/// Where a named system was plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedLocation {
    name: String,
    position: Point,
    depth: f64,
}

impl NamedLocation {
    pub fn new(name: impl Into<String>, position: Point, depth: f64) -> Self {
        Self {
            name: name.into(),
            position,
            depth,
        }
    }

    /// The short name this location is keyed by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position on the chart plane.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Height above or below the chart plane.
    pub fn depth(&self) -> f64 {
        self.depth
    }
}

/// Short name to location mapping, in the order systems were first seen.
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    locations: IndexMap<String, NamedLocation>,
}

impl LocationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `location` unless its name is already known.
    ///
    /// Returns `true` if the location was recorded.
    pub fn record(&mut self, location: NamedLocation) -> bool {
        if self.locations.contains_key(location.name()) {
            return false;
        }
        self.locations.insert(location.name.clone(), location);
        true
    }

    pub fn get(&self, name: &str) -> Option<&NamedLocation> {
        self.locations.get(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedLocation> {
        self.locations.values()
    }
}

/// A label for one system and where to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationPlacement {
    name: String,
    label: String,
    anchor: Point,
    callout: Point,
    emphasized: bool,
}

impl AnnotationPlacement {
    /// The short name of the labeled system.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label text: the signed depth to one decimal, then the short name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The plotted position of the system.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Where the label sits: the anchor plus the configured offset.
    pub fn callout(&self) -> Point {
        self.callout
    }

    /// Whether the label is drawn with emphasis.
    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }
}

/// Result of a planning pass.
#[derive(Debug, Clone, Default)]
pub struct AnnotationPlan {
    placements: Vec<AnnotationPlacement>,
    locations: LocationIndex,
}

impl AnnotationPlan {
    pub fn placements(&self) -> &[AnnotationPlacement] {
        &self.placements
    }

    pub fn locations(&self) -> &LocationIndex {
        &self.locations
    }

    /// Splits the plan into its placements and location index.
    pub fn into_parts(self) -> (Vec<AnnotationPlacement>, LocationIndex) {
        (self.placements, self.locations)
    }
}

/// Formats the label text for a system at `depth`.
///
/// # Examples
///
/// ```
/// # use starchart::annotate::label_text;
/// assert_eq!(label_text(-1.27, "Wolf 359"), "[-1.3] Wolf 359");
/// assert_eq!(label_text(0.0, "Sun"), "[+0.0] Sun");
/// ```
pub fn label_text(depth: f64, name: &str) -> String {
    format!("[{depth:+.1}] {name}")
}

/// Plans labels for plotted systems.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationPlanner<'a> {
    config: &'a AnnotationConfig,
}

impl<'a> AnnotationPlanner<'a> {
    pub fn new(config: &'a AnnotationConfig) -> Self {
        Self { config }
    }

    /// Runs a single forward pass over `entries`, in the order given.
    ///
    /// Entries without a position are passed over entirely: they are neither
    /// labeled nor compared against.
    pub fn plan<'e>(&self, entries: impl IntoIterator<Item = &'e CatalogEntry>) -> AnnotationPlan {
        let mut plan = AnnotationPlan::default();
        let mut previous_name: Option<String> = None;

        for entry in entries {
            let Some(position) = entry.position().value() else {
                continue;
            };

            let name = short_name(entry.system_name(), self.config.disambiguation_glyph());
            if previous_name.as_deref() == Some(name.as_str()) {
                trace!(name = name.as_str(), index = entry.index(); "Skipping companion row");
                continue;
            }

            let anchor = position.planar();
            let depth = position.depth();

            if !plan
                .locations
                .record(NamedLocation::new(name.as_str(), anchor, depth))
            {
                debug!(
                    name = name.as_str(),
                    index = entry.index();
                    "Short name repeats a non-adjacent system; keeping the first location"
                );
            }

            plan.placements.push(AnnotationPlacement {
                label: label_text(depth, &name),
                anchor,
                callout: anchor.add_point(self.config.offset_for(&name)),
                emphasized: self.config.is_notable(&name),
                name: name.clone(),
            });

            previous_name = Some(name);
        }

        debug!(
            placements = plan.placements.len(),
            locations = plan.locations.len();
            "Annotations planned"
        );

        plan
    }
}
