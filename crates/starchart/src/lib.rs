//! Starchart - Project nearby star systems onto an annotated chart.
//!
//! Catalog rows give each system's right ascension, declination, and
//! distance in human-readable notation. Starchart parses those notations,
//! converts each row to Cartesian coordinates, selects the systems inside a
//! spatial window, labels every named system once, and resolves configured
//! links between systems. The result is a [`Chart`](chart::Chart) that can be
//! rendered to SVG.

pub mod annotate;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod filter;
pub mod link;
pub mod transform;

mod error;
mod export;

pub use starchart_core::{color, geometry, reading};

pub use error::StarchartError;

use log::{debug, info, warn};

use catalog::{Catalog, CatalogEntry};
use chart::{Chart, ScatterPoint, UnplottableRow};
use config::{AppConfig, Mode};
use export::Exporter;

/// Builder for parsing catalogs and rendering charts.
///
/// # Examples
///
/// ```rust
/// use starchart::{ChartBuilder, config::AppConfig};
///
/// let source = "name\tra\tdec\tdistance\nSun\t\t\t0\nWolf 359\t10h 56m 29s\t+07° 00′ 53″\t7.86\n";
///
/// let builder = ChartBuilder::new(AppConfig::default());
///
/// let catalog = builder.parse_catalog(source)
///     .expect("Failed to parse");
///
/// let chart = builder.build(&catalog)
///     .expect("Failed to build");
///
/// let svg = builder.render_svg(&chart)
///     .expect("Failed to render");
///
/// assert!(svg.contains("Wolf 359"));
/// ```
#[derive(Debug, Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including window, labels, links, and style
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse tab-separated catalog text into derived entries.
    ///
    /// Every row's notations are parsed and its position computed. A row
    /// whose notations do not parse is kept with a missing position.
    ///
    /// # Errors
    ///
    /// Returns `StarchartError::Catalog` if the text is not a well-formed
    /// table or has no data rows.
    pub fn parse_catalog(&self, source: &str) -> Result<Catalog, StarchartError> {
        info!("Reading catalog");

        let rows = catalog::read_catalog(source)
            .map_err(|err| StarchartError::new_catalog_error(err, source))?;
        let catalog = Catalog::from_rows(rows);

        debug!(entries = catalog.len(); "Catalog parsed successfully");
        Ok(catalog)
    }

    /// Build a chart from a parsed catalog.
    ///
    /// Runs the window filter (unless in full-catalog mode), sets aside rows
    /// without a position, plans labels, and resolves links against the
    /// completed set of labeled locations.
    ///
    /// # Errors
    ///
    /// Returns `StarchartError::Config` if the configuration is invalid, or
    /// `StarchartError::Link` if a link names a system that was not charted.
    pub fn build(&self, catalog: &Catalog) -> Result<Chart, StarchartError> {
        self.config.validate()?;

        let mode = self.config.mode();
        info!(mode:?, rows = catalog.len(); "Building chart");

        let selected: Vec<&CatalogEntry> = match mode {
            Mode::FullCatalog => catalog.entries().iter().collect(),
            Mode::Windowed => self.config.window().to_window()?.apply(catalog.entries()),
        };
        debug!(selected = selected.len(); "Systems selected");

        let (plottable, unplottable): (Vec<&CatalogEntry>, Vec<&CatalogEntry>) = selected
            .into_iter()
            .partition(|entry| !entry.position().is_missing());

        let unplottable: Vec<UnplottableRow> = unplottable
            .into_iter()
            .map(|entry| {
                let row = UnplottableRow::from_entry(entry);
                warn!(
                    index = row.index(),
                    name = row.system_name(),
                    missing = row.missing().join(", ");
                    "System has no position and will not be plotted"
                );
                row
            })
            .collect();

        let points: Vec<ScatterPoint> = plottable
            .iter()
            .copied()
            .filter_map(ScatterPoint::from_entry)
            .collect();

        info!(systems = plottable.len(); "Planning annotations");
        let plan = annotate::AnnotationPlanner::new(self.config.annotation())
            .plan(plottable.iter().copied());
        let (annotations, locations) = plan.into_parts();

        info!(links = self.config.links().len(); "Resolving links");
        let links = link::resolve_links(self.config.links(), &locations)?;

        info!(
            points = points.len(),
            unplottable = unplottable.len(),
            annotations = annotations.len(),
            links = links.len();
            "Chart built"
        );

        Ok(Chart::new(points, annotations, links, unplottable, locations))
    }

    /// Render a chart to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `StarchartError::Export` if the style cannot be applied or the
    /// document cannot be written.
    pub fn render_svg(&self, chart: &Chart) -> Result<String, StarchartError> {
        info!("Rendering SVG");

        let mut buffer = Vec::new();
        let mut svg_exporter = export::svg::SvgBuilder::new(&mut buffer)
            .with_style(self.config.style())
            .build()?;
        svg_exporter.export_chart(chart)?;

        let svg_string =
            String::from_utf8(buffer).map_err(|err| export::Error::Render(err.to_string()))?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}
