//! Starchart CLI library
//!
//! This module contains the core CLI logic for the Starchart tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use starchart::{ChartBuilder, StarchartError, config::Mode};

/// Run the Starchart CLI application
///
/// This function reads the input catalog, builds the chart, and writes the
/// resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StarchartError` for:
/// - File I/O errors
/// - Configuration loading or validation errors
/// - Malformed catalogs
/// - Links to systems that were not charted
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), StarchartError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing catalog"
    );

    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.full_catalog {
        app_config = app_config.with_mode(Mode::FullCatalog);
    }
    app_config.validate()?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Build chart using ChartBuilder API
    let builder = ChartBuilder::new(app_config);
    let catalog = builder.parse_catalog(&source)?;
    let chart = builder.build(&catalog)?;
    let svg = builder.render_svg(&chart)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(
        output_file = args.output,
        plotted = chart.points().len(),
        unplottable = chart.unplottable().len(),
        annotations = chart.annotations().len(),
        links = chart.links().len();
        "SVG exported successfully"
    );

    Ok(())
}
