//! Error types for Starchart operations.
//!
//! This module provides the main error type [`StarchartError`] which wraps
//! the error conditions that can occur while building and rendering a chart.
//! Unparsable notations in a catalog row are not errors; such rows are
//! reported through [`Chart::unplottable`](crate::chart::Chart::unplottable).

use std::io;

use thiserror::Error;

use crate::{catalog::CatalogError, config::ConfigError, link::LinkError};

/// The main error type for Starchart operations.
///
/// # Diagnostic Variants
///
/// The `Catalog` variant keeps the catalog text alongside the error so that
/// every issue's span can be shown against the source.
#[derive(Debug, Error)]
pub enum StarchartError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{err}")]
    Catalog { err: CatalogError, src: String },

    #[error("{0}")]
    Link(#[from] LinkError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for StarchartError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl StarchartError {
    /// Create a new `Catalog` error with the associated source text.
    pub fn new_catalog_error(err: CatalogError, src: impl Into<String>) -> Self {
        Self::Catalog {
            err,
            src: src.into(),
        }
    }
}
