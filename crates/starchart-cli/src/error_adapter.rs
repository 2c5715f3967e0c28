//! Error adapter for converting StarchartError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a [`starchart::catalog::CatalogError`] contains multiple issues, each
//! issue is rendered independently against the catalog text.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use starchart::{StarchartError, catalog::CatalogIssue, config::ConfigError};

/// Adapter for a single catalog issue.
///
/// This adapter wraps a single [`CatalogIssue`] and implements
/// [`MietteDiagnostic`] to point at the offending catalog line.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped issue
    issue: &'a CatalogIssue,
    /// Catalog text for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(issue: &'a CatalogIssue, src: &'a str) -> Self {
        Self { issue, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("issue", &self.issue)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.issue.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("starchart::catalog"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.issue
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.issue.line() == 0 {
            return None;
        }

        let label = LabeledSpan::new_primary_with_span(
            Some(format!("line {}", self.issue.line())),
            span_to_miette(self.issue.span()),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-diagnostic [`StarchartError`] variants.
///
/// This adapter handles errors that don't carry catalog spans, such as I/O
/// errors, configuration errors, link errors, and export errors.
pub struct ErrorAdapter<'a>(pub &'a StarchartError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            StarchartError::Io(_) => "starchart::io",
            StarchartError::Config(_) => "starchart::config",
            StarchartError::Catalog { .. } => return None,
            StarchartError::Link(_) => "starchart::link",
            StarchartError::Export(_) => "starchart::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            StarchartError::Link(_) => {
                "check the system name, or whether the window excludes it (try --full-catalog)"
            }
            StarchartError::Config(ConfigError::MissingFile(_)) => {
                "omit --config to use the default configuration"
            }
            StarchartError::Config(ConfigError::InvalidWindow { .. }) => {
                "window half-widths are distances and must be zero or more"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A catalog issue with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a byte range to a miette [`SourceSpan`].
fn span_to_miette(span: std::ops::Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}

/// Convert a [`StarchartError`] into a list of reportable errors.
///
/// For [`StarchartError::Catalog`], this returns one [`Reportable`] for
/// each issue in the error. For other error variants, this returns a
/// single [`Reportable`].
pub fn to_reportables(err: &StarchartError) -> Vec<Reportable<'_>> {
    match err {
        StarchartError::Catalog {
            err: catalog_err,
            src,
        } => catalog_err
            .issues()
            .iter()
            .map(|issue| Reportable::Diagnostic(DiagnosticAdapter::new(issue, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use starchart::{ChartBuilder, link::LinkError};

    use super::*;

    fn catalog_error(source: &str) -> StarchartError {
        ChartBuilder::default()
            .parse_catalog(source)
            .expect_err("malformed catalog")
    }

    #[test]
    fn test_single_issue() {
        let source = "Name\tRA\tDec\tDistance\nSun\t\t\t0\nBroken\n";
        let err = catalog_error(source);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(
                    d.to_string(),
                    "expected at least 4 tab-separated cells, found 1"
                );
                assert_eq!(d.code().unwrap().to_string(), "starchart::catalog");
                assert!(d.help().is_some());
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_multiple_issues() {
        let source = "Name\tRA\tDec\tDistance\nA\nB\t1h\nSun\t\t\t0\nC\t1h\t2°\n";
        let err = catalog_error(source);

        let reportables = to_reportables(&err);

        // Each issue is separate
        assert_eq!(reportables.len(), 3);
        assert!(reportables[0].to_string().ends_with("found 1"));
        assert!(reportables[1].to_string().ends_with("found 2"));
        assert!(reportables[2].to_string().ends_with("found 3"));
    }

    #[test]
    fn test_label_points_at_line() {
        let source = "Name\tRA\tDec\tDistance\nSun\t\t\t0\nBroken\t1h\n";
        let err = catalog_error(source);
        let reportables = to_reportables(&err);

        let labels: Vec<_> = reportables[0].labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].label(), Some("line 3"));
        assert_eq!(labels[0].offset(), source.find("Broken").unwrap());
        assert_eq!(labels[0].len(), "Broken\t1h".len());
    }

    #[test]
    fn test_empty_catalog_has_no_label() {
        let err = catalog_error("Name\tRA\tDec\tDistance\n");
        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_link_error() {
        let err = StarchartError::Link(LinkError::UnknownSystem {
            name: "Vega".to_string(),
        });

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Link refers to unknown system `Vega`");
                assert_eq!(e.code().unwrap().to_string(), "starchart::link");
                assert!(e.help().is_some());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_io_error_code() {
        let err = StarchartError::Io(std::io::Error::other("disk full"));
        let reportables = to_reportables(&err);

        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "starchart::io"
        );
        assert!(reportables[0].help().is_none());
    }
}
