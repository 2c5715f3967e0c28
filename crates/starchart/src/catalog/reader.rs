//! Reading catalog rows from tab-separated text.
//!
//! The first line that is neither blank nor a `#` comment is the header and
//! is skipped. Every following data line holds at least four tab-separated
//! cells: system name, right ascension, declination, and distance. Further
//! cells are ignored and empty cells become absent notations.
//!
//! Problems are collected for the whole input rather than stopping at the
//! first one, and each [`CatalogIssue`] carries the byte span of its line so
//! it can be shown against the source.

use std::{fmt, ops::Range};

use log::debug;

use super::CatalogRow;

const REQUIRED_COLUMNS: usize = 4;

/// A single problem found while reading a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    message: String,
    line: usize,
    span: Range<usize>,
    help: Option<String>,
}

impl CatalogIssue {
    fn new(message: impl Into<String>, line: usize, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            line,
            span,
            help: None,
        }
    }

    fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based line number, or 0 for problems with the input as a whole.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte range of the offending line within the source.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "line {}: {}", self.line, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Error type for catalog reading.
///
/// Wraps one or more [`CatalogIssue`]s.
#[derive(Debug)]
pub struct CatalogError {
    issues: Vec<CatalogIssue>,
}

impl CatalogError {
    /// Get all issues in this error.
    pub fn issues(&self) -> &[CatalogIssue] {
        &self.issues
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.issues.first() {
            write!(f, "{first}")?;
            if self.issues.len() > 1 {
                write!(f, " (+{} more)", self.issues.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for CatalogError {}

impl From<CatalogIssue> for CatalogError {
    fn from(issue: CatalogIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

/// Reads catalog rows from tab-separated `source`.
///
/// # Errors
///
/// Returns [`CatalogError`] listing every data line with fewer than four
/// cells, or a single issue if the input has no data lines at all.
///
/// # Examples
///
/// ```
/// # use starchart::catalog::read_catalog;
/// let source = "name\tra\tdec\tdistance\nSun\t\t\t0\n";
/// let rows = read_catalog(source).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].system_name(), "Sun");
/// assert_eq!(rows[0].right_ascension(), None);
/// ```
pub fn read_catalog(source: &str) -> Result<Vec<CatalogRow>, CatalogError> {
    let mut rows = Vec::new();
    let mut issues = Vec::new();
    let mut header_seen = false;
    let mut offset = 0;

    for (line_index, raw_line) in source.split_inclusive('\n').enumerate() {
        let start = offset;
        offset += raw_line.len();

        let line = raw_line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }

        let cells: Vec<&str> = line.split('\t').collect();
        if cells.len() < REQUIRED_COLUMNS {
            issues.push(
                CatalogIssue::new(
                    format!(
                        "expected at least {REQUIRED_COLUMNS} tab-separated cells, found {}",
                        cells.len()
                    ),
                    line_index + 1,
                    start..start + line.len(),
                )
                .with_help("columns are: name, right ascension, declination, distance"),
            );
            continue;
        }

        rows.push(
            CatalogRow::new(cells[0].trim())
                .with_right_ascension(cells[1].trim())
                .with_declination(cells[2].trim())
                .with_distance(cells[3].trim()),
        );
    }

    if !issues.is_empty() {
        return Err(CatalogError { issues });
    }

    if rows.is_empty() {
        return Err(CatalogIssue::new("catalog has no data rows", 0, 0..0)
            .with_help("the first data row must be the observer's own system")
            .into());
    }

    debug!(rows = rows.len(); "Catalog read");
    Ok(rows)
}
