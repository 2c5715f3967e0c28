//! Catalog rows and the values derived from them.
//!
//! A [`CatalogRow`] holds the raw text of one star or brown-dwarf entry. When
//! rows are collected into a [`Catalog`], each one is derived exactly once
//! into a [`CatalogEntry`]: its notations are parsed and its position
//! computed. Entries are never modified afterwards.
//!
//! Row 0 is the observer's own system (see [`transform`](crate::transform)).

mod reader;
mod short_name;

pub use reader::{CatalogError, CatalogIssue, read_catalog};
pub use short_name::short_name;

use log::{debug, trace};

use starchart_core::{geometry::Cartesian, reading::Reading};
use starchart_parser::{parse_declination, parse_numeral, parse_right_ascension};

use crate::transform;

/// Raw text of one catalog entry.
///
/// Notation fields are `None` when the source cell was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRow {
    system_name: String,
    right_ascension: Option<String>,
    declination: Option<String>,
    distance: Option<String>,
}

impl CatalogRow {
    /// Creates a row with the given name and no notations.
    pub fn new(system_name: impl Into<String>) -> Self {
        Self {
            system_name: system_name.into(),
            ..Self::default()
        }
    }

    /// Sets the right ascension notation; blank text counts as absent.
    pub fn with_right_ascension(mut self, text: impl Into<String>) -> Self {
        self.right_ascension = non_blank(text.into());
        self
    }

    /// Sets the declination notation; blank text counts as absent.
    pub fn with_declination(mut self, text: impl Into<String>) -> Self {
        self.declination = non_blank(text.into());
        self
    }

    /// Sets the distance notation; blank text counts as absent.
    pub fn with_distance(mut self, text: impl Into<String>) -> Self {
        self.distance = non_blank(text.into());
        self
    }

    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    pub fn right_ascension(&self) -> Option<&str> {
        self.right_ascension.as_deref()
    }

    pub fn declination(&self) -> Option<&str> {
        self.declination.as_deref()
    }

    pub fn distance(&self) -> Option<&str> {
        self.distance.as_deref()
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn parse_field(field: Option<&str>, parser: fn(&str) -> Reading) -> Reading {
    field.map_or(Reading::Missing, parser)
}

/// A catalog row with its derived values.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    index: usize,
    row: CatalogRow,
    right_ascension: Reading,
    declination: Reading,
    distance: Reading,
    position: Reading<Cartesian>,
}

impl CatalogEntry {
    /// Parses the row's notations and computes its position.
    pub fn derive(index: usize, row: CatalogRow) -> Self {
        let right_ascension = parse_field(row.right_ascension(), parse_right_ascension);
        let declination = parse_field(row.declination(), parse_declination);
        let distance = parse_field(row.distance(), parse_numeral);
        let position = transform::position(index, right_ascension, declination, distance);

        trace!(
            index,
            name = row.system_name(),
            right_ascension:% = right_ascension,
            declination:% = declination,
            distance:% = distance;
            "Derived catalog entry"
        );

        Self {
            index,
            row,
            right_ascension,
            declination,
            distance,
            position,
        }
    }

    /// Position of this entry in catalog order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` for the observer's own system.
    pub fn is_reference(&self) -> bool {
        self.index == transform::REFERENCE_INDEX
    }

    pub fn row(&self) -> &CatalogRow {
        &self.row
    }

    pub fn system_name(&self) -> &str {
        self.row.system_name()
    }

    /// Right ascension in radians, as parsed from the row.
    pub fn right_ascension(&self) -> Reading {
        self.right_ascension
    }

    /// Declination in radians, as parsed from the row.
    pub fn declination(&self) -> Reading {
        self.declination
    }

    pub fn distance(&self) -> Reading {
        self.distance
    }

    pub fn position(&self) -> Reading<Cartesian> {
        self.position
    }

    /// Names the derived fields that are missing and prevent plotting.
    ///
    /// The reference row ignores its angles, so only its distance can be
    /// reported.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.is_reference() {
            if self.right_ascension.is_missing() {
                missing.push("right ascension");
            }
            if self.declination.is_missing() {
                missing.push("declination");
            }
        }
        if self.distance.is_missing() {
            missing.push("distance");
        }
        missing
    }
}

/// All entries of a catalog, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Derives every row in a single forward pass.
    pub fn from_rows(rows: impl IntoIterator<Item = CatalogRow>) -> Self {
        let entries: Vec<_> = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| CatalogEntry::derive(index, row))
            .collect();

        debug!(
            rows = entries.len(),
            unplottable = entries.iter().filter(|e| e.position().is_missing()).count();
            "Catalog derived"
        );

        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The observer's own system, if the catalog has any rows.
    pub fn reference(&self) -> Option<&CatalogEntry> {
        self.entries.get(transform::REFERENCE_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_row_blank_fields_are_absent() {
        let row = CatalogRow::new("Sun")
            .with_right_ascension("")
            .with_declination("  ")
            .with_distance("0");

        assert_eq!(row.right_ascension(), None);
        assert_eq!(row.declination(), None);
        assert_eq!(row.distance(), Some("0"));
    }

    #[test]
    fn test_reference_row_at_origin() {
        let catalog = Catalog::from_rows([CatalogRow::new("Sun").with_distance("0")]);
        let sun = catalog.reference().expect("one row");

        assert!(sun.is_reference());
        assert!(sun.right_ascension().is_missing());
        assert_eq!(sun.position(), Reading::Value(Cartesian::new(0.0, 0.0, 0.0)));
        assert!(sun.missing_fields().is_empty());
    }

    #[test]
    fn test_derives_position() {
        let catalog = Catalog::from_rows([
            CatalogRow::new("Sun").with_distance("0"),
            CatalogRow::new("Proxima Centauri")
                .with_right_ascension("14h 29m 43.0s")
                .with_declination("−62° 40′ 46″")
                .with_distance("4.2465±0.0003"),
        ]);

        let proxima = &catalog.entries()[1];
        let position = proxima.position().value().expect("fully specified row");

        assert_eq!(proxima.distance(), Reading::Value(4.2465));
        assert_approx_eq!(f64, position.norm(), 4.2465, epsilon = 1e-9);
        assert!(position.z() < 0.0);
    }

    #[test]
    fn test_unparsable_fields_reported() {
        let catalog = Catalog::from_rows([
            CatalogRow::new("Sun").with_distance("0"),
            CatalogRow::new("Mystery")
                .with_declination("unknown")
                .with_distance("7.8"),
        ]);

        let mystery = &catalog.entries()[1];
        assert!(mystery.position().is_missing());
        assert_eq!(
            mystery.missing_fields(),
            ["right ascension", "declination"]
        );
    }

    #[test]
    fn test_reference_without_distance_is_missing() {
        let catalog = Catalog::from_rows([CatalogRow::new("Sun")]);
        let sun = catalog.reference().unwrap();

        assert!(sun.position().is_missing());
        assert_eq!(sun.missing_fields(), ["distance"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_rows(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.reference().is_none());
    }
}
