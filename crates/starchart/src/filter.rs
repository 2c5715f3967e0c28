//! Spatial window filter.
//!
//! The window keeps the systems that sit close to the chart plane and on the
//! charted side of it. It is applied as independent exclusion passes, one per
//! [`Exclusion`]; a row failing any of them is dropped, so the order of the
//! passes does not matter and filtering twice changes nothing.
//!
//! The window is open on the +y side: only `y < -h` is excluded along y.
//!
//! Rows whose position is missing cannot fail any exclusion and pass through;
//! callers divert them before planning.

use log::debug;

use crate::{catalog::CatalogEntry, config::ConfigError};

/// One exclusion criterion of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// `y < -h`
    BelowY,
    /// `z > v`
    AboveZ,
    /// `z < -v`
    BelowZ,
}

impl Exclusion {
    /// All exclusions, in the order the passes run.
    pub const ALL: [Exclusion; 3] = [Self::BelowY, Self::AboveZ, Self::BelowZ];

    fn name(self) -> &'static str {
        match self {
            Self::BelowY => "y below window",
            Self::AboveZ => "z above window",
            Self::BelowZ => "z below window",
        }
    }
}

/// A validated window of half-widths `h` (y axis) and `v` (z axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    half_y: f64,
    half_z: f64,
}

impl Window {
    /// Creates a window from its half-widths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWindow`] if either half-width is
    /// negative or not finite.
    pub fn new(half_y: f64, half_z: f64) -> Result<Self, ConfigError> {
        for (axis, value) in [("y", half_y), ("z", half_z)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWindow { axis, value });
            }
        }
        Ok(Self { half_y, half_z })
    }

    pub fn half_y(&self) -> f64 {
        self.half_y
    }

    pub fn half_z(&self) -> f64 {
        self.half_z
    }

    /// Returns `true` if `entry` fails the given criterion.
    ///
    /// A missing position fails no criterion.
    pub fn excludes(&self, exclusion: Exclusion, entry: &CatalogEntry) -> bool {
        let Some(position) = entry.position().value() else {
            return false;
        };

        match exclusion {
            Exclusion::BelowY => position.y() < -self.half_y,
            Exclusion::AboveZ => position.z() > self.half_z,
            Exclusion::BelowZ => position.z() < -self.half_z,
        }
    }

    /// Returns `true` if `entry` fails none of the criteria.
    pub fn admits(&self, entry: &CatalogEntry) -> bool {
        Exclusion::ALL
            .iter()
            .all(|&exclusion| !self.excludes(exclusion, entry))
    }

    /// Runs every exclusion pass over `entries`, keeping catalog order.
    pub fn apply<'a>(&self, entries: impl IntoIterator<Item = &'a CatalogEntry>) -> Vec<&'a CatalogEntry> {
        let mut kept: Vec<&CatalogEntry> = entries.into_iter().collect();

        for exclusion in Exclusion::ALL {
            let before = kept.len();
            kept.retain(|entry| !self.excludes(exclusion, entry));
            debug!(
                criterion = exclusion.name(),
                excluded = before - kept.len();
                "Applied window exclusion"
            );
        }

        kept
    }
}
