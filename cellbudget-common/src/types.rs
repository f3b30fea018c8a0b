//! Planar geometry types: points and the cell layout consumed by a run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of hexagonal cells in a layout: the serving cell and its six
/// first-tier neighbours.
pub const CELL_COUNT: usize = 7;

/// Index of the serving cell in [`GeometrySet::centroids`].
pub const SERVING_CELL_INDEX: usize = 0;

/// A position in a projected planar coordinate system.
///
/// Both coordinates are in metres, so the Euclidean distance between two
/// points is the physical ground distance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Easting (metres)
    pub x: f64,
    /// Northing (metres)
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point in metres
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns true if both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Antenna, cell centroids and receivers for a single run.
///
/// Centroid 0 is the serving cell; centroids 1..7 are the co-channel
/// neighbours used for interference. Receivers are evaluated in order and
/// the surviving ones keep that order in the result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometrySet {
    /// Serving antenna position
    pub antenna: Point,
    /// Cell centroids, serving cell first
    pub centroids: Vec<Point>,
    /// Receiver positions
    pub receivers: Vec<Point>,
}

impl GeometrySet {
    /// Creates a validated geometry set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if the centroid count differs from
    /// [`CELL_COUNT`] or any coordinate is not finite.
    pub fn new(antenna: Point, centroids: Vec<Point>, receivers: Vec<Point>) -> Result<Self> {
        let geometry = Self {
            antenna,
            centroids,
            receivers,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Checks the structural invariants of the set.
    pub fn validate(&self) -> Result<()> {
        if self.centroids.len() != CELL_COUNT {
            return Err(Error::InvalidGeometry(format!(
                "expected {} centroids, got {}",
                CELL_COUNT,
                self.centroids.len()
            )));
        }
        if !self.antenna.is_finite() {
            return Err(Error::InvalidGeometry(format!(
                "antenna position {} is not finite",
                self.antenna
            )));
        }
        if let Some(i) = self.centroids.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidGeometry(format!("centroid {i} is not finite")));
        }
        if let Some(i) = self.receivers.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidGeometry(format!("receiver {i} is not finite")));
        }
        Ok(())
    }

    /// Centroids of the interfering neighbour cells
    pub fn neighbour_centroids(&self) -> &[Point] {
        self.centroids.get(SERVING_CELL_INDEX + 1..).unwrap_or(&[])
    }
}
