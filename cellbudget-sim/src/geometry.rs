//! Hexagonal cell layout generation
//!
//! Builds a seven-cell cluster around the serving antenna and places
//! receivers inside the serving cell. Hexagons are flat-topped: vertex `k`
//! of a cell sits at angle `k·60°` from its centre, so the six neighbours
//! lie `√3·R` away at `30° + k·60°`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use cellbudget_common::{Error, GeometrySet, Point, Result, CELL_COUNT};

/// Default number of receivers per layout
pub const DEFAULT_NUM_RECEIVERS: usize = 20;

/// How receivers are placed in the serving cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiverLayout {
    /// Evenly spaced along the ray from the antenna to the first vertex
    #[default]
    Line,
    /// Lattice over the cell's bounding box, clipped to the cell
    Grid,
}

/// Parameters of the generated cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Serving antenna position (projected metres)
    pub antenna: Point,
    /// Hexagon circumradius (metres)
    pub radius_m: f64,
    /// Receivers on the line, or lattice points per axis for the grid
    #[serde(default = "default_num_receivers")]
    pub num_receivers: usize,
    /// Receiver placement
    #[serde(default)]
    pub layout: ReceiverLayout,
}

fn default_num_receivers() -> usize {
    DEFAULT_NUM_RECEIVERS
}

impl GeometryConfig {
    /// Line layout with the default receiver count
    pub fn new(antenna: Point, radius_m: f64) -> Self {
        Self {
            antenna,
            radius_m,
            num_receivers: DEFAULT_NUM_RECEIVERS,
            layout: ReceiverLayout::default(),
        }
    }

    /// Checks radius and receiver count
    pub fn validate(&self) -> Result<()> {
        if !self.antenna.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "antenna position must be finite, got {}",
                self.antenna
            )));
        }
        if !(self.radius_m.is_finite() && self.radius_m > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "radius_m must be positive, got {}",
                self.radius_m
            )));
        }
        if self.num_receivers == 0 {
            return Err(Error::InvalidParameter(
                "num_receivers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Generates centroids and receivers for a seven-cell cluster.
pub fn generate_geometry(config: &GeometryConfig) -> Result<GeometrySet> {
    config.validate()?;

    let centroids = cluster_centroids(&config.antenna, config.radius_m);
    let receivers = match config.layout {
        ReceiverLayout::Line => line_receivers(&config.antenna, config.radius_m, config.num_receivers),
        ReceiverLayout::Grid => grid_receivers(&config.antenna, config.radius_m, config.num_receivers),
    };

    debug!(
        antenna = %config.antenna,
        radius_m = config.radius_m,
        layout = ?config.layout,
        receivers = receivers.len(),
        "Generated cell cluster"
    );

    GeometrySet::new(config.antenna, centroids, receivers)
}

/// Serving centroid first, then neighbours counter-clockwise from 30°
fn cluster_centroids(center: &Point, radius: f64) -> Vec<Point> {
    let spacing = 3f64.sqrt() * radius;
    let mut centroids = Vec::with_capacity(CELL_COUNT);
    centroids.push(*center);
    for k in 0..CELL_COUNT - 1 {
        let angle = (30.0 + 60.0 * k as f64).to_radians();
        centroids.push(Point::new(
            center.x + spacing * angle.cos(),
            center.y + spacing * angle.sin(),
        ));
    }
    centroids
}

fn line_receivers(center: &Point, radius: f64, count: usize) -> Vec<Point> {
    // First vertex lies on +x, so the ray has length R
    let step = (radius / count as f64).floor();
    (0..count)
        .map(|i| Point::new(center.x + step * i as f64, center.y))
        .collect()
}

fn grid_receivers(center: &Point, radius: f64, count: usize) -> Vec<Point> {
    let half_height = 3f64.sqrt() / 2.0 * radius;
    let xs = linspace(center.x - radius, center.x + radius, count);
    let ys = linspace(center.y - half_height, center.y + half_height, count);

    let mut receivers = Vec::new();
    for x in &xs {
        for y in &ys {
            let point = Point::new(*x, *y);
            if hexagon_contains(center, radius, &point) {
                receivers.push(point);
            }
        }
    }
    receivers
}

/// Closed ring of the flat-topped hexagon around `center`: six vertices
/// counter-clockwise from `0°`, then the first vertex again.
pub fn hexagon_vertices(center: &Point, radius: f64) -> Vec<Point> {
    (0..=6)
        .map(|k| {
            let angle = (60.0 * (k % 6) as f64).to_radians();
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Planar GeoJSON `FeatureCollection` of the cluster.
///
/// Emits one `Polygon` per cell, then the cell centroids, then the
/// receivers. Every feature carries a `kind` property (`site`, `centroid`
/// or `receiver`) and an `index`. Coordinates stay in projected metres;
/// no CRS member is written.
pub fn layout_geojson(geometry: &GeometrySet, radius_m: f64) -> Value {
    let sites = geometry.centroids.iter().enumerate().map(|(index, centroid)| {
        let ring: Vec<[f64; 2]> = hexagon_vertices(centroid, radius_m)
            .iter()
            .map(|p| [p.x, p.y])
            .collect();
        feature("site", index, json!({ "type": "Polygon", "coordinates": [ring] }))
    });
    let centroids = geometry
        .centroids
        .iter()
        .enumerate()
        .map(|(index, p)| feature("centroid", index, point_geometry(p)));
    let receivers = geometry
        .receivers
        .iter()
        .enumerate()
        .map(|(index, p)| feature("receiver", index, point_geometry(p)));

    let features: Vec<Value> = sites.chain(centroids).chain(receivers).collect();
    json!({ "type": "FeatureCollection", "features": features })
}

fn point_geometry(point: &Point) -> Value {
    json!({ "type": "Point", "coordinates": [point.x, point.y] })
}

fn feature(kind: &str, index: usize, geometry: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": { "kind": kind, "index": index },
    })
}

/// Strict interior test; points on an edge are outside
fn hexagon_contains(center: &Point, radius: f64, point: &Point) -> bool {
    let sqrt3 = 3f64.sqrt();
    let dx = (point.x - center.x).abs();
    let dy = (point.y - center.y).abs();
    dy < sqrt3 / 2.0 * radius && sqrt3 * dx + dy < sqrt3 * radius
}

/// `count` evenly spaced values over `[start, stop]`, endpoints included
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = stop;
            values
        }
    }
}
