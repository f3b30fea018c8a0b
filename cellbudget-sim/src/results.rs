//! Columnar simulation results

use serde::{Deserialize, Serialize};

use cellbudget_common::{Error, Result};

/// Metrics of one retained receiver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Carrier frequency (GHz)
    pub frequency: f64,
    /// Channel bandwidth (MHz)
    pub bandwidth: f64,
    /// Distance to the serving antenna (m)
    pub distance: f64,
    /// Path loss (dB)
    pub loss: f64,
    /// EIRP (dBm)
    pub eirp: f64,
    /// Received power (dBm)
    pub received_power: f64,
    /// Thermal noise (dBm)
    pub noise: f64,
    /// Signal to noise ratio (dB)
    pub snr: f64,
    /// Channel capacity (kbit/s)
    pub capacity: f64,
    /// Aggregated co-channel interference (dBm)
    pub interference_power: f64,
    /// Signal to interference plus noise ratio (dB)
    pub sinr: f64,
}

/// Field name to value sequence, one entry per retained receiver.
///
/// All columns always have the same length: rows are only added through
/// [`ResultTable::push`], and deserialization rejects ragged input.
/// Serializes as a JSON object keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResultTable")]
pub struct ResultTable {
    frequency: Vec<f64>,
    bandwidth: Vec<f64>,
    distance: Vec<f64>,
    loss: Vec<f64>,
    eirp: Vec<f64>,
    received_power: Vec<f64>,
    noise: Vec<f64>,
    snr: Vec<f64>,
    capacity: Vec<f64>,
    interference_power: Vec<f64>,
    sinr: Vec<f64>,
}

/// Unchecked wire form of [`ResultTable`]
#[derive(Deserialize)]
struct RawResultTable {
    frequency: Vec<f64>,
    bandwidth: Vec<f64>,
    distance: Vec<f64>,
    loss: Vec<f64>,
    eirp: Vec<f64>,
    received_power: Vec<f64>,
    noise: Vec<f64>,
    snr: Vec<f64>,
    capacity: Vec<f64>,
    interference_power: Vec<f64>,
    sinr: Vec<f64>,
}

impl TryFrom<RawResultTable> for ResultTable {
    type Error = Error;

    fn try_from(raw: RawResultTable) -> Result<Self> {
        let table = ResultTable {
            frequency: raw.frequency,
            bandwidth: raw.bandwidth,
            distance: raw.distance,
            loss: raw.loss,
            eirp: raw.eirp,
            received_power: raw.received_power,
            noise: raw.noise,
            snr: raw.snr,
            capacity: raw.capacity,
            interference_power: raw.interference_power,
            sinr: raw.sinr,
        };

        let rows = table.len();
        for name in Self::FIELD_NAMES {
            let len = table.field(name).map_or(0, <[f64]>::len);
            if len != rows {
                return Err(Error::InvalidParameter(format!(
                    "column {name} has {len} values, expected {rows}"
                )));
            }
        }
        Ok(table)
    }
}

impl ResultTable {
    /// Column names in output order
    pub const FIELD_NAMES: [&'static str; 11] = [
        "frequency",
        "bandwidth",
        "distance",
        "loss",
        "eirp",
        "received_power",
        "noise",
        "snr",
        "capacity",
        "interference_power",
        "sinr",
    ];

    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `capacity` rows
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frequency: Vec::with_capacity(capacity),
            bandwidth: Vec::with_capacity(capacity),
            distance: Vec::with_capacity(capacity),
            loss: Vec::with_capacity(capacity),
            eirp: Vec::with_capacity(capacity),
            received_power: Vec::with_capacity(capacity),
            noise: Vec::with_capacity(capacity),
            snr: Vec::with_capacity(capacity),
            capacity: Vec::with_capacity(capacity),
            interference_power: Vec::with_capacity(capacity),
            sinr: Vec::with_capacity(capacity),
        }
    }

    /// Appends one value to every column
    pub fn push(&mut self, row: ResultRow) {
        self.frequency.push(row.frequency);
        self.bandwidth.push(row.bandwidth);
        self.distance.push(row.distance);
        self.loss.push(row.loss);
        self.eirp.push(row.eirp);
        self.received_power.push(row.received_power);
        self.noise.push(row.noise);
        self.snr.push(row.snr);
        self.capacity.push(row.capacity);
        self.interference_power.push(row.interference_power);
        self.sinr.push(row.sinr);
    }

    /// Number of retained receivers
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    /// Returns true if no receiver was retained
    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }

    /// Carrier frequency (GHz)
    pub fn frequency(&self) -> &[f64] {
        &self.frequency
    }

    /// Channel bandwidth (MHz)
    pub fn bandwidth(&self) -> &[f64] {
        &self.bandwidth
    }

    /// Distance to the serving antenna (m)
    pub fn distance(&self) -> &[f64] {
        &self.distance
    }

    /// Path loss (dB)
    pub fn loss(&self) -> &[f64] {
        &self.loss
    }

    /// EIRP (dBm)
    pub fn eirp(&self) -> &[f64] {
        &self.eirp
    }

    /// Received power (dBm)
    pub fn received_power(&self) -> &[f64] {
        &self.received_power
    }

    /// Thermal noise (dBm)
    pub fn noise(&self) -> &[f64] {
        &self.noise
    }

    /// Signal to noise ratio (dB)
    pub fn snr(&self) -> &[f64] {
        &self.snr
    }

    /// Channel capacity (kbit/s)
    pub fn capacity(&self) -> &[f64] {
        &self.capacity
    }

    /// Aggregated co-channel interference (dBm)
    pub fn interference_power(&self) -> &[f64] {
        &self.interference_power
    }

    /// Signal to interference plus noise ratio (dB)
    pub fn sinr(&self) -> &[f64] {
        &self.sinr
    }

    /// Column by field name
    pub fn field(&self, name: &str) -> Option<&[f64]> {
        let column = match name {
            "frequency" => &self.frequency,
            "bandwidth" => &self.bandwidth,
            "distance" => &self.distance,
            "loss" => &self.loss,
            "eirp" => &self.eirp,
            "received_power" => &self.received_power,
            "noise" => &self.noise,
            "snr" => &self.snr,
            "capacity" => &self.capacity,
            "interference_power" => &self.interference_power,
            "sinr" => &self.sinr,
            _ => return None,
        };
        Some(column.as_slice())
    }

    /// Row at `index`
    pub fn row(&self, index: usize) -> Option<ResultRow> {
        Some(ResultRow {
            frequency: *self.frequency.get(index)?,
            bandwidth: *self.bandwidth.get(index)?,
            distance: *self.distance.get(index)?,
            loss: *self.loss.get(index)?,
            eirp: *self.eirp.get(index)?,
            received_power: *self.received_power.get(index)?,
            noise: *self.noise.get(index)?,
            snr: *self.snr.get(index)?,
            capacity: *self.capacity.get(index)?,
            interference_power: *self.interference_power.get(index)?,
            sinr: *self.sinr.get(index)?,
        })
    }

    /// Rows in receiver order
    pub fn rows(&self) -> impl Iterator<Item = ResultRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }
}

impl FromIterator<ResultRow> for ResultTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        let mut table = ResultTable::new();
        for row in iter {
            table.push(row);
        }
        table
    }
}
