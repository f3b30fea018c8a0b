//! Simulation orchestrator
//!
//! Runs the per-receiver pipeline for one frequency and bandwidth:
//!
//! ```text
//! receiver ─► distance ─► path loss ─► received power ─► SNR ─► capacity
//!                 │            │
//!                 │            └─ None: receiver dropped
//!                 └──────────────► interference ─► SINR ─► ResultRow
//! ```
//!
//! The propagation model is selected once per run. Receivers are
//! independent of each other, so [`Simulator::run_parallel`] spreads them
//! over the rayon pool and returns exactly what [`Simulator::run`] returns.

use rayon::prelude::*;
use tracing::{debug, info, trace};

use cellbudget_common::{
    ensure_positive, round2, GeometrySet, LinkParameters, Point, Result,
};
use cellbudget_propagation::PropagationModel;

use crate::interference::InterferenceAggregator;
use crate::link_budget::{capacity, snr, thermal_noise, LinkBudget};
use crate::results::{ResultRow, ResultTable};
use crate::sinr::sinr;

/// Computes the result table for one frequency and bandwidth.
///
/// Receivers whose distance to the antenna falls outside the selected
/// model's validity window, or for which the model has no loss, are left
/// out. Surviving receivers keep their input order.
///
/// # Errors
///
/// - [`cellbudget_common::Error::InvalidFrequency`] outside [0.15, 100] GHz
/// - [`cellbudget_common::Error::InvalidCityType`] and
///   [`cellbudget_common::Error::UnsupportedEnvironment`] from model
///   selection
/// - [`cellbudget_common::Error::InvalidParameter`] for non-positive
///   bandwidth, heights or temperature
/// - [`cellbudget_common::Error::InvalidGeometry`] for a malformed layout
pub fn simulate(
    frequency_ghz: f64,
    bandwidth_mhz: f64,
    params: &LinkParameters,
    geometry: &GeometrySet,
) -> Result<ResultTable> {
    Simulator::new(params, geometry).run(frequency_ghz, bandwidth_mhz)
}

/// Link budget simulator over a fixed geometry and parameter set.
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    params: &'a LinkParameters,
    geometry: &'a GeometrySet,
}

impl<'a> Simulator<'a> {
    /// Creates a simulator
    pub fn new(params: &'a LinkParameters, geometry: &'a GeometrySet) -> Self {
        Self { params, geometry }
    }

    /// Evaluates every receiver sequentially.
    pub fn run(&self, frequency_ghz: f64, bandwidth_mhz: f64) -> Result<ResultTable> {
        let model = self.prepare(frequency_ghz, bandwidth_mhz)?;
        let pipeline = ReceiverPipeline::new(&model, self, frequency_ghz, bandwidth_mhz);

        let mut table = ResultTable::with_capacity(self.geometry.receivers.len());
        for (index, receiver) in self.geometry.receivers.iter().enumerate() {
            if let Some(row) = pipeline.evaluate(index, receiver)? {
                table.push(row);
            }
        }

        self.finish(&table);
        Ok(table)
    }

    /// Evaluates receivers on the rayon thread pool.
    ///
    /// Rows are re-assembled in receiver order, so the result is identical
    /// to [`Simulator::run`].
    pub fn run_parallel(&self, frequency_ghz: f64, bandwidth_mhz: f64) -> Result<ResultTable> {
        let model = self.prepare(frequency_ghz, bandwidth_mhz)?;
        let pipeline = ReceiverPipeline::new(&model, self, frequency_ghz, bandwidth_mhz);

        let rows = self
            .geometry
            .receivers
            .par_iter()
            .enumerate()
            .map(|(index, receiver)| pipeline.evaluate(index, receiver))
            .collect::<Result<Vec<Option<ResultRow>>>>()?;

        let table: ResultTable = rows.into_iter().flatten().collect();
        self.finish(&table);
        Ok(table)
    }

    /// Selects the model and validates inputs before any receiver is touched.
    fn prepare(&self, frequency_ghz: f64, bandwidth_mhz: f64) -> Result<PropagationModel> {
        let model = PropagationModel::for_link(frequency_ghz, self.params)?;
        ensure_positive("bandwidth", bandwidth_mhz)?;
        self.params.validate()?;
        self.geometry.validate()?;

        info!(
            frequency_ghz,
            bandwidth_mhz,
            receivers = self.geometry.receivers.len(),
            "Running {}",
            model
        );
        Ok(model)
    }

    fn finish(&self, table: &ResultTable) {
        info!(
            retained = table.len(),
            dropped = self.geometry.receivers.len() - table.len(),
            "Simulation complete"
        );
    }
}

/// Per-run constants shared by every receiver evaluation
struct ReceiverPipeline<'a> {
    model: &'a PropagationModel,
    interference: InterferenceAggregator<'a>,
    budget: LinkBudget,
    antenna: Point,
    neighbours: &'a [Point],
    frequency_ghz: f64,
    bandwidth_mhz: f64,
    tx_height: f64,
    rx_height: f64,
    noise: f64,
}

impl<'a> ReceiverPipeline<'a> {
    fn new(
        model: &'a PropagationModel,
        simulator: &Simulator<'a>,
        frequency_ghz: f64,
        bandwidth_mhz: f64,
    ) -> Self {
        let (params, geometry) = (simulator.params, simulator.geometry);
        Self {
            model,
            interference: InterferenceAggregator::new(model, params),
            budget: LinkBudget::from_params(params),
            antenna: geometry.antenna,
            neighbours: geometry.neighbour_centroids(),
            frequency_ghz,
            bandwidth_mhz,
            tx_height: params.tx_height,
            rx_height: params.rx_height,
            noise: thermal_noise(bandwidth_mhz, params.noise_temperature_k),
        }
    }

    /// Metrics for one receiver, or `None` if it is dropped.
    fn evaluate(&self, index: usize, receiver: &Point) -> Result<Option<ResultRow>> {
        let distance = round2(self.antenna.distance_to(receiver));

        let Some(loss) =
            self.model
                .path_loss(self.frequency_ghz, distance, self.tx_height, self.rx_height)?
        else {
            debug!(
                receiver = index,
                distance,
                window = %self.model.validity(),
                "No path loss, dropping receiver"
            );
            return Ok(None);
        };

        let power = self.budget.received_power(loss);
        let snr = snr(power.received_power, self.noise);
        let capacity = capacity(self.bandwidth_mhz, snr);
        let interference_power =
            self.interference
                .aggregate(self.frequency_ghz, receiver, self.neighbours)?;
        let sinr = sinr(power.received_power, self.noise, interference_power);

        let row = ResultRow {
            frequency: self.frequency_ghz,
            bandwidth: self.bandwidth_mhz,
            distance,
            loss,
            eirp: power.eirp,
            received_power: power.received_power,
            noise: self.noise,
            snr,
            capacity,
            interference_power,
            sinr,
        };
        trace!(receiver = index, ?row, "Receiver evaluated");
        Ok(Some(row))
    }
}
