//! Co-channel interference from neighbour cells
//!
//! Every neighbour centroid is treated as a transmitter with the serving
//! cell's power chain. Neighbour links are evaluated with the model's
//! unguarded loss, so distances outside the validity window still count.

use tracing::debug;

use cellbudget_common::{round2, LinkParameters, Point, Result, SERVING_CELL_INDEX};
use cellbudget_propagation::PropagationModel;

use crate::link_budget::LinkBudget;

/// Sums interference at a receiver from all neighbour cells.
#[derive(Debug, Clone, Copy)]
pub struct InterferenceAggregator<'a> {
    model: &'a PropagationModel,
    budget: LinkBudget,
    tx_height: f64,
    rx_height: f64,
}

impl<'a> InterferenceAggregator<'a> {
    /// Creates an aggregator for the selected model and run parameters
    pub fn new(model: &'a PropagationModel, params: &LinkParameters) -> Self {
        Self {
            model,
            budget: LinkBudget::from_params(params),
            tx_height: params.tx_height,
            rx_height: params.rx_height,
        }
    }

    /// Interference power at `receiver` in dBm.
    ///
    /// `neighbours` are the interfering cell centroids without the serving
    /// cell (see [`cellbudget_common::GeometrySet::neighbour_centroids`]).
    /// Received powers are added as dBm values, not as linear powers.
    /// Neighbours for which the model has no loss contribute nothing.
    ///
    /// # Errors
    ///
    /// Propagates [`cellbudget_common::Error::InvalidParameter`] if the
    /// receiver coincides with a neighbour centroid.
    pub fn aggregate(&self, frequency_ghz: f64, receiver: &Point, neighbours: &[Point]) -> Result<f64> {
        let mut interference = 0.0;

        for (index, transmitter) in neighbours.iter().enumerate() {
            let cell = SERVING_CELL_INDEX + 1 + index;
            let distance = round2(receiver.distance_to(transmitter));
            let loss = self
                .model
                .unguarded_loss(frequency_ghz, distance, self.tx_height, self.rx_height)?;

            match loss {
                Some(loss) => {
                    interference += self.budget.received_power(loss).received_power;
                }
                None => {
                    debug!(cell, distance, "No loss for interferer, skipping");
                }
            }
        }

        Ok(round2(interference))
    }
}
