//! Test fixtures and configuration helpers
//!
//! Provides pre-configured link parameters for each propagation model and
//! the reference cell layout used across the end-to-end tests.

use cellbudget_common::{
    AntennaType, AreaType, CityType, GeometrySet, LinkParameters, Point, Result,
};
use cellbudget_sim::{generate_geometry, GeometryConfig, ReceiverLayout, ResultTable, Simulator};

/// Cell radius of the reference layout (m)
pub const REFERENCE_RADIUS_M: f64 = 4000.0;

/// Receivers on the reference line
pub const REFERENCE_RECEIVERS: usize = 20;

/// Power chain shared by every preset: 46 dBm, 18 dBi, 2 dB feeder loss,
/// 4 dBi receive gain, 1 dB receive loss.
fn base_link(area_type: AreaType) -> LinkParameters {
    LinkParameters {
        area_type,
        city_type: None,
        antenna_type: None,
        avg_building_height: Some(5.0),
        avg_street_width: Some(20.0),
        tx_height: 40.0,
        rx_height: 1.5,
        tx_power: 46.0,
        tx_gain: 18.0,
        tx_losses: 2.0,
        rx_gain: 4.0,
        rx_losses: 1.0,
        noise_temperature_k: 300.0,
    }
}

/// Okumura-Hata in a large city
pub fn hata_link() -> LinkParameters {
    LinkParameters {
        city_type: Some(CityType::Large),
        ..base_link(AreaType::Urban)
    }
}

/// ETSI urban macro
pub fn urban_macro_link() -> LinkParameters {
    LinkParameters {
        antenna_type: Some(AntennaType::Macro),
        ..base_link(AreaType::Urban)
    }
}

/// ETSI urban micro
pub fn urban_micro_link() -> LinkParameters {
    LinkParameters {
        antenna_type: Some(AntennaType::Micro),
        ..base_link(AreaType::Urban)
    }
}

/// ETSI rural macro
pub fn rural_macro_link() -> LinkParameters {
    LinkParameters {
        antenna_type: Some(AntennaType::Macro),
        ..base_link(AreaType::Rural)
    }
}

/// Seven 4 km cells around the origin with 20 receivers every 200 m
/// along the +x axis.
pub fn reference_geometry() -> GeometrySet {
    let config = GeometryConfig {
        antenna: Point::new(0.0, 0.0),
        radius_m: REFERENCE_RADIUS_M,
        num_receivers: REFERENCE_RECEIVERS,
        layout: ReceiverLayout::Line,
    };
    match generate_geometry(&config) {
        Ok(geometry) => geometry,
        Err(e) => panic!("reference geometry must be valid: {e}"),
    }
}

/// One frequency/bandwidth/link combination over a layout
#[derive(Debug, Clone)]
pub struct TestScenario {
    /// Carrier frequency (GHz)
    pub frequency_ghz: f64,
    /// Channel bandwidth (MHz)
    pub bandwidth_mhz: f64,
    /// Link parameters
    pub link: LinkParameters,
    /// Cell layout
    pub geometry: GeometrySet,
}

impl TestScenario {
    /// Scenario over the reference layout with a 20 MHz channel
    pub fn new(frequency_ghz: f64, link: LinkParameters) -> Self {
        Self {
            frequency_ghz,
            bandwidth_mhz: 20.0,
            link,
            geometry: reference_geometry(),
        }
    }

    /// Replaces the bandwidth
    pub fn with_bandwidth(mut self, bandwidth_mhz: f64) -> Self {
        self.bandwidth_mhz = bandwidth_mhz;
        self
    }

    /// Runs the scenario sequentially
    pub fn run(&self) -> Result<ResultTable> {
        Simulator::new(&self.link, &self.geometry).run(self.frequency_ghz, self.bandwidth_mhz)
    }

    /// Runs the scenario on the rayon pool
    pub fn run_parallel(&self) -> Result<ResultTable> {
        Simulator::new(&self.link, &self.geometry)
            .run_parallel(self.frequency_ghz, self.bandwidth_mhz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellbudget_common::CELL_COUNT;

    #[test]
    fn test_reference_geometry() {
        let geometry = reference_geometry();
        assert_eq!(geometry.centroids.len(), CELL_COUNT);
        assert_eq!(geometry.receivers.len(), REFERENCE_RECEIVERS);
        assert_eq!(geometry.receivers[1], Point::new(200.0, 0.0));
    }

    #[test]
    fn test_presets_are_valid() {
        for link in [hata_link(), urban_macro_link(), urban_micro_link(), rural_macro_link()] {
            assert!(link.validate().is_ok());
        }
    }

    #[test]
    fn test_scenario_builder() {
        let scenario = TestScenario::new(3.5, urban_macro_link()).with_bandwidth(10.0);
        assert_eq!(scenario.bandwidth_mhz, 10.0);
        assert_eq!(scenario.geometry.receivers.len(), REFERENCE_RECEIVERS);
    }
}
