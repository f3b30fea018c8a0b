//! Cross-crate integration tests
//!
//! Checks that the simulator agrees with the building blocks it composes:
//! - propagation models <-> simulator losses
//! - link budget helpers <-> simulator power, SNR and capacity
//! - interference aggregation <-> simulator interference column
//! - configuration files <-> geometry generation and simulation

use std::io::Write;
use std::path::PathBuf;

use cellbudget_common::round2;
use cellbudget_propagation::PropagationModel;
use cellbudget_sim::{
    capacity, load_and_validate_simulation_config, load_simulation_config_from_str, simulate,
    sinr, snr, thermal_noise, InterferenceAggregator, LinkBudget,
};
use integration_tests::{
    assert_close, hata_link, init_test_logging, reference_geometry, rural_macro_link,
    urban_macro_link, urban_micro_link, TestResult, TestScenario, DEFAULT_TOLERANCE,
};

fn config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../config")
}

// ============================================================================
// Propagation <-> simulator
// ============================================================================

#[test]
fn test_losses_match_selected_model() -> TestResult {
    for (frequency, link) in [
        (0.9, hata_link()),
        (3.5, urban_macro_link()),
        (3.5, urban_micro_link()),
        (3.5, rural_macro_link()),
    ] {
        let scenario = TestScenario::new(frequency, link.clone());
        let table = scenario.run()?;
        let model = PropagationModel::for_link(frequency, &link)?;

        for row in table.rows() {
            let loss = model.path_loss(frequency, row.distance, link.tx_height, link.rx_height)?;
            assert_eq!(loss, Some(row.loss), "{} at {} m", model, row.distance);
        }
    }
    Ok(())
}

#[test]
fn test_dropped_receivers_are_outside_window() -> TestResult {
    let link = hata_link();
    let geometry = reference_geometry();
    let table = simulate(0.9, 20.0, &link, &geometry)?;
    let window = PropagationModel::for_link(0.9, &link)?.validity();

    let kept: Vec<f64> = geometry
        .receivers
        .iter()
        .map(|r| round2(geometry.antenna.distance_to(r)))
        .filter(|d| window.contains(*d))
        .collect();
    assert_eq!(table.distance(), kept);
    Ok(())
}

// ============================================================================
// Link budget <-> simulator
// ============================================================================

#[test]
fn test_power_chain_matches_link_budget() -> TestResult {
    let link = urban_macro_link();
    let table = TestScenario::new(3.5, link.clone()).run()?;
    let budget = LinkBudget::from(&link);
    let noise = thermal_noise(20.0, link.noise_temperature_k);

    for row in table.rows() {
        let power = budget.received_power(row.loss);
        assert_eq!(row.eirp, power.eirp);
        assert_eq!(row.received_power, power.received_power);
        assert_eq!(row.noise, noise);
        assert_eq!(row.snr, snr(row.received_power, row.noise));
        assert_eq!(row.capacity, capacity(row.bandwidth, row.snr));
        assert_eq!(
            row.sinr,
            sinr(row.received_power, row.noise, row.interference_power)
        );
        assert!(row.snr >= 0.0);
        assert!(row.capacity >= 0.0);
    }
    Ok(())
}

#[test]
fn test_noise_temperature_is_used() -> TestResult {
    let mut link = urban_macro_link();
    link.noise_temperature_k = 290.0;
    let table = TestScenario::new(3.5, link).run()?;
    assert!(table.noise().iter().all(|n| *n == -100.97));
    Ok(())
}

// ============================================================================
// Interference <-> simulator
// ============================================================================

#[test]
fn test_interference_matches_aggregator() -> TestResult {
    let link = urban_micro_link();
    let geometry = reference_geometry();
    let table = simulate(3.5, 20.0, &link, &geometry)?;

    let model = PropagationModel::for_link(3.5, &link)?;
    let aggregator = InterferenceAggregator::new(&model, &link);

    // First receiver sits on the antenna and is dropped
    for (row, receiver) in table.rows().zip(geometry.receivers.iter().skip(1)) {
        let expected = aggregator.aggregate(3.5, receiver, geometry.neighbour_centroids())?;
        assert_close(row.interference_power, expected, DEFAULT_TOLERANCE);
    }
    Ok(())
}

// ============================================================================
// Configuration <-> simulation
// ============================================================================

#[test]
fn test_sample_configs_run() -> TestResult {
    init_test_logging();
    for name in ["urban-macro.yaml", "okumura-hata.yaml", "rural-macro-grid.yaml"] {
        let config = load_and_validate_simulation_config(config_dir().join(name))?;
        let geometry = config.build_geometry()?;
        let table = simulate(config.frequency_ghz, config.bandwidth_mhz, &config.link, &geometry)?;

        assert!(!table.is_empty(), "{name} produced no rows");
        assert!(table.len() <= geometry.receivers.len());
        assert!(table.frequency().iter().all(|f| *f == config.frequency_ghz));
    }
    Ok(())
}

#[test]
fn test_config_file_matches_fixture() -> TestResult {
    let yaml = r#"
frequency_ghz: 3.5
bandwidth_mhz: 20.0
link:
  area_type: urban
  antenna_type: macro
  avg_building_height: 5.0
  avg_street_width: 20.0
  tx_height: 40.0
  rx_height: 1.5
  tx_power: 46.0
  tx_gain: 18.0
  tx_losses: 2.0
  rx_gain: 4.0
  rx_losses: 1.0
geometry:
  antenna: { x: 0.0, y: 0.0 }
  radius_m: 4000.0
"#;
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;

    let config = load_and_validate_simulation_config(file.path())?;
    assert_eq!(config, load_simulation_config_from_str(yaml)?);

    let geometry = config.build_geometry()?;
    let from_file = simulate(config.frequency_ghz, config.bandwidth_mhz, &config.link, &geometry)?;
    let from_fixture = TestScenario::new(3.5, urban_macro_link()).run()?;
    assert_eq!(from_file, from_fixture);
    Ok(())
}
