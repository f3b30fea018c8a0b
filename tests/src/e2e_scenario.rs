//! End-to-End Scenario Tests for cellbudget
//!
//! Each scenario runs the full pipeline over the reference layout (seven
//! 4 km cells, 20 receivers every 200 m along +x) and checks the result
//! table against reference values.

use cellbudget_common::Error;
use cellbudget_sim::{ResultRow, ResultTable};
use integration_tests::{
    hata_link, init_test_logging, rural_macro_link, urban_macro_link, urban_micro_link,
    TestScenario,
};

fn first_and_last(table: &ResultTable) -> (ResultRow, ResultRow) {
    let first = table.row(0).expect("table has rows");
    let last = table.row(table.len() - 1).expect("table has rows");
    (first, last)
}

fn assert_columns_aligned(table: &ResultTable) {
    for name in ResultTable::FIELD_NAMES {
        assert_eq!(
            table.field(name).map(<[f64]>::len),
            Some(table.len()),
            "column {name}"
        );
    }
}

/// Okumura-Hata drops the five receivers closer than 1 km.
#[test]
fn test_e2e_okumura_hata() {
    init_test_logging();
    let table = TestScenario::new(0.9, hata_link()).run().unwrap();

    assert_eq!(table.len(), 15);
    assert_columns_aligned(&table);

    let (first, last) = first_and_last(&table);
    assert_eq!(first.distance, 1000.0);
    assert_eq!(first.loss, 124.69);
    assert_eq!(first.received_power, -59.69);
    assert_eq!(first.snr, 41.13);
    assert_eq!(first.capacity, 107935.52);
    assert_eq!(first.interference_power, -531.7);
    assert_eq!(first.sinr, 41.13);

    assert_eq!(last.distance, 3800.0);
    assert_eq!(last.loss, 144.64);
    assert_eq!(last.interference_power, -532.1);
    assert_eq!(last.sinr, 21.18);
}

/// Urban macro keeps everything but the receiver on the antenna.
#[test]
fn test_e2e_urban_macro() {
    init_test_logging();
    let table = TestScenario::new(3.5, urban_macro_link()).run().unwrap();

    assert_eq!(table.len(), 19);
    assert_columns_aligned(&table);

    let (first, last) = first_and_last(&table);
    assert_eq!(first.distance, 200.0);
    assert_eq!(first.loss, 114.65);
    assert_eq!(first.eirp, 62.0);
    assert_eq!(first.noise, -100.82);
    assert_eq!(first.snr, 51.17);
    assert_eq!(first.capacity, 114102.97);
    assert_eq!(first.interference_power, -561.0);

    assert_eq!(last.loss, 164.32);
    assert_eq!(last.snr, 1.5);
    assert_eq!(last.capacity, 26438.56);
    assert_eq!(last.interference_power, -589.24);
}

#[test]
fn test_e2e_urban_macro_narrow_channel() {
    let table = TestScenario::new(3.5, urban_macro_link())
        .with_bandwidth(10.0)
        .run()
        .unwrap();

    let row = table.row(9).unwrap();
    assert_eq!(row.distance, 2000.0);
    assert_eq!(row.bandwidth, 10.0);
    assert_eq!(row.loss, 153.43);
    assert_eq!(row.noise, -103.83);
    assert_eq!(row.snr, 15.4);
    assert_eq!(row.capacity, 40356.24);
}

#[test]
fn test_e2e_urban_micro() {
    init_test_logging();
    let table = TestScenario::new(3.5, urban_micro_link()).run().unwrap();

    assert_eq!(table.len(), 19);
    let (first, last) = first_and_last(&table);
    assert_eq!(first.loss, 115.49);
    assert_eq!(first.capacity, 113634.61);
    assert_eq!(first.interference_power, -604.78);
    assert_eq!(last.loss, 160.36);
    assert_eq!(last.snr, 5.46);
    assert_eq!(last.interference_power, -611.14);
}

/// At 28 GHz the far receivers fall below the noise floor.
#[test]
fn test_e2e_urban_micro_mmwave() {
    let table = TestScenario::new(28.0, urban_micro_link())
        .with_bandwidth(100.0)
        .run()
        .unwrap();

    let (first, last) = first_and_last(&table);
    assert_eq!(first.loss, 134.73);
    assert_eq!(first.noise, -93.83);
    assert_eq!(first.capacity, 464961.55);

    assert_eq!(last.received_power, -114.59);
    assert_eq!(last.snr, 0.0);
    assert_eq!(last.capacity, 0.0);
    assert_eq!(last.sinr, -20.76);
}

/// Rural neighbours beyond the NLOS envelope contribute nothing, so close
/// receivers see a 0 dBm interference total.
#[test]
fn test_e2e_rural_macro() {
    init_test_logging();
    let table = TestScenario::new(3.5, rural_macro_link()).run().unwrap();

    assert_eq!(table.len(), 19);
    let (first, last) = first_and_last(&table);
    assert_eq!(first.loss, 90.19);
    assert_eq!(first.snr, 75.63);
    assert_eq!(first.interference_power, 0.0);
    assert_eq!(first.sinr, -25.19);

    assert_eq!(last.loss, 151.27);
    assert_eq!(last.interference_power, -175.12);
    assert_eq!(last.sinr, 14.55);

    let silent = table.interference_power().iter().filter(|p| **p == 0.0).count();
    assert_eq!(silent, 11);
}

#[test]
fn test_e2e_parallel_matches_sequential() {
    for scenario in [
        TestScenario::new(0.9, hata_link()),
        TestScenario::new(3.5, urban_macro_link()),
        TestScenario::new(28.0, urban_micro_link()),
        TestScenario::new(3.5, rural_macro_link()),
    ] {
        assert_eq!(scenario.run().unwrap(), scenario.run_parallel().unwrap());
    }
}

#[test]
fn test_e2e_distances_in_receiver_order() {
    let table = TestScenario::new(3.5, urban_macro_link()).run().unwrap();
    let expected: Vec<f64> = (1..20).map(|i| i as f64 * 200.0).collect();
    assert_eq!(table.distance(), expected);
}

#[test]
fn test_e2e_json_shape() {
    let table = TestScenario::new(0.9, hata_link()).run().unwrap();
    let value = serde_json::to_value(&table).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), ResultTable::FIELD_NAMES.len());
    for name in ResultTable::FIELD_NAMES {
        assert_eq!(object[name].as_array().unwrap().len(), 15);
    }
}

#[test]
fn test_e2e_invalid_inputs() {
    let scenario = TestScenario::new(0.1, hata_link());
    assert!(matches!(scenario.run(), Err(Error::InvalidFrequency(_))));

    let mut no_city = hata_link();
    no_city.city_type = None;
    let scenario = TestScenario::new(0.9, no_city);
    assert!(matches!(scenario.run(), Err(Error::InvalidCityType(_))));

    let mut suburban = urban_macro_link();
    suburban.area_type = cellbudget_common::AreaType::Suburban;
    let scenario = TestScenario::new(3.5, suburban);
    assert!(matches!(
        scenario.run(),
        Err(Error::UnsupportedEnvironment { .. })
    ));
}
