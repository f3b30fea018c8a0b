//! Link budget simulation over a hexagonal cell cluster
//!
//! For every receiver in the serving cell this crate computes received
//! power, SNR, Shannon capacity, co-channel interference from the six
//! neighbour cells and SINR, and collects the results column-wise.
//!
//! # Example
//!
//! ```rust
//! use cellbudget_common::{LinkParameters, Point};
//! use cellbudget_sim::{generate_geometry, simulate, GeometryConfig};
//!
//! let geometry = generate_geometry(&GeometryConfig::new(Point::new(0.0, 0.0), 4000.0)).unwrap();
//! let table = simulate(3.5, 20.0, &LinkParameters::default(), &geometry).unwrap();
//!
//! assert_eq!(table.len(), table.sinr().len());
//! ```

pub mod config_loader;
pub mod geometry;
pub mod interference;
pub mod link_budget;
pub mod results;
pub mod simulator;
pub mod sinr;

pub use config_loader::{
    load_and_validate_simulation_config, load_simulation_config, load_simulation_config_from_str,
    validate_simulation_config, ConfigError, ConfigValidationError, SimulationConfig,
};
pub use geometry::{
    generate_geometry, hexagon_vertices, layout_geojson, GeometryConfig, ReceiverLayout,
    DEFAULT_NUM_RECEIVERS,
};
pub use interference::InterferenceAggregator;
pub use link_budget::{capacity, snr, thermal_noise, LinkBudget, ReceivedPower, BOLTZMANN_CONSTANT};
pub use results::{ResultRow, ResultTable};
pub use simulator::{simulate, Simulator};
pub use sinr::{dbm_to_watts, sinr};
