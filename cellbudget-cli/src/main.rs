//! cellbudget CLI tool

mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cellbudget_common::{init_logging, LogLevel};
use cellbudget_sim::{
    layout_geojson, load_simulation_config, validate_simulation_config, ResultTable,
    SimulationConfig, Simulator,
};

use output::{render, OutputFormat};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cellbudget")]
#[command(author, version, about = "RF link budget simulator", long_about = None)]
pub struct Args {
    /// Simulation configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// Override the carrier frequency (GHz)
    #[arg(short = 'f', long = "frequency", value_name = "GHZ")]
    pub frequency_ghz: Option<f64>,

    /// Override the channel bandwidth (MHz)
    #[arg(short = 'b', long = "bandwidth", value_name = "MHZ")]
    pub bandwidth_mhz: Option<f64>,

    /// Output encoding
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write results to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the cell layout as planar GeoJSON
    #[arg(long = "geojson", value_name = "FILE")]
    pub geojson: Option<PathBuf>,

    /// Evaluate receivers on all cores
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args)?;
    init_logging(args.log_level.or(config.log_level).unwrap_or_default());

    let table = run_simulation(&config, args.parallel)?;
    let rendered = render(&table, args.format)?;

    match &args.output {
        Some(path) => write_output(path, &rendered)?,
        None => print!("{}", rendered),
    }
    if let Some(path) = &args.geojson {
        write_layout(&config, path)?;
    }
    Ok(())
}

/// Loads the config file, applies command-line overrides and validates.
fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = load_simulation_config(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    if let Some(frequency) = args.frequency_ghz {
        config.frequency_ghz = frequency;
    }
    if let Some(bandwidth) = args.bandwidth_mhz {
        config.bandwidth_mhz = bandwidth;
    }

    validate_simulation_config(&config)
        .with_context(|| format!("Invalid configuration in {}", args.config.display()))?;
    Ok(config)
}

fn run_simulation(config: &SimulationConfig, parallel: bool) -> Result<ResultTable> {
    let geometry = config
        .build_geometry()
        .context("Failed to generate cell geometry")?;
    let simulator = Simulator::new(&config.link, &geometry);

    let table = if parallel {
        simulator.run_parallel(config.frequency_ghz, config.bandwidth_mhz)
    } else {
        simulator.run(config.frequency_ghz, config.bandwidth_mhz)
    }
    .context("Simulation failed")?;

    info!(rows = table.len(), "Results ready");
    Ok(table)
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "Results written");
    Ok(())
}

fn write_layout(config: &SimulationConfig, path: &Path) -> Result<()> {
    let geometry = config
        .build_geometry()
        .context("Failed to generate cell geometry")?;
    let layout = layout_geojson(&geometry, config.geometry.radius_m);
    let rendered = serde_json::to_string_pretty(&layout).context("Failed to encode layout")?;
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "Layout written");
    Ok(())
}
