use gravsim::{Scenario, ScenarioConfig};
use gravsim::{run_2d, run_headless};
use gravsim::bench_step;

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "moons.yaml")]
    file_name: String,

    /// Run this many frames without a window, then exit
    #[arg(long)]
    headless: Option<u64>,

    /// Elapsed seconds per frame in headless mode
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f64,

    /// Time the integrator step instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)
        .with_context(|| format!("invalid scenario {}", args.file_name))?;

    match args.headless {
        Some(frames) => run_headless(scenario.simulation, frames, args.frame_dt),
        None => run_2d(scenario.simulation, scenario.view),
    }

    Ok(())
}
