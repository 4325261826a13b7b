use orbitsim::{Scenario, ScenarioConfig, Simulation};
use orbitsim::bench_step;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Orbit simulation of the inner solar system")]
struct Args {
    /// Scenario YAML; bare names are looked up in the crate's `scenarios/` directory.
    /// Defaults to the built-in solar system
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Run without a window and log the final state
    #[arg(long)]
    headless: bool,

    /// Number of steps for a headless run
    #[arg(long, default_value_t = 365)]
    steps: u64,

    /// Time `step()` for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

fn resolve_scenario_path(file: PathBuf) -> PathBuf {
    if file.exists() {
        return file;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
}

// load here to keep main clean
fn load_simulation(file: Option<PathBuf>) -> Result<Simulation> {
    let Some(file) = file else {
        return Scenario::default_simulation().context("failed to build default solar system");
    };
    let path = resolve_scenario_path(file);
    let cfg = ScenarioConfig::from_path(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    Scenario::build(cfg).with_context(|| format!("invalid scenario {}", path.display()))
}

fn run_headless(mut sim: Simulation, steps: u64) -> Result<()> {
    sim.run(steps).context("simulation step failed")?;

    info!("{} steps, {:.1} days simulated", sim.step_count(), sim.time() / 86400.0);
    for (i, b) in sim.bodies().iter().enumerate() {
        let name = b.name().map(str::to_owned).unwrap_or_else(|| format!("body {i}"));
        let p = b.position();
        match b.distance_to_anchor() {
            Some(d) => info!("{name}: x = ({:.4e}, {:.4e}) m, {:.2} km from anchor", p.x, p.y, d / 1000.0),
            None => info!("{name}: x = ({:.4e}, {:.4e}) m", p.x, p.y),
        }
    }
    info!("total energy {:.6e} J, momentum {:.6e} kg m/s", sim.total_energy(), sim.total_momentum().norm());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    #[cfg(feature = "viewer")]
    let windowed = !args.headless && !args.bench;
    #[cfg(not(feature = "viewer"))]
    let windowed = false;

    // bevy's LogPlugin owns the logger in windowed mode
    if !windowed {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let sim = load_simulation(args.file)?;

    if windowed {
        #[cfg(feature = "viewer")]
        orbitsim::run_2d(sim);
        return Ok(());
    }

    if !args.headless {
        warn!("built without the `viewer` feature, running headless");
    }
    run_headless(sim, args.steps)
}
