//! Simulate command: draw a state path from the discretized chain.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, info_span};

use tauchen_ar1::{simulate_states, states_to_levels};

use crate::cli::SimulateArgs;
use crate::config::TauchenConfig;
use crate::convert;
use crate::discretize_cmd::{compute_chain, write_json};

#[derive(Debug, Serialize)]
struct PathOutput {
    seed: Option<u64>,
    initial: usize,
    states: Vec<usize>,
    levels: Vec<f64>,
}

/// Run the simulation and write the path as JSON.
pub fn run(args: SimulateArgs) -> Result<()> {
    let _cmd = info_span!("simulate").entered();
    let config = TauchenConfig::load(&args.config)?;

    let params = convert::build_ar1_params(&config.ar1, None)?;
    let execution = convert::build_execution(&config.discretize, false);
    let chain = compute_chain(&params, execution)?;

    let seed = args.seed.or(config.seed);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let initial = args.initial.unwrap_or(chain.nz() / 2);
    let states = simulate_states(&chain, initial, args.periods, &mut rng)
        .context("simulation failed")?;
    let levels = states_to_levels(&chain, &states).context("failed to map states to levels")?;
    info!(periods = states.len(), initial, "simulation complete");

    let output = PathOutput {
        seed,
        initial,
        states,
        levels,
    };
    write_json(&output, args.output.as_deref())
}
