//! Discretize command: compute the shock grid and transition matrix.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use tauchen_ar1::{Ar1Chain, Ar1Params, Execution, discretize_with};

use crate::cli::DiscretizeArgs;
use crate::config::TauchenConfig;
use crate::convert;

/// Row-sum tolerance applied to every chain before it is written.
pub(crate) const ROW_SUM_TOL: f64 = 1e-9;

const STATIONARY_TOL: f64 = 1e-12;
const STATIONARY_MAX_ITER: usize = 100_000;

#[derive(Debug, Serialize)]
struct ParamsOutput {
    nz: usize,
    mu: f64,
    rho: f64,
    sigma: f64,
    lambda: f64,
}

impl From<&Ar1Params> for ParamsOutput {
    fn from(p: &Ar1Params) -> Self {
        Self {
            nz: p.nz(),
            mu: p.mu(),
            rho: p.rho(),
            sigma: p.sigma(),
            lambda: p.lambda(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChainOutput {
    params: ParamsOutput,
    grid: Vec<f64>,
    log_grid: Vec<f64>,
    /// `transition[i][j]` = Pr(j | i).
    transition: Vec<Vec<f64>>,
    stationary: Option<Vec<f64>>,
}

/// Run the discretization and write the chain as JSON.
pub fn run(args: DiscretizeArgs) -> Result<()> {
    let _cmd = info_span!("discretize").entered();
    let config = TauchenConfig::load(&args.config)?;

    let params = convert::build_ar1_params(&config.ar1, args.nz)?;
    let execution = convert::build_execution(&config.discretize, args.parallel);
    let chain = compute_chain(&params, execution)?;

    let stationary = match chain.stationary_distribution(STATIONARY_TOL, STATIONARY_MAX_ITER) {
        Ok(pi) => Some(pi),
        Err(e) => {
            warn!(error = %e, "stationary distribution unavailable");
            None
        }
    };

    let output = ChainOutput {
        params: ParamsOutput::from(&params),
        grid: chain.grid().to_vec(),
        log_grid: chain.log_grid(),
        transition: (0..chain.nz()).map(|i| chain.row(i).collect()).collect(),
        stationary,
    };

    let path = args.output.as_deref().or(config.discretize.output.as_deref());
    write_json(&output, path)
}

/// Discretizes into freshly allocated buffers and checks the result.
pub(crate) fn compute_chain(params: &Ar1Params, execution: Execution) -> Result<Ar1Chain> {
    let nz = params.nz();
    let mut z = vec![0.0; nz];
    let mut p = vec![0.0; params.matrix_len()?];

    let start = Instant::now();
    discretize_with(params, execution, &mut z, &mut p).context("discretization failed")?;
    info!(
        nz,
        ?execution,
        elapsed_us = start.elapsed().as_micros() as u64,
        "discretization complete"
    );

    let chain = Ar1Chain::new(z, p).context("failed to assemble chain")?;
    chain
        .validate(ROW_SUM_TOL)
        .context("discretized matrix is not row-stochastic")?;
    Ok(chain)
}

/// Pretty-prints `value` as JSON to `path`, or to stdout if `path` is `None`.
pub(crate) fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}
