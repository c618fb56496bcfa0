//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result};

use tauchen_ar1::{Ar1Params, Execution};

use crate::config::{Ar1Toml, DiscretizeToml};

/// Builds validated AR(1) parameters, applying an optional `nz` override.
pub fn build_ar1_params(t: &Ar1Toml, nz_override: Option<usize>) -> Result<Ar1Params> {
    let params = Ar1Params::new()
        .with_nz(nz_override.unwrap_or(t.nz))
        .with_mu(t.mu)
        .with_rho(t.rho)
        .with_sigma(t.sigma)
        .with_lambda(t.lambda);
    params.validate().context("invalid [ar1] parameters")?;
    Ok(params)
}

/// Chooses the execution strategy; the CLI flag can only switch parallel on.
pub fn build_execution(t: &DiscretizeToml, parallel_flag: bool) -> Execution {
    if parallel_flag || t.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    }
}
