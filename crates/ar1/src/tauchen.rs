//! Sequential Tauchen (1986) discretization.
//!
//! The transition matrix is stored column-major by origin state: the
//! probability of moving from state `i` to state `j` lives at
//! `P[i + nz * j]`. Each column `j` is therefore the contiguous vector of
//! inflows into `j` from every origin.

use tracing::debug;

use crate::chain::Ar1Chain;
use crate::error::Ar1Error;
use crate::grid::LogGrid;
use crate::normal::{half_erf, std_normal_cdf};
use crate::params::Ar1Params;

/// Discretizes the AR(1) process into caller-provided buffers.
///
/// On success `z` holds the `nz` grid levels and `p` the `nz * nz`
/// transition probabilities, with `p[i + nz * j] = Pr(j | i)`.
///
/// The top destination bin of each row is the residual
/// `1 - P[i, 0] - P[i, 1] - ... - P[i, nz - 2]`, so every row sums to one by
/// construction.
///
/// # Errors
///
/// Returns [`Ar1Error`] if the parameters are invalid, the grid levels are
/// not representable in `f64`, or a buffer has the wrong length. Neither
/// buffer is written in that case.
pub fn discretize_into(params: &Ar1Params, z: &mut [f64], p: &mut [f64]) -> Result<(), Ar1Error> {
    let grid = check_inputs(params, z, p)?;
    debug!(nz = params.nz(), rho = params.rho(), "tauchen discretization");

    grid.fill_levels(z);

    let nz = grid.nz();
    let top = nz * (nz - 1);
    for i in 0..nz {
        let shift = params.rho() * z[i].ln();
        p[i] = bottom_bin(&grid, params, shift);
        p[i + top] = 1.0 - p[i];
        for j in 1..(nz - 1) {
            let pij = interior_bin(z[j].ln(), params, shift, grid.zstep());
            p[i + nz * j] = pij;
            p[i + top] -= pij;
        }
    }
    Ok(())
}

/// Discretizes the AR(1) process into a freshly allocated [`Ar1Chain`].
///
/// # Errors
///
/// Returns [`Ar1Error`] if the parameters are invalid or the grid levels
/// are not representable in `f64`.
pub fn discretize(params: &Ar1Params) -> Result<Ar1Chain, Ar1Error> {
    params.validate()?;
    let mut z = vec![0.0; params.nz()];
    let mut p = vec![0.0; params.matrix_len()?];
    discretize_into(params, &mut z, &mut p)?;
    Ok(Ar1Chain::from_parts(z, p))
}

/// Validates parameters, grid range and buffer lengths before any output is
/// written, returning the grid to fill.
pub(crate) fn check_inputs(params: &Ar1Params, z: &[f64], p: &[f64]) -> Result<LogGrid, Ar1Error> {
    params.validate()?;
    let grid = LogGrid::from_params(params);
    grid.check_levels()?;

    let nz = params.nz();
    let len = params.matrix_len()?;
    if z.len() != nz {
        return Err(Ar1Error::BufferLengthMismatch {
            buffer: "Z",
            expected: nz,
            got: z.len(),
        });
    }
    if p.len() != len {
        return Err(Ar1Error::BufferLengthMismatch {
            buffer: "P",
            expected: len,
            got: p.len(),
        });
    }
    Ok(grid)
}

// The conditional mean of the next log-state is `mu + shift`, with
// `shift = rho * log(Z[i])`. Arguments are evaluated left to right as
// `(x - mu - shift) / sigma`; regrouping changes the rounding.

/// Probability of landing in the bottom bin, `Phi` at its upper edge.
pub(crate) fn bottom_bin(grid: &LogGrid, params: &Ar1Params, shift: f64) -> f64 {
    let sigma = params.sigma();
    let arg = (grid.zmin() - params.mu() - shift) / sigma + 0.5 * grid.zstep() / sigma;
    std_normal_cdf(arg)
}

/// Probability of landing in the interior bin centred on `log_zj`.
pub(crate) fn interior_bin(log_zj: f64, params: &Ar1Params, shift: f64, zstep: f64) -> f64 {
    let sigma = params.sigma();
    let centre = (log_zj - params.mu() - shift) / sigma;
    let upper = centre + 0.5 * zstep / sigma;
    let lower = centre - 0.5 * zstep / sigma;
    half_erf(upper) - half_erf(lower)
}
