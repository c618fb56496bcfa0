//! Data-parallel Tauchen discretization.
//!
//! Every bottom and interior probability depends only on its own `(i, j)`
//! pair, so those `nz * (nz - 1)` entries are filled as an independent map,
//! one rayon task per destination column. The top column is then derived
//! per origin row as `((1 - P[i, 0]) - P[i, 1]) - ... - P[i, nz - 2]`,
//! folded in ascending `j`. That is the same sequence of subtractions the
//! sequential discretizer performs, so both produce identical bits.

use rayon::prelude::*;
use tracing::debug;

use crate::chain::Ar1Chain;
use crate::error::Ar1Error;
use crate::params::Ar1Params;
use crate::tauchen::{bottom_bin, check_inputs, discretize_into, interior_bin};

/// How the transition matrix is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Single-threaded loop with a running top-bin residual.
    #[default]
    Sequential,
    /// Rayon map over `(i, j)` followed by a per-row reduction.
    Parallel,
}

/// Parallel counterpart of [`discretize_into`](crate::discretize_into).
///
/// Same contract and output layout, `p[i + nz * j] = Pr(j | i)`.
///
/// # Errors
///
/// Returns [`Ar1Error`] if the parameters are invalid, the grid levels are
/// not representable in `f64`, or a buffer has the wrong length. Neither
/// buffer is written in that case.
pub fn discretize_par_into(
    params: &Ar1Params,
    z: &mut [f64],
    p: &mut [f64],
) -> Result<(), Ar1Error> {
    let grid = check_inputs(params, z, p)?;
    debug!(
        nz = params.nz(),
        threads = rayon::current_num_threads(),
        "parallel tauchen discretization"
    );

    grid.fill_levels(z);
    let z: &[f64] = z;

    let nz = grid.nz();
    let shifts: Vec<f64> = z.iter().map(|zi| params.rho() * zi.ln()).collect();
    let (body, top) = p.split_at_mut(nz * (nz - 1));

    body.par_chunks_mut(nz).enumerate().for_each(|(j, column)| {
        if j == 0 {
            for (pij, &shift) in column.iter_mut().zip(&shifts) {
                *pij = bottom_bin(&grid, params, shift);
            }
        } else {
            let log_zj = z[j].ln();
            for (pij, &shift) in column.iter_mut().zip(&shifts) {
                *pij = interior_bin(log_zj, params, shift, grid.zstep());
            }
        }
    });

    let body: &[f64] = body;
    top.par_iter_mut().enumerate().for_each(|(i, residual)| {
        *residual = (0..nz - 1).fold(1.0, |acc, j| acc - body[i + nz * j]);
    });
    Ok(())
}

/// Parallel counterpart of [`discretize`](crate::discretize).
///
/// # Errors
///
/// Returns [`Ar1Error`] if the parameters are invalid or the grid levels
/// are not representable in `f64`.
pub fn discretize_par(params: &Ar1Params) -> Result<Ar1Chain, Ar1Error> {
    params.validate()?;
    let mut z = vec![0.0; params.nz()];
    let mut p = vec![0.0; params.matrix_len()?];
    discretize_par_into(params, &mut z, &mut p)?;
    Ok(Ar1Chain::from_parts(z, p))
}

/// Discretizes into caller buffers using the requested [`Execution`].
///
/// # Errors
///
/// Returns [`Ar1Error`] if the parameters are invalid, the grid levels are
/// not representable in `f64`, or a buffer has the wrong length.
pub fn discretize_with(
    params: &Ar1Params,
    execution: Execution,
    z: &mut [f64],
    p: &mut [f64],
) -> Result<(), Ar1Error> {
    match execution {
        Execution::Sequential => discretize_into(params, z, p),
        Execution::Parallel => discretize_par_into(params, z, p),
    }
}
