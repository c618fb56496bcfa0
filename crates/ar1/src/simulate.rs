//! Markov chain state simulation.

use crate::chain::Ar1Chain;
use crate::error::Ar1Error;

/// Simulates a path of `n` state indices.
///
/// # Arguments
///
/// * `chain` - Discretized process.
/// * `initial` - State in the period before the first simulated one.
/// * `n` - Number of periods to simulate.
/// * `rng` - Random number generator.
///
/// # Errors
///
/// Returns [`Ar1Error::InvalidState`] if `initial >= chain.nz()`.
pub fn simulate_states(
    chain: &Ar1Chain,
    initial: usize,
    n: usize,
    rng: &mut impl rand::Rng,
) -> Result<Vec<usize>, Ar1Error> {
    let mut out = vec![0; n];
    simulate_states_into(chain, initial, rng, &mut out)?;
    Ok(out)
}

/// Simulates state indices into a pre-allocated buffer, one per element.
///
/// # Errors
///
/// Returns [`Ar1Error::InvalidState`] if `initial >= chain.nz()`.
pub fn simulate_states_into(
    chain: &Ar1Chain,
    initial: usize,
    rng: &mut impl rand::Rng,
    out: &mut [usize],
) -> Result<(), Ar1Error> {
    if initial >= chain.nz() {
        return Err(Ar1Error::InvalidState {
            index: initial,
            nz: chain.nz(),
        });
    }
    let mut prev = initial;
    for slot in out.iter_mut() {
        let next = chain.sample(prev, rng);
        *slot = next;
        prev = next;
    }
    Ok(())
}

/// Maps state indices to their levels on the chain's grid.
///
/// # Errors
///
/// Returns [`Ar1Error::InvalidState`] for the first index `>= chain.nz()`.
pub fn states_to_levels(chain: &Ar1Chain, states: &[usize]) -> Result<Vec<f64>, Ar1Error> {
    let grid = chain.grid();
    states
        .iter()
        .map(|&s| {
            grid.get(s).copied().ok_or(Ar1Error::InvalidState {
                index: s,
                nz: grid.len(),
            })
        })
        .collect()
}
