//! Owned result of a discretization: state grid plus transition matrix.

use crate::error::Ar1Error;

/// A finite-state Markov chain approximating an AR(1) process.
///
/// Holds the level grid `Z` (length `nz`, strictly increasing) and the
/// transition matrix `P` (length `nz * nz`) in the layout the solver
/// consumes: `P[i + nz * j]` is the probability of moving from state `i`
/// to state `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ar1Chain {
    grid: Vec<f64>,
    probs: Vec<f64>,
}

impl Ar1Chain {
    /// Wraps buffers produced by a discretizer.
    pub(crate) fn from_parts(grid: Vec<f64>, probs: Vec<f64>) -> Self {
        debug_assert_eq!(probs.len(), grid.len() * grid.len());
        Self { grid, probs }
    }

    /// Builds a chain from an arbitrary grid and column-major matrix.
    ///
    /// Only shapes are checked; use [`Ar1Chain::validate`] to check the
    /// matrix is row-stochastic.
    ///
    /// # Errors
    ///
    /// Returns [`Ar1Error::InvalidStateCount`] for an empty grid and
    /// [`Ar1Error::BufferLengthMismatch`] if `probs.len()` is not
    /// `grid.len()^2`.
    pub fn new(grid: Vec<f64>, probs: Vec<f64>) -> Result<Self, Ar1Error> {
        let nz = grid.len();
        if nz == 0 {
            return Err(Ar1Error::InvalidStateCount { nz, min: 1 });
        }
        let len = nz.checked_mul(nz).ok_or(Ar1Error::TooManyStates { nz })?;
        if probs.len() != len {
            return Err(Ar1Error::BufferLengthMismatch {
                buffer: "P",
                expected: len,
                got: probs.len(),
            });
        }
        Ok(Self { grid, probs })
    }

    /// Number of states.
    pub fn nz(&self) -> usize {
        self.grid.len()
    }

    /// State levels `Z`.
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Natural logarithm of each state level.
    pub fn log_grid(&self) -> Vec<f64> {
        self.grid.iter().map(|z| z.ln()).collect()
    }

    /// Transition matrix in `P[i + nz * j]` layout.
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Probability of moving from state `from` to state `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= nz`.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        let nz = self.nz();
        assert!(
            from < nz && to < nz,
            "state index out of range: ({from}, {to}) with nz = {nz}"
        );
        self.probs[from + nz * to]
    }

    /// Transition probabilities out of `from`, in destination order.
    ///
    /// # Panics
    ///
    /// Panics if `from >= nz`.
    pub fn row(&self, from: usize) -> impl Iterator<Item = f64> + '_ {
        let nz = self.nz();
        assert!(from < nz, "state index out of range: {from} with nz = {nz}");
        self.probs.iter().skip(from).step_by(nz).copied()
    }

    /// Consumes the chain, returning `(Z, P)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.grid, self.probs)
    }

    /// Validates that the matrix is row-stochastic.
    ///
    /// Checks that all values are finite, lie in `[-tol, 1 + tol]`, and that
    /// each row sums to 1.0 within `tol`.
    pub fn validate(&self, tol: f64) -> Result<(), Ar1Error> {
        for from in 0..self.nz() {
            let mut sum = 0.0;
            for (to, p) in self.row(from).enumerate() {
                if !p.is_finite() {
                    return Err(Ar1Error::InvalidMatrix {
                        reason: format!("P[{from}, {to}] is not finite: {p}"),
                    });
                }
                if p < -tol || p > 1.0 + tol {
                    return Err(Ar1Error::InvalidMatrix {
                        reason: format!("P[{from}, {to}] = {p} is outside [0, 1]"),
                    });
                }
                sum += p;
            }
            if (sum - 1.0).abs() > tol {
                return Err(Ar1Error::InvalidMatrix {
                    reason: format!("row {from} sums to {sum}, expected ~1.0"),
                });
            }
        }
        Ok(())
    }

    /// Stationary distribution by power iteration, `pi <- pi * P`.
    ///
    /// Starts from the uniform distribution and stops once the L1 change
    /// between iterates drops below `tol`.
    ///
    /// # Errors
    ///
    /// Returns [`Ar1Error::NoConvergence`] if `max_iter` iterations are
    /// exhausted first.
    pub fn stationary_distribution(&self, tol: f64, max_iter: usize) -> Result<Vec<f64>, Ar1Error> {
        let nz = self.nz();
        let mut pi = vec![1.0 / nz as f64; nz];
        let mut next = vec![0.0; nz];
        let mut change = f64::INFINITY;

        for _ in 0..max_iter {
            // Column j holds every inflow into j.
            for (j, column) in self.probs.chunks_exact(nz).enumerate() {
                next[j] = column.iter().zip(&pi).map(|(p, w)| p * w).sum();
            }
            let total: f64 = next.iter().sum();
            for v in next.iter_mut() {
                *v /= total;
            }
            change = pi.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut pi, &mut next);
            if change < tol {
                return Ok(pi);
            }
        }
        Err(Ar1Error::NoConvergence {
            iterations: max_iter,
            change,
        })
    }

    /// Samples the next state given the current one, using the cumulative row.
    ///
    /// Draws a uniform random number and walks through the row's cumulative
    /// distribution, returning the first state whose cumulative probability
    /// meets or exceeds the draw. Falls back to the top state if rounding
    /// prevents a match.
    ///
    /// # Panics
    ///
    /// Panics if `from >= nz`.
    pub fn sample(&self, from: usize, rng: &mut impl rand::Rng) -> usize {
        let u: f64 = rng.random();
        let mut cumulative = 0.0;
        for (to, p) in self.row(from).enumerate() {
            cumulative += p;
            if cumulative >= u {
                return to;
            }
        }
        self.nz() - 1
    }
}
