//! Error types for the tauchen-ar1 crate.

/// Error type for all fallible operations in the tauchen-ar1 crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Ar1Error {
    /// Returned when the number of grid states is too small.
    #[error("invalid state count: nz = {nz}, need at least {min}")]
    InvalidStateCount {
        /// Number of states requested.
        nz: usize,
        /// Minimum supported.
        min: usize,
    },

    /// Returned when the persistence is non-finite or non-stationary.
    #[error("invalid persistence: rho = {rho} (must be finite with |rho| < 1)")]
    InvalidPersistence {
        /// The invalid value.
        rho: f64,
    },

    /// Returned when the innovation standard deviation is non-finite or non-positive.
    #[error("invalid innovation sd: sigma = {sigma} (must be finite and > 0)")]
    InvalidSigma {
        /// The invalid value.
        sigma: f64,
    },

    /// Returned when the grid-width multiplier is non-finite or non-positive.
    #[error("invalid grid width: lambda = {lambda} (must be finite and > 0)")]
    InvalidLambda {
        /// The invalid value.
        lambda: f64,
    },

    /// Returned when `nz * nz` does not fit in `usize`.
    #[error("too many states: nz = {nz} overflows the nz * nz transition matrix")]
    TooManyStates {
        /// Number of states requested.
        nz: usize,
    },

    /// Returned when the grid levels `exp(zmin..=zmax)` leave the positive,
    /// finite, strictly increasing range of `f64`.
    #[error("grid out of range: exp of log-states [{zmin}, {zmax}] is not representable")]
    GridOutOfRange {
        /// Lowest log-state.
        zmin: f64,
        /// Highest log-state.
        zmax: f64,
    },

    /// Returned when the innovation mean is NaN or infinite.
    #[error("invalid innovation mean: mu = {mu} (must be finite)")]
    NonFiniteMean {
        /// The invalid value.
        mu: f64,
    },

    /// Returned when a caller-provided buffer has the wrong length.
    #[error("buffer length mismatch for {buffer}: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// Which buffer was mis-sized (`"Z"` or `"P"`).
        buffer: &'static str,
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },

    /// Returned when a state index is outside `0..nz`.
    #[error("invalid state index: {index} (chain has {nz} states)")]
    InvalidState {
        /// The invalid index.
        index: usize,
        /// Number of states in the chain.
        nz: usize,
    },

    /// Returned when a transition matrix is not row-stochastic.
    #[error("invalid transition matrix: {reason}")]
    InvalidMatrix {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an iterative computation does not converge.
    #[error("no convergence after {iterations} iterations (last change {change:e})")]
    NoConvergence {
        /// Iterations performed.
        iterations: usize,
        /// Size of the last update.
        change: f64,
    },
}
