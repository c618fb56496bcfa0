//! Finite-state Markov approximation of an AR(1) shock process.
//!
//! This crate discretizes the log-AR(1) process
//! `x_t = mu + rho * x_{t-1} + eps_t`, `eps_t ~ N(0, sigma^2)`, with the
//! method of Tauchen (1986), producing the exogenous-shock grid and
//! transition matrix consumed by a value-function-iteration solver.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────────┐     ┌──────────────────┐
//!  │  Ar1Params   │────▶│  discretize        │────▶│    Ar1Chain      │
//!  │  (validate)  │     │  (Z and P buffers) │     │  (sample, pi)    │
//!  └──────────────┘     └────────────────────┘     └──────────────────┘
//! ```
//!
//! # Layout
//!
//! `Z` has `nz` strictly increasing positive levels, `exp` of an evenly
//! spaced log grid. `P` has `nz * nz` entries with `P[i + nz * j]` the
//! probability of moving from state `i` to state `j`; every row sums to one.
//!
//! # Quick start
//!
//! ```rust
//! use tauchen_ar1::{Ar1Params, discretize_into};
//!
//! let params = Ar1Params::new()
//!     .with_nz(5)
//!     .with_rho(0.9)
//!     .with_sigma(0.02)
//!     .with_lambda(3.0);
//!
//! let mut z = vec![0.0; 5];
//! let mut p = vec![0.0; 25];
//! discretize_into(&params, &mut z, &mut p).unwrap();
//!
//! let row_sum: f64 = (0..5).map(|j| p[2 + 5 * j]).sum();
//! assert!((row_sum - 1.0).abs() < 1e-12);
//! ```

pub mod chain;
pub mod error;
pub mod grid;
pub mod normal;
pub mod parallel;
pub mod params;
pub mod simulate;
pub mod tauchen;

pub use chain::Ar1Chain;
pub use error::Ar1Error;
pub use grid::LogGrid;
pub use normal::std_normal_cdf;
pub use parallel::{Execution, discretize_par, discretize_par_into, discretize_with};
pub use params::{Ar1Params, MIN_STATES};
pub use simulate::{simulate_states, simulate_states_into, states_to_levels};
pub use tauchen::{discretize, discretize_into};
