//! Parameters of the log-AR(1) shock process.

use crate::error::Ar1Error;

/// Smallest grid supported: a bottom bin, a top bin and one interior bin.
pub const MIN_STATES: usize = 3;

/// Parameters of the AR(1) process `x_t = mu + rho * x_{t-1} + eps_t`,
/// `eps_t ~ N(0, sigma^2)`, and of the grid used to discretize it.
///
/// Use the builder methods to customise parameters. Nothing in this crate
/// mutates a parameter record it is handed.
///
/// # Example
///
/// ```
/// use tauchen_ar1::Ar1Params;
///
/// let params = Ar1Params::new()
///     .with_nz(5)
///     .with_rho(0.9)
///     .with_sigma(0.02);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ar1Params {
    nz: usize,
    mu: f64,
    rho: f64,
    sigma: f64,
    lambda: f64,
}

impl Ar1Params {
    /// Creates a new parameter set with defaults.
    ///
    /// Defaults: `nz = 4`, `mu = 0.0`, `rho = 0.95`, `sigma = 0.005`,
    /// `lambda = 3.0`.
    pub fn new() -> Self {
        Self {
            nz: 4,
            mu: 0.0,
            rho: 0.95,
            sigma: 0.005,
            lambda: 3.0,
        }
    }

    /// Sets the number of discrete states.
    pub fn with_nz(mut self, nz: usize) -> Self {
        self.nz = nz;
        self
    }

    /// Sets the innovation mean.
    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    /// Sets the persistence.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the innovation standard deviation.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the grid half-width in stationary standard deviations.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    // --- Accessors ---

    /// Returns the number of discrete states.
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Returns the innovation mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the persistence.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the innovation standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the grid half-width in stationary standard deviations.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Stationary standard deviation of the process, `sigma / sqrt(1 - rho^2)`.
    pub fn stationary_sd(&self) -> f64 {
        self.sigma / (1.0 - self.rho.powi(2)).sqrt()
    }

    /// Stationary mean of the process, `mu / (1 - rho)`.
    pub fn stationary_mean(&self) -> f64 {
        self.mu / (1.0 - self.rho)
    }

    /// Length of the transition matrix buffer, `nz * nz`.
    ///
    /// # Errors
    ///
    /// Returns [`Ar1Error::TooManyStates`] if the product overflows `usize`.
    pub fn matrix_len(&self) -> Result<usize, Ar1Error> {
        self.nz
            .checked_mul(self.nz)
            .ok_or(Ar1Error::TooManyStates { nz: self.nz })
    }

    /// Validates this parameter set.
    ///
    /// Checks that `3 <= nz` with `nz * nz` representable, `mu` is finite,
    /// `|rho| < 1`, and that `sigma` and `lambda` are finite and positive.
    pub fn validate(&self) -> Result<(), Ar1Error> {
        if self.nz < MIN_STATES {
            return Err(Ar1Error::InvalidStateCount {
                nz: self.nz,
                min: MIN_STATES,
            });
        }
        self.matrix_len()?;
        if !self.mu.is_finite() {
            return Err(Ar1Error::NonFiniteMean { mu: self.mu });
        }
        if !self.rho.is_finite() || self.rho.abs() >= 1.0 {
            return Err(Ar1Error::InvalidPersistence { rho: self.rho });
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(Ar1Error::InvalidSigma { sigma: self.sigma });
        }
        if !self.lambda.is_finite() || self.lambda <= 0.0 {
            return Err(Ar1Error::InvalidLambda {
                lambda: self.lambda,
            });
        }
        Ok(())
    }
}

impl Default for Ar1Params {
    fn default() -> Self {
        Self::new()
    }
}
