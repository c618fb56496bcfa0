//! Evenly spaced log-space grid spanning the stationary distribution.

use crate::error::Ar1Error;
use crate::params::Ar1Params;

/// Bounds and spacing of the log-state grid.
///
/// The grid covers `mean +/- lambda * sd` of the stationary distribution
/// with `nz` evenly spaced points. Levels are the exponentials of those
/// points; [`LogGrid::check_levels`] confirms they are positive, finite and
/// strictly increasing in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogGrid {
    nz: usize,
    zmin: f64,
    zmax: f64,
    zstep: f64,
}

impl LogGrid {
    /// Computes the grid for a parameter set.
    ///
    /// Parameters are assumed validated; see [`Ar1Params::validate`].
    pub fn from_params(params: &Ar1Params) -> Self {
        let sigma_z = params.stationary_sd();
        let mu_z = params.stationary_mean();
        let zmin = mu_z - params.lambda() * sigma_z;
        let zmax = mu_z + params.lambda() * sigma_z;
        let zstep = (zmax - zmin) / (params.nz() - 1) as f64;
        Self {
            nz: params.nz(),
            zmin,
            zmax,
            zstep,
        }
    }

    /// Number of grid points.
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Lowest log-state.
    pub fn zmin(&self) -> f64 {
        self.zmin
    }

    /// Highest log-state.
    pub fn zmax(&self) -> f64 {
        self.zmax
    }

    /// Distance between adjacent log-states.
    pub fn zstep(&self) -> f64 {
        self.zstep
    }

    /// Log-state at index `i`, `zmin + zstep * i`.
    pub fn log_point(&self, i: usize) -> f64 {
        self.zmin + self.zstep * i as f64
    }

    /// Checks that every level `exp(log_point(i))` is positive, finite and
    /// strictly above its predecessor.
    ///
    /// # Errors
    ///
    /// Returns [`Ar1Error::GridOutOfRange`] otherwise, e.g. when a stationary
    /// mean near `+/-1000` pushes `exp` past the `f64` range.
    pub fn check_levels(&self) -> Result<(), Ar1Error> {
        let mut prev = 0.0;
        for i in 0..self.nz {
            let level = self.log_point(i).exp();
            if !level.is_finite() || level <= prev {
                return Err(Ar1Error::GridOutOfRange {
                    zmin: self.zmin,
                    zmax: self.zmax,
                });
            }
            prev = level;
        }
        Ok(())
    }

    /// Writes the level grid `Z[i] = exp(zmin + zstep * i)` into `z`.
    ///
    /// `z` must have length `nz`; callers check this.
    pub(crate) fn fill_levels(&self, z: &mut [f64]) {
        debug_assert_eq!(z.len(), self.nz);
        for (i, zi) in z.iter_mut().enumerate() {
            *zi = self.log_point(i).exp();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bounds_centered_on_stationary_mean() {
        let params = Ar1Params::new()
            .with_nz(5)
            .with_mu(0.1)
            .with_rho(0.5)
            .with_sigma(0.3)
            .with_lambda(2.0);
        let grid = LogGrid::from_params(&params);
        let sd = 0.3 / 0.75_f64.sqrt();
        assert_abs_diff_eq!(grid.zmin(), 0.2 - 2.0 * sd, epsilon = 1e-14);
        assert_abs_diff_eq!(grid.zmax(), 0.2 + 2.0 * sd, epsilon = 1e-14);
        assert_abs_diff_eq!(grid.zstep(), sd, epsilon = 1e-14);
        assert_abs_diff_eq!(grid.log_point(4), grid.zmax(), epsilon = 1e-14);
    }

    #[test]
    fn levels_positive_and_increasing() {
        let params = Ar1Params::new().with_nz(9);
        let grid = LogGrid::from_params(&params);
        let mut z = vec![0.0; 9];
        grid.fill_levels(&mut z);
        assert!(z.iter().all(|&v| v > 0.0));
        assert!(z.windows(2).all(|w| w[0] < w[1]));
        assert_abs_diff_eq!(z[0].ln(), grid.zmin(), epsilon = 1e-14);
    }

    #[test]
    fn check_levels_accepts_ordinary_grid() {
        let grid = LogGrid::from_params(&Ar1Params::new().with_nz(25));
        assert!(grid.check_levels().is_ok());
    }

    #[test]
    fn check_levels_rejects_overflow_and_underflow() {
        for mu in [1.0, -1.0] {
            // Stationary mean mu / (1 - 0.999) = +/-1000.
            let params = Ar1Params::new()
                .with_nz(5)
                .with_mu(mu)
                .with_rho(0.999)
                .with_sigma(0.01);
            let grid = LogGrid::from_params(&params);
            assert!(matches!(
                grid.check_levels(),
                Err(Ar1Error::GridOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn check_levels_rejects_collapsed_steps() {
        // exp(700 + k * 1e-15) rounds to the same level for every k.
        let grid = LogGrid {
            nz: 4,
            zmin: 700.0,
            zmax: 700.0 + 3e-15,
            zstep: 1e-15,
        };
        assert!(grid.check_levels().is_err());
    }

    #[test]
    fn three_point_grid() {
        let params = Ar1Params::new()
            .with_nz(3)
            .with_rho(0.0)
            .with_sigma(1.0)
            .with_lambda(3.0);
        let grid = LogGrid::from_params(&params);
        assert_abs_diff_eq!(grid.zmin(), -3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(grid.zstep(), 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(grid.log_point(1), 0.0, epsilon = 1e-15);
    }
}
