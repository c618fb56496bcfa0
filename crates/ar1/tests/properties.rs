use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tauchen_ar1::{Ar1Chain, Ar1Params, discretize, discretize_into, discretize_par};

/// Draws `n` valid parameter sets from a seeded RNG.
fn random_params(n: usize, seed: u64) -> Vec<Ar1Params> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Ar1Params::new()
                .with_nz(rng.random_range(3..=25))
                .with_mu(rng.random_range(-1.0..1.0))
                .with_rho(rng.random_range(-0.99..0.99))
                .with_sigma(rng.random_range(0.001..2.0))
                .with_lambda(rng.random_range(0.5..5.0))
        })
        .collect()
}

/// Largest absolute difference between any two rows, over all columns.
fn row_dispersion(chain: &Ar1Chain) -> f64 {
    let nz = chain.nz();
    let mut worst = 0.0_f64;
    for j in 0..nz {
        let column: Vec<f64> = (0..nz).map(|i| chain.prob(i, j)).collect();
        let hi = column.iter().copied().fold(f64::MIN, f64::max);
        let lo = column.iter().copied().fold(f64::MAX, f64::min);
        worst = worst.max(hi - lo);
    }
    worst
}

// ---------------------------------------------------------------------------
// 1. grid_strictly_increasing
// ---------------------------------------------------------------------------
#[test]
fn grid_strictly_increasing() {
    for params in random_params(200, 1) {
        let chain = discretize(&params).unwrap();
        let z = chain.grid();
        assert_eq!(z.len(), params.nz());
        assert!(z.iter().all(|&v| v > 0.0 && v.is_finite()));
        assert!(
            z.windows(2).all(|w| w[0] < w[1]),
            "grid not increasing for {params:?}: {z:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// 2. rows_sum_to_one
// ---------------------------------------------------------------------------
#[test]
fn rows_sum_to_one() {
    for params in random_params(200, 2) {
        let chain = discretize(&params).unwrap();
        for i in 0..chain.nz() {
            let sum: f64 = chain.row(i).sum();
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
        }
        assert!(chain.validate(1e-9).is_ok(), "invalid chain for {params:?}");
    }
}

// ---------------------------------------------------------------------------
// 3. probabilities_in_unit_interval
// ---------------------------------------------------------------------------
#[test]
fn probabilities_in_unit_interval() {
    // The residual top bin may undershoot zero by rounding error when its
    // true mass underflows.
    for params in random_params(200, 3) {
        let chain = discretize(&params).unwrap();
        for &p in chain.probs() {
            assert!(
                (-1e-12..=1.0 + 1e-12).contains(&p),
                "P = {p} out of range for {params:?}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 4. zero_mean_symmetry
// ---------------------------------------------------------------------------
#[test]
fn zero_mean_symmetry() {
    for params in random_params(100, 4) {
        let params = params.with_mu(0.0);
        let chain = discretize(&params).unwrap();
        let nz = chain.nz();
        let logs = chain.log_grid();
        for i in 0..nz {
            assert_abs_diff_eq!(logs[i], -logs[nz - 1 - i], epsilon = 1e-12);
            for j in 0..nz {
                assert_abs_diff_eq!(
                    chain.prob(i, j),
                    chain.prob(nz - 1 - i, nz - 1 - j),
                    epsilon = 1e-10
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 5. vanishing_persistence_gives_identical_rows
// ---------------------------------------------------------------------------
#[test]
fn vanishing_persistence_gives_identical_rows() {
    let base = Ar1Params::new()
        .with_nz(7)
        .with_mu(0.2)
        .with_sigma(0.5)
        .with_lambda(3.0);

    let dispersions: Vec<f64> = [0.5, 0.1, 0.01, 0.001, 1e-9]
        .iter()
        .map(|&rho| row_dispersion(&discretize(&base.with_rho(rho)).unwrap()))
        .collect();

    assert!(
        dispersions.windows(2).all(|w| w[1] < w[0]),
        "row dispersion should shrink with rho: {dispersions:?}"
    );
    assert!(dispersions[4] < 1e-6, "rho = 1e-9 dispersion {}", dispersions[4]);
}

// ---------------------------------------------------------------------------
// 6. repeated_calls_are_identical
// ---------------------------------------------------------------------------
#[test]
fn repeated_calls_are_identical() {
    for params in random_params(50, 6) {
        let nz = params.nz();
        let (mut z1, mut p1) = (vec![0.0; nz], vec![0.0; nz * nz]);
        let (mut z2, mut p2) = (vec![0.0; nz], vec![0.0; nz * nz]);
        discretize_into(&params, &mut z1, &mut p1).unwrap();
        discretize_into(&params, &mut z2, &mut p2).unwrap();
        assert_eq!(z1, z2);
        assert_eq!(p1, p2);
    }
}

// ---------------------------------------------------------------------------
// 7. parallel_matches_sequential
// ---------------------------------------------------------------------------
#[test]
fn parallel_matches_sequential() {
    for params in random_params(100, 7) {
        let seq = discretize(&params).unwrap();
        let par = discretize_par(&params).unwrap();
        assert_eq!(seq, par, "mismatch for {params:?}");
    }
}

// ---------------------------------------------------------------------------
// 8. large_grid_parallel
// ---------------------------------------------------------------------------
#[test]
fn large_grid_parallel() {
    let params = Ar1Params::new().with_nz(301).with_rho(0.98).with_sigma(0.01);
    let seq = discretize(&params).unwrap();
    let par = discretize_par(&params).unwrap();
    assert_eq!(seq.probs(), par.probs());
    assert!(par.validate(1e-9).is_ok());
}
