// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Property-Based Tests (proptest) for qstat-core
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the distribution evaluator.
//!
//! Covers: Fermi–Dirac bounds and monotonicity, the fixed point at μ,
//! Bose–Einstein masking and decay, idempotence, shape preservation.

use ndarray::Array1;
use proptest::prelude::*;
use qstat_core::QuantumStatistics;
use qstat_types::grid::GridEt;

// ── Fermi–Dirac ──────────────────────────────────────────────────────

proptest! {
    /// f_FD is strictly inside (0, 1) for finite energy and T > 0.
    /// The domain keeps the exponent within f64 resolution; far outside
    /// it the value saturates to the interval endpoints.
    #[test]
    fn fermi_dirac_open_unit_interval(
        delta in -0.3f64..0.3,
        t in 120.0f64..2000.0,
        mu in -1.0f64..1.5,
    ) {
        let qs = QuantumStatistics::new(mu);
        let f = qs.fermi_dirac(mu + delta, t);
        prop_assert!(f > 0.0 && f < 1.0, "f = {} at delta = {}, T = {}", f, delta, t);
    }

    /// f_FD(μ, T) = 0.5 for every T > 0.
    #[test]
    fn fermi_dirac_half_at_mu(t in 1.0f64..2000.0, mu in -1.0f64..1.5) {
        let qs = QuantumStatistics::new(mu);
        prop_assert!((qs.fermi_dirac(mu, t) - 0.5).abs() < 1e-9);
    }

    /// f_FD is monotone decreasing in energy at fixed temperature.
    #[test]
    fn fermi_dirac_monotone_decreasing(
        e in 0.3f64..0.7,
        de in 1e-3f64..0.2,
        t in 200.0f64..1500.0,
    ) {
        let qs = QuantumStatistics::default();
        prop_assert!(qs.fermi_dirac(e + de, t) < qs.fermi_dirac(e, t));
    }
}

// ── Bose–Einstein ────────────────────────────────────────────────────

proptest! {
    /// f_BE is NaN everywhere at or below μ, for every T > 0.
    #[test]
    fn bose_einstein_masked_at_and_below_mu(
        offset in 0.0f64..1.0,
        t in 1.0f64..2000.0,
    ) {
        let qs = QuantumStatistics::default();
        prop_assert!(qs.bose_einstein(qs.mu_ev - offset, t).is_nan());
    }

    /// Above μ the occupation is positive, finite, and decreasing in E.
    #[test]
    fn bose_einstein_positive_decreasing_above_mu(
        offset in 1e-4f64..0.4,
        de in 1e-3f64..0.3,
        t in 150.0f64..2000.0,
    ) {
        let qs = QuantumStatistics::default();
        let near = qs.bose_einstein(qs.mu_ev + offset, t);
        let far = qs.bose_einstein(qs.mu_ev + offset + de, t);
        prop_assert!(near.is_finite() && near > 0.0);
        prop_assert!(far.is_finite() && far > 0.0);
        prop_assert!(far < near);
    }

    /// Repeated evaluation is bit-identical (pure function, no state).
    #[test]
    fn evaluation_idempotent(e in -1.0f64..2.0, t in 1.0f64..2000.0) {
        let qs = QuantumStatistics::default();
        let fd1 = qs.fermi_dirac(e, t);
        let fd2 = qs.fermi_dirac(e, t);
        prop_assert_eq!(fd1.to_bits(), fd2.to_bits());
        let be1 = qs.bose_einstein(e, t);
        let be2 = qs.bose_einstein(e, t);
        prop_assert_eq!(be1.to_bits(), be2.to_bits());
    }
}

// ── Grid forms ───────────────────────────────────────────────────────

proptest! {
    /// Curve evaluation preserves length and matches scalar evaluation.
    #[test]
    fn curve_matches_scalar(n in 2usize..64, t in 1.0f64..2000.0) {
        let qs = QuantumStatistics::default();
        let e = Array1::linspace(0.0, 1.0, n);
        let fd = qs.fermi_dirac_curve(&e, t);
        prop_assert_eq!(fd.len(), n);
        for (ie, &e_ev) in e.iter().enumerate() {
            prop_assert_eq!(fd[ie].to_bits(), qs.fermi_dirac(e_ev, t).to_bits());
        }
    }

    /// Mesh evaluation preserves shape; BE NaN cells sit exactly where
    /// the mesh energy is at or below μ.
    #[test]
    fn mesh_shape_and_mask(n_e in 2usize..32, n_t in 2usize..32) {
        let qs = QuantumStatistics::default();
        let grid = GridEt::new(n_e, n_t, 0.0, 1.0, 100.0, 600.0);
        let fd = qs.fermi_dirac_mesh(&grid);
        let be = qs.bose_einstein_mesh(&grid);
        prop_assert_eq!(fd.shape(), &[n_t, n_e]);
        prop_assert_eq!(be.shape(), &[n_t, n_e]);
        for it in 0..n_t {
            for ie in 0..n_e {
                prop_assert_eq!(
                    be[[it, ie]].is_nan(),
                    grid.ee[[it, ie]] <= qs.mu_ev
                );
            }
        }
    }
}
