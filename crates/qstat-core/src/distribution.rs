// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Distribution Evaluator
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Fermi–Dirac and Bose–Einstein occupation probabilities.
//!
//! Both statistics are pure closed-form maps of (energy, temperature) for
//! a fixed chemical potential:
//!
//!   f_FD(E, T) = 1 / (exp((E − μ) / (kB·T)) + 1)
//!   f_BE(E, T) = 1 / (exp((E − μ) / (kB·T)) − 1),  NaN for E ≤ μ
//!
//! The Bose–Einstein denominator is zero at E = μ and negative below it,
//! so that whole region is overwritten with NaN after the raw formula is
//! applied; callers render NaN samples as gaps.

use ndarray::{Array1, Array2};
use qstat_types::constants::{K_BOLTZMANN_EV, MU_DEFAULT_EV};
use qstat_types::error::{QstatError, QstatResult};
use qstat_types::grid::GridEt;

/// Which quantum statistic to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistics {
    FermiDirac,
    BoseEinstein,
}

impl Statistics {
    pub fn label(&self) -> &'static str {
        match self {
            Statistics::FermiDirac => "Fermi–Dirac (FD)",
            Statistics::BoseEinstein => "Bose–Einstein (BE)",
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            Statistics::FermiDirac => "FD",
            Statistics::BoseEinstein => "BE",
        }
    }
}

/// Evaluator for the two statistics at a fixed chemical potential.
///
/// Carries μ and kB explicitly so there is no hidden global state; the
/// same evaluator value is threaded through every figure.
#[derive(Debug, Clone, Copy)]
pub struct QuantumStatistics {
    pub mu_ev: f64,
    pub k_boltzmann_ev: f64,
}

impl Default for QuantumStatistics {
    fn default() -> Self {
        QuantumStatistics {
            mu_ev: MU_DEFAULT_EV,
            k_boltzmann_ev: K_BOLTZMANN_EV,
        }
    }
}

impl QuantumStatistics {
    pub fn new(mu_ev: f64) -> Self {
        QuantumStatistics {
            mu_ev,
            k_boltzmann_ev: K_BOLTZMANN_EV,
        }
    }

    /// Dimensionless exponent argument (E − μ) / (kB·T).
    #[inline]
    pub fn reduced_energy(&self, e_ev: f64, t_k: f64) -> f64 {
        (e_ev - self.mu_ev) / (self.k_boltzmann_ev * t_k)
    }

    /// Fermi–Dirac occupation at one (E, T) point.
    ///
    /// Strictly inside (0, 1) for finite energy and T > 0: the denominator
    /// exp(x) + 1 is always > 1. Equals 0.5 at E = μ. No clamping is
    /// applied; once |x| exceeds f64 resolution the value saturates to an
    /// endpoint. For T ≤ 0 the IEEE result propagates unchecked; use
    /// [`QuantumStatistics::occupancy`] when the temperature is untrusted.
    #[inline]
    pub fn fermi_dirac(&self, e_ev: f64, t_k: f64) -> f64 {
        1.0 / (self.reduced_energy(e_ev, t_k).exp() + 1.0)
    }

    /// Bose–Einstein occupation at one (E, T) point.
    ///
    /// The raw formula divides by exp(x) − 1, which is zero at E = μ and
    /// negative below it; whatever the arithmetic produced there is
    /// overwritten with NaN. Diverges toward +∞ as E → μ⁺, decays toward
    /// 0 as E → +∞.
    #[inline]
    pub fn bose_einstein(&self, e_ev: f64, t_k: f64) -> f64 {
        let raw = 1.0 / (self.reduced_energy(e_ev, t_k).exp() - 1.0);
        if e_ev <= self.mu_ev {
            f64::NAN
        } else {
            raw
        }
    }

    /// Checked scalar evaluation, rejecting non-positive temperatures.
    pub fn occupancy(&self, statistics: Statistics, e_ev: f64, t_k: f64) -> QstatResult<f64> {
        if !(t_k > 0.0) {
            return Err(QstatError::InvalidParameter(format!(
                "temperature must be > 0 K, got {}",
                t_k
            )));
        }
        Ok(match statistics {
            Statistics::FermiDirac => self.fermi_dirac(e_ev, t_k),
            Statistics::BoseEinstein => self.bose_einstein(e_ev, t_k),
        })
    }

    /// Fermi–Dirac along an energy axis at a single temperature.
    pub fn fermi_dirac_curve(&self, e: &Array1<f64>, t_k: f64) -> Array1<f64> {
        e.mapv(|e_ev| self.fermi_dirac(e_ev, t_k))
    }

    /// Bose–Einstein along an energy axis at a single temperature.
    ///
    /// The NaN overwrite is an explicit second pass over the samples, so
    /// the undefined region is exactly `e <= mu` independent of what the
    /// raw formula produced.
    pub fn bose_einstein_curve(&self, e: &Array1<f64>, t_k: f64) -> Array1<f64> {
        let mut f = e.mapv(|e_ev| 1.0 / (self.reduced_energy(e_ev, t_k).exp() - 1.0));
        for (ie, &e_ev) in e.iter().enumerate() {
            if e_ev <= self.mu_ev {
                f[ie] = f64::NAN;
            }
        }
        f
    }

    /// Fermi–Dirac over an energy–temperature mesh, shape `[n_t, n_e]`.
    pub fn fermi_dirac_mesh(&self, grid: &GridEt) -> Array2<f64> {
        Array2::from_shape_fn(grid.shape(), |(it, ie)| {
            self.fermi_dirac(grid.ee[[it, ie]], grid.tt[[it, ie]])
        })
    }

    /// Bose–Einstein over an energy–temperature mesh, shape `[n_t, n_e]`.
    pub fn bose_einstein_mesh(&self, grid: &GridEt) -> Array2<f64> {
        let mut f = Array2::from_shape_fn(grid.shape(), |(it, ie)| {
            1.0 / (self
                .reduced_energy(grid.ee[[it, ie]], grid.tt[[it, ie]])
                .exp()
                - 1.0)
        });
        for it in 0..grid.n_t {
            for ie in 0..grid.n_e {
                if grid.ee[[it, ie]] <= self.mu_ev {
                    f[[it, ie]] = f64::NAN;
                }
            }
        }
        f
    }
}

/// Replace every non-finite sample with `replacement`.
///
/// Defensive pass used only by the filled-contour cloud, where the
/// renderer wants a fully finite field; everywhere else NaN samples are
/// kept and rendered as gaps.
pub fn replace_non_finite(f: &mut Array2<f64>, replacement: f64) {
    f.mapv_inplace(|v| if v.is_finite() { v } else { replacement });
}

#[cfg(test)]
mod tests {
    use super::*;
    use qstat_types::grid::GridEt;

    const T_ROOM: f64 = 300.0;

    #[test]
    fn test_fermi_dirac_fixed_point_at_mu() {
        let qs = QuantumStatistics::default();
        assert!((qs.fermi_dirac(0.5, T_ROOM) - 0.5).abs() < 1e-9);
        assert!((qs.fermi_dirac(0.5, 100.0) - 0.5).abs() < 1e-9);
        assert!((qs.fermi_dirac(0.5, 600.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_fermi_dirac_300k_scenario() {
        let qs = QuantumStatistics::default();
        let tail = qs.fermi_dirac(1.0, T_ROOM);
        assert!(tail > 0.0);
        assert!(tail < 0.01, "far above mu the occupation is tiny: {}", tail);
        // Deep below mu the level is essentially full
        assert!(qs.fermi_dirac(0.0, T_ROOM) > 0.99);
    }

    #[test]
    fn test_bose_einstein_undefined_at_and_below_mu() {
        let qs = QuantumStatistics::default();
        assert!(qs.bose_einstein(0.5, T_ROOM).is_nan());
        assert!(qs.bose_einstein(0.3, T_ROOM).is_nan());
        assert!(qs.bose_einstein(0.0, T_ROOM).is_nan());
    }

    #[test]
    fn test_bose_einstein_exceeds_fermi_dirac_above_mu() {
        let qs = QuantumStatistics::default();
        let be = qs.bose_einstein(0.51, T_ROOM);
        let fd = qs.fermi_dirac(0.51, T_ROOM);
        assert!(be.is_finite());
        assert!(be > 0.0);
        assert!(be > fd);
    }

    #[test]
    fn test_bose_einstein_divergence_toward_mu() {
        let qs = QuantumStatistics::default();
        let near = qs.bose_einstein(0.5 + 1e-6, T_ROOM);
        let far = qs.bose_einstein(0.9, T_ROOM);
        assert!(near > 1e3);
        assert!(far < 1e-3);
    }

    #[test]
    fn test_occupancy_rejects_nonpositive_temperature() {
        let qs = QuantumStatistics::default();
        assert!(qs.occupancy(Statistics::FermiDirac, 0.5, 0.0).is_err());
        assert!(qs.occupancy(Statistics::BoseEinstein, 0.6, -5.0).is_err());
        assert!(qs.occupancy(Statistics::FermiDirac, 0.5, f64::NAN).is_err());
        assert!(qs.occupancy(Statistics::FermiDirac, 0.5, 300.0).is_ok());
    }

    #[test]
    fn test_curve_masking_matches_axis() {
        let qs = QuantumStatistics::default();
        let e = ndarray::Array1::linspace(0.0, 1.0, 101);
        let f = qs.bose_einstein_curve(&e, T_ROOM);
        assert_eq!(f.len(), e.len());
        for (ie, &e_ev) in e.iter().enumerate() {
            if e_ev <= 0.5 {
                assert!(f[ie].is_nan(), "expected NaN at E = {}", e_ev);
            } else {
                assert!(f[ie].is_finite() && f[ie] > 0.0);
            }
        }
    }

    #[test]
    fn test_mesh_shape_and_mask_positions() {
        let qs = QuantumStatistics::default();
        let grid = GridEt::new(40, 30, 0.0, 1.0, 250.0, 600.0);
        let fd = qs.fermi_dirac_mesh(&grid);
        let be = qs.bose_einstein_mesh(&grid);
        assert_eq!(fd.shape(), &[30, 40]);
        assert_eq!(be.shape(), &[30, 40]);
        for it in 0..grid.n_t {
            for ie in 0..grid.n_e {
                let v = fd[[it, ie]];
                assert!(v > 0.0 && v < 1.0);
                assert_eq!(be[[it, ie]].is_nan(), grid.ee[[it, ie]] <= 0.5);
            }
        }
    }

    #[test]
    fn test_replace_non_finite_only_touches_masked_cells() {
        let qs = QuantumStatistics::default();
        let grid = GridEt::new(20, 10, 0.0, 1.0, 100.0, 600.0);
        let mut be = qs.bose_einstein_mesh(&grid);
        let before = be.clone();
        replace_non_finite(&mut be, 0.0);
        for it in 0..grid.n_t {
            for ie in 0..grid.n_e {
                if before[[it, ie]].is_nan() {
                    assert_eq!(be[[it, ie]], 0.0);
                } else {
                    assert_eq!(be[[it, ie]].to_bits(), before[[it, ie]].to_bits());
                }
            }
        }
    }

    #[test]
    fn test_evaluation_is_bit_identical() {
        let qs = QuantumStatistics::default();
        let a = qs.fermi_dirac(0.637, 412.0);
        let b = qs.fermi_dirac(0.637, 412.0);
        assert_eq!(a.to_bits(), b.to_bits());
        let c = qs.bose_einstein(0.712, 155.0);
        let d = qs.bose_einstein(0.712, 155.0);
        assert_eq!(c.to_bits(), d.to_bits());
    }
}
