// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Grids
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array2};

/// 1D energy sampling axis (eV), strictly increasing.
#[derive(Debug, Clone)]
pub struct EnergyGrid {
    pub values: Array1<f64>,
    pub e_min: f64,
    pub e_max: f64,
}

impl EnergyGrid {
    pub fn new(e_min: f64, e_max: f64, samples: usize) -> Self {
        EnergyGrid {
            values: Array1::linspace(e_min, e_max, samples),
            e_min,
            e_max,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 2D energy–temperature mesh with precomputed coordinate matrices.
///
/// Layout is `[n_t, n_e]`: temperature varies along rows, energy along
/// columns, matching the meshgrid convention the figures were designed
/// around. `ee[[it, ie]]` is the energy at that cell, `tt[[it, ie]]` the
/// temperature.
#[derive(Debug, Clone)]
pub struct GridEt {
    pub n_e: usize,
    pub n_t: usize,
    pub e: Array1<f64>, // energy axis (eV)
    pub t: Array1<f64>, // temperature axis (K)
    pub de: f64,
    pub dt: f64,
    pub ee: Array2<f64>, // meshgrid energy [n_t, n_e]
    pub tt: Array2<f64>, // meshgrid temperature [n_t, n_e]
}

impl GridEt {
    pub fn new(
        n_e: usize,
        n_t: usize,
        e_min: f64,
        e_max: f64,
        t_min: f64,
        t_max: f64,
    ) -> Self {
        let e = Array1::linspace(e_min, e_max, n_e);
        let t = Array1::linspace(t_min, t_max, n_t);
        let de = if n_e > 1 { e[1] - e[0] } else { e_max - e_min };
        let dt = if n_t > 1 { t[1] - t[0] } else { t_max - t_min };

        let mut ee = Array2::zeros((n_t, n_e));
        let mut tt = Array2::zeros((n_t, n_e));
        for it in 0..n_t {
            for ie in 0..n_e {
                ee[[it, ie]] = e[ie];
                tt[[it, ie]] = t[it];
            }
        }

        GridEt {
            n_e,
            n_t,
            e,
            t,
            de,
            dt,
            ee,
            tt,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_t, self.n_e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_grid_bounds() {
        let g = EnergyGrid::new(0.0, 1.0, 400);
        assert_eq!(g.len(), 400);
        assert!((g.values[0] - 0.0).abs() < 1e-15);
        assert!((g.values[399] - 1.0).abs() < 1e-15);
        for i in 1..g.len() {
            assert!(g.values[i] > g.values[i - 1], "axis must be increasing");
        }
    }

    #[test]
    fn test_mesh_creation_200() {
        let grid = GridEt::new(200, 200, 0.0, 1.0, 100.0, 600.0);
        assert_eq!(grid.shape(), (200, 200));
        assert!((grid.de - 1.0 / 199.0).abs() < 1e-12);
        assert!((grid.dt - 500.0 / 199.0).abs() < 1e-12);
        assert!((grid.ee[[0, 0]] - 0.0).abs() < 1e-12);
        assert!((grid.ee[[0, 199]] - 1.0).abs() < 1e-12);
        assert!((grid.tt[[0, 0]] - 100.0).abs() < 1e-12);
        assert!((grid.tt[[199, 0]] - 600.0).abs() < 1e-12);
    }

    #[test]
    fn test_mesh_consistency() {
        let grid = GridEt::new(10, 20, 0.01, 1.0, 100.0, 600.0);
        // Temperature constant along a row
        for it in 0..grid.n_t {
            let t_val = grid.tt[[it, 0]];
            for ie in 0..grid.n_e {
                assert!((grid.tt[[it, ie]] - t_val).abs() < 1e-15);
            }
        }
        // Energy constant along a column
        for ie in 0..grid.n_e {
            let e_val = grid.ee[[0, ie]];
            for it in 0..grid.n_t {
                assert!((grid.ee[[it, ie]] - e_val).abs() < 1e-15);
            }
        }
    }
}
