// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Config
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DPI_DEFAULT, MU_DEFAULT_EV};

/// Top-level job configuration for the figure set.
///
/// Every field has a default matching the published figures, so the
/// binaries run without any config file; a JSON file may override any
/// subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_mu_ev")]
    pub mu_ev: f64,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default)]
    pub line: LineFigureConfig,
    #[serde(default)]
    pub surface: SurfaceFigureConfig,
    #[serde(default)]
    pub contour: ContourFigureConfig,
}

/// Parameters of the 2D line figures (validation + temperature sweep).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineFigureConfig {
    #[serde(default = "default_e_min")]
    pub e_min: f64,
    #[serde(default = "default_e_max")]
    pub e_max: f64,
    #[serde(default = "default_line_samples")]
    pub samples: usize,
    /// Temperature of the single-temperature validation figure (K).
    #[serde(default = "default_t_validation")]
    pub t_validation: f64,
    /// Temperatures of the sweep figure (K).
    #[serde(default = "default_sweep_temperatures")]
    pub temperatures: Vec<f64>,
}

/// Parameters of the side-by-side 3D surface figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceFigureConfig {
    #[serde(default = "default_e_min")]
    pub e_min: f64,
    #[serde(default = "default_e_max")]
    pub e_max: f64,
    #[serde(default = "default_t_min")]
    pub t_min: f64,
    #[serde(default = "default_t_max")]
    pub t_max: f64,
    #[serde(default = "default_surface_samples")]
    pub samples: usize,
}

/// Parameters of the two 3D contour-cloud figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContourFigureConfig {
    /// Lower energy bound of the Fermi–Dirac cloud; starts slightly above
    /// zero so the cloud does not sit on the axis plane.
    #[serde(default = "default_e_min_fd")]
    pub e_min_fd: f64,
    #[serde(default = "default_e_min")]
    pub e_min_be: f64,
    #[serde(default = "default_e_max")]
    pub e_max: f64,
    #[serde(default = "default_t_min")]
    pub t_min: f64,
    #[serde(default = "default_t_max")]
    pub t_max: f64,
    #[serde(default = "default_contour_samples")]
    pub samples: usize,
    /// Filled level bands of the Fermi–Dirac cloud.
    #[serde(default = "default_fd_levels")]
    pub fd_levels: usize,
    /// Iso-contour lines of the Bose–Einstein cloud.
    #[serde(default = "default_be_levels")]
    pub be_levels: usize,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_mu_ev() -> f64 {
    MU_DEFAULT_EV
}
fn default_dpi() -> u32 {
    DPI_DEFAULT
}
fn default_e_min() -> f64 {
    0.0
}
fn default_e_max() -> f64 {
    1.0
}
fn default_e_min_fd() -> f64 {
    0.01
}
fn default_t_min() -> f64 {
    100.0
}
fn default_t_max() -> f64 {
    600.0
}
fn default_line_samples() -> usize {
    400
}
fn default_surface_samples() -> usize {
    200
}
fn default_contour_samples() -> usize {
    120
}
fn default_t_validation() -> f64 {
    300.0
}
fn default_sweep_temperatures() -> Vec<f64> {
    vec![100.0, 300.0, 600.0]
}
fn default_fd_levels() -> usize {
    30
}
fn default_be_levels() -> usize {
    25
}

impl Default for LineFigureConfig {
    fn default() -> Self {
        LineFigureConfig {
            e_min: default_e_min(),
            e_max: default_e_max(),
            samples: default_line_samples(),
            t_validation: default_t_validation(),
            temperatures: default_sweep_temperatures(),
        }
    }
}

impl Default for SurfaceFigureConfig {
    fn default() -> Self {
        SurfaceFigureConfig {
            e_min: default_e_min(),
            e_max: default_e_max(),
            t_min: default_t_min(),
            t_max: default_t_max(),
            samples: default_surface_samples(),
        }
    }
}

impl Default for ContourFigureConfig {
    fn default() -> Self {
        ContourFigureConfig {
            e_min_fd: default_e_min_fd(),
            e_min_be: default_e_min(),
            e_max: default_e_max(),
            t_min: default_t_min(),
            t_max: default_t_max(),
            samples: default_contour_samples(),
            fd_levels: default_fd_levels(),
            be_levels: default_be_levels(),
        }
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        JobConfig {
            output_dir: default_output_dir(),
            mu_ev: default_mu_ev(),
            dpi: default_dpi(),
            line: LineFigureConfig::default(),
            surface: SurfaceFigureConfig::default(),
            contour: ContourFigureConfig::default(),
        }
    }
}

impl JobConfig {
    /// Load from a JSON file; unspecified fields fall back to defaults.
    pub fn from_file(path: &str) -> crate::error::QstatResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter combinations the evaluators cannot honour.
    pub fn validate(&self) -> crate::error::QstatResult<()> {
        if self.line.t_validation <= 0.0 {
            return Err(crate::error::QstatError::InvalidParameter(format!(
                "validation temperature must be > 0 K, got {}",
                self.line.t_validation
            )));
        }
        for &t in &self.line.temperatures {
            if t <= 0.0 {
                return Err(crate::error::QstatError::InvalidParameter(format!(
                    "sweep temperature must be > 0 K, got {}",
                    t
                )));
            }
        }
        if self.surface.t_min <= 0.0 || self.contour.t_min <= 0.0 {
            return Err(crate::error::QstatError::InvalidParameter(
                "mesh temperature range must start above 0 K".to_string(),
            ));
        }
        if self.line.samples < 2 || self.surface.samples < 2 || self.contour.samples < 2 {
            return Err(crate::error::QstatError::InvalidParameter(
                "grids need at least 2 samples".to_string(),
            ));
        }
        Ok(())
    }
}
