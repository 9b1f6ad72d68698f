// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Constants
// License: MIT
// ─────────────────────────────────────────────────────────────────────
/// Boltzmann constant (eV/K).
///
/// All energies in this workspace are in electron-volts, so kB is carried
/// in eV/K rather than the SI J/K value.
pub const K_BOLTZMANN_EV: f64 = 8.617333262e-5;

/// Default chemical potential μ (eV).
///
/// Every published figure uses μ = 0.5 eV; configs may override it.
pub const MU_DEFAULT_EV: f64 = 0.5;

/// Raster resolution of exported figures (dots per inch).
pub const DPI_DEFAULT: u32 = 600;

/// Upper edge of the display window for the line figures, f(E) axis.
pub const F_DISPLAY_MAX: f64 = 5.0;
