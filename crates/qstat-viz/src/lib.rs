// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Rendering Support
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Plotting support shared by the figure binaries.
//!
//! The numerical core hands over arrays with NaN marking undefined
//! samples; everything here honours that contract by skipping surface
//! cells, contour cells, and line segments that touch a NaN.

pub mod colormap;
pub mod contour;
pub mod series;
pub mod style;
pub mod surface;
