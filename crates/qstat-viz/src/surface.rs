// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — 3D Surface Drawing
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Colormapped 3D surface rendering with NaN gaps.
//!
//! Drawn cell by cell as filled quads so that any cell touching a NaN
//! sample can be skipped; the stock surface series has no notion of
//! undefined samples. Optional level banding quantizes the cell colors,
//! which is how the filled-contour cloud figure is produced.

use ndarray::{Array1, Array2};
use plotters::chart::ChartContext;
use plotters::coord::ranged3d::Cartesian3d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::colors::colormaps::ColorMap;
use qstat_types::error::{QstatError, QstatResult};

/// Minimum and maximum over the finite samples, if any exist.
pub fn finite_range(field: &Array2<f64>) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for &v in field.iter() {
        if v.is_finite() {
            range = Some(match range {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
    }
    range
}

/// Map a value into [0, 1] over (vmin, vmax), optionally snapped to the
/// lower edge of one of `bands` equal level bands.
fn color_fraction(v: f64, vmin: f64, vmax: f64, bands: Option<usize>) -> f64 {
    let span = vmax - vmin;
    let h = if span > 0.0 {
        ((v - vmin) / span).clamp(0.0, 1.0)
    } else {
        0.5
    };
    match bands {
        Some(n) if n > 1 => {
            let band = ((h * n as f64).floor() as usize).min(n - 1);
            band as f64 / (n - 1) as f64
        }
        _ => h,
    }
}

/// Draw `field` (shape `[n_t, n_e]`) as a surface over the x = energy,
/// z = temperature plane, with the sample value on the vertical y axis.
pub fn draw_surface<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>,
    e: &Array1<f64>,
    t: &Array1<f64>,
    field: &Array2<f64>,
    cmap: &impl ColorMap<RGBColor>,
    bands: Option<usize>,
    alpha: f64,
) -> QstatResult<()> {
    let (n_t, n_e) = (t.len(), e.len());
    if field.shape() != [n_t, n_e] {
        return Err(QstatError::GridMismatch {
            expected: (n_t, n_e),
            got: (field.shape()[0], field.shape()[1]),
        });
    }
    let (vmin, vmax) = finite_range(field).ok_or_else(|| {
        QstatError::InvalidParameter("surface field has no finite samples".to_string())
    })?;

    let mut quads = Vec::with_capacity((n_t - 1) * (n_e - 1));
    for it in 0..n_t - 1 {
        for ie in 0..n_e - 1 {
            let v00 = field[[it, ie]];
            let v10 = field[[it, ie + 1]];
            let v11 = field[[it + 1, ie + 1]];
            let v01 = field[[it + 1, ie]];
            if !(v00.is_finite() && v10.is_finite() && v11.is_finite() && v01.is_finite()) {
                continue;
            }
            let mean = 0.25 * (v00 + v10 + v11 + v01);
            let color = cmap.get_color(color_fraction(mean, vmin, vmax, bands) as f32);
            quads.push(Polygon::new(
                vec![
                    (e[ie], v00, t[it]),
                    (e[ie + 1], v10, t[it]),
                    (e[ie + 1], v11, t[it + 1]),
                    (e[ie], v01, t[it + 1]),
                ],
                color.mix(alpha).filled(),
            ));
        }
    }
    chart.draw_series(quads).map_err(QstatError::render)?;
    Ok(())
}
