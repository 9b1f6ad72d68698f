// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Iso-Contour Extraction
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Marching-squares iso-contour extraction on a rectilinear mesh.
//!
//! The field is laid out `[n_t, n_e]` (rows = second axis). Cells with a
//! NaN corner produce no segments, so the undefined region of the
//! Bose–Einstein cloud appears as a gap in every contour level.

use ndarray::{Array1, Array2};

/// One straight contour segment in (x, y) data space.
pub type Segment = [(f64, f64); 2];

/// Evenly spaced interior contour levels over [vmin, vmax].
pub fn level_values(vmin: f64, vmax: f64, count: usize) -> Vec<f64> {
    let span = vmax - vmin;
    (1..=count)
        .map(|i| vmin + span * i as f64 / (count + 1) as f64)
        .collect()
}

/// Point on the edge p0–p1 where the field crosses `level`.
fn edge_point(p0: (f64, f64), v0: f64, p1: (f64, f64), v1: f64, level: f64) -> (f64, f64) {
    let denom = v1 - v0;
    let s = if denom.abs() < 1e-300 {
        0.5
    } else {
        ((level - v0) / denom).clamp(0.0, 1.0)
    };
    (p0.0 + s * (p1.0 - p0.0), p0.1 + s * (p1.1 - p0.1))
}

/// Extract all segments of the iso-line `field = level`.
///
/// `x` has length `n_e` (columns), `y` has length `n_t` (rows).
pub fn iso_segments(
    x: &Array1<f64>,
    y: &Array1<f64>,
    field: &Array2<f64>,
    level: f64,
) -> Vec<Segment> {
    let n_y = y.len();
    let n_x = x.len();
    debug_assert_eq!(field.shape(), &[n_y, n_x]);

    let mut segments = Vec::new();
    for iy in 0..n_y.saturating_sub(1) {
        for ix in 0..n_x.saturating_sub(1) {
            // Corner values: bl, br, tr, tl
            let v00 = field[[iy, ix]];
            let v10 = field[[iy, ix + 1]];
            let v11 = field[[iy + 1, ix + 1]];
            let v01 = field[[iy + 1, ix]];
            if !(v00.is_finite() && v10.is_finite() && v11.is_finite() && v01.is_finite()) {
                continue;
            }

            let bl = (x[ix], y[iy]);
            let br = (x[ix + 1], y[iy]);
            let tr = (x[ix + 1], y[iy + 1]);
            let tl = (x[ix], y[iy + 1]);

            let bottom = || edge_point(bl, v00, br, v10, level);
            let right = || edge_point(br, v10, tr, v11, level);
            let top = || edge_point(tl, v01, tr, v11, level);
            let left = || edge_point(bl, v00, tl, v01, level);

            let mut case = 0u8;
            if v00 > level {
                case |= 1;
            }
            if v10 > level {
                case |= 2;
            }
            if v11 > level {
                case |= 4;
            }
            if v01 > level {
                case |= 8;
            }

            match case {
                0 | 15 => {}
                1 => segments.push([left(), bottom()]),
                2 => segments.push([bottom(), right()]),
                3 => segments.push([left(), right()]),
                4 => segments.push([right(), top()]),
                6 => segments.push([bottom(), top()]),
                7 => segments.push([left(), top()]),
                8 => segments.push([top(), left()]),
                9 => segments.push([bottom(), top()]),
                11 => segments.push([right(), top()]),
                12 => segments.push([left(), right()]),
                13 => segments.push([bottom(), right()]),
                14 => segments.push([left(), bottom()]),
                // Saddles: disambiguate with the cell-centre average.
                5 => {
                    let centre = 0.25 * (v00 + v10 + v11 + v01);
                    if centre > level {
                        segments.push([left(), top()]);
                        segments.push([bottom(), right()]);
                    } else {
                        segments.push([left(), bottom()]);
                        segments.push([top(), right()]);
                    }
                }
                10 => {
                    let centre = 0.25 * (v00 + v10 + v11 + v01);
                    if centre > level {
                        segments.push([left(), bottom()]);
                        segments.push([top(), right()]);
                    } else {
                        segments.push([left(), top()]);
                        segments.push([bottom(), right()]);
                    }
                }
                _ => unreachable!(),
            }
        }
    }
    segments
}
