// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Line Series Preparation
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Turning sampled curves into drawable polyline runs.
//!
//! NaN samples split a curve into separate runs so undefined regions
//! render as gaps. Samples above the display window are clipped with an
//! interpolated crossing point, so a diverging curve exits through the
//! top of the frame instead of being drawn flat against it.

use ndarray::Array1;

/// Interpolate the x where the segment (x0, y0)–(x1, y1) crosses y_max.
fn crossing(x0: f64, y0: f64, x1: f64, y1: f64, y_max: f64) -> f64 {
    x0 + (y_max - y0) * (x1 - x0) / (y1 - y0)
}

/// Split a sampled curve into finite runs below `y_max`.
pub fn clipped_runs(x: &Array1<f64>, y: &Array1<f64>, y_max: f64) -> Vec<Vec<(f64, f64)>> {
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut run: Vec<(f64, f64)> = Vec::new();
    let mut prev: Option<(f64, f64)> = None;

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        if !yi.is_finite() {
            if !run.is_empty() {
                runs.push(std::mem::take(&mut run));
            }
            prev = None;
            continue;
        }
        match prev {
            None => {
                if yi <= y_max {
                    run.push((xi, yi));
                }
            }
            Some((xp, yp)) => {
                let prev_in = yp <= y_max;
                let cur_in = yi <= y_max;
                if prev_in && cur_in {
                    run.push((xi, yi));
                } else if prev_in && !cur_in {
                    run.push((crossing(xp, yp, xi, yi, y_max), y_max));
                    runs.push(std::mem::take(&mut run));
                } else if !prev_in && cur_in {
                    run.push((crossing(xp, yp, xi, yi, y_max), y_max));
                    run.push((xi, yi));
                }
                // both above the window: nothing to draw
            }
        }
        prev = Some((xi, yi));
    }
    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_nan_splits_runs() {
        let x = array![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = array![1.0, 2.0, f64::NAN, 3.0, 4.0];
        let runs = clipped_runs(&x, &y, 10.0);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 1.0), (1.0, 2.0)]);
        assert_eq!(runs[1], vec![(3.0, 3.0), (4.0, 4.0)]);
    }

    #[test]
    fn test_clip_inserts_crossing_point() {
        let x = array![0.0, 1.0, 2.0];
        let y = array![1.0, 3.0, 9.0];
        let runs = clipped_runs(&x, &y, 5.0);
        assert_eq!(runs.len(), 1);
        let last = *runs[0].last().unwrap();
        assert!((last.1 - 5.0).abs() < 1e-12);
        // Crossing of the (1,3)-(2,9) segment with y = 5
        assert!((last.0 - (1.0 + 2.0 / 6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_reentry_after_clip() {
        let x = array![0.0, 1.0, 2.0, 3.0];
        let y = array![1.0, 9.0, 9.0, 1.0];
        let runs = clipped_runs(&x, &y, 5.0);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert!((runs[0][1].1 - 5.0).abs() < 1e-12);
        assert!((runs[1][0].1 - 5.0).abs() < 1e-12);
        assert_eq!(*runs[1].last().unwrap(), (3.0, 1.0));
    }

    #[test]
    fn test_fully_finite_curve_is_one_run() {
        let x = Array1::linspace(0.0, 1.0, 50);
        let y = x.mapv(|v| v * v);
        let runs = clipped_runs(&x, &y, 5.0);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 50);
    }
}
