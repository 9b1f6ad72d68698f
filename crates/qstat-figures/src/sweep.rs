// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Temperature Sweep Figure
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Figure 3.2: FD and BE against energy across the temperature sweep,
//! one solid FD curve and one dashed BE curve per temperature.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::colors::colormaps::ColorMap;
use qstat_core::QuantumStatistics;
use qstat_types::config::JobConfig;
use qstat_types::constants::F_DISPLAY_MAX;
use qstat_types::error::{QstatError, QstatResult};
use qstat_types::grid::EnergyGrid;
use qstat_viz::colormap::{magma, viridis};
use qstat_viz::series::clipped_runs;
use qstat_viz::style::{canvas_px, font_px, stroke_px};

use crate::common;

pub const FILE_NAME: &str = "hasil32.png";

/// Colormap fractions spread over [0.3, 0.9], one per sweep entry.
fn sweep_fraction(i: usize, count: usize) -> f64 {
    if count > 1 {
        0.3 + 0.6 * i as f64 / (count - 1) as f64
    } else {
        0.3
    }
}

pub fn render(cfg: &JobConfig, out: &Path) -> QstatResult<PathBuf> {
    let path = out.join(FILE_NAME);
    let dpi = cfg.dpi;
    let (w, h) = canvas_px(9.0, 6.0, dpi);
    let root = BitMapBackend::new(&path, (w, h)).into_drawing_area();
    root.fill(&WHITE).map_err(QstatError::render)?;

    let qs = QuantumStatistics::new(cfg.mu_ev);
    let grid = EnergyGrid::new(cfg.line.e_min, cfg.line.e_max, cfg.line.samples);
    let temperatures = &cfg.line.temperatures;

    let mut chart = common::line_chart(
        &root,
        "Figure 3.2. Temperature Dependence of Fermi–Dirac and Bose–Einstein Distributions",
        cfg.line.e_min..cfg.line.e_max,
        dpi,
    )?;

    let lw = stroke_px(dpi, 2.2);
    let key_len = lw as i32 * 3;
    let count = temperatures.len();

    for (i, &t) in temperatures.iter().enumerate() {
        let color = magma().get_color(sweep_fraction(i, count));
        let f_fd = qs.fermi_dirac_curve(&grid.values, t);
        for (j, run) in clipped_runs(&grid.values, &f_fd, F_DISPLAY_MAX)
            .into_iter()
            .enumerate()
        {
            let series = chart
                .draw_series(LineSeries::new(run, color.stroke_width(lw)))
                .map_err(QstatError::render)?;
            if j == 0 {
                series.label(format!("FD – {:.0} K", t)).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + key_len, y)], color.stroke_width(lw))
                });
            }
        }
    }

    let dash = font_px(dpi, 6.0) as i32;
    let gap = font_px(dpi, 3.0) as i32;
    for (i, &t) in temperatures.iter().enumerate() {
        let color = viridis().get_color(sweep_fraction(i, count));
        let f_be = qs.bose_einstein_curve(&grid.values, t);
        for (j, run) in clipped_runs(&grid.values, &f_be, F_DISPLAY_MAX)
            .into_iter()
            .enumerate()
        {
            let series = chart
                .draw_series(DashedLineSeries::new(run, dash, gap, color.stroke_width(lw)))
                .map_err(QstatError::render)?;
            if j == 0 {
                series.label(format!("BE – {:.0} K", t)).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + key_len, y)], color.stroke_width(lw))
                });
            }
        }
    }

    common::annotate(&mut chart, "Bosons → Dashed lines", (0.02, 4.6), dpi)?;
    common::annotate(&mut chart, "Fermions → Solid lines", (0.02, 4.3), dpi)?;
    common::draw_legend(&mut chart, dpi)?;

    root.present().map_err(QstatError::render)?;
    Ok(path.clone())
}
