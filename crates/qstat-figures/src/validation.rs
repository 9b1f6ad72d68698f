// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Validation Figure
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Figure 3.1: FD and BE against energy at a single temperature.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::colors::colormaps::ColorMap;
use qstat_core::{QuantumStatistics, Statistics};
use qstat_types::config::JobConfig;
use qstat_types::constants::F_DISPLAY_MAX;
use qstat_types::error::{QstatError, QstatResult};
use qstat_types::grid::EnergyGrid;
use qstat_viz::colormap::{magma, viridis};
use qstat_viz::series::clipped_runs;
use qstat_viz::style::{canvas_px, font_px, stroke_px};

use crate::common;

pub const FILE_NAME: &str = "hasil31.png";

pub fn render(cfg: &JobConfig, out: &Path) -> QstatResult<PathBuf> {
    let path = out.join(FILE_NAME);
    let dpi = cfg.dpi;
    let (w, h) = canvas_px(9.0, 6.0, dpi);
    let root = BitMapBackend::new(&path, (w, h)).into_drawing_area();
    root.fill(&WHITE).map_err(QstatError::render)?;

    let qs = QuantumStatistics::new(cfg.mu_ev);
    let grid = EnergyGrid::new(cfg.line.e_min, cfg.line.e_max, cfg.line.samples);
    let t = cfg.line.t_validation;
    let f_fd = qs.fermi_dirac_curve(&grid.values, t);
    let f_be = qs.bose_einstein_curve(&grid.values, t);

    let title = format!(
        "Figure 3.1. Validation of Fermi–Dirac and Bose–Einstein Distributions at {:.0} K",
        t
    );
    let mut chart = common::line_chart(&root, &title, cfg.line.e_min..cfg.line.e_max, dpi)?;

    let fd_color = magma().get_color(0.65);
    let be_color = viridis().get_color(0.75);
    let lw = stroke_px(dpi, 2.5);
    let key_len = lw as i32 * 3;

    for (i, run) in clipped_runs(&grid.values, &f_fd, F_DISPLAY_MAX)
        .into_iter()
        .enumerate()
    {
        let series = chart
            .draw_series(LineSeries::new(run, fd_color.stroke_width(lw)))
            .map_err(QstatError::render)?;
        if i == 0 {
            series
                .label(Statistics::FermiDirac.label())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + key_len, y)], fd_color.stroke_width(lw))
                });
        }
    }

    let dash = font_px(dpi, 6.0) as i32;
    let gap = font_px(dpi, 3.0) as i32;
    for (i, run) in clipped_runs(&grid.values, &f_be, F_DISPLAY_MAX)
        .into_iter()
        .enumerate()
    {
        let series = chart
            .draw_series(DashedLineSeries::new(
                run,
                dash,
                gap,
                be_color.stroke_width(lw),
            ))
            .map_err(QstatError::render)?;
        if i == 0 {
            series
                .label(Statistics::BoseEinstein.label())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + key_len, y)], be_color.stroke_width(lw))
                });
        }
    }

    common::annotate(&mut chart, "Fermi–Dirac (solid line)", (0.05, 4.5), dpi)?;
    common::annotate(&mut chart, "Bose–Einstein (dashed line)", (0.05, 4.1), dpi)?;
    common::draw_legend(&mut chart, dpi)?;

    root.present().map_err(QstatError::render)?;
    Ok(path.clone())
}
