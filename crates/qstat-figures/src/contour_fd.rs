// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Fermi–Dirac Contour Cloud
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Figure 3.4: 3D filled-contour cloud of the FD distribution. The field
//! is sanitized to finite values before rendering; this is the only
//! figure that applies the defensive non-finite replacement.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use qstat_core::{replace_non_finite, QuantumStatistics};
use qstat_types::config::JobConfig;
use qstat_types::error::{QstatError, QstatResult};
use qstat_types::grid::GridEt;
use qstat_viz::colormap::plasma;
use qstat_viz::style::{apply_view, canvas_px, draw_colorbar, font_px};
use qstat_viz::surface::draw_surface;

use crate::common;

pub const FILE_NAME: &str = "hasilfigure3_4.png";

pub fn render(cfg: &JobConfig, out: &Path) -> QstatResult<PathBuf> {
    let path = out.join(FILE_NAME);
    let dpi = cfg.dpi;
    let (w, h) = canvas_px(10.0, 7.0, dpi);
    let root = BitMapBackend::new(&path, (w, h)).into_drawing_area();
    root.fill(&WHITE).map_err(QstatError::render)?;

    let qs = QuantumStatistics::new(cfg.mu_ev);
    let c = &cfg.contour;
    let grid = GridEt::new(c.samples, c.samples, c.e_min_fd, c.e_max, c.t_min, c.t_max);
    let mut field = qs.fermi_dirac_mesh(&grid);
    replace_non_finite(&mut field, 0.0);

    let (plot, bar) = root.split_horizontally((w as f64 * 0.88) as i32);
    let cmap = plasma();
    let y_max = 1.05;

    let mut chart = ChartBuilder::on(&plot)
        .caption(
            "Figure 3.4. 3D Contour Cloud of Fermi–Dirac Particle Distribution",
            common::serif_bold(dpi, 13.0),
        )
        .margin(font_px(dpi, 12.0) as i32)
        .build_cartesian_3d(
            grid.e[0]..grid.e[grid.n_e - 1],
            0.0..y_max,
            grid.t[0]..grid.t[grid.n_t - 1],
        )
        .map_err(QstatError::render)?;
    apply_view(&mut chart, 28.0, -55.0);
    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()
        .map_err(QstatError::render)?;

    draw_surface(
        &mut chart,
        &grid.e,
        &grid.t,
        &field,
        &cmap,
        Some(c.fd_levels),
        0.9,
    )?;

    let annotation_style = common::serif(dpi, 11.0).color(&BLACK);
    chart
        .draw_series(std::iter::once(Text::new(
            "Fully Occupied Fermi Region".to_string(),
            (0.8 * c.e_max, 0.9, 250.0),
            annotation_style.clone(),
        )))
        .map_err(QstatError::render)?;
    chart
        .draw_series(std::iter::once(Text::new(
            "Energy Transition Region".to_string(),
            (0.8 * c.e_max, 0.35, 450.0),
            annotation_style,
        )))
        .map_err(QstatError::render)?;

    let axis_style = common::serif(dpi, 12.0).color(&BLACK);
    let (plw, plh) = plot.dim_in_pixel();
    plot.draw_text(
        "Energy (eV)",
        &axis_style,
        (plw as i32 / 5, plh as i32 - font_px(dpi, 16.0) as i32),
    )
    .map_err(QstatError::render)?;
    plot.draw_text(
        "Temperature (K)",
        &axis_style,
        (plw as i32 * 3 / 5, plh as i32 - font_px(dpi, 16.0) as i32),
    )
    .map_err(QstatError::render)?;
    plot.draw_text(
        "f(E, T)",
        &axis_style,
        (font_px(dpi, 4.0) as i32, plh as i32 / 3),
    )
    .map_err(QstatError::render)?;

    draw_colorbar(&bar, &cmap, "Distribution Intensity", dpi)?;

    root.present().map_err(QstatError::render)?;
    Ok(path.clone())
}
