// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — 3D Surface Figure
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Figure 3.3: side-by-side 3D surfaces of FD and BE over (E, T).

use std::path::{Path, PathBuf};

use ndarray::Array2;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::ColorMap;
use qstat_core::QuantumStatistics;
use qstat_types::config::JobConfig;
use qstat_types::error::{QstatError, QstatResult};
use qstat_types::grid::GridEt;
use qstat_viz::colormap::{magma, viridis};
use qstat_viz::style::{apply_view, canvas_px, draw_colorbar, font_px};
use qstat_viz::surface::{draw_surface, finite_range};

use crate::common;

pub const FILE_NAME: &str = "hasil.png";

pub fn render(cfg: &JobConfig, out: &Path) -> QstatResult<PathBuf> {
    let path = out.join(FILE_NAME);
    let dpi = cfg.dpi;
    let (w, h) = canvas_px(13.0, 6.0, dpi);
    let root = BitMapBackend::new(&path, (w, h)).into_drawing_area();
    root.fill(&WHITE).map_err(QstatError::render)?;

    let qs = QuantumStatistics::new(cfg.mu_ev);
    let s = &cfg.surface;
    let grid = GridEt::new(s.samples, s.samples, s.e_min, s.e_max, s.t_min, s.t_max);
    let f_fd = qs.fermi_dirac_mesh(&grid);
    let f_be = qs.bose_einstein_mesh(&grid);

    let suptitle = "Figure 3.3. 3D Visualization of Fermi–Dirac and Bose–Einstein Distributions";
    let title_style = common::serif_bold(dpi, 14.0).color(&BLACK);
    let title_x = w as i32 / 2 - suptitle.len() as i32 * font_px(dpi, 14.0) as i32 / 4;
    root.draw_text(suptitle, &title_style, (title_x.max(0), font_px(dpi, 6.0) as i32))
        .map_err(QstatError::render)?;

    let (left, right) = root.split_horizontally((w / 2) as i32);
    render_panel(
        &left,
        "(a) Fermi–Dirac Distribution",
        &grid,
        &f_fd,
        &magma(),
        "Fermions",
        dpi,
    )?;
    render_panel(
        &right,
        "(b) Bose–Einstein Distribution",
        &grid,
        &f_be,
        &viridis(),
        "Bosons",
        dpi,
    )?;

    root.present().map_err(QstatError::render)?;
    Ok(path.clone())
}

fn render_panel(
    panel: &DrawingArea<BitMapBackend, Shift>,
    title: &str,
    grid: &GridEt,
    field: &Array2<f64>,
    cmap: &impl ColorMap<RGBColor>,
    annotation: &str,
    dpi: u32,
) -> QstatResult<()> {
    let (pw, ph) = panel.dim_in_pixel();
    let (plot, bar) = panel.split_horizontally((pw as f64 * 0.85) as i32);

    let (_, vmax) = finite_range(field).ok_or_else(|| {
        QstatError::InvalidParameter("surface field has no finite samples".to_string())
    })?;
    let y_max = vmax * 1.05;

    let mut chart = ChartBuilder::on(&plot)
        .caption(title, common::serif_bold(dpi, 13.0))
        .margin(font_px(dpi, 10.0) as i32)
        .build_cartesian_3d(
            grid.e[0]..grid.e[grid.n_e - 1],
            0.0..y_max,
            grid.t[0]..grid.t[grid.n_t - 1],
        )
        .map_err(QstatError::render)?;
    apply_view(&mut chart, 30.0, -60.0);
    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()
        .map_err(QstatError::render)?;

    draw_surface(&mut chart, &grid.e, &grid.t, field, cmap, None, 0.9)?;

    chart
        .draw_series(std::iter::once(Text::new(
            annotation.to_string(),
            (grid.e[grid.n_e - 1] * 0.8, y_max * 0.6, 250.0),
            common::serif(dpi, 11.0).color(&BLACK),
        )))
        .map_err(QstatError::render)?;

    // Axis names, placed along their respective edges.
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
        (font_px(dpi, 4.0) as i32, ph as i32 / 3),
    )
    .map_err(QstatError::render)?;

    draw_colorbar(&bar, cmap, "Distribution Intensity", dpi)
}
