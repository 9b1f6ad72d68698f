// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Bose–Einstein Contour Cloud
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Figure 3.5: 3D line-contour cloud of the BE distribution. NaN samples
//! below the chemical potential stay NaN, so every contour level stops
//! at the μ boundary.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::colors::colormaps::ColorMap;
use qstat_core::QuantumStatistics;
use qstat_types::config::JobConfig;
use qstat_types::error::{QstatError, QstatResult};
use qstat_types::grid::GridEt;
use qstat_viz::colormap::viridis;
use qstat_viz::contour::{iso_segments, level_values};
use qstat_viz::style::{apply_view, canvas_px, draw_colorbar, font_px, stroke_px};
use qstat_viz::surface::finite_range;

use crate::common;

pub const FILE_NAME: &str = "hasilfigure3_5.png";

pub fn render(cfg: &JobConfig, out: &Path) -> QstatResult<PathBuf> {
    let path = out.join(FILE_NAME);
    let dpi = cfg.dpi;
    let (w, h) = canvas_px(10.0, 7.0, dpi);
    let root = BitMapBackend::new(&path, (w, h)).into_drawing_area();
    root.fill(&WHITE).map_err(QstatError::render)?;

    let qs = QuantumStatistics::new(cfg.mu_ev);
    let c = &cfg.contour;
    let grid = GridEt::new(c.samples, c.samples, c.e_min_be, c.e_max, c.t_min, c.t_max);
    let field = qs.bose_einstein_mesh(&grid);

    let (vmin, vmax) = finite_range(&field).ok_or_else(|| {
        QstatError::InvalidParameter("contour field has no finite samples".to_string())
    })?;
    let levels = level_values(vmin, vmax, c.be_levels);
    let y_max = vmax * 1.05;

    let (plot, bar) = root.split_horizontally((w as f64 * 0.88) as i32);
    let cmap = viridis();

    let mut chart = ChartBuilder::on(&plot)
        .caption(
            "Figure 3.5. 3D Contour Cloud of Bose–Einstein Particle Distribution",
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

    let lw = stroke_px(dpi, 1.2);
    let count = levels.len();
    for (i, &level) in levels.iter().enumerate() {
        let fraction = if count > 1 {
            i as f64 / (count - 1) as f64
        } else {
            0.5
        };
        let color = cmap.get_color(fraction).mix(0.85);
        let segments = iso_segments(&grid.e, &grid.t, &field, level);
        chart
            .draw_series(segments.into_iter().map(|seg| {
                PathElement::new(
                    vec![(seg[0].0, level, seg[0].1), (seg[1].0, level, seg[1].1)],
                    color.stroke_width(lw),
                )
            }))
            .map_err(QstatError::render)?;
    }

    let annotation_style = common::serif(dpi, 11.0).color(&BLACK);
    chart
        .draw_series(std::iter::once(Text::new(
            "Condensation Tendency".to_string(),
            (0.75 * c.e_max, y_max * 0.7, 200.0),
            annotation_style.clone(),
        )))
        .map_err(QstatError::render)?;
    chart
        .draw_series(std::iter::once(Text::new(
            "Thermal Broadening".to_string(),
            (0.75 * c.e_max, y_max * 0.16, 450.0),
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
