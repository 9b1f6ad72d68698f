// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Figure Styling
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! DPI-aware sizing, 3D camera placement, and the colorbar strip.

use plotters::chart::ChartContext;
use plotters::coord::ranged3d::{Cartesian3d, ProjectionMatrixBuilder};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::ColorMap;
use plotters::style::FontTransform;
use qstat_types::error::{QstatError, QstatResult};

/// Grey used for in-figure annotation text.
pub const ANNOTATION_GREY: RGBColor = RGBColor(128, 128, 128);

/// Canvas size in pixels for a figure sized in inches.
pub fn canvas_px(width_in: f64, height_in: f64, dpi: u32) -> (u32, u32) {
    (
        (width_in * dpi as f64).round() as u32,
        (height_in * dpi as f64).round() as u32,
    )
}

/// Font size in pixels for a point size at the figure DPI.
pub fn font_px(dpi: u32, points: f64) -> u32 {
    ((points * dpi as f64 / 72.0).round() as u32).max(1)
}

/// Stroke width in pixels for a line width given in points.
pub fn stroke_px(dpi: u32, points: f64) -> u32 {
    font_px(dpi, points)
}

/// Orient a 3D chart from matplotlib-style elevation/azimuth degrees.
pub fn apply_view<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>,
    elev_deg: f64,
    azim_deg: f64,
) {
    chart.with_projection(|mut pb: ProjectionMatrixBuilder| {
        pb.pitch = elev_deg.to_radians();
        pb.yaw = (-azim_deg).to_radians();
        pb.scale = 0.8;
        pb.into_matrix()
    });
}

/// Vertical colorbar strip with its label, drawn into a dedicated area
/// to the right of a 3D chart.
pub fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    cmap: &impl ColorMap<RGBColor>,
    label: &str,
    dpi: u32,
) -> QstatResult<()> {
    let (w, h) = area.dim_in_pixel();
    let x0 = (w as f64 * 0.15) as i32;
    let x1 = (w as f64 * 0.45) as i32;
    let y_top = (h as f64 * 0.2) as i32;
    let y_bottom = (h as f64 * 0.8) as i32;
    let steps = 64;

    for i in 0..steps {
        let f_lo = i as f64 / steps as f64;
        let f_hi = (i + 1) as f64 / steps as f64;
        // f = 0 at the bottom of the bar
        let ya = y_bottom - ((y_bottom - y_top) as f64 * f_lo) as i32;
        let yb = y_bottom - ((y_bottom - y_top) as f64 * f_hi) as i32;
        area.draw(&Rectangle::new(
            [(x0, yb), (x1, ya)],
            cmap.get_color(f_lo as f32).filled(),
        ))
        .map_err(QstatError::render)?;
    }
    area.draw(&Rectangle::new(
        [(x0, y_top), (x1, y_bottom)],
        BLACK.stroke_width(1),
    ))
    .map_err(QstatError::render)?;

    let style = ("serif", font_px(dpi, 11.0))
        .into_font()
        .transform(FontTransform::Rotate270)
        .color(&BLACK);
    area.draw_text(label, &style, (x1 + (w as i32 - x1) / 3, h as i32 / 2))
        .map_err(QstatError::render)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_px_at_600_dpi() {
        assert_eq!(canvas_px(9.0, 6.0, 600), (5400, 3600));
        assert_eq!(canvas_px(13.0, 6.0, 600), (7800, 3600));
        assert_eq!(canvas_px(10.0, 7.0, 600), (6000, 4200));
    }

    #[test]
    fn test_point_sizes_scale_with_dpi() {
        assert_eq!(font_px(72, 12.0), 12);
        assert_eq!(font_px(600, 12.0), 100);
        assert!(stroke_px(600, 2.5) >= 20);
        // Never collapses to an invisible stroke
        assert_eq!(stroke_px(10, 0.5), 1);
    }
}
