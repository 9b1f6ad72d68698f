// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Shared Figure Scaffolding
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use std::ops::Range;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use qstat_types::constants::F_DISPLAY_MAX;
use qstat_types::error::{QstatError, QstatResult};
use qstat_viz::style::{font_px, ANNOTATION_GREY};

pub type LineChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

pub fn serif(dpi: u32, points: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::Serif, font_px(dpi, points) as f64, FontStyle::Normal)
}

pub fn serif_bold(dpi: u32, points: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::Serif, font_px(dpi, points) as f64, FontStyle::Bold)
}

/// 2D chart over the standard display window: E on x, f(E) on y in
/// [0, 5], dashed light grid, serif labeling.
pub fn line_chart<'a, 'b>(
    root: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    title: &str,
    e_range: Range<f64>,
    dpi: u32,
) -> QstatResult<LineChart<'a, 'b>> {
    let mut chart = ChartBuilder::on(root)
        .caption(title, serif_bold(dpi, 13.0))
        .margin(font_px(dpi, 8.0) as i32)
        .x_label_area_size(font_px(dpi, 28.0) as i32)
        .y_label_area_size(font_px(dpi, 32.0) as i32)
        .build_cartesian_2d(e_range, 0.0..F_DISPLAY_MAX)
        .map_err(QstatError::render)?;

    chart
        .configure_mesh()
        .x_desc("Energy (eV)")
        .y_desc("Distribution Function f(E)")
        .axis_desc_style(serif(dpi, 12.0))
        .label_style(serif(dpi, 10.0))
        .light_line_style(RGBColor(160, 160, 160).mix(0.25))
        .bold_line_style(RGBColor(160, 160, 160).mix(0.4))
        .draw()
        .map_err(QstatError::render)?;

    Ok(chart)
}

/// Grey in-plot annotation at data coordinates.
pub fn annotate(
    chart: &mut LineChart<'_, '_>,
    text: &str,
    at: (f64, f64),
    dpi: u32,
) -> QstatResult<()> {
    chart
        .draw_series(std::iter::once(Text::new(
            text.to_string(),
            at,
            serif(dpi, 12.0).color(&ANNOTATION_GREY),
        )))
        .map_err(QstatError::render)?;
    Ok(())
}

/// Frameless upper-right legend, the convention across the line figures.
pub fn draw_legend<'a, 'b: 'a>(chart: &mut LineChart<'a, 'b>, dpi: u32) -> QstatResult<()> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(serif(dpi, 10.0))
        .border_style(TRANSPARENT)
        .draw()
        .map_err(QstatError::render)?;
    Ok(())
}
