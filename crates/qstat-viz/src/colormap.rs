// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Colormaps
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Perceptually uniform colormaps for the figures.
//!
//! Piecewise-linear ramps through anchor colors sampled from the
//! matplotlib reference maps, built on plotters' `DerivedColorMap`.
//! Convention across the figure set: magma for Fermi–Dirac, viridis for
//! Bose–Einstein, plasma for the Fermi–Dirac contour cloud.

use plotters::style::colors::colormaps::DerivedColorMap;
use plotters::style::RGBColor;

/// Anchor colors of matplotlib's `viridis`, evenly spaced over [0, 1].
const VIRIDIS_ANCHORS: [RGBColor; 9] = [
    RGBColor(68, 1, 84),
    RGBColor(71, 44, 122),
    RGBColor(59, 81, 139),
    RGBColor(44, 113, 142),
    RGBColor(33, 144, 141),
    RGBColor(39, 173, 129),
    RGBColor(92, 200, 99),
    RGBColor(170, 220, 50),
    RGBColor(253, 231, 37),
];

/// Anchor colors of matplotlib's `magma`.
const MAGMA_ANCHORS: [RGBColor; 9] = [
    RGBColor(0, 0, 4),
    RGBColor(28, 16, 68),
    RGBColor(79, 18, 123),
    RGBColor(129, 37, 129),
    RGBColor(181, 54, 122),
    RGBColor(229, 80, 100),
    RGBColor(251, 135, 97),
    RGBColor(254, 194, 135),
    RGBColor(252, 253, 191),
];

/// Anchor colors of matplotlib's `plasma`.
const PLASMA_ANCHORS: [RGBColor; 9] = [
    RGBColor(13, 8, 135),
    RGBColor(84, 2, 163),
    RGBColor(139, 10, 165),
    RGBColor(185, 50, 137),
    RGBColor(219, 92, 104),
    RGBColor(244, 136, 73),
    RGBColor(254, 188, 43),
    RGBColor(245, 235, 39),
    RGBColor(240, 249, 33),
];

pub fn viridis() -> DerivedColorMap<RGBColor> {
    DerivedColorMap::new(&VIRIDIS_ANCHORS)
}

pub fn magma() -> DerivedColorMap<RGBColor> {
    DerivedColorMap::new(&MAGMA_ANCHORS)
}

pub fn plasma() -> DerivedColorMap<RGBColor> {
    DerivedColorMap::new(&PLASMA_ANCHORS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::colors::colormaps::ColorMap;

    #[test]
    fn test_endpoints_hit_anchor_colors() {
        let v = viridis();
        assert_eq!(v.get_color(0.0), VIRIDIS_ANCHORS[0]);
        assert_eq!(v.get_color(1.0), VIRIDIS_ANCHORS[8]);
        let m = magma();
        assert_eq!(m.get_color(0.0), MAGMA_ANCHORS[0]);
        assert_eq!(m.get_color(1.0), MAGMA_ANCHORS[8]);
    }

    #[test]
    fn test_interior_anchor_is_interpolated_exactly() {
        // 9 anchors: h = 0.5 lands on the middle anchor.
        let p = plasma();
        assert_eq!(p.get_color(0.5), PLASMA_ANCHORS[4]);
    }
}
