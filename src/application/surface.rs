// Rendering surface seam - the chart core supplies data and pixel
// coordinates, the surface owns layout and drawing
use crate::application::bars::Bar;
use crate::application::hover::TooltipContent;
use crate::domain::legend::LegendEntry;

/// One scatter dot, positioned in plot space and colored by flair. The
/// label rides along for surfaces that support per-mark hover text.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMark {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub orientation: AxisOrientation,
    pub ticks: Vec<AxisTick>,
    pub label: String,
}

/// Anchor for the hover highlight marker, in plot space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightMark {
    pub x: f64,
    pub y: f64,
}

pub trait RenderSurface {
    fn draw_points(&mut self, points: &[PointMark]);

    fn draw_axis(&mut self, axis: &AxisSpec);

    /// Show the highlight marker and the tooltip panel. `anchor` is the
    /// marker position offset by the chart margins; the surface centers the
    /// panel above it.
    fn update_tooltip(&mut self, content: &TooltipContent, marker: HighlightMark, anchor: (f64, f64));

    fn hide_tooltip(&mut self);

    fn render_legend(&mut self, entries: &[LegendEntry]);

    fn draw_bars(&mut self, bars: &[Bar]);
}
