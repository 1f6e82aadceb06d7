// Hover state machine and tooltip controller
use crate::application::scatter::ScatterChart;
use crate::application::surface::{HighlightMark, RenderSurface};
use crate::domain::record::PostRecord;

/// Shown in place of a body the source marked as "NA".
pub const EMPTY_BODY_PLACEHOLDER: &str = "Empty body";

/// At most one record is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovering(usize),
}

/// Tooltip panel fields, fully formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub date: String,
    pub sentiment: String,
    pub title: String,
    pub body: String,
    pub flair: String,
    pub flair_color: String,
    pub url: String,
}

/// Owns the hover state and drives tooltip/highlight side effects on the
/// surface. Transitions are edge-triggered per picker cell: staying inside
/// the active cell never re-fires the enter effects.
pub struct HoverController {
    chart: ScatterChart,
    state: HoverState,
}

impl HoverController {
    pub fn new(chart: ScatterChart) -> Self {
        Self {
            chart,
            state: HoverState::Idle,
        }
    }

    pub fn chart(&self) -> &ScatterChart {
        &self.chart
    }

    pub fn active_record(&self) -> Option<&PostRecord> {
        match self.state {
            HoverState::Idle => None,
            HoverState::Hovering(idx) => self.chart.records.get(idx),
        }
    }

    /// Resolves a pointer position to its picker cell and transitions
    /// accordingly. A miss (outside the plot bounds, or no points) behaves
    /// like a leave; it is never an error.
    pub fn pointer_at(&mut self, surface: &mut dyn RenderSurface, px: f64, py: f64) {
        match self.chart.picker.locate(px, py) {
            None => self.pointer_left(surface),
            Some(idx) => {
                if self.state == HoverState::Hovering(idx) {
                    return;
                }
                self.pointer_left(surface);
                self.enter(surface, idx);
            }
        }
    }

    /// The pointer left the plot area. Idempotent: a no-op when already idle.
    pub fn pointer_left(&mut self, surface: &mut dyn RenderSurface) {
        if self.state == HoverState::Idle {
            return;
        }
        surface.hide_tooltip();
        self.state = HoverState::Idle;
    }

    /// Swaps in a freshly built chart, e.g. after a metric switch or data
    /// reload. Any active tooltip is dismissed first, so no hover event can
    /// observe a half-replaced snapshot.
    pub fn rebind(&mut self, surface: &mut dyn RenderSurface, chart: ScatterChart) {
        self.pointer_left(surface);
        self.chart = chart;
    }

    fn enter(&mut self, surface: &mut dyn RenderSurface, idx: usize) {
        let point = self.chart.points[idx];
        let margin = self.chart.dimensions.margin;
        let content = self.tooltip_content(idx);
        surface.update_tooltip(
            &content,
            HighlightMark {
                x: point.x,
                y: point.y,
            },
            (point.x + margin.left, point.y + margin.top),
        );
        self.state = HoverState::Hovering(idx);
    }

    /// Tooltip fields for one record: long-form date, sentiment to two
    /// decimals, the body placeholder for "NA", and the flair badge color.
    pub fn tooltip_content(&self, idx: usize) -> TooltipContent {
        let record = &self.chart.records[idx];
        TooltipContent {
            date: record.timestamp.format("%B %-d, %Y").to_string(),
            sentiment: format!("{:.2}", record.calculated_sentiment),
            title: record.title.clone(),
            body: record
                .body_text()
                .unwrap_or(EMPTY_BODY_PLACEHOLDER)
                .to_string(),
            flair: record.flair.clone(),
            flair_color: self.chart.palette.color_of(&record.flair).to_string(),
            url: record.url.clone(),
        }
    }
}
