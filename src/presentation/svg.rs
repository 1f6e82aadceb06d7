// SVG rendering surface
use crate::application::bars::Bar;
use crate::application::hover::TooltipContent;
use crate::application::surface::{
    AxisOrientation, AxisSpec, HighlightMark, PointMark, RenderSurface,
};
use crate::domain::legend::LegendEntry;
use crate::infrastructure::config::Dimensions;
use std::fmt::Write as _;
use std::path::Path;

const POINT_RADIUS: f64 = 4.0;
const POINT_OPACITY: f64 = 0.45;
const HIGHLIGHT_RADIUS: f64 = 7.0;
const HIGHLIGHT_COLOR: &str = "orange";
const LEGEND_DOT_RADIUS: f64 = 6.0;
const LEGEND_ROW_HEIGHT: f64 = 30.0;
const LEGEND_WIDTH: f64 = 230.0;
const TICK_LENGTH: f64 = 6.0;
const TOOLTIP_WIDTH: f64 = 260.0;
const TOOLTIP_HEIGHT: f64 = 118.0;
const BODY_PREVIEW_CHARS: usize = 60;

/// Accumulates marks into a standalone SVG document. Dots carry native
/// `<title>` hover text; the active record additionally gets a highlight
/// marker and a rendered tooltip panel.
pub struct SvgSurface {
    dimensions: Dimensions,
    plot: String,
    tooltip: Option<(HighlightMark, String)>,
}

impl SvgSurface {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            plot: String::new(),
            tooltip: None,
        }
    }

    pub fn document(&self) -> String {
        let dims = self.dimensions;
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\" font-family=\"sans-serif\" font-size=\"13\">\n",
            dims.width, dims.height, dims.width, dims.height
        );
        let _ = writeln!(
            doc,
            "<g transform=\"translate({},{})\">",
            dims.margin.left, dims.margin.top
        );
        doc.push_str(&self.plot);
        if let Some((marker, _)) = &self.tooltip {
            let _ = writeln!(
                doc,
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{}\" fill=\"{}\" pointer-events=\"none\"/>",
                marker.x, marker.y, HIGHLIGHT_RADIUS, HIGHLIGHT_COLOR
            );
        }
        doc.push_str("</g>\n");
        if let Some((_, panel)) = &self.tooltip {
            doc.push_str(panel);
        }
        doc.push_str("</svg>\n");
        doc
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, self.document())
    }
}

impl RenderSurface for SvgSurface {
    fn draw_points(&mut self, points: &[PointMark]) {
        for p in points {
            let _ = writeln!(
                self.plot,
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" \
                 fill-opacity=\"{}\"><title>{}</title></circle>",
                p.x,
                p.y,
                POINT_RADIUS,
                p.color,
                p.color,
                POINT_OPACITY,
                xml_escape(&p.label)
            );
        }
    }

    fn draw_axis(&mut self, axis: &AxisSpec) {
        let dims = self.dimensions;
        match axis.orientation {
            AxisOrientation::Bottom => {
                let y = dims.bounded_height();
                let _ = writeln!(
                    self.plot,
                    "<line x1=\"0\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"black\"/>",
                    dims.bounded_width()
                );
                for tick in &axis.ticks {
                    let x = tick.position;
                    let y1 = y + TICK_LENGTH;
                    let y2 = y + TICK_LENGTH + 14.0;
                    let _ = writeln!(
                        self.plot,
                        "<line x1=\"{x:.1}\" y1=\"{y:.1}\" x2=\"{x:.1}\" y2=\"{y1:.1}\" stroke=\"black\"/>\
                         <text x=\"{x:.1}\" y=\"{y2:.1}\" text-anchor=\"middle\">{}</text>",
                        xml_escape(&tick.label)
                    );
                }
                let _ = writeln!(
                    self.plot,
                    "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>",
                    dims.bounded_width() / 2.0,
                    y + dims.margin.bottom - 10.0,
                    xml_escape(&axis.label)
                );
            }
            AxisOrientation::Left => {
                let _ = writeln!(
                    self.plot,
                    "<line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"{:.1}\" stroke=\"black\"/>",
                    dims.bounded_height()
                );
                for tick in &axis.ticks {
                    let y = tick.position;
                    let x1 = -TICK_LENGTH;
                    let x2 = -TICK_LENGTH - 3.0;
                    let y2 = y + 4.0;
                    let _ = writeln!(
                        self.plot,
                        "<line x1=\"{x1:.1}\" y1=\"{y:.1}\" x2=\"0\" y2=\"{y:.1}\" stroke=\"black\"/>\
                         <text x=\"{x2:.1}\" y=\"{y2:.1}\" text-anchor=\"end\">{}</text>",
                        xml_escape(&tick.label)
                    );
                }
                let _ = writeln!(
                    self.plot,
                    "<text transform=\"rotate(-90)\" x=\"{:.1}\" y=\"{:.1}\" \
                     text-anchor=\"middle\">{}</text>",
                    -dims.bounded_height() / 2.0,
                    -dims.margin.left + 14.0,
                    xml_escape(&axis.label)
                );
            }
        }
    }

    fn update_tooltip(
        &mut self,
        content: &TooltipContent,
        marker: HighlightMark,
        anchor: (f64, f64),
    ) {
        // Panel sits centered above the anchor point.
        let mut panel = format!(
            "<g transform=\"translate({:.1},{:.1})\">\n",
            anchor.0 - TOOLTIP_WIDTH / 2.0,
            anchor.1 - TOOLTIP_HEIGHT - HIGHLIGHT_RADIUS
        );
        let _ = writeln!(
            panel,
            "<rect width=\"{TOOLTIP_WIDTH}\" height=\"{TOOLTIP_HEIGHT}\" rx=\"4\" \
             fill=\"white\" stroke=\"#888\"/>"
        );
        let _ = writeln!(
            panel,
            "<rect x=\"10\" y=\"10\" width=\"70\" height=\"16\" rx=\"3\" fill=\"{}\"/>\
             <text x=\"14\" y=\"22\" font-size=\"11\">{}</text>",
            content.flair_color,
            xml_escape(&content.flair)
        );
        let body_preview = truncate(&content.body, BODY_PREVIEW_CHARS);
        let lines = [
            (40.0, content.date.as_str()),
            (58.0, content.title.as_str()),
            (76.0, body_preview.as_str()),
            (94.0, content.sentiment.as_str()),
        ];
        for (dy, text) in lines {
            let _ = writeln!(
                panel,
                "<text x=\"10\" y=\"{dy}\">{}</text>",
                xml_escape(text)
            );
        }
        if !content.url.is_empty() {
            let _ = writeln!(
                panel,
                "<a href=\"{}\"><text x=\"10\" y=\"112\" fill=\"#0000a4\">View post</text></a>",
                xml_escape(&content.url)
            );
        }
        panel.push_str("</g>\n");
        self.tooltip = Some((marker, panel));
    }

    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    fn render_legend(&mut self, entries: &[LegendEntry]) {
        let x0 = self.dimensions.bounded_width() - LEGEND_WIDTH;
        for (i, entry) in entries.iter().enumerate() {
            let y = (i as f64 + 0.5) * LEGEND_ROW_HEIGHT;
            let _ = writeln!(
                self.plot,
                "<circle cx=\"{:.1}\" cy=\"{y:.1}\" r=\"{}\" fill=\"{}\"/>\
                 <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"15\">{} ({})</text>",
                x0,
                LEGEND_DOT_RADIUS,
                entry.color,
                x0 + 20.0,
                y + 5.0,
                xml_escape(&entry.flair),
                entry.count
            );
        }
    }

    fn draw_bars(&mut self, bars: &[Bar]) {
        for bar in bars {
            let _ = writeln!(
                self.plot,
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"#7951e2\"/>\
                 <text x=\"{:.1}\" y=\"{:.1}\">{} ({})</text>",
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                bar.x + bar.width + 8.0,
                bar.y + bar.height / 2.0 + 4.0,
                xml_escape(&bar.label),
                bar.count
            );
        }
    }
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let prefix: String = text.chars().take(max_chars).collect();
    format!("{prefix}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::surface::AxisTick;

    fn surface() -> SvgSurface {
        SvgSurface::new(Dimensions::default())
    }

    #[test]
    fn test_points_render_with_escaped_hover_text() {
        let mut svg = surface();
        svg.draw_points(&[PointMark {
            x: 10.0,
            y: 20.0,
            color: "#0000a4".to_string(),
            label: "a <b> post".to_string(),
        }]);
        let doc = svg.document();
        assert!(doc.contains("cx=\"10.0\" cy=\"20.0\""));
        assert!(doc.contains("<title>a &lt;b&gt; post</title>"));
    }

    #[test]
    fn test_axis_renders_ticks_and_label() {
        let mut svg = surface();
        svg.draw_axis(&AxisSpec {
            orientation: AxisOrientation::Bottom,
            ticks: vec![AxisTick {
                position: 100.0,
                label: "Mar 2020".to_string(),
            }],
            label: "Month".to_string(),
        });
        let doc = svg.document();
        assert!(doc.contains(">Mar 2020</text>"));
        assert!(doc.contains(">Month</text>"));
    }

    #[test]
    fn test_tooltip_panel_appears_and_hides() {
        let content = TooltipContent {
            date: "March 1, 2020".to_string(),
            sentiment: "0.50".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
            flair: "Support".to_string(),
            flair_color: "#0000a4".to_string(),
            url: "https://example.com/x?a=1&b=2".to_string(),
        };
        let marker = HighlightMark { x: 5.0, y: 6.0 };

        let mut svg = surface();
        svg.update_tooltip(&content, marker, (55.0, 16.0));
        let doc = svg.document();
        assert!(doc.contains("March 1, 2020"));
        assert!(doc.contains("r=\"7\" fill=\"orange\""));
        assert!(doc.contains("href=\"https://example.com/x?a=1&amp;b=2\""));

        let mut svg = surface();
        svg.update_tooltip(&content, marker, (55.0, 16.0));
        svg.hide_tooltip();
        let doc = svg.document();
        assert!(!doc.contains("March 1, 2020"));
        assert!(!doc.contains("orange"));
    }

    #[test]
    fn test_legend_rows_render_color_and_count() {
        let mut svg = surface();
        svg.render_legend(&[LegendEntry {
            flair: "News".to_string(),
            color: "#7951e2".to_string(),
            count: 3,
        }]);
        let doc = svg.document();
        assert!(doc.contains("fill=\"#7951e2\""));
        assert!(doc.contains("News (3)"));
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("0123456789ab", 10), "0123456789…");
    }
}
