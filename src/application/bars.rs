// Horizontal bar chart layout
use crate::domain::legend::LegendEntry;
use crate::domain::scale::LinearScale;

// Fraction of each band left open between adjacent bars.
const BAND_PADDING: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub count: f64,
}

/// One horizontal bar in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lays out one horizontal band per datum, widths linear in count.
pub fn layout_bars(data: &[BarDatum], width: f64, height: f64) -> Vec<Bar> {
    if data.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let max = data.iter().map(|d| d.count).fold(0.0_f64, f64::max);
    let x_scale = LinearScale::new((0.0, max), (0.0, width));
    let band = height / data.len() as f64;
    let inset = band * BAND_PADDING / 2.0;

    data.iter()
        .enumerate()
        .map(|(i, d)| Bar {
            label: d.label.clone(),
            count: d.count,
            x: 0.0,
            y: i as f64 * band + inset,
            width: if max > 0.0 { x_scale.scale(d.count) } else { 0.0 },
            height: band - 2.0 * inset,
        })
        .collect()
}

/// Flair frequencies as bar data, largest first.
pub fn bars_from_legend(legend: &[LegendEntry]) -> Vec<BarDatum> {
    let mut data: Vec<BarDatum> = legend
        .iter()
        .map(|e| BarDatum {
            label: e.flair.clone(),
            count: e.count as f64,
        })
        .collect();
    data.sort_by(|a, b| {
        b.count
            .partial_cmp(&a.count)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    data
}
