// Main entry point - Dependency injection and SVG rendering
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::bars::{bars_from_legend, layout_bars};
use crate::application::hover::HoverController;
use crate::application::scatter::{ScatterService, render_scatter};
use crate::application::surface::RenderSurface;
use crate::domain::record::Metric;
use crate::infrastructure::config::{Dimensions, load_chart_config};
use crate::infrastructure::csv_repository::CsvPostRepository;
use crate::presentation::pointer::{PointerEvent, dispatch};
use crate::presentation::svg::SvgSurface;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration; an optional CLI argument overrides the y metric
    let config = load_chart_config()?;
    let primary = std::env::args()
        .nth(1)
        .and_then(|name| Metric::from_name(&name))
        .unwrap_or_else(|| config.metric());
    let dimensions = config.dimensions;

    // Create repository (infrastructure layer) and chart service
    let repository = Arc::new(CsvPostRepository::new(config.data.csv_path.as_str()));
    let service = ScatterService::new(repository, config);

    // Primary scatter plot, with a sample tooltip probed at the chart centre
    let mut controller = HoverController::new(service.build(primary)?);
    finish_scatter(&mut controller, SvgSurface::new(dimensions), dimensions, "scatter.svg")?;

    // Remaining metrics: each switch re-binds the data and rebuilds the picker
    for metric in Metric::ALL.into_iter().filter(|m| *m != primary) {
        let mut surface = SvgSurface::new(dimensions);
        controller.rebind(&mut surface, service.build(metric)?);
        let path = format!("scatter_{}.svg", metric.column_name());
        finish_scatter(&mut controller, surface, dimensions, &path)?;
    }

    // Flair frequency bars over the same records
    let legend = controller.chart().legend.clone();
    let bars = layout_bars(
        &bars_from_legend(&legend),
        dimensions.bounded_width(),
        dimensions.bounded_height(),
    );
    let mut bar_surface = SvgSurface::new(dimensions);
    bar_surface.draw_bars(&bars);
    bar_surface.write_to("bars.svg")?;

    println!(
        "Rendered {} records across {} flairs",
        controller.chart().records.len(),
        legend.len()
    );

    Ok(())
}

/// Draws the bound chart, probes a hover at the plot centre so the written
/// document shows the tooltip panel, and writes the file.
fn finish_scatter(
    controller: &mut HoverController,
    mut surface: SvgSurface,
    dimensions: Dimensions,
    path: &str,
) -> anyhow::Result<()> {
    render_scatter(controller.chart(), &mut surface);
    if !controller.chart().picker.is_empty() {
        dispatch(
            controller,
            &mut surface,
            PointerEvent::Moved {
                x: dimensions.bounded_width() / 2.0,
                y: dimensions.bounded_height() / 2.0,
            },
        );
    }
    if let Some(record) = controller.active_record() {
        tracing::debug!("centre probe hovers '{}'", record.title);
    }
    surface.write_to(path)?;
    println!("Wrote {path}");

    // The probe is done; leave the chart so the next render starts idle.
    dispatch(controller, &mut surface, PointerEvent::Left);
    Ok(())
}
