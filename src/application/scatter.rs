// Scatter chart assembly - bind, scale, index
use crate::application::binder::{metric_extent, project_points, time_extent};
use crate::application::post_repository::PostRepository;
use crate::application::surface::{AxisOrientation, AxisSpec, AxisTick, PointMark, RenderSurface};
use crate::domain::color::FlairPalette;
use crate::domain::error::ChartError;
use crate::domain::legend::{LegendEntry, legend_for};
use crate::domain::picker::{PointPicker, ScreenPoint};
use crate::domain::record::{Metric, PostRecord};
use crate::domain::scale::{LinearScale, TimeScale};
use crate::infrastructure::config::{ChartConfig, Dimensions};
use chrono::NaiveDate;
use std::sync::Arc;

const X_TICK_COUNT: usize = 6;
const Y_TICK_COUNT: usize = 5;

/// One fully bound chart: records, scales, screen points, picker and legend
/// all derive from the same snapshot. Replaced whole on data or metric
/// changes, never patched in place.
#[derive(Debug, Clone)]
pub struct ScatterChart {
    pub records: Vec<PostRecord>,
    pub metric: Metric,
    pub dimensions: Dimensions,
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
    pub points: Vec<ScreenPoint>,
    pub picker: PointPicker,
    pub legend: Vec<LegendEntry>,
    pub palette: FlairPalette,
}

#[derive(Clone)]
pub struct ScatterService {
    repository: Arc<dyn PostRepository>,
    config: ChartConfig,
}

impl ScatterService {
    pub fn new(repository: Arc<dyn PostRepository>, config: ChartConfig) -> Self {
        Self { repository, config }
    }

    /// Loads the records and assembles the chart for one y metric. Switching
    /// metric means calling this again: the whole snapshot, picker included,
    /// is rebuilt.
    pub fn build(&self, metric: Metric) -> Result<ScatterChart, ChartError> {
        let records = self.repository.load()?;
        Ok(self.assemble(records, metric))
    }

    fn assemble(&self, records: Vec<PostRecord>, metric: Metric) -> ScatterChart {
        let dimensions = self.config.dimensions;
        let bounded_width = dimensions.bounded_width();
        let bounded_height = dimensions.bounded_height();
        let palette = self.config.palette();

        // An empty dataset still renders axes over a default domain.
        let x_domain = time_extent(&records).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default time domain");
            default_time_domain()
        });
        let y_domain = metric_extent(&records, metric).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default {} domain", metric.column_name());
            default_metric_domain(metric)
        });

        let x_scale = TimeScale::new(x_domain, (0.0, bounded_width));
        let y_scale =
            LinearScale::new(y_domain, (bounded_height, 0.0)).nice(Y_TICK_COUNT);

        let points = project_points(&records, metric, &x_scale, &y_scale);
        let picker = PointPicker::build(&points, bounded_width, bounded_height);

        let legend = legend_for(&records, &palette);
        for entry in &legend {
            if !palette.contains(&entry.flair) {
                tracing::warn!("no palette entry for flair '{}', using default color", entry.flair);
            }
        }

        let (x0, x1) = x_scale.domain();
        let (y0, y1) = y_scale.domain();
        tracing::debug!(
            "scatter bound: {} records, {} picker sites, metric {}, x {x0}..{x1}, y {y0:.2}..{y1:.2}",
            records.len(),
            picker.len(),
            metric.column_name()
        );

        ScatterChart {
            records,
            metric,
            dimensions,
            x_scale,
            y_scale,
            points,
            picker,
            legend,
            palette,
        }
    }
}

fn default_time_domain() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("static date"),
        NaiveDate::from_ymd_opt(2021, 1, 1).expect("static date"),
    )
}

fn default_metric_domain(metric: Metric) -> (f64, f64) {
    (metric.domain_floor().unwrap_or(0.0), 1.0)
}

/// Pushes the bound chart through a surface: dots, both axes, legend.
pub fn render_scatter(chart: &ScatterChart, surface: &mut dyn RenderSurface) {
    let marks: Vec<PointMark> = chart
        .records
        .iter()
        .zip(&chart.points)
        .map(|(record, point)| PointMark {
            x: point.x,
            y: point.y,
            color: chart.palette.color_of(&record.flair).to_string(),
            label: format!("{} ({})", record.title, record.flair),
        })
        .collect();
    surface.draw_points(&marks);

    let x_ticks: Vec<AxisTick> = chart
        .x_scale
        .ticks(X_TICK_COUNT)
        .into_iter()
        .map(|date| AxisTick {
            position: chart.x_scale.scale(date),
            label: chart.x_scale.tick_label(date),
        })
        .collect();
    surface.draw_axis(&AxisSpec {
        orientation: AxisOrientation::Bottom,
        ticks: x_ticks,
        label: "Month".to_string(),
    });

    let y_ticks: Vec<AxisTick> = chart
        .y_scale
        .ticks(Y_TICK_COUNT)
        .into_iter()
        .map(|value| AxisTick {
            position: chart.y_scale.scale(value),
            label: chart.y_scale.tick_label(value, Y_TICK_COUNT),
        })
        .collect();
    surface.draw_axis(&AxisSpec {
        orientation: AxisOrientation::Left,
        ticks: y_ticks,
        label: chart.metric.axis_label().to_string(),
    });

    surface.render_legend(&chart.legend);
}
