// Data binder - accessors, extents, screen-space projection
use crate::domain::error::ChartError;
use crate::domain::picker::ScreenPoint;
use crate::domain::record::{Metric, PostRecord};
use crate::domain::scale::{LinearScale, TimeScale, domain_extent};
use chrono::NaiveDate;

/// Min/max timestamp over the records.
pub fn time_extent(records: &[PostRecord]) -> Result<(NaiveDate, NaiveDate), ChartError> {
    domain_extent(records, |r| r.timestamp)
}

/// Min/max of the selected metric, with the metric's domain floor folded in.
/// The floor only ever widens the domain, it never cuts data off.
pub fn metric_extent(records: &[PostRecord], metric: Metric) -> Result<(f64, f64), ChartError> {
    let (min, max) = domain_extent(records, |r| metric.value_of(r))?;
    match metric.domain_floor() {
        Some(floor) => Ok((floor.min(min), max)),
        None => Ok((min, max)),
    }
}

/// Projects every record through both scales into plot pixel space. The
/// output order matches the record order, so indices double as record ids.
pub fn project_points(
    records: &[PostRecord],
    metric: Metric,
    x_scale: &TimeScale,
    y_scale: &LinearScale,
) -> Vec<ScreenPoint> {
    records
        .iter()
        .map(|r| ScreenPoint::new(x_scale.scale(r.timestamp), y_scale.scale(metric.value_of(r))))
        .collect()
}
