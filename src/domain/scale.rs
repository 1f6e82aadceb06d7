// Axis scales - monotonic maps from data domain to pixel range
use crate::domain::error::ChartError;
use chrono::{Datelike, NaiveDate};

/// Component-wise min/max over all records for a given accessor.
pub fn domain_extent<R, T, F>(records: &[R], accessor: F) -> Result<(T, T), ChartError>
where
    T: PartialOrd + Copy,
    F: Fn(&R) -> T,
{
    let mut iter = records.iter();
    let first = iter
        .next()
        .ok_or_else(|| ChartError::EmptyDataset("extent over zero records".to_string()))?;

    let mut min = accessor(first);
    let mut max = min;
    for record in iter {
        let value = accessor(record);
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Ok((min, max))
}

/// Tick step sized so roughly `count` ticks cover `span`, rounded to a
/// 1/2/5 x 10^k value.
fn tick_step(span: f64, count: usize) -> f64 {
    let step0 = span / count.max(1) as f64;
    let magnitude = 10f64.powf(step0.log10().floor());
    let error = step0 / magnitude;
    // Thresholds are sqrt(50), sqrt(10), sqrt(2): the closest round step wins.
    let factor = if error >= 7.07 {
        10.0
    } else if error >= 3.16 {
        5.0
    } else if error >= 1.41 {
        2.0
    } else {
        1.0
    };
    magnitude * factor
}

/// Linear scale over a numeric domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Rounds the domain outward to tick-friendly bounds.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span <= 0.0 || !span.is_finite() {
            return self;
        }
        let step = tick_step(span, count);
        self.domain = ((d0 / step).floor() * step, (d1 / step).ceil() * step);
        self
    }

    /// Tick values inside the domain, spaced on a round step.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span <= 0.0 || !span.is_finite() {
            return vec![d0];
        }
        let step = tick_step(span, count);
        let start = (d0 / step).ceil() as i64;
        let stop = (d1 / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }

    /// Label for a tick, with decimals matched to the tick step.
    pub fn tick_label(&self, value: f64, count: usize) -> String {
        let (d0, d1) = self.domain;
        let step = tick_step(d1 - d0, count);
        let decimals = if step >= 1.0 || step <= 0.0 || !step.is_finite() {
            0
        } else {
            (-step.log10().floor() as usize).min(3)
        };
        format!("{value:.decimals$}")
    }
}

/// Temporal scale: calendar dates to pixels, linear over day numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let inner = LinearScale::new(
            (
                domain.0.num_days_from_ce() as f64,
                domain.1.num_days_from_ce() as f64,
            ),
            range,
        );
        Self { domain, inner }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    pub fn scale(&self, date: NaiveDate) -> f64 {
        self.inner.scale(date.num_days_from_ce() as f64)
    }

    /// Month-start ticks across the domain, thinned to at most `count`.
    /// Falls back to the domain endpoints when the span holds no month start.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (d0, d1) = self.domain;
        let mut months = Vec::new();
        let mut year = d0.year();
        let mut month = d0.month();
        loop {
            let start = match NaiveDate::from_ymd_opt(year, month, 1) {
                Some(date) => date,
                None => break,
            };
            if start > d1 {
                break;
            }
            if start >= d0 {
                months.push(start);
            }
            if month == 12 {
                year += 1;
                month = 1;
            } else {
                month += 1;
            }
        }

        if months.is_empty() {
            let mut endpoints = vec![d0];
            if d1 != d0 {
                endpoints.push(d1);
            }
            return endpoints;
        }

        let stride = months.len().div_ceil(count.max(1));
        months.into_iter().step_by(stride.max(1)).collect()
    }

    pub fn tick_label(&self, date: NaiveDate) -> String {
        if date.day() == 1 {
            date.format("%b %Y").to_string()
        } else {
            date.format("%b %-d").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_bounds_every_value() {
        let values = vec![3.0, -2.5, 7.0, 0.0, 7.0];
        let (min, max) = domain_extent(&values, |v| *v).unwrap();
        assert_eq!((min, max), (-2.5, 7.0));
        for v in &values {
            assert!(min <= *v && *v <= max);
        }
    }

    #[test]
    fn test_extent_fails_on_empty() {
        let values: Vec<f64> = Vec::new();
        assert!(matches!(
            domain_extent(&values, |v| *v),
            Err(ChartError::EmptyDataset(_))
        ));
    }

    #[test]
    fn test_linear_scale_maps_endpoints_and_midpoint() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(10.0), 100.0);
        assert_eq!(scale.scale(5.0), 50.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // y scales run top-down: domain min lands at the bottom pixel.
        let scale = LinearScale::new((-1.0, 1.0), (200.0, 0.0));
        assert_eq!(scale.scale(-1.0), 200.0);
        assert_eq!(scale.scale(1.0), 0.0);
        assert_eq!(scale.scale(0.0), 100.0);
    }

    #[test]
    fn test_nice_rounds_domain_outward() {
        let scale = LinearScale::new((-0.3, 0.87), (0.0, 100.0)).nice(5);
        let (d0, d1) = scale.domain();
        assert!(d0 <= -0.3 && d1 >= 0.87);
        // Round step of 0.2 over this span.
        assert_eq!((d0, d1), (-0.4, 1.0));
    }

    #[test]
    fn test_ticks_stay_inside_domain() {
        let scale = LinearScale::new((-1.0, 1.0), (100.0, 0.0));
        let ticks = scale.ticks(4);
        assert!(!ticks.is_empty());
        for t in &ticks {
            assert!(*t >= -1.0 && *t <= 1.0);
        }
        assert_eq!(scale.tick_label(0.5, 4), "0.5");
    }

    #[test]
    fn test_time_scale_maps_dates() {
        let d0 = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2020, 3, 11).unwrap();
        let scale = TimeScale::new((d0, d1), (0.0, 100.0));
        assert_eq!(scale.scale(d0), 0.0);
        assert_eq!(scale.scale(d1), 100.0);
        let mid = NaiveDate::from_ymd_opt(2020, 3, 6).unwrap();
        assert_eq!(scale.scale(mid), 50.0);
    }

    #[test]
    fn test_time_ticks_land_on_month_starts() {
        let d0 = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2020, 8, 2).unwrap();
        let ticks = TimeScale::new((d0, d1), (0.0, 100.0)).ticks(12);
        assert_eq!(
            ticks,
            vec![
                NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 7, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 8, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_time_ticks_fall_back_to_endpoints() {
        let d0 = NaiveDate::from_ymd_opt(2020, 3, 2).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2020, 3, 20).unwrap();
        let ticks = TimeScale::new((d0, d1), (0.0, 100.0)).ticks(6);
        assert_eq!(ticks, vec![d0, d1]);
    }
}
