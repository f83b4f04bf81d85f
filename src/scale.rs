//! Scales: pure mappings from data values to pixels or colors.
//!
//! - `year → x`: linear over the observed year extent
//! - `month → y`: linear over the fixed `[-0.5, 11.5]` month-index domain
//! - `temperature → legend x`: linear over the observed temperature extent
//! - `temperature → color`: equal-width threshold buckets over the same extent

use crate::config::HeatMapConfig;
use crate::error::{HeatMapError, Result};
use crate::models::Dataset;
use crate::palette::Rgb8;
use log::debug;

/// Month-index domain; half a row of padding on both ends centers each month on its tick.
pub const MONTH_DOMAIN: (f64, f64) = (-0.5, 11.5);

/// Linear map from a domain interval onto a range interval.
///
/// A zero-width domain maps every input to the start of the range.
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

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return r0;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }
}

/// Partition of a continuous domain into `thresholds.len() + 1` buckets.
///
/// A value equal to a threshold falls into the lower bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale<T> {
    thresholds: Vec<f64>,
    outputs: Vec<T>,
}

impl<T> ThresholdScale<T> {
    pub fn new(thresholds: Vec<f64>, outputs: Vec<T>) -> Result<Self> {
        if outputs.len() != thresholds.len() + 1 {
            return Err(HeatMapError::InvalidConfig(format!(
                "threshold scale needs {} outputs for {} thresholds, got {}",
                thresholds.len() + 1,
                thresholds.len(),
                outputs.len()
            )));
        }
        Ok(Self {
            thresholds,
            outputs,
        })
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    /// Index of the bucket holding `v`.
    pub fn bucket(&self, v: f64) -> usize {
        self.thresholds.partition_point(|&b| b < v)
    }

    pub fn map(&self, v: f64) -> &T {
        &self.outputs[self.bucket(v)]
    }
}

/// Observed extremes the scales are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_year: i32,
    pub max_year: i32,
    pub min_temp: f64,
    pub max_temp: f64,
}

/// The four scales of one heat map.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub extent: Extent,
    pub year_to_x: LinearScale,
    pub month_to_y: LinearScale,
    pub temp_to_legend_x: LinearScale,
    pub temp_to_color: ThresholdScale<Rgb8>,
}

impl Scales {
    /// Left edge of a year's column.
    pub fn year_x(&self, year: i32) -> f64 {
        self.year_to_x.map(year as f64)
    }

    /// Top edge of a month's row, from the record's 1-based month.
    pub fn month_y(&self, month: u32) -> f64 {
        self.month_to_y.map(month as f64 - 1.0 - 0.5)
    }

    pub fn color(&self, temperature: f64) -> Rgb8 {
        *self.temp_to_color.map(temperature)
    }
}

/// Equal-width interior boundaries splitting `[min, max]` into `buckets` parts.
pub fn equal_width_thresholds(min: f64, max: f64, buckets: usize) -> Vec<f64> {
    let step = (max - min) / buckets as f64;
    (1..buckets).map(|i| min + step * i as f64).collect()
}

/// Derives [`Scales`] from a dataset under a configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScaleBuilder<'a> {
    config: &'a HeatMapConfig,
}

impl<'a> ScaleBuilder<'a> {
    pub fn new(config: &'a HeatMapConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, dataset: &Dataset) -> Result<Scales> {
        self.config.validate()?;
        let (min_year, max_year) = dataset.year_extent().ok_or(HeatMapError::EmptyDataset)?;
        let (min_temp, max_temp) = dataset
            .temperature_extent()
            .ok_or(HeatMapError::EmptyDataset)?;

        let extent = Extent {
            min_year,
            max_year,
            min_temp,
            max_temp,
        };

        let thresholds = equal_width_thresholds(min_temp, max_temp, self.config.colors.len());
        let temp_to_color = ThresholdScale::new(thresholds, self.config.colors.clone())?;

        debug!(
            "scales: years {min_year}..={max_year}, temperatures {min_temp:.3}..={max_temp:.3}, thresholds {:?}",
            temp_to_color.thresholds()
        );

        Ok(Scales {
            extent,
            year_to_x: LinearScale::new(
                (min_year as f64, max_year as f64),
                (0.0, self.config.width),
            ),
            month_to_y: LinearScale::new(MONTH_DOMAIN, (0.0, self.config.height)),
            temp_to_legend_x: LinearScale::new((min_temp, max_temp), (0.0, self.config.legend_width)),
            temp_to_color,
        })
    }
}

/// Round year ticks on a 1/2/5×10ᵏ step, roughly `count` of them, never fractional.
///
/// Stepping runs in `i64` so extents near the ends of `i32` cannot overflow.
pub fn year_ticks(min_year: i32, max_year: i32, count: usize) -> Vec<i32> {
    if min_year >= max_year || count == 0 {
        return vec![min_year];
    }
    let (lo, hi) = (i64::from(min_year), i64::from(max_year));
    let raw = (hi - lo) as f64 / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let step = ((factor * power).round() as i64).max(1);

    // Smallest multiple of `step` not below `lo`.
    let first = lo.div_euclid(step) * step + if lo.rem_euclid(step) == 0 { 0 } else { step };
    (0..)
        .map(|i| first + i * step)
        .take_while(|y| *y <= hi)
        .map_while(|y| i32::try_from(y).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_maps_endpoints() {
        let s = LinearScale::new((1753.0, 2015.0), (0.0, 710.0));
        assert_eq!(s.map(1753.0), 0.0);
        assert!((s.map(2015.0) - 710.0).abs() < 1e-9);
    }

    #[test]
    fn zero_span_maps_to_range_start() {
        let s = LinearScale::new((2000.0, 2000.0), (5.0, 710.0));
        assert_eq!(s.map(2000.0), 5.0);
        assert_eq!(s.map(1999.0), 5.0);
    }

    #[test]
    fn threshold_ties_go_to_lower_bucket() {
        let t = ThresholdScale::new(vec![1.0, 2.0], vec!['a', 'b', 'c']).unwrap();
        assert_eq!(t.bucket(0.5), 0);
        assert_eq!(t.bucket(1.0), 0);
        assert_eq!(t.bucket(1.5), 1);
        assert_eq!(t.bucket(2.0), 1);
        assert_eq!(t.bucket(9.0), 2);
        assert_eq!(*t.map(-100.0), 'a');
    }

    #[test]
    fn threshold_scale_rejects_mismatched_outputs() {
        assert!(ThresholdScale::new(vec![1.0], vec![0u8]).is_err());
    }

    #[test]
    fn equal_width_thresholds_split_span() {
        let t = equal_width_thresholds(0.0, 10.0, 5);
        assert_eq!(t, vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn year_ticks_for_full_record() {
        let ticks = year_ticks(1753, 2015, 10);
        assert_eq!(ticks.first(), Some(&1760));
        assert_eq!(ticks.last(), Some(&2000));
        assert!(ticks.windows(2).all(|w| w[1] - w[0] == 20));
    }

    #[test]
    fn year_ticks_never_fractional() {
        assert_eq!(year_ticks(2014, 2015, 10), vec![2014, 2015]);
        assert_eq!(year_ticks(2015, 2015, 10), vec![2015]);
    }

    #[test]
    fn year_ticks_near_i32_bounds() {
        let top = year_ticks(i32::MAX - 47, i32::MAX, 10);
        assert!(!top.is_empty());
        assert!(top.iter().all(|y| *y >= i32::MAX - 47));
        assert!(top.windows(2).all(|w| w[1] - w[0] == 5));

        let full = year_ticks(i32::MIN, i32::MAX, 10);
        assert!(!full.is_empty());
        assert!(full.windows(2).all(|w| w[0] < w[1]));

        let bottom = year_ticks(i32::MIN, i32::MIN + 47, 10);
        assert_eq!(bottom.first(), Some(&(i32::MIN + 3)));
    }

    #[test]
    fn year_ticks_handle_negative_years() {
        assert_eq!(year_ticks(-45, 0, 10), vec![-45, -40, -35, -30, -25, -20, -15, -10, -5, 0]);
    }
}
