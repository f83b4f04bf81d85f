use crate::models::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of absolute temperatures for one year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearSummary {
    pub year: i32,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Compute per-year statistics of absolute temperature, ordered by year.
pub fn yearly_summary(dataset: &Dataset) -> Vec<YearSummary> {
    let mut groups: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for r in &dataset.monthly_variance {
        groups
            .entry(r.year)
            .or_default()
            .push(dataset.temperature(r));
    }

    let mut out = Vec::with_capacity(groups.len());
    for (year, mut vals) in groups {
        vals.sort_by(f64::total_cmp);
        let count = vals.len();
        let mean = vals.iter().copied().sum::<f64>() / count as f64;
        let median = if count % 2 == 1 {
            vals[count / 2]
        } else {
            (vals[count / 2 - 1] + vals[count / 2]) / 2.0
        };
        out.push(YearSummary {
            year,
            count,
            min: vals[0],
            max: vals[count - 1],
            mean,
            median,
        });
    }
    out
}
