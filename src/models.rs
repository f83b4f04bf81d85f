use crate::error::{HeatMapError, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One observed month, expressed as a deviation from the dataset's base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub year: i32,
    /// Calendar month, 1-based (January = 1).
    pub month: u32,
    pub variance: f64,
}

impl MonthlyRecord {
    /// Zero-based month index (January = 0), as used by the y axis.
    pub fn month_index(&self) -> u32 {
        self.month.saturating_sub(1)
    }

    /// Absolute temperature for this record.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// The whole document: a base temperature plus monthly deviations.
///
/// Instances built through [`Dataset::new`] or the JSON constructors are validated:
/// months are in `1..=12`, values are finite and `(year, month)` pairs are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyRecord>,
}

/// Document shape before per-record validation. Records stay as raw JSON so that a
/// failure can be reported with the offending index.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    base_temperature: f64,
    monthly_variance: Vec<Value>,
}

impl Dataset {
    /// Build a dataset from already-typed records, enforcing the record invariants.
    pub fn new(base_temperature: f64, monthly_variance: Vec<MonthlyRecord>) -> Result<Self> {
        if !base_temperature.is_finite() {
            return Err(HeatMapError::MalformedDataset(format!(
                "baseTemperature is not finite: {base_temperature}"
            )));
        }

        let mut seen: AHashSet<(i32, u32)> = AHashSet::with_capacity(monthly_variance.len());
        for (index, rec) in monthly_variance.iter().enumerate() {
            if !(1..=12).contains(&rec.month) {
                return Err(HeatMapError::MalformedRecord {
                    index,
                    reason: format!("month {} outside 1..=12", rec.month),
                });
            }
            if !rec.variance.is_finite() {
                return Err(HeatMapError::MalformedRecord {
                    index,
                    reason: format!("variance is not finite: {}", rec.variance),
                });
            }
            if !seen.insert((rec.year, rec.month)) {
                return Err(HeatMapError::DuplicateRecord {
                    year: rec.year,
                    month: rec.month,
                });
            }
        }

        Ok(Self {
            base_temperature,
            monthly_variance,
        })
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let v: Value = serde_json::from_str(s)
            .map_err(|e| HeatMapError::MalformedDataset(format!("invalid JSON: {e}")))?;
        Self::from_value(v)
    }

    /// Validate an already-decoded JSON value.
    pub fn from_value(v: Value) -> Result<Self> {
        let raw: RawDataset = serde_json::from_value(v)
            .map_err(|e| HeatMapError::MalformedDataset(e.to_string()))?;

        let mut records = Vec::with_capacity(raw.monthly_variance.len());
        for (index, entry) in raw.monthly_variance.into_iter().enumerate() {
            let rec: MonthlyRecord =
                serde_json::from_value(entry).map_err(|e| HeatMapError::MalformedRecord {
                    index,
                    reason: e.to_string(),
                })?;
            records.push(rec);
        }

        Self::new(raw.base_temperature, records)
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Absolute temperature of a record belonging to this dataset.
    pub fn temperature(&self, record: &MonthlyRecord) -> f64 {
        record.temperature(self.base_temperature)
    }

    /// Inclusive `(min, max)` of observed years, `None` when empty.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let min = self.monthly_variance.iter().map(|r| r.year).min()?;
        let max = self.monthly_variance.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Inclusive `(min, max)` of absolute temperatures, `None` when empty.
    pub fn temperature_extent(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let (min_var, max_var) = self.monthly_variance.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.variance), hi.max(r.variance)),
        );
        Some((
            self.base_temperature + min_var,
            self.base_temperature + max_var,
        ))
    }
}
