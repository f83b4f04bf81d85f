//! Error taxonomy for loading a dataset and deriving the heat map from it.
//!
//! Every variant is terminal for a render: there are no retries and no partial charts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatMapError {
    /// Network/HTTP failure or a non-success status on the data request.
    #[error("failed to fetch dataset from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The dataset was retrieved but holds no monthly records.
    #[error("dataset contains no monthly records")]
    EmptyDataset,

    /// A record is missing a field, carries a non-numeric value, or has a month outside 1..=12.
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// The document itself does not have the expected top-level shape.
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("duplicate record for {year}-{month:02}")]
    DuplicateRecord { year: i32, month: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, HeatMapError>;
