use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure to turn the startup CSV into a [`LaunchDataset`].
///
/// Always fatal: the dashboard never renders without a dataset.
///
/// [`LaunchDataset`]: crate::data::model::LaunchDataset
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),

    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: f64 },

    #[error("row {row}: payload mass is not a finite number")]
    InvalidPayload { row: usize },

    #[error("no launch records left after excluding '{excluded}'")]
    NoRows { excluded: String },
}

/// Queries that have no answer on the loaded data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DatasetError {
    #[error("dataset is empty")]
    Empty,
}

/// A handler was called with inputs outside its domain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    #[error("unknown launch site '{0}'")]
    InvalidSelection(String),

    #[error("invalid payload range [{low}, {high}]")]
    InvalidRange { low: f64, high: f64 },
}
