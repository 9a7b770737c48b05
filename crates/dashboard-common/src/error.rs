//! Error types for the dashboard view model

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised by the fallible edges of the view model.
///
/// The core constructors and the selector predicate are total; these only
/// surface from parsing, configuration and collector-side history appends.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown resource kind: {0:?}")]
    UnknownResourceKind(String),

    #[error("sample at {sample} is older than the last retained sample at {previous}")]
    OutOfOrderSample {
        previous: DateTime<Utc>,
        sample: DateTime<Utc>,
    },

    #[error("invalid metrics configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ModelError>;
