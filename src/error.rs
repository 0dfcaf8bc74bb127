use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Invalid export configuration.
    #[error("config error: {0}")]
    Config(String),

    /// JSON serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
