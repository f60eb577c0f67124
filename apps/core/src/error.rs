use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to decode dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("winner margin {value:?} is not a number")]
    InvalidMargin { value: String },
}
