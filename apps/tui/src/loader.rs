use election_bubbles_core::{parse_records, ChartError, Record};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ChartError,
    },
}

/// Reads and decodes the dataset. No retries.
pub async fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_records(&json).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the dataset, logging and swallowing any failure so the caller draws nothing.
pub async fn load_or_log(path: &Path) -> Option<Vec<Record>> {
    match load_records(path).await {
        Ok(records) => {
            tracing::info!(path = %path.display(), records = records.len(), "dataset loaded");
            Some(records)
        }
        Err(error) => {
            tracing::error!("Error fetching or processing data: {error}");
            None
        }
    }
}
