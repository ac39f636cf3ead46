use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoilCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to open output file: {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No data found or failed to load data from: {}", .0.display())]
    NoData(PathBuf),
}

pub type Result<T> = std::result::Result<T, SoilCheckError>;
