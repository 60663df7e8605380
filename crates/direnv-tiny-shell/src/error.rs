use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to get current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write shell output: {0}")]
    Write(#[from] std::io::Error),
}

impl ExportError {
    pub fn read_config(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadConfig {
            path: path.into(),
            source,
        }
    }
}
