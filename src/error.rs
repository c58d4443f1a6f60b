use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to read stylesheet {}", .path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize color records")]
    Serialize(#[from] serde_json::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ExportError>;
