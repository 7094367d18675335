use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("icon size {0} is too small to draw")]
    InvalidSize(u32),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{path} is {}x{}, expected {expected}x{expected}", .actual.0, .actual.1)]
    DimensionMismatch {
        path: PathBuf,
        expected: u32,
        actual: (u32, u32),
    },

    #[error("failed to render manifest: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IconError>;
