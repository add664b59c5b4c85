use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for a sequence of {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read manifest {path:?}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path:?}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("manifest {path:?} has a NUL character in {field}")]
    InvalidText { path: PathBuf, field: String },

    #[error("failed to load asset {path:?}: {reason}")]
    AssetLoad { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
