//! Error types for background removal.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The image has no pixels, so there is no border to sample.
    #[error("image has no pixels ({width}x{height})")]
    InvalidImage { width: u32, height: u32 },

    #[error("input image not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tolerance must be a finite, non-negative number (got {0})")]
    InvalidTolerance(f64),
}

impl Error {
    /// Process exit status for this error, following the BSD sysexits values.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidTolerance(_) => 64,
            Error::InvalidImage { .. } | Error::Decode { .. } => 65,
            Error::NotFound { .. } => 66,
            Error::Write { .. } => 73,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}
