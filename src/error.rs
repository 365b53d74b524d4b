//! Error types for rendering and writing icons.

use std::path::PathBuf;

/// The requested size cannot produce a meaningful icon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("icon size {size}px is below the minimum of {min}px")]
    SizeTooSmall { size: u32, min: u32 },
}

/// Errors that can occur while producing an icon file.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {} as PNG: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io { path: path.into(), source }
    }
}
