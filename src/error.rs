//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

use crate::cli::exit_codes;

/// Errors that can occur while producing icons
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Invalid icon size: {0}x{0}")]
    InvalidSize(u32),

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write icon {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    /// Exit code reported when this error aborts the run
    pub fn exit_code(&self) -> i32 {
        match self {
            IconError::InvalidSize(_) => exit_codes::RENDER_FAILURE,
            IconError::CreateDir { .. } | IconError::Write { .. } => exit_codes::IO_FAILURE,
        }
    }
}
