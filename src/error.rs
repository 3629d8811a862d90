use thiserror::Error;

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::text::TextError;

/// Errors that can surface at the edges of the editor (config, export, fonts).
///
/// Drawing itself never fails: out-of-range input is clipped or ignored.
#[derive(Error, Debug)]
pub enum PaintError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("font error: {0}")]
    Font(#[from] TextError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible editor operations
pub type PaintResult<T> = Result<T, PaintError>;
