//! Session errors

use tableaf_json::EncodeError;
use tableaf_tree::ParseError;

use crate::LoadError;

/// Anything that can stop a load, import or export.
/// All of them leave the current tree untouched.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Import failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Bookmark source failed: {0}")]
    Load(#[from] LoadError),

    #[error("Snapshot failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported import format: {0}")]
    UnsupportedFormat(String),
}
