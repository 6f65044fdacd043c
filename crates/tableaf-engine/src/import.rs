//! Import format detection

use std::path::Path;

/// Format of a user-selected import file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Html,
}

impl ImportFormat {
    /// Pick the format from the file extension, falling back to the
    /// first non-blank character of the contents.
    pub fn detect(path: &Path, contents: &str) -> Option<Self> {
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_ascii_lowercase().as_str() {
                "json" => Some(Self::Json),
                "html" | "htm" => Some(Self::Html),
                _ => None,
            });

        by_extension.or_else(|| match contents.trim_start().chars().next()? {
            '[' | '{' => Some(Self::Json),
            '<' => Some(Self::Html),
            _ => None,
        })
    }
}
