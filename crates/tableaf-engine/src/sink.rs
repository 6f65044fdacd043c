//! Export Sink
//!
//! Hands a rendered export document to whatever saves it.

use std::fs;
use std::io;
use std::path::PathBuf;

use tableaf_html::ExportDocument;
use tracing::info;

/// Destination for exported documents
pub trait ExportSink {
    /// Deliver the document under its suggested filename
    fn deliver(&mut self, document: &ExportDocument) -> io::Result<()>;
}

/// Sink saving documents into a download directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    saved: Vec<PathBuf>,
}

impl Default for DirectorySink {
    fn default() -> Self {
        // Default to ~/Downloads
        let dir = std::env::var("HOME")
            .map(|home| PathBuf::from(home).join("Downloads"))
            .unwrap_or_else(|_| PathBuf::from("."));
        Self::new(dir)
    }
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), saved: Vec::new() }
    }

    /// Set download directory
    pub fn set_dir(&mut self, dir: PathBuf) {
        self.dir = dir;
    }

    /// Paths written so far, oldest first
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&mut self, document: &ExportDocument) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&document.filename);
        fs::write(&path, &document.html)?;
        info!("Saved export to {}", path.display());
        self.saved.push(path);
        Ok(())
    }
}

impl ExportSink for Vec<ExportDocument> {
    fn deliver(&mut self, document: &ExportDocument) -> io::Result<()> {
        self.push(document.clone());
        Ok(())
    }
}
