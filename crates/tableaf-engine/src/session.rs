//! Bookmark Session
//!
//! A [`Session`] owns the current tree. Every load or import replaces it
//! wholesale on success and leaves it untouched on failure.

use std::path::Path;

use tableaf_html::{ExportDocument, HtmlBookmarkParser, HtmlExporter, render_search_results};
use tableaf_json::{decode_json_bookmarks, encode_json_bookmarks};
use tableaf_search::{SearchOutcome, search};
use tableaf_tree::{Clock, Counts, Node, SystemClock};
use tracing::{debug, info, warn};

use crate::{BookmarkSource, Config, ExportSink, ImportFormat, MemoryStore, SessionError, SnapshotStore};

/// Current bookmark tree plus the collaborators around it
pub struct Session<S = MemoryStore, C = SystemClock> {
    config: Config,
    store: S,
    clock: C,
    tree: Vec<Node>,
}

impl Session {
    /// Session backed by an in-memory store and the wall clock
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, MemoryStore::new(), SystemClock)
    }
}

impl<S: SnapshotStore, C: Clock> Session<S, C> {
    pub fn new(config: Config, store: S, clock: C) -> Self {
        Self {
            config,
            store,
            clock,
            tree: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The current tree; empty before anything was loaded
    pub fn tree(&self) -> &[Node] {
        &self.tree
    }

    /// Folder and bookmark totals of the current tree
    pub fn counts(&self) -> Counts {
        Counts::of(&self.tree)
    }

    // === Loading ===

    /// Replace the tree with the browser's own bookmarks
    pub async fn load_native<B: BookmarkSource>(&mut self, source: &B) -> Result<Counts, SessionError> {
        let nodes = source.load_tree().await.map_err(|e| {
            warn!("Native bookmark load failed: {}", e);
            e
        })?;
        self.replace("native", nodes)
    }

    /// Replace the tree with the contents of a bookmark HTML file
    pub fn import_html(&mut self, text: &str) -> Result<Counts, SessionError> {
        let nodes = HtmlBookmarkParser::new()
            .with_clock(&self.clock)
            .with_max_depth(self.config.max_depth)
            .parse(text)
            .map_err(|e| {
                warn!("HTML import failed: {}", e);
                e
            })?;
        self.replace("html", nodes)
    }

    /// Replace the tree with a JSON snapshot
    pub fn import_json(&mut self, text: &str) -> Result<Counts, SessionError> {
        let nodes = decode_json_bookmarks(text).map_err(|e| {
            warn!("JSON import failed: {}", e);
            e
        })?;
        self.replace("json", nodes)
    }

    /// Read a user-selected file and import it as JSON or HTML
    pub async fn import_file(&mut self, path: impl AsRef<Path>) -> Result<Counts, SessionError> {
        let path = path.as_ref();
        let text = smol::fs::read_to_string(path).await?;

        match ImportFormat::detect(path, &text) {
            Some(ImportFormat::Json) => self.import_json(&text),
            Some(ImportFormat::Html) => self.import_html(&text),
            None => {
                warn!("Unrecognized import file {}", path.display());
                Err(SessionError::UnsupportedFormat(path.display().to_string()))
            }
        }
    }

    fn replace(&mut self, origin: &str, nodes: Vec<Node>) -> Result<Counts, SessionError> {
        if self.config.persist_on_load {
            Self::write_snapshot(&mut self.store, &self.config.snapshot_key, &nodes)?;
        }

        let counts = Counts::of(&nodes);
        info!(
            "Loaded {} bookmarks in {} folders from {}",
            counts.bookmarks, counts.folders, origin
        );
        self.tree = nodes;
        Ok(counts)
    }

    // === Snapshots ===

    /// Store the current tree as a JSON snapshot
    pub fn persist(&mut self) -> Result<(), SessionError> {
        Self::write_snapshot(&mut self.store, &self.config.snapshot_key, &self.tree)
    }

    fn write_snapshot(store: &mut S, key: &str, nodes: &[Node]) -> Result<(), SessionError> {
        let snapshot = encode_json_bookmarks(nodes).map_err(|e| {
            warn!("Snapshot encoding failed: {}", e);
            e
        })?;
        debug!("Persisting {} byte snapshot under {}", snapshot.len(), key);
        store.persist(key, &snapshot)?;
        Ok(())
    }

    /// Reload the tree from the stored snapshot.
    ///
    /// Returns `Ok(false)` when nothing is stored yet.
    pub fn restore_snapshot(&mut self) -> Result<bool, SessionError> {
        let Some(snapshot) = self.store.retrieve(&self.config.snapshot_key)? else {
            debug!("No snapshot under {}", self.config.snapshot_key);
            return Ok(false);
        };

        let nodes = decode_json_bookmarks(&snapshot)?;
        let counts = Counts::of(&nodes);
        info!("Restored {} bookmarks from snapshot", counts.bookmarks);
        self.tree = nodes;
        Ok(true)
    }

    // === Search ===

    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        search(query, &self.tree)
    }

    /// Markup for the bookmark pane: the full tree when the query is
    /// blank, the flat result list otherwise
    pub fn render_view(&self, query: &str) -> String {
        match self.search(query) {
            SearchOutcome::Inactive => self.exporter().render_tree(&self.tree),
            SearchOutcome::Matches(hits) => render_search_results(query.trim(), &hits),
        }
    }

    // === Export ===

    fn exporter(&self) -> HtmlExporter {
        HtmlExporter::new()
            .with_root_id(self.config.root_id.clone())
            .with_inline_styles(self.config.inline_styles.clone())
    }

    /// Render the current tree as a standalone HTML page
    pub fn export(&self) -> ExportDocument {
        self.exporter().render_document(&self.tree, &self.clock)
    }

    /// Render and hand the page to `sink`
    pub fn export_to<K: ExportSink>(&self, sink: &mut K) -> Result<ExportDocument, SessionError> {
        let document = self.export();
        sink.deliver(&document)?;
        Ok(document)
    }
}
