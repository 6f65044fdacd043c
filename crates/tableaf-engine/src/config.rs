//! Session Configuration

use tableaf_tree::{DEFAULT_MAX_DEPTH, ROOT_ID};

/// Key under which the JSON snapshot is stored
pub const SNAPSHOT_KEY: &str = "tabLeafBookmarks";

/// Session configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Store key for the persisted snapshot
    pub snapshot_key: String,

    /// Sentinel id of the synthetic root
    pub root_id: String,

    /// Deepest folder nesting accepted from HTML imports
    pub max_depth: usize,

    /// Stylesheet embedded into exported pages
    pub inline_styles: Option<String>,

    /// Persist a snapshot after every successful load or import
    pub persist_on_load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_key: SNAPSHOT_KEY.to_string(),
            root_id: ROOT_ID.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            inline_styles: None,
            persist_on_load: false,
        }
    }
}
