//! TabLeaf Engine
//!
//! Owns the current bookmark tree for a session and wires the core
//! crates to the host: the native bookmark source, file imports, the
//! snapshot store and the download sink.
//!
//! # Example
//! ```rust,ignore
//! use tableaf_engine::{Config, Session};
//!
//! let mut session = Session::in_memory(Config::default());
//! session.import_html(&std::fs::read_to_string("bookmarks.html")?)?;
//! let doc = session.export();
//! ```

mod config;
mod error;
mod import;
mod session;
mod sink;
mod source;
mod store;

pub use config::{Config, SNAPSHOT_KEY};
pub use error::SessionError;
pub use import::ImportFormat;
pub use session::Session;
pub use sink::{ExportSink, DirectorySink};
pub use source::{BookmarkSource, LoadError};
pub use store::{SnapshotStore, MemoryStore, FileStore};

// Re-export sub-crates for advanced usage
pub use tableaf_tree as tree;
pub use tableaf_html as html;
pub use tableaf_json as json;
pub use tableaf_search as search;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
