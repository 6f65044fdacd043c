//! TabLeaf Tree - Bookmark model
//!
//! The recursive folder/bookmark entity shared by every TabLeaf crate,
//! plus an arena builder and a stack-based walker so that no traversal
//! recurses on untrusted input depth.

mod node;
mod arena;
mod walk;
mod clock;

pub use node::{Node, NodeKind};
pub use arena::BookmarkTree;
pub use walk::{Walk, WalkEvent, Counts, nesting_depth, visible_roots};
pub use clock::{Clock, SystemClock, FixedClock};

/// Sentinel id of the synthetic root wrapping "bookmarks bar" / "other bookmarks"
pub const ROOT_ID: &str = "0";

/// Nesting limit applied by builders before giving up on an input.
///
/// Every level costs two JSON containers (the node object and its
/// `children` array), so trees within this limit stay under serde_json's
/// recursion limit of 128 and a snapshot can always be read back.
pub const DEFAULT_MAX_DEPTH: usize = 60;

/// Arena index of a node inside a [`BookmarkTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the entry in the arena
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Failure to turn external bytes into a bookmark tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("No recognizable bookmark structure found")]
    NoRecognizableStructure,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Import contains no bookmarks")]
    EmptyCollection,
}
