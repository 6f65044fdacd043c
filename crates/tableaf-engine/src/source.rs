//! Native bookmark source
//!
//! The host browser's bookmark tree is fetched asynchronously by the
//! embedder; the session only awaits the result.

use std::future::Future;

use tableaf_tree::Node;

/// Failure to obtain the browser's own bookmark tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Native bookmarks unavailable: {0}")]
    NativeUnavailable(String),
}

/// Provider of the browser's bookmark tree
pub trait BookmarkSource {
    /// Fetch the whole tree, synthetic root included
    fn load_tree(&self) -> impl Future<Output = Result<Vec<Node>, LoadError>>;
}
