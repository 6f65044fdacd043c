//! TabLeaf JSON
//!
//! The persisted snapshot format: an array of node objects using the
//! browser bookmark API's field names. Decoding also accepts a single
//! node object. New fields may be added; unknown ones are ignored.

use serde::Deserialize;
use tableaf_tree::{Counts, DEFAULT_MAX_DEPTH, Node, ParseError, nesting_depth};

/// Failure to produce a snapshot
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Bookmark tree is {depth} levels deep, snapshots hold at most {max}")]
    TooDeep { depth: usize, max: usize },

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level snapshot shape
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Many(Vec<Node>),
    One(Node),
}

/// Decode a snapshot into root-level nodes
pub fn decode_json_bookmarks(text: &str) -> Result<Vec<Node>, ParseError> {
    let snapshot: Snapshot = serde_json::from_str(text).map_err(|e| {
        tracing::warn!(error = %e, "Rejected bookmark JSON");
        ParseError::InvalidJson(e.to_string())
    })?;

    let nodes = match snapshot {
        Snapshot::Many(nodes) => nodes,
        Snapshot::One(node) => vec![node],
    };

    if nodes.is_empty() {
        return Err(ParseError::EmptyCollection);
    }

    let counts = Counts::of(&nodes);
    tracing::debug!(folders = counts.folders, bookmarks = counts.bookmarks, "Decoded bookmark JSON");
    Ok(nodes)
}

/// Encode root-level nodes as a compact snapshot.
///
/// Trees deeper than [`DEFAULT_MAX_DEPTH`] are refused, since
/// [`decode_json_bookmarks`] could not read them back.
pub fn encode_json_bookmarks(nodes: &[Node]) -> Result<String, EncodeError> {
    let depth = nesting_depth(nodes);
    if depth > DEFAULT_MAX_DEPTH {
        tracing::warn!(depth, max = DEFAULT_MAX_DEPTH, "Refusing to encode bookmark tree");
        return Err(EncodeError::TooDeep { depth, max: DEFAULT_MAX_DEPTH });
    }

    let json = serde_json::to_string(nodes)?;
    tracing::debug!(bytes = json.len(), "Encoded bookmark JSON");
    Ok(json)
}
