//! Bookmark Node
//!
//! A node is either a folder (ordered children) or a bookmark (a URL).
//! The JSON shape keeps the browser's field names: `id`, `title`, `url`,
//! `children` and `dateAdded`, where exactly one of `url`/`children`
//! is written.

use serde::{Deserialize, Serialize, Serializer};

use crate::ROOT_ID;

/// Folder or bookmark entity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawNode")]
pub struct Node {
    /// Opaque identifier from the source, if any
    pub id: Option<String>,
    /// Display name (may be empty)
    pub title: String,
    /// Creation timestamp in milliseconds since the epoch
    pub date_added: Option<i64>,
    /// Folder or bookmark payload
    pub kind: NodeKind,
}

/// Folder XOR bookmark payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Folder { children: Vec<Node> },
    Bookmark { url: String },
}

impl Node {
    /// Create a folder
    pub fn folder(title: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: None,
            title: title.into(),
            date_added: None,
            kind: NodeKind::Folder { children },
        }
    }

    /// Create a bookmark
    pub fn bookmark(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            date_added: None,
            kind: NodeKind::Bookmark { url: url.into() },
        }
    }

    /// Wrap top-level folders in a synthetic root
    pub fn synthetic_root(children: Vec<Node>) -> Self {
        Self::folder("", children).with_id(ROOT_ID)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_date_added(mut self, timestamp: i64) -> Self {
        self.date_added = Some(timestamp);
        self
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    #[inline]
    pub fn is_bookmark(&self) -> bool {
        matches!(self.kind, NodeKind::Bookmark { .. })
    }

    /// URL if this is a bookmark
    #[inline]
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Bookmark { url } => Some(url),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Children if this is a folder
    #[inline]
    pub fn children(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Folder { children } => Some(children),
            NodeKind::Bookmark { .. } => None,
        }
    }

    /// Check whether this node carries the given sentinel id
    pub fn is_root_of(&self, root_id: &str) -> bool {
        self.is_folder() && self.id.as_deref() == Some(root_id)
    }

    /// Check for the default synthetic root sentinel
    pub fn is_synthetic_root(&self) -> bool {
        self.is_root_of(ROOT_ID)
    }
}

/// Wire shape used for decoding; both payload fields are optional
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    children: Option<Vec<Node>>,
    #[serde(default)]
    date_added: Option<i64>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        // `children` wins over `url`; a node with neither is an empty folder.
        let kind = match (raw.children, raw.url) {
            (Some(children), url) => {
                if url.is_some() {
                    tracing::debug!(title = %raw.title, "Dropping url on node that also has children");
                }
                NodeKind::Folder { children }
            }
            (None, Some(url)) => NodeKind::Bookmark { url },
            (None, None) => NodeKind::Folder { children: Vec::new() },
        };

        Self {
            id: raw.id,
            title: raw.title,
            date_added: raw.date_added,
            kind,
        }
    }
}

/// Borrowed wire shape used for encoding without cloning subtrees
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RawNodeRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [Node]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_added: Option<i64>,
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawNodeRef {
            id: self.id.as_deref(),
            title: &self.title,
            url: self.url(),
            children: self.children(),
            date_added: self.date_added,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_are_exclusive() {
        let folder = Node::folder("Work", Vec::new());
        let bookmark = Node::bookmark("Rust", "https://rust-lang.org");

        assert!(folder.is_folder() && !folder.is_bookmark());
        assert!(bookmark.is_bookmark() && !bookmark.is_folder());
        assert_eq!(bookmark.url(), Some("https://rust-lang.org"));
        assert!(bookmark.children().is_none());
        assert_eq!(folder.children().map(<[Node]>::len), Some(0));
    }

    #[test]
    fn test_synthetic_root() {
        let root = Node::synthetic_root(vec![Node::folder("Bookmarks bar", Vec::new())]);
        assert!(root.is_synthetic_root());
        assert!(!Node::folder("x", Vec::new()).with_id("1").is_synthetic_root());
        // A bookmark can never act as the root, even with the sentinel id
        assert!(!Node::bookmark("x", "https://x.com").with_id(ROOT_ID).is_synthetic_root());
    }

    #[test]
    fn test_decode_neither_is_empty_folder() {
        let node: Node = serde_json::from_str(r#"{"title":"Empty"}"#).unwrap();
        assert_eq!(node, Node::folder("Empty", Vec::new()));
    }

    #[test]
    fn test_decode_children_win_over_url() {
        let node: Node =
            serde_json::from_str(r#"{"title":"Both","url":"https://x.com","children":[]}"#).unwrap();
        assert!(node.is_folder());
        assert!(node.url().is_none());
    }

    #[test]
    fn test_encode_omits_absent_fields() {
        let json = serde_json::to_string(&Node::bookmark("X", "https://x.com")).unwrap();
        assert_eq!(json, r#"{"title":"X","url":"https://x.com"}"#);

        let json = serde_json::to_string(&Node::folder("F", Vec::new()).with_id("7")).unwrap();
        assert_eq!(json, r#"{"id":"7","title":"F","children":[]}"#);
    }

    #[test]
    fn test_date_added_uses_browser_field_name() {
        let node = Node::bookmark("X", "https://x.com").with_date_added(1_700_000_000_000);
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains(r#""dateAdded":1700000000000"#));
    }
}
