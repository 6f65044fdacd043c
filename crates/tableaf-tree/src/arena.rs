//! Bookmark Tree (arena-based construction)
//!
//! Parsers append entries by parent id instead of building nested
//! vectors directly, then fold the arena into [`Node`]s in one pass.
//! Parents are always allocated before their children, so folding in
//! reverse allocation order never needs recursion.

use crate::{Node, NodeId, NodeKind};

#[derive(Debug)]
struct Entry {
    title: String,
    date_added: Option<i64>,
    kind: EntryKind,
}

#[derive(Debug)]
enum EntryKind {
    Folder(Vec<NodeId>),
    Bookmark(String),
}

/// Arena of bookmark entries
#[derive(Debug, Default)]
pub struct BookmarkTree {
    entries: Vec<Entry>,
    roots: Vec<NodeId>,
}

impl BookmarkTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a folder under `parent` (or at the top level)
    pub fn push_folder(&mut self, parent: Option<NodeId>, title: impl Into<String>, date_added: Option<i64>) -> NodeId {
        self.push(parent, Entry {
            title: title.into(),
            date_added,
            kind: EntryKind::Folder(Vec::new()),
        })
    }

    /// Append a bookmark under `parent` (or at the top level)
    pub fn push_bookmark(
        &mut self,
        parent: Option<NodeId>,
        title: impl Into<String>,
        url: impl Into<String>,
        date_added: Option<i64>,
    ) -> NodeId {
        self.push(parent, Entry {
            title: title.into(),
            date_added,
            kind: EntryKind::Bookmark(url.into()),
        })
    }

    fn push(&mut self, parent: Option<NodeId>, entry: Entry) -> NodeId {
        let id = NodeId(self.entries.len() as u32);
        self.entries.push(entry);

        let siblings = parent
            .and_then(|p| self.entries.get_mut(p.index()))
            .and_then(|e| match &mut e.kind {
                EntryKind::Folder(children) => Some(children),
                EntryKind::Bookmark(_) => None,
            });
        match siblings {
            Some(children) => children.push(id),
            // Unknown or non-folder parents attach at the top level
            None => self.roots.push(id),
        }
        id
    }

    /// Number of entries in the tree
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level entries in insertion order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Check whether an entry is a folder
    pub fn is_folder(&self, id: NodeId) -> bool {
        matches!(self.entries.get(id.index()), Some(Entry { kind: EntryKind::Folder(_), .. }))
    }

    /// Children of a folder entry
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.entries.get(id.index()).map(|e| &e.kind) {
            Some(EntryKind::Folder(children)) => children,
            _ => &[],
        }
    }

    /// Fold the arena into nested nodes, preserving insertion order
    pub fn into_nodes(self) -> Vec<Node> {
        let mut built: Vec<Option<Node>> = Vec::with_capacity(self.entries.len());
        built.resize_with(self.entries.len(), || None);

        for (index, entry) in self.entries.into_iter().enumerate().rev() {
            let kind = match entry.kind {
                EntryKind::Folder(ids) => NodeKind::Folder {
                    children: ids
                        .into_iter()
                        .filter_map(|child| built.get_mut(child.index()).and_then(Option::take))
                        .collect(),
                },
                EntryKind::Bookmark(url) => NodeKind::Bookmark { url },
            };
            built[index] = Some(Node {
                id: None,
                title: entry.title,
                date_added: entry.date_added,
                kind,
            });
        }

        self.roots
            .into_iter()
            .filter_map(|root| built.get_mut(root.index()).and_then(Option::take))
            .collect()
    }
}
