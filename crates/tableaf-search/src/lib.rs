//! TabLeaf Search
//!
//! Case-insensitive substring search over bookmark titles and URLs.
//! Results are the matching bookmark leaves in pre-order, each with the
//! span of the first title occurrence for highlighting.

mod fold;

use std::ops::Range;

use tableaf_tree::{Node, Walk};

pub use fold::{contains_folded, fold_case, find_folded};

/// A matching bookmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// The bookmark leaf
    pub node: &'a Node,
    /// Byte range of the first title occurrence; `None` when only the URL matched
    pub highlight: Option<Range<usize>>,
}

impl SearchHit<'_> {
    /// Title slice covered by the highlight
    pub fn highlighted(&self) -> Option<&str> {
        self.highlight.clone().and_then(|range| self.node.title.get(range))
    }
}

/// Result of running a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Blank query: the caller shows the full tree
    Inactive,
    /// Matches in traversal order (possibly none)
    Matches(Vec<SearchHit<'a>>),
}

impl<'a> SearchOutcome<'a> {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchOutcome::Matches(_))
    }

    /// Matches, empty for an inactive search
    pub fn hits(&self) -> &[SearchHit<'a>] {
        match self {
            SearchOutcome::Inactive => &[],
            SearchOutcome::Matches(hits) => hits,
        }
    }
}

/// Trim and case-fold a query; `None` means "no active search"
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(fold_case(trimmed))
    }
}

/// Search every bookmark under `nodes`, synthetic root included
pub fn search<'a>(query: &str, nodes: &'a [Node]) -> SearchOutcome<'a> {
    let Some(needle) = normalize_query(query) else {
        return SearchOutcome::Inactive;
    };

    let mut hits = Vec::new();
    for node in Walk::new(nodes).bookmarks() {
        let highlight = find_folded(&node.title, &needle);
        let url_matches = node.url().is_some_and(|url| contains_folded(url, &needle));

        if highlight.is_some() || url_matches {
            hits.push(SearchHit { node, highlight });
        }
    }

    tracing::debug!(query = %needle, matches = hits.len(), "Bookmark search");
    SearchOutcome::Matches(hits)
}
