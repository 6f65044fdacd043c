//! Bookmark file parser
//!
//! Parses the document with html5ever into an RcDom, then walks the
//! `<DL>`/`<DT>` lists into a [`BookmarkTree`] using an explicit stack.
//! Documents without list structure fall back to a flat list of links.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom};
use tableaf_tree::{BookmarkTree, Clock, Counts, DEFAULT_MAX_DEPTH, Node, NodeId, ParseError, SystemClock};

use crate::Dialect;
use crate::dom::{attr, element_children, find_all, find_first, is_tag, text_content};

/// Schemes that would execute code when the link is opened
const SCRIPT_SCHEMES: &[&str] = &["javascript:", "vbscript:"];

/// Netscape bookmark file parser
#[derive(Debug, Clone)]
pub struct HtmlBookmarkParser<C = SystemClock> {
    clock: C,
    max_depth: usize,
}

impl HtmlBookmarkParser {
    /// Create a parser using the wall clock
    pub fn new() -> Self {
        Self {
            clock: SystemClock,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for HtmlBookmarkParser {
    fn default() -> Self {
        Self::new()
    }
}

/// One pending `<DL>` level
struct Frame {
    entries: Vec<Handle>,
    parent: Option<NodeId>,
    depth: usize,
}

/// What a `<DT>` turned out to hold
enum Entry {
    Bookmark { title: String, url: String },
    Folder { title: String, list: Option<Handle> },
    Skip,
}

impl<C: Clock> HtmlBookmarkParser<C> {
    /// Use another clock for `dateAdded` stamps
    pub fn with_clock<D: Clock>(self, clock: D) -> HtmlBookmarkParser<D> {
        HtmlBookmarkParser {
            clock,
            max_depth: self.max_depth,
        }
    }

    /// Maximum folder nesting accepted before the input is rejected
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a bookmark file into root-level nodes
    pub fn parse(&self, html: &str) -> Result<Vec<Node>, ParseError> {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        let document = &dom.document;

        let dialect = Dialect::detect(document);
        // The format has no reliable creation date, so every node gets "now"
        let now = self.clock.timestamp_millis();

        let mut nodes = match dialect.top_level_entries(document) {
            Some(entries) => self.walk_lists(entries, now)?,
            None => Vec::new(),
        };

        if nodes.is_empty() {
            tracing::warn!(?dialect, "No bookmark list found, collecting loose links");
            nodes = collect_links(document, now);
        }

        if nodes.is_empty() {
            return Err(ParseError::NoRecognizableStructure);
        }

        let counts = Counts::of(&nodes);
        tracing::debug!(?dialect, folders = counts.folders, bookmarks = counts.bookmarks, "Parsed bookmark file");
        Ok(nodes)
    }

    fn walk_lists(&self, top_level: Vec<Handle>, now: i64) -> Result<Vec<Node>, ParseError> {
        let mut tree = BookmarkTree::new();
        let mut stack = vec![Frame { entries: top_level, parent: None, depth: 1 }];

        while let Some(frame) = stack.pop() {
            if frame.depth > self.max_depth {
                tracing::warn!(max_depth = self.max_depth, "Bookmark folders nested too deeply");
                return Err(ParseError::NoRecognizableStructure);
            }

            for (index, entry) in frame.entries.iter().enumerate() {
                if !is_tag(entry, "dt") {
                    continue;
                }
                match classify(entry, frame.entries.get(index + 1)) {
                    Entry::Bookmark { title, url } => {
                        tree.push_bookmark(frame.parent, title, url, Some(now));
                    }
                    Entry::Folder { title, list } => {
                        let folder = tree.push_folder(frame.parent, title, Some(now));
                        if let Some(list) = list {
                            stack.push(Frame {
                                entries: element_children(&list),
                                parent: Some(folder),
                                depth: frame.depth + 1,
                            });
                        }
                    }
                    Entry::Skip => {}
                }
            }
        }

        Ok(tree.into_nodes())
    }
}

/// Decide whether a `<DT>` is a bookmark, a folder or neither
fn classify(entry: &Handle, next: Option<&Handle>) -> Entry {
    let Some(head) = find_first(entry, Some("dl"), |h| is_tag(h, "a") || is_tag(h, "h3")) else {
        return Entry::Skip;
    };

    if is_tag(&head, "a") {
        return match attr(&head, "href") {
            Some(url) if !url.trim().is_empty() => Entry::Bookmark { title: title_of(&head), url },
            _ => {
                tracing::trace!("Skipping link without href");
                Entry::Skip
            }
        };
    }

    // The nested list normally ends up inside the <DT>. A closed </DT> leaves
    // it as the next sibling, and a <DD> description swallows it.
    let list = child_list(entry).or_else(|| match next {
        Some(sibling) if is_tag(sibling, "dl") => Some(sibling.clone()),
        Some(sibling) if is_tag(sibling, "dd") => child_list(sibling),
        _ => None,
    });

    Entry::Folder { title: title_of(&head), list }
}

fn child_list(handle: &Handle) -> Option<Handle> {
    element_children(handle).into_iter().find(|child| is_tag(child, "dl"))
}

/// Trimmed text, or the raw text when it is whitespace only
fn title_of(handle: &Handle) -> String {
    let raw = text_content(handle);
    match raw.trim() {
        "" => raw,
        trimmed => trimmed.to_string(),
    }
}

/// Fallback: every non-script link in document order
fn collect_links(document: &Handle, now: i64) -> Vec<Node> {
    find_all(document, |h| is_tag(h, "a"))
        .iter()
        .filter_map(|link| {
            let url = attr(link, "href")?;
            if url.trim().is_empty() || is_script_url(&url) {
                return None;
            }
            Some(Node::bookmark(title_of(link), url).with_date_added(now))
        })
        .collect()
}

fn is_script_url(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    SCRIPT_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}
