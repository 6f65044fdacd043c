//! Tree walking
//!
//! Pre-order traversal over nested [`Node`]s using an explicit stack.
//! Folders produce an enter/leave pair around their children so that
//! serializers can open and close containers.

use std::slice;

use crate::Node;

/// Traversal event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    /// A folder is opened; its children follow
    EnterFolder(&'a Node, usize),
    /// A bookmark leaf
    Bookmark(&'a Node, usize),
    /// All children of the folder have been visited
    LeaveFolder(&'a Node, usize),
}

impl<'a> WalkEvent<'a> {
    /// Node the event refers to
    pub fn node(&self) -> &'a Node {
        match *self {
            WalkEvent::EnterFolder(node, _) | WalkEvent::Bookmark(node, _) | WalkEvent::LeaveFolder(node, _) => node,
        }
    }

    /// Nesting depth (top level is 0)
    pub fn depth(&self) -> usize {
        match *self {
            WalkEvent::EnterFolder(_, depth) | WalkEvent::Bookmark(_, depth) | WalkEvent::LeaveFolder(_, depth) => depth,
        }
    }
}

struct Frame<'a> {
    owner: Option<&'a Node>,
    rest: slice::Iter<'a, Node>,
}

/// Pre-order walker
pub struct Walk<'a> {
    stack: Vec<Frame<'a>>,
    depth: usize,
}

impl<'a> Walk<'a> {
    /// Walk a sequence of top-level nodes
    pub fn new(nodes: &'a [Node]) -> Self {
        Self::over(vec![nodes])
    }

    /// Walk several top-level sequences one after another
    pub fn over(sequences: Vec<&'a [Node]>) -> Self {
        let stack = sequences
            .into_iter()
            .rev()
            .map(|nodes| Frame { owner: None, rest: nodes.iter() })
            .collect();
        Self { stack, depth: 0 }
    }

    /// Walk only the visible part of the tree: synthetic roots
    /// (identified by `root_id`) are replaced by their children
    pub fn visible(nodes: &'a [Node], root_id: &str) -> Self {
        Self::over(visible_roots(nodes, root_id))
    }

    /// Only bookmark leaves, in pre-order
    pub fn bookmarks(self) -> impl Iterator<Item = &'a Node> {
        self.filter_map(|event| match event {
            WalkEvent::Bookmark(node, _) => Some(node),
            _ => None,
        })
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.rest.next() {
                Some(node) => match node.children() {
                    Some(children) => {
                        self.stack.push(Frame { owner: Some(node), rest: children.iter() });
                        let depth = self.depth;
                        self.depth += 1;
                        return Some(WalkEvent::EnterFolder(node, depth));
                    }
                    None => return Some(WalkEvent::Bookmark(node, self.depth)),
                },
                None => {
                    // Top-level frames sit side by side; only folder frames nest
                    if let Some(owner) = self.stack.pop().and_then(|frame| frame.owner) {
                        self.depth -= 1;
                        return Some(WalkEvent::LeaveFolder(owner, self.depth));
                    }
                }
            }
        }
    }
}

/// Top-level sequences to display, with synthetic roots flattened into
/// their children. Consecutive plain nodes stay in one slice.
pub fn visible_roots<'a>(nodes: &'a [Node], root_id: &str) -> Vec<&'a [Node]> {
    let mut sequences = Vec::new();
    let mut start = 0;

    for (index, node) in nodes.iter().enumerate() {
        if node.is_root_of(root_id) {
            if start < index {
                sequences.push(&nodes[start..index]);
            }
            if let Some(children) = node.children() {
                if !children.is_empty() {
                    sequences.push(children);
                }
            }
            start = index + 1;
        }
    }
    if start < nodes.len() {
        sequences.push(&nodes[start..]);
    }
    sequences
}

/// Number of node levels under `nodes`: 0 for an empty slice, 1 when
/// nothing is nested
pub fn nesting_depth(nodes: &[Node]) -> usize {
    Walk::new(nodes)
        .map(|event| event.depth() + 1)
        .max()
        .unwrap_or(0)
}

/// Folder and bookmark totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub folders: usize,
    pub bookmarks: usize,
}

impl Counts {
    /// Count every node reachable from `nodes`
    pub fn of(nodes: &[Node]) -> Self {
        let mut counts = Counts::default();
        for event in Walk::new(nodes) {
            match event {
                WalkEvent::EnterFolder(..) => counts.folders += 1,
                WalkEvent::Bookmark(..) => counts.bookmarks += 1,
                WalkEvent::LeaveFolder(..) => {}
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Node> {
        vec![Node::synthetic_root(vec![
            Node::folder("Bar", vec![
                Node::bookmark("A", "https://a.com"),
                Node::folder("Empty", Vec::new()),
            ]),
            Node::folder("Other", vec![Node::bookmark("B", "https://b.com")]),
        ])]
    }

    #[test]
    fn test_preorder_events() {
        let nodes = sample();
        let trace: Vec<String> = Walk::new(&nodes)
            .map(|event| match event {
                WalkEvent::EnterFolder(n, d) => format!("+{}@{}", n.title, d),
                WalkEvent::Bookmark(n, d) => format!("{}@{}", n.title, d),
                WalkEvent::LeaveFolder(n, d) => format!("-{}@{}", n.title, d),
            })
            .collect();

        assert_eq!(trace, vec![
            "+@0", "+Bar@1", "A@2", "+Empty@2", "-Empty@2", "-Bar@1",
            "+Other@1", "B@2", "-Other@1", "-@0",
        ]);
    }

    #[test]
    fn test_visible_skips_root() {
        let nodes = sample();
        let titles: Vec<&str> = Walk::visible(&nodes, crate::ROOT_ID)
            .filter(|e| matches!(e, WalkEvent::EnterFolder(..)))
            .map(|e| e.node().title.as_str())
            .collect();
        assert_eq!(titles, vec!["Bar", "Empty", "Other"]);

        let depths: Vec<usize> = Walk::visible(&nodes, crate::ROOT_ID).map(|e| e.depth()).collect();
        assert_eq!(depths[0], 0);
    }

    #[test]
    fn test_empty_root_is_empty_tree() {
        let nodes = vec![Node::synthetic_root(Vec::new())];
        assert!(visible_roots(&nodes, crate::ROOT_ID).is_empty());
        assert_eq!(Walk::visible(&nodes, crate::ROOT_ID).count(), 0);
    }

    #[test]
    fn test_visible_keeps_order_around_root() {
        let nodes = vec![
            Node::bookmark("Before", "https://before.com"),
            Node::synthetic_root(vec![Node::bookmark("Inside", "https://inside.com")]),
            Node::bookmark("After", "https://after.com"),
        ];
        let titles: Vec<&str> = Walk::visible(&nodes, crate::ROOT_ID)
            .bookmarks()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Before", "Inside", "After"]);
    }

    #[test]
    fn test_nesting_depth() {
        assert_eq!(nesting_depth(&[]), 0);
        assert_eq!(nesting_depth(&[Node::bookmark("A", "https://a.com")]), 1);
        assert_eq!(nesting_depth(&[Node::folder("Empty", Vec::new())]), 1);
        // root > Bar > Empty
        assert_eq!(nesting_depth(&sample()), 3);
    }

    #[test]
    fn test_counts() {
        let counts = Counts::of(&sample());
        assert_eq!(counts, Counts { folders: 4, bookmarks: 2 });
    }
}
