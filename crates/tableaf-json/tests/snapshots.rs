//! Snapshot format tests
//!
//! Round-trips, browser-shaped input and the failure taxonomy.

use tableaf_json::{EncodeError, decode_json_bookmarks, encode_json_bookmarks};
use tableaf_tree::{DEFAULT_MAX_DEPTH, Node, ParseError, ROOT_ID, nesting_depth};

/// Deterministic tree of the given breadth and depth
fn generated_tree(breadth: usize, depth: usize, seed: usize) -> Vec<Node> {
    (0..breadth)
        .map(|i| {
            let n = seed * 31 + i;
            if depth == 0 || n % 3 == 0 {
                Node::bookmark(format!("Site {n} \"quoted\" ✓"), format!("https://site{n}.example/?q={n}&x=<y>"))
                    .with_date_added(1_600_000_000_000 + n as i64)
            } else {
                Node::folder(format!("Folder {n}"), generated_tree(breadth, depth - 1, n + 1)).with_id(n.to_string())
            }
        })
        .collect()
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_round_trip_generated_trees() {
    for (breadth, depth) in [(1, 0), (3, 2), (4, 4), (2, 8)] {
        let nodes = generated_tree(breadth, depth, breadth + depth);
        let decoded = decode_json_bookmarks(&encode_json_bookmarks(&nodes).unwrap()).unwrap();
        assert_eq!(decoded, nodes, "breadth {breadth}, depth {depth}");
    }
}

#[test]
fn test_round_trip_edge_values() {
    let nodes = vec![Node::synthetic_root(vec![
        Node::folder("", Vec::new()),
        Node::bookmark("", ""),
        Node::bookmark("   ", "javascript:void(0)"),
        Node::folder("多语言 😀", vec![Node::bookmark("\n\t", "https://x.com")]).with_date_added(-1),
    ])];
    let decoded = decode_json_bookmarks(&encode_json_bookmarks(&nodes).unwrap()).unwrap();
    assert_eq!(decoded, nodes);
}

/// Single chain of `levels` nodes ending in an empty folder
fn chain(levels: usize) -> Vec<Node> {
    let mut node = Node::folder("Bottom", Vec::new()).with_date_added(1_700_000_000_000);
    for level in 1..levels {
        node = Node::folder(format!("Level {level}"), vec![
            Node::bookmark(format!("Link {level}"), format!("https://example.com/{level}")),
            node,
        ]);
    }
    vec![node]
}

#[test]
fn test_round_trip_at_max_depth() {
    let nodes = chain(DEFAULT_MAX_DEPTH);
    assert_eq!(nesting_depth(&nodes), DEFAULT_MAX_DEPTH);

    let decoded = decode_json_bookmarks(&encode_json_bookmarks(&nodes).unwrap()).unwrap();
    assert_eq!(decoded, nodes);
}

#[test]
fn test_too_deep_tree_is_not_encoded() {
    let nodes = chain(DEFAULT_MAX_DEPTH + 1);
    assert!(matches!(encode_json_bookmarks(&nodes), Err(EncodeError::TooDeep { .. })));
}

#[test]
fn test_encode_is_deterministic() {
    let nodes = generated_tree(3, 3, 7);
    assert_eq!(encode_json_bookmarks(&nodes).unwrap(), encode_json_bookmarks(&nodes).unwrap());
}

// ============================================================================
// BROWSER-SHAPED INPUT
// ============================================================================

#[test]
fn test_native_tree_shape() {
    let json = r#"[{
        "id": "0",
        "title": "",
        "dateAdded": 1700000000000,
        "children": [
            {
                "id": "1", "parentId": "0", "index": 0, "title": "Bookmarks bar",
                "dateAdded": 1700000000001, "dateGroupModified": 1700000000009,
                "children": [
                    {"id": "5", "parentId": "1", "index": 0, "title": "Rust",
                     "url": "https://www.rust-lang.org/", "dateAdded": 1700000000002}
                ]
            },
            {"id": "2", "parentId": "0", "index": 1, "title": "Other bookmarks", "children": []}
        ]
    }]"#;

    let nodes = decode_json_bookmarks(json).unwrap();
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].is_synthetic_root());
    assert_eq!(nodes[0].id.as_deref(), Some(ROOT_ID));

    let children = nodes[0].children().unwrap();
    assert_eq!(children[0].title, "Bookmarks bar");
    assert_eq!(children[0].date_added, Some(1_700_000_000_001));
    assert_eq!(children[0].children().unwrap()[0].url(), Some("https://www.rust-lang.org/"));
    assert_eq!(children[1].children().map(<[Node]>::len), Some(0));

    // Unknown fields are dropped, known ones survive
    let encoded = encode_json_bookmarks(&nodes).unwrap();
    assert!(!encoded.contains("parentId"));
    assert!(encoded.contains(r#""id":"5""#));
    assert_eq!(decode_json_bookmarks(&encoded).unwrap(), nodes);
}

#[test]
fn test_node_with_url_and_children_is_a_folder() {
    let json = r#"[{"title":"Ambiguous","url":"https://x.com","children":[{"title":"Y","url":"https://y.com"}]}]"#;
    let nodes = decode_json_bookmarks(json).unwrap();

    assert_eq!(nodes, vec![Node::folder("Ambiguous", vec![Node::bookmark("Y", "https://y.com")])]);
    // Re-encoding settles the ambiguity for good
    assert!(!encode_json_bookmarks(&nodes).unwrap().contains("https://x.com"));
}

#[test]
fn test_node_with_neither_is_empty_folder() {
    let nodes = decode_json_bookmarks(r#"[{"title":"Bare"},{}]"#).unwrap();
    assert_eq!(nodes, vec![Node::folder("Bare", Vec::new()), Node::folder("", Vec::new())]);
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_empty_collection() {
    assert_eq!(decode_json_bookmarks("[]"), Err(ParseError::EmptyCollection));
    assert_eq!(decode_json_bookmarks("  [ ]\n"), Err(ParseError::EmptyCollection));
}

#[test]
fn test_invalid_json() {
    for text in ["", "not json", "[{]", "null", "\"string\"", "[1, 2]", r#"{"url": 5}"#] {
        assert!(
            matches!(decode_json_bookmarks(text), Err(ParseError::InvalidJson(_))),
            "{text:?} should be rejected"
        );
    }
}
