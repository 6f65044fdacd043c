//! Search result markup
//!
//! Flat list of matching bookmarks with the first title occurrence
//! wrapped in `<span class="highlight">`.

use tableaf_search::SearchHit;

use crate::escape::{Lines, escape_text};
use crate::exporter::write_bookmark;

/// Render search hits, or a "nothing found" message naming the query
pub fn render_search_results(query: &str, hits: &[SearchHit<'_>]) -> String {
    let mut output = String::new();
    let mut lines = Lines::new(&mut output, "  ", true);

    if hits.is_empty() {
        let message = lines.open(0);
        message.push_str(r#"<div class="no-bookmarks">No bookmarks matching ""#);
        escape_text(query.trim(), message);
        message.push_str("\"</div>");
        return output;
    }

    let noun = if hits.len() == 1 { "match" } else { "matches" };
    lines.line(0, &format!(
        r#"<div class="search-results-header"><h2>Search results: {} {noun}</h2></div>"#,
        hits.len()
    ));
    lines.line(0, r#"<div class="search-results">"#);
    for hit in hits {
        write_bookmark(lines.open(1), hit.node, |title, out| highlight(title, hit, out));
    }
    lines.line(0, "</div>");
    output
}

fn highlight(title: &str, hit: &SearchHit<'_>, output: &mut String) {
    let Some(range) = hit.highlight.clone() else {
        escape_text(title, output);
        return;
    };
    match (title.get(..range.start), title.get(range.clone()), title.get(range.end..)) {
        (Some(before), Some(matched), Some(after)) => {
            escape_text(before, output);
            output.push_str(r#"<span class="highlight">"#);
            escape_text(matched, output);
            output.push_str("</span>");
            escape_text(after, output);
        }
        _ => escape_text(title, output),
    }
}
