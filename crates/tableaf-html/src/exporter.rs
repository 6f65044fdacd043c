//! HTML Export
//!
//! Renders the bookmark tree as a standalone page: collapsible folders,
//! inline icons and styles, a tiny toggle script and a dated footer.
//! Rendering only reads the tree.

use tableaf_tree::{Clock, Node, ROOT_ID, Walk, WalkEvent};

use crate::escape::{Lines, escape_attribute, escape_text};
use crate::icons;

const PAGE_TITLE: &str = "TabLeaf - My Bookmarks";
const FILENAME_PREFIX: &str = "TabLeaf_Bookmarks_";

/// Style rules for the inline icons, always emitted
const ICON_STYLES: &str = "\
.folder-icon { width: 16px; height: 16px; margin-right: 5px; vertical-align: middle; }
.bookmark-icon { width: 16px; height: 16px; margin-right: 8px; vertical-align: middle; }
.toggle-icon { margin-right: 5px; vertical-align: middle; transition: transform 0.3s; }
.collapsed .toggle-icon { transform: rotate(-90deg); }
.collapsed > .folder-content { display: none; }
.logo-icon { width: 32px; height: 32px; margin-right: 10px; vertical-align: middle; }";

const TOGGLE_SCRIPT: &str = "\
document.querySelectorAll('.folder-header').forEach(function (header) {
  header.addEventListener('click', function () {
    header.parentElement.classList.toggle('collapsed');
  });
});";

/// A rendered page ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Suggested file name, safe for file systems
    pub filename: String,
    /// Complete HTML text
    pub html: String,
}

/// Download name for a date label; `/` becomes `-`
pub fn suggested_filename(date_label: &str) -> String {
    format!("{FILENAME_PREFIX}{}.html", date_label.replace('/', "-"))
}

/// Bookmark page renderer
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    /// Stylesheet text to embed, if the host has one
    pub inline_styles: Option<String>,
    /// Sentinel id of the synthetic root
    pub root_id: String,
    /// Whether to indent the tree markup
    pub pretty_print: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self {
            inline_styles: None,
            root_id: ROOT_ID.to_string(),
            pretty_print: true,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inline_styles(mut self, styles: Option<String>) -> Self {
        self.inline_styles = styles;
        self
    }

    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = root_id.into();
        self
    }

    pub fn compact(mut self) -> Self {
        self.pretty_print = false;
        self
    }

    /// Render the collapsible tree (the content of the bookmarks container)
    pub fn render_tree(&self, nodes: &[Node]) -> String {
        let mut output = String::new();
        let mut lines = Lines::new(&mut output, &self.indent, self.pretty_print);
        let mut rendered = 0usize;

        for event in Walk::visible(nodes, &self.root_id) {
            rendered += 1;
            match event {
                WalkEvent::EnterFolder(folder, depth) => {
                    let depth = depth * 2;
                    lines.line(depth, r#"<div class="folder">"#);
                    let header = lines.open(depth + 1);
                    header.push_str(r#"<div class="folder-header">"#);
                    header.push_str(icons::FOLDER);
                    header.push_str(icons::CARET);
                    header.push_str(r#"<span class="folder-name">"#);
                    escape_text(&folder.title, header);
                    header.push_str("</span></div>");
                    lines.line(depth + 1, r#"<div class="folder-content">"#);
                }
                WalkEvent::LeaveFolder(_, depth) => {
                    let depth = depth * 2;
                    lines.line(depth + 1, "</div>");
                    lines.line(depth, "</div>");
                }
                WalkEvent::Bookmark(bookmark, depth) => {
                    write_bookmark(lines.open(depth * 2), bookmark, |title, out| escape_text(title, out));
                }
            }
        }

        if rendered == 0 {
            lines.line(0, r#"<div class="no-bookmarks">No bookmarks found</div>"#);
        }
        output
    }

    /// Render the full downloadable page
    pub fn render_document(&self, nodes: &[Node], clock: &dyn Clock) -> ExportDocument {
        let date_label = clock.date_label();
        let tree = self.render_tree(nodes);

        let mut html = String::with_capacity(tree.len() + 4096);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str("  <title>");
        html.push_str(PAGE_TITLE);
        html.push_str("</title>\n  <style>\n");
        if let Some(styles) = &self.inline_styles {
            // Keep host CSS from terminating the <style> element early
            html.push_str(&styles.replace("</style", "<\\/style"));
            html.push('\n');
        }
        html.push_str(ICON_STYLES);
        html.push_str("\n  </style>\n</head>\n<body>\n  <div class=\"container\">\n");
        html.push_str("    <header>\n      <div class=\"logo\">");
        html.push_str(icons::LOGO);
        html.push_str("<h1>");
        html.push_str(PAGE_TITLE);
        html.push_str("</h1></div>\n    </header>\n");
        html.push_str("    <main>\n      <div class=\"bookmarks-container\">\n");
        html.push_str(&tree);
        html.push_str("\n      </div>\n    </main>\n");
        html.push_str("    <footer>\n      <p>TabLeaf bookmarks export (");
        escape_text(&date_label, &mut html);
        html.push_str(")</p>\n    </footer>\n  </div>\n  <script>\n");
        html.push_str(TOGGLE_SCRIPT);
        html.push_str("\n  </script>\n</body>\n</html>\n");

        tracing::info!(bytes = html.len(), date = %date_label, "Rendered bookmark export");
        ExportDocument {
            filename: suggested_filename(&date_label),
            html,
        }
    }
}

/// Write one `<a class="bookmark-item">`; `title` renders the title text
pub(crate) fn write_bookmark(output: &mut String, bookmark: &Node, title: impl FnOnce(&str, &mut String)) {
    output.push_str(r#"<a class="bookmark-item" href=""#);
    escape_attribute(bookmark.url().unwrap_or_default(), output);
    output.push_str(r#"" target="_blank" rel="noopener noreferrer">"#);
    output.push_str(icons::LINK);
    output.push_str(r#"<span class="bookmark-title">"#);
    title(&bookmark.title, output);
    output.push_str("</span></a>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableaf_tree::FixedClock;

    #[test]
    fn test_suggested_filename() {
        assert_eq!(suggested_filename("2025/5/11"), "TabLeaf_Bookmarks_2025-5-11.html");
        assert_eq!(suggested_filename("11.05.2025"), "TabLeaf_Bookmarks_11.05.2025.html");
    }

    #[test]
    fn test_empty_tree_renders_placeholder() {
        let exporter = HtmlExporter::new();
        assert!(exporter.render_tree(&[]).contains("no-bookmarks"));
        assert!(exporter.render_tree(&[Node::synthetic_root(Vec::new())]).contains("no-bookmarks"));
    }

    #[test]
    fn test_titles_and_urls_are_escaped() {
        let nodes = vec![Node::bookmark("<b>Bold</b>", "https://x.com/?a=1&b=\"2\"")];
        let html = HtmlExporter::new().render_tree(&nodes);
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains(r#"href="https://x.com/?a=1&amp;b=&quot;2&quot;""#));
    }

    #[test]
    fn test_compact_tree_has_no_newlines() {
        let nodes = vec![Node::folder("F", vec![Node::bookmark("A", "https://a.com")])];
        let html = HtmlExporter::new().compact().render_tree(&nodes);
        assert!(!html.contains('\n'));
        assert!(html.starts_with(r#"<div class="folder">"#));
        assert!(html.ends_with("</div></div>"));
    }

    #[test]
    fn test_inline_styles_included_when_present() {
        let clock = FixedClock::new(1_746_921_600_000);
        let with = HtmlExporter::new()
            .with_inline_styles(Some("body { color: red; }".to_string()))
            .render_document(&[], &clock);
        assert!(with.html.contains("body { color: red; }"));

        let without = HtmlExporter::new().render_document(&[], &clock);
        assert!(!without.html.contains("color: red"));
        assert!(without.html.contains(".folder-icon"));
    }

    #[test]
    fn test_footer_and_filename_use_clock() {
        let clock = FixedClock::new(1_746_921_600_000);
        let doc = HtmlExporter::new().render_document(&[], &clock);
        assert_eq!(doc.filename, "TabLeaf_Bookmarks_2025-5-11.html");
        assert!(doc.html.contains("(2025/5/11)"));
    }
}
