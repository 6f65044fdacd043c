//! TabLeaf HTML
//!
//! Reads browser-exported bookmark files (the Netscape `<DL>/<DT>`
//! format) built on html5ever, and writes the self-contained HTML page
//! that TabLeaf offers for download.

mod dom;
mod dialect;
mod parser;
mod escape;
mod icons;
mod exporter;
mod results;

pub use dialect::Dialect;
pub use parser::HtmlBookmarkParser;
pub use exporter::{HtmlExporter, ExportDocument, suggested_filename};
pub use results::render_search_results;

use tableaf_tree::{Clock, Node, ParseError};

/// Parse a bookmark file into root-level nodes
pub fn parse_html_bookmark_file(html: &str) -> Result<Vec<Node>, ParseError> {
    HtmlBookmarkParser::new().parse(html)
}

/// Render the downloadable page for `nodes`
pub fn render_export_document(nodes: &[Node], inline_styles: Option<&str>, clock: &dyn Clock) -> ExportDocument {
    HtmlExporter::new()
        .with_inline_styles(inline_styles.map(str::to_string))
        .render_document(nodes, clock)
}
