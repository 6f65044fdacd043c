//! Bookmark file dialects
//!
//! Chrome and Firefox wrap the whole export in one `<DL>`. Safari puts a
//! `<H1>` first and lists entries after it. The dialect is decided once
//! from the generator `<meta>` and only changes where the top-level list
//! starts.

use markup5ever_rcdom::Handle;

use crate::dom::{attr, element_children, find_first, following_siblings, is_tag};

/// Structural convention of an imported bookmark file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Chrome/Firefox: the first `<DL>` in the document
    #[default]
    ChromeStyle,
    /// Safari: the list following the first `<H1>`
    SafariStyle,
}

impl Dialect {
    /// Classify a parsed document by its generator metadata
    pub fn detect(document: &Handle) -> Self {
        let generator = find_first(document, None, |h| {
            is_tag(h, "meta") && attr(h, "name").is_some_and(|n| n.eq_ignore_ascii_case("generator"))
        })
        .and_then(|meta| attr(&meta, "content"));

        match generator {
            Some(content) if content.to_ascii_lowercase().contains("safari") => Dialect::SafariStyle,
            _ => Dialect::ChromeStyle,
        }
    }

    /// Entries of the outermost bookmark list, or `None` if the document
    /// has no list structure for this dialect
    pub(crate) fn top_level_entries(self, document: &Handle) -> Option<Vec<Handle>> {
        match self {
            Dialect::ChromeStyle => {
                let list = find_first(document, None, |h| is_tag(h, "dl"))?;
                Some(element_children(&list))
            }
            Dialect::SafariStyle => {
                let heading = find_first(document, None, |h| is_tag(h, "h1"))?;
                let siblings = following_siblings(&heading);
                let loose_entries = siblings.iter().any(|s| is_tag(s, "dt"));
                match siblings.first() {
                    Some(first) if is_tag(first, "dl") => Some(element_children(first)),
                    // Entries written straight after the heading
                    _ if loose_entries => Some(siblings),
                    // Rules or paragraphs may sit between the heading and its list
                    _ => {
                        let list = siblings.iter().find(|s| is_tag(s, "dl"))?;
                        Some(element_children(list))
                    }
                }
            }
        }
    }
}
