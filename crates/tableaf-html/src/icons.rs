//! Inline SVG icons
//!
//! The exported page must open offline, so icons are embedded as markup
//! instead of referencing an icon font or fetching favicons.

pub(crate) const FOLDER: &str = concat!(
    r##"<svg class="folder-icon" viewBox="0 0 1024 1024" width="16" height="16" xmlns="http://www.w3.org/2000/svg">"##,
    r##"<path d="M512 411H65V210c0-22 18-39 39-39h306c17 0 33 11 38 28z" fill="#FFB02C"/>"##,
    r##"<path d="M919 883H104c-22 0-39-18-39-39V335c0-22 18-39 39-39h815c22 0 39 18 39 39v509c0 21-18 39-39 39z" fill="#FFCA28"/>"##,
    "</svg>",
);

pub(crate) const CARET: &str = concat!(
    r##"<svg class="toggle-icon" viewBox="0 0 320 512" width="10" height="16" xmlns="http://www.w3.org/2000/svg">"##,
    r##"<path d="M31 192h258c18 0 27 22 14 34L174 355c-8 8-20 8-28 0L17 226c-13-12-4-34 14-34z" fill="currentColor"/>"##,
    "</svg>",
);

pub(crate) const LINK: &str = concat!(
    r##"<svg class="bookmark-icon" viewBox="0 0 24 24" width="16" height="16" xmlns="http://www.w3.org/2000/svg">"##,
    r##"<path d="M10 13a5 5 0 0 0 7 0l3-3a5 5 0 0 0-7-7l-1 1M14 11a5 5 0 0 0-7 0l-3 3a5 5 0 0 0 7 7l1-1" "##,
    r##"fill="none" stroke="#5F6368" stroke-width="2" stroke-linecap="round"/>"##,
    "</svg>",
);

pub(crate) const LOGO: &str = concat!(
    r##"<svg class="logo-icon" viewBox="0 0 64 64" width="32" height="32" xmlns="http://www.w3.org/2000/svg">"##,
    r##"<path d="M54 8C30 8 12 22 12 42c0 5 1 9 3 13l4-4c-1-3-1-6-1-9 0-14 11-25 27-29C34 20 26 32 24 46 "##,
    r##"c22-2 34-16 34-38z" fill="#4CAF50"/>"##,
    r##"<path d="M8 58l18-18" stroke="#2E7D32" stroke-width="4" stroke-linecap="round"/>"##,
    "</svg>",
);
