//! HTML escaping and indentation for the exporter

/// Escape text content for HTML
pub(crate) fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
pub(crate) fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Line-oriented writer with indentation
pub(crate) struct Lines<'a> {
    output: &'a mut String,
    indent: &'a str,
    pretty: bool,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(output: &'a mut String, indent: &'a str, pretty: bool) -> Self {
        Self { output, indent, pretty }
    }

    /// Start a new line at `depth`
    pub(crate) fn open(&mut self, depth: usize) -> &mut String {
        if self.pretty {
            if !self.output.is_empty() {
                self.output.push('\n');
            }
            for _ in 0..depth {
                self.output.push_str(self.indent);
            }
        }
        &mut *self.output
    }

    /// Write a whole line of markup at `depth`
    pub(crate) fn line(&mut self, depth: usize, markup: &str) {
        self.open(depth).push_str(markup);
    }
}
