/// Represents an open document in the LSP server
pub struct Document {
    /// Lines of the document (cached for per-line lookups; every feature
    /// here is line-local)
    lines: Vec<String>,
}

impl Document {
    pub fn new(text: String) -> Self {
        Self {
            lines: split_lines(&text),
        }
    }

    pub fn update_text(&mut self, new_text: String) {
        self.lines = split_lines(&new_text);
    }

    /// The text of a single line; empty for lines past the end, so a
    /// fresh trailing line behaves like any other empty line
    pub fn line(&self, line: u32) -> &str {
        self.lines
            .get(line as usize)
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lookup() {
        let doc = Document::new("first\nsecond".to_string());
        assert_eq!(doc.line(0), "first");
        assert_eq!(doc.line(1), "second");
        assert_eq!(doc.line(2), "");
    }

    #[test]
    fn test_update_replaces_content() {
        let mut doc = Document::new("old".to_string());
        doc.update_text("new text".to_string());
        assert_eq!(doc.line(0), "new text");
    }
}
