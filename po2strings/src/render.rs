//! Rendering of `.strings` output into the converter's buffer.

use crate::{escape::Escaping, types::OutputRecord};

/// First line of every generated file unless disabled.
pub const HEADER: &str = "/* Automatically generated strings file */\n";

/// Writes header, comment blocks and records, applying one [`Escaping`] strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    escaping: Escaping,
}

impl Renderer {
    pub fn new(escaping: Escaping) -> Self {
        Renderer { escaping }
    }

    pub fn header(&self, buf: &mut String) {
        buf.push_str(HEADER);
    }

    /// Writes a comment block preceded by a blank line.
    pub fn comment(&self, buf: &mut String, text: &str) {
        buf.push_str("\n/* ");
        buf.push_str(text);
        buf.push_str(" */\n");
    }

    /// Writes one record and its newline. Untranslated records come out commented.
    pub fn record(&self, buf: &mut String, record: &OutputRecord) {
        let escaped = OutputRecord::new(
            self.escaping.apply(&record.key),
            self.escaping.apply(&record.value),
        );
        buf.push_str(&escaped.to_string());
        buf.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_block() {
        let mut buf = String::new();
        Renderer::default().comment(&mut buf, "file.c:42");
        assert_eq!(buf, "\n/* file.c:42 */\n");
    }

    #[test]
    fn test_records() {
        let renderer = Renderer::default();
        let mut buf = String::new();
        renderer.record(&mut buf, &OutputRecord::new("Hello", "Bonjour"));
        renderer.record(&mut buf, &OutputRecord::new("Bye", ""));
        assert_eq!(
            buf,
            "\"Hello\" = \"Bonjour\";\n/* \"Bye\" = \"\"; */\n"
        );
    }

    #[test]
    fn test_escaping_applies_to_key_and_value() {
        let renderer = Renderer::new(Escaping::Backslash);
        let mut buf = String::new();
        renderer.record(&mut buf, &OutputRecord::new(r#"a "b""#, r#"c "d""#));
        assert_eq!(buf, "\"a \\\"b\\\"\" = \"c \\\"d\\\"\";\n");
    }

    #[test]
    fn test_disabled_escaping_passes_quotes_through() {
        let mut buf = String::new();
        Renderer::default().record(&mut buf, &OutputRecord::new(r#"a "b""#, "c"));
        assert_eq!(buf, "\"a \"b\"\" = \"c\";\n");
    }

    #[test]
    fn test_header() {
        let mut buf = String::new();
        Renderer::default().header(&mut buf);
        assert_eq!(buf, HEADER);
    }
}
