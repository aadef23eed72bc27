//! Block-aware text sink.
//!
//! Every piece of generated text flows through [`CodeWriter`], which
//! re-indents each line according to the running brace nesting level.
//! The algorithm is purely syntactic: a line whose first non-whitespace
//! character is `}` is printed one level shallower so closing braces
//! align with the block they close, and after printing the level moves
//! by the line's brace balance. A chunk with unbalanced braces therefore
//! skews all subsequent output, which is a bug in the emitting code, not
//! a runtime condition.

use std::fmt;

/// Indentation unit.
const INDENT: &str = "    ";

/// Indentation-tracking writer over any character sink.
#[derive(Debug)]
pub struct CodeWriter<W> {
    out: W,
    level: usize,
}

impl<W: fmt::Write> CodeWriter<W> {
    /// Creates a writer starting at nesting level 0.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out, level: 0 }
    }

    /// Writes one logical chunk, which may span multiple lines.
    ///
    /// An empty chunk prints a single blank line without affecting the
    /// nesting level.
    ///
    /// # Errors
    /// Propagates failures of the underlying sink.
    pub fn puts(&mut self, chunk: &str) -> fmt::Result {
        if chunk.is_empty() {
            return self.out.write_char('\n');
        }
        for line in chunk.lines() {
            self.put_line(line)?;
        }
        Ok(())
    }

    fn put_line(&mut self, line: &str) -> fmt::Result {
        let stripped = line.trim();
        if stripped.is_empty() {
            return self.out.write_char('\n');
        }
        let print_level = if stripped.starts_with('}') && self.level >= 1 {
            self.level - 1
        } else {
            self.level
        };
        for _ in 0..print_level {
            self.out.write_str(INDENT)?;
        }
        self.out.write_str(stripped)?;
        self.out.write_char('\n')?;

        let opens = stripped.matches('{').count();
        let closes = stripped.matches('}').count();
        self.level = (self.level + opens).saturating_sub(closes);
        Ok(())
    }

    /// Returns the current nesting level.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Consumes the writer and returns the underlying sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(chunks: &[&str]) -> String {
        let mut writer = CodeWriter::new(String::new());
        for chunk in chunks {
            writer.puts(chunk).unwrap();
        }
        writer.into_inner()
    }

    #[test]
    fn test_indents_by_brace_nesting() {
        let output = render(&["namespace A", "{", "int x;", "}"]);
        assert_eq!(output, "namespace A\n{\n    int x;\n}\n");
    }

    #[test]
    fn test_closing_brace_aligns_with_block() {
        let output = render(&["a {", "b {", "x;", "}", "}"]);
        assert_eq!(output, "a {\n    b {\n        x;\n    }\n}\n");
    }

    #[test]
    fn test_multi_line_chunk_is_split_and_reindented() {
        let output = render(&["a\n{\n        x;\n}"]);
        assert_eq!(output, "a\n{\n    x;\n}\n");
    }

    #[test]
    fn test_strips_incidental_whitespace() {
        let output = render(&["   int x;   "]);
        assert_eq!(output, "int x;\n");
    }

    #[test]
    fn test_empty_chunk_prints_blank_line() {
        let mut writer = CodeWriter::new(String::new());
        writer.puts("{").unwrap();
        let level = writer.level();
        writer.puts("").unwrap();
        assert_eq!(writer.level(), level);
        writer.puts("}").unwrap();
        assert_eq!(writer.into_inner(), "{\n\n}\n");
    }

    #[test]
    fn test_level_tracks_brace_balance_within_line() {
        let output = render(&["set { _x = value; }", "next;"]);
        assert_eq!(output, "set { _x = value; }\nnext;\n");
    }

    #[test]
    fn test_level_never_underflows() {
        let mut writer = CodeWriter::new(String::new());
        writer.puts("}").unwrap();
        assert_eq!(writer.level(), 0);
        writer.puts("x;").unwrap();
        assert_eq!(writer.into_inner(), "}\nx;\n");
    }
}
