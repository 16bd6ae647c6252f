//! Line tokenizer
//!
//! A single [`Command`] is reused for every line of a scan. Reading a line
//! overwrites the previous contents, so the line buffer and the parameter
//! span list are allocated once and then only grow.

use std::io::{self, BufRead};
use std::ops::Range;

use super::numeric::NumericToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Empty,
    Comment { start: usize },
    Statement,
}

/// One scanned line: empty, a comment, or a keyword with parameters
#[derive(Debug)]
pub struct Command {
    line: String,
    line_number: usize,
    kind: Kind,
    keyword: Range<usize>,
    params: Vec<Range<usize>>,
}

impl Default for Command {
    fn default() -> Self {
        Self::new()
    }
}

impl Command {
    /// Create an empty command positioned before the first line
    pub const fn new() -> Self {
        Self {
            line: String::new(),
            line_number: 0,
            kind: Kind::Empty,
            keyword: 0..0,
            params: Vec::new(),
        }
    }

    /// Forget the current line and restart line numbering
    pub fn reset(&mut self) {
        self.line.clear();
        self.line_number = 0;
        self.kind = Kind::Empty;
        self.keyword = 0..0;
        self.params.clear();
    }

    /// Read and tokenize the next line from `reader`
    ///
    /// Returns `false` once the reader is exhausted.
    ///
    /// # Errors
    /// Propagates read failures from the underlying source.
    pub fn read<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> io::Result<bool> {
        self.line.clear();
        if reader.read_line(&mut self.line)? == 0 {
            self.kind = Kind::Empty;
            self.params.clear();
            return Ok(false);
        }
        self.line_number += 1;
        self.strip_terminator();
        self.split();
        Ok(true)
    }

    /// Tokenize `line` as the next line of the input
    pub fn tokenize(&mut self, line: &str) {
        self.line.clear();
        self.line.push_str(line);
        self.line_number += 1;
        self.strip_terminator();
        self.split();
    }

    fn strip_terminator(&mut self) {
        let len = self.line.trim_end_matches(['\n', '\r']).len();
        self.line.truncate(len);
    }

    fn split(&mut self) {
        self.params.clear();
        self.keyword = 0..0;

        let Some(first) = self.line.find(|c: char| !c.is_whitespace()) else {
            self.kind = Kind::Empty;
            return;
        };

        if self.line[first..].starts_with('#') {
            let rest = &self.line[first + 1..];
            let start = self.line.len() - rest.trim_start().len();
            self.kind = Kind::Comment { start };
            return;
        }

        self.kind = Kind::Statement;
        let mut keyword = None;
        let mut start = None;
        for (i, c) in self.line.char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    if keyword.is_none() {
                        keyword = Some(s..i);
                    } else {
                        self.params.push(s..i);
                    }
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            let span = s..self.line.len();
            if keyword.is_none() {
                keyword = Some(span);
            } else {
                self.params.push(span);
            }
        }
        self.keyword = keyword.unwrap_or(0..0);
    }

    /// 1-based number of the current line
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// The current line without its terminator
    pub fn text(&self) -> &str {
        &self.line
    }

    /// Whether the line is blank or whitespace only
    pub fn is_empty(&self) -> bool {
        self.kind == Kind::Empty
    }

    /// Whether the line is a comment
    pub const fn is_comment(&self) -> bool {
        matches!(self.kind, Kind::Comment { .. })
    }

    /// Comment text after the `#` marker and its following whitespace
    ///
    /// Returns `None` for non-comment lines.
    pub fn comment(&self) -> Option<&str> {
        match self.kind {
            Kind::Comment { start } => Some(&self.line[start..]),
            _ => None,
        }
    }

    /// Command keyword, empty for blank and comment lines
    pub fn keyword(&self) -> &str {
        &self.line[self.keyword.clone()]
    }

    /// Whether the keyword equals `name` (case-sensitive)
    pub fn is_command(&self, name: &str) -> bool {
        self.kind == Kind::Statement && self.keyword() == name
    }

    /// Number of parameters after the keyword
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Parameter `index` as raw text
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(|span| &self.line[span.clone()])
    }

    /// Last parameter as raw text
    pub fn last_param(&self) -> Option<&str> {
        self.params.last().map(|span| &self.line[span.clone()])
    }

    /// Parameter `index` as a lazily converted number
    pub fn numeric_param(&self, index: usize) -> Option<NumericToken<'_>> {
        self.param(index)
            .map(|text| NumericToken::new(text, self.line_number))
    }

    /// Last parameter as a lazily converted number
    pub fn last_numeric_param(&self) -> Option<NumericToken<'_>> {
        self.last_param()
            .map(|text| NumericToken::new(text, self.line_number))
    }

    /// All parameters in order
    pub fn params(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.iter().map(|span| &self.line[span.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokenized(line: &str) -> Command {
        let mut command = Command::new();
        command.tokenize(line);
        command
    }

    #[test]
    fn test_blank_lines_are_empty() {
        for line in ["", "   ", "\t \t", "\r\n", "  \n"] {
            let command = tokenized(line);
            assert!(command.is_empty(), "{line:?} should be empty");
            assert!(!command.is_comment());
            assert_eq!(command.keyword(), "");
            assert_eq!(command.param_count(), 0);
        }
    }

    #[test]
    fn test_comment_payload_excludes_marker() {
        let command = tokenized("   #   base material  ");
        assert!(command.is_comment());
        assert_eq!(command.comment(), Some("base material  "));
        assert_eq!(command.param_count(), 0);
        assert!(!command.is_command("#"));

        assert_eq!(tokenized("#").comment(), Some(""));
        assert_eq!(tokenized("#Kd 1 1 1").comment(), Some("Kd 1 1 1"));
    }

    #[test]
    fn test_keyword_and_params() {
        let command = tokenized("  Kd\t0.8   0.1 0.2\r\n");
        assert!(command.is_command("Kd"));
        assert!(!command.is_command("kd"));
        assert_eq!(command.param_count(), 3);
        assert_eq!(command.params().collect::<Vec<_>>(), ["0.8", "0.1", "0.2"]);
        assert_eq!(command.param(1), Some("0.1"));
        assert_eq!(command.param(3), None);
        assert_eq!(command.last_param(), Some("0.2"));
    }

    #[test]
    fn test_keyword_without_params() {
        let command = tokenized("d");
        assert!(command.is_command("d"));
        assert_eq!(command.param_count(), 0);
        assert!(command.last_param().is_none());
        assert!(command.last_numeric_param().is_none());
    }

    #[test]
    fn test_numeric_params_stay_lazy() {
        let command = tokenized("map_Kd -o 1 texture.png");
        let token = command.last_numeric_param().unwrap();
        assert_eq!(token.text(), "texture.png");
        assert!(!token.is_resolved());
        assert!(token.value().is_err());

        let offset = command.numeric_param(1).unwrap();
        assert_eq!(offset.value().unwrap(), 1.0);
    }

    #[test]
    fn test_read_reuses_state_across_lines() {
        let mut reader = Cursor::new("newmtl Brick\r\n\n# note\nNs 10");
        let mut command = Command::new();

        assert!(command.read(&mut reader).unwrap());
        assert!(command.is_command("newmtl"));
        assert_eq!(command.param(0), Some("Brick"));
        assert_eq!(command.line_number(), 1);

        assert!(command.read(&mut reader).unwrap());
        assert!(command.is_empty());
        assert_eq!(command.param_count(), 0);

        assert!(command.read(&mut reader).unwrap());
        assert_eq!(command.comment(), Some("note"));

        assert!(command.read(&mut reader).unwrap());
        assert!(command.is_command("Ns"));
        assert_eq!(command.line_number(), 4);
        assert_eq!(command.text(), "Ns 10");

        assert!(!command.read(&mut reader).unwrap());
    }
}
