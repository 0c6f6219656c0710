/// Raw readme input before line normalization.
///
/// Text and pre-split lines normalize to the same line sequence, so both
/// forms produce identical records for equivalent content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeSource {
    /// The whole document as one string.
    Text(String),
    /// The document already split into lines, with or without their
    /// trailing line terminators.
    Lines(Vec<String>),
}

impl From<&str> for ReadmeSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ReadmeSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for ReadmeSource {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<Vec<&str>> for ReadmeSource {
    fn from(lines: Vec<&str>) -> Self {
        Self::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ReadmeSource {
    fn from(lines: &[&str]) -> Self {
        Self::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl ReadmeSource {
    /// Splits the source into trimmed lines.
    ///
    /// `\r\n` and lone `\r` terminators are treated as `\n`. A leading byte
    /// order mark is dropped.
    pub fn into_lines(self) -> Vec<String> {
        let text = match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines
                .iter()
                .map(|l| strip_terminator(l))
                .collect::<Vec<_>>()
                .join("\n"),
        };
        let text = text.strip_prefix(BOM).unwrap_or(text.as_str());
        normalize_line_endings(text)
            .split('\n')
            .map(|l| l.trim().to_string())
            .collect()
    }
}

const BOM: char = '\u{feff}';

/// Converts `\r\n` and `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Returns true for lines that are empty after trimming.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A forward cursor over normalized lines.
///
/// Phases hand the remaining input to each other by peeking: a phase stops
/// *before* a line that belongs to the next phase instead of consuming it.
#[derive(Clone)]
pub struct LineCursor<'a> {
    lines: &'a [String],
    i: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, i: 0 }
    }

    /// Index of the next line to be consumed.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the next line without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.i).map(String::as_str)
    }

    /// Consumes and returns the next line.
    pub fn bump(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.i)?;
        self.i += 1;
        Some(line.as_str())
    }
}
