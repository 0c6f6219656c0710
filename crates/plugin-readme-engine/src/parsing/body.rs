//! Body sectionizer: the short description preamble, then `== Title ==`
//! sections as raw (unrendered) text.

use crate::models::SectionMap;

use super::kinds::{KnownSection, SectionHeading};
use super::lines::{LineCursor, is_blank};

/// Raw body text, split into the preamble and named sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    pub short_description: String,
    /// Raw section text keyed by normalized title, in source order.
    pub sections: SectionMap,
}

/// Parses everything after the header block.
pub fn parse_body(cur: &mut LineCursor<'_>) -> Body {
    let short_description = parse_short_description(cur);
    let sections = parse_sections(cur);
    log::debug!(
        "sectionized body: {} chars of short description, {} sections",
        short_description.len(),
        sections.len()
    );
    Body {
        short_description,
        sections,
    }
}

/// Accumulates lines up to (not including) the first section delimiter.
///
/// Blank lines become bare newlines so paragraph breaks survive; the result
/// is trimmed once at the end.
pub fn parse_short_description(cur: &mut LineCursor<'_>) -> String {
    let mut text = String::new();

    while let Some(line) = cur.peek() {
        if SectionHeading::is_delimiter(line) {
            break;
        }
        cur.bump();
        if !is_blank(line) {
            text.push_str(line);
        }
        text.push('\n');
    }

    text.trim().to_string()
}

/// A section whose closing delimiter has not been seen yet.
struct OpenSection {
    key: String,
    text: String,
}

impl OpenSection {
    fn start(line: &str) -> Self {
        let title = SectionHeading::title(line);
        let key = SectionHeading::key(title);
        let text = if KnownSection::contains(&key) {
            String::new()
        } else {
            // Sections outside the known set carry their own heading. The
            // blank line ends the HTML block for CommonMark renderers.
            format!("<h3>{}</h3>\n\n", html_escape::encode_text(title))
        };
        Self { key, text }
    }

    fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    /// Stores the trimmed text, unless there is none.
    fn close_into(self, sections: &mut SectionMap) {
        let text = self.text.trim();
        if text.is_empty() {
            log::debug!("dropping empty section {:?}", self.key);
            return;
        }
        sections.insert(self.key, text.to_string());
    }
}

/// Splits the remaining lines on `== Title ==` delimiters.
///
/// A repeated key replaces the earlier text but keeps its position.
pub fn parse_sections(cur: &mut LineCursor<'_>) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut open: Option<OpenSection> = None;

    while let Some(line) = cur.bump() {
        if SectionHeading::is_delimiter(line) {
            if let Some(section) = open.take() {
                section.close_into(&mut sections);
            }
            open = Some(OpenSection::start(line));
            continue;
        }

        match open.as_mut() {
            Some(section) if is_blank(line) => section.text.push('\n'),
            Some(section) => section.push_line(line),
            None if is_blank(line) => {}
            None => log::debug!("skipping line outside any section: {line:?}"),
        }
    }

    if let Some(section) = open {
        section.close_into(&mut sections);
    }

    sections
}
