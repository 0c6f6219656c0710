use crate::error::ParseError;

use super::lines::{LineCursor, is_blank};

/// Metadata from the colon-delimited block under the title line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    pub tags: Vec<String>,
    pub requires: String,
    pub tested: String,
    pub contributors: Vec<String>,
    pub stable_tag: String,
    pub donate_link: String,
}

impl HeaderBlock {
    /// Stores one header value. Later calls for the same field overwrite
    /// earlier ones, aliases included.
    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "tags" => self.tags = split_list(value),
            "contributors" => self.contributors = split_list(value),
            "requires" | "requires_at_least" => self.requires = value.to_string(),
            "tested" | "tested_up_to" => self.tested = value.to_string(),
            "stable_tag" => self.stable_tag = value.to_string(),
            "donate_link" => self.donate_link = value.to_string(),
            other => log::debug!("ignoring unrecognized header {other:?}"),
        }
    }
}

/// Consumes header lines up to and including the first blank line.
///
/// The cursor must be positioned just after the title line.
///
/// # Errors
/// Returns [`ParseError::MalformedHeader`] for a non-blank line without a
/// colon.
pub fn parse_header(cur: &mut LineCursor<'_>) -> Result<HeaderBlock, ParseError> {
    let mut header = HeaderBlock::default();

    while let Some(line) = cur.bump() {
        if is_blank(line) {
            break;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(ParseError::MalformedHeader {
                line: cur.pos(),
                content: line.to_string(),
            });
        };
        header.apply(&header_key(key), value.trim());
    }

    Ok(header)
}

/// Normalizes a header name: trimmed, lower-cased, spaces and tabs as `_`.
pub fn header_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '\t'], "_")
}

/// Splits a comma-separated header value, trimming each element.
///
/// Empty elements are kept so `a,,b` stays three entries.
fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(|s| s.trim().to_string()).collect()
}
