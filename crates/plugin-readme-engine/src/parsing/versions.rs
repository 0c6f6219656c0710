use crate::models::{SectionMap, UNVERSIONED};

use super::kinds::VersionHeading;
use super::lines::is_blank;

/// Per-version raw text split out of a changelog or upgrade-notice section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionNotes {
    /// Raw text keyed by version label, in source order.
    pub entries: SectionMap,
    /// Some text appeared before any `= Version =` heading. That text is
    /// stored under [`UNVERSIONED`].
    pub unversioned: bool,
}

impl VersionNotes {
    fn flush(&mut self, label: Option<&str>, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let key = match label {
            Some(label) => label,
            None => {
                log::debug!("found content outside any version heading");
                self.unversioned = true;
                UNVERSIONED
            }
        };
        self.entries.insert(key.to_string(), text.to_string());
    }
}

/// Splits raw section text on `= Version =` lines.
///
/// Blank lines are dropped entirely; every other line is appended to the
/// current entry. Entries with no text are not recorded.
pub fn parse_versions(raw: &str) -> VersionNotes {
    let mut notes = VersionNotes::default();
    let mut label: Option<&str> = None;
    let mut text = String::new();

    for line in raw.split('\n') {
        if is_blank(line) {
            continue;
        }
        if VersionHeading::is_delimiter(line) {
            notes.flush(label, &text);
            text.clear();
            label = Some(VersionHeading::label(line));
            continue;
        }
        text.push_str(line);
        text.push('\n');
    }
    notes.flush(label, &text);

    notes
}
