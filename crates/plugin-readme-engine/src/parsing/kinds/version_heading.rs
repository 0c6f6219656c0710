use super::SectionHeading;

/// `= 1.0 =` version delimiter used inside changelog and upgrade-notice
/// sections.
pub struct VersionHeading;

impl VersionHeading {
    pub const DELIMITER: char = '=';

    /// Returns true if the line opens a version entry.
    ///
    /// Only the first character matters, so `== x ==` also qualifies; the
    /// outer sectionizer has already consumed those.
    pub fn is_delimiter(line: &str) -> bool {
        line.starts_with(Self::DELIMITER)
    }

    /// Extracts the version label from a delimiter line.
    pub fn label(line: &str) -> &str {
        line.trim_matches(SectionHeading::TITLE_TRIM)
    }
}
